//! Repository for the `family_members` table.

use healthbook_core::types::DbId;
use sqlx::PgPool;

use crate::models::family_member::{CreateFamilyMember, FamilyMember, UpdateFamilyMember};

const COLUMNS: &str = "id, user_id, full_name, relationship, date_of_birth, gender, \
                        blood_type, notes, created_at, updated_at";

/// Provides CRUD operations for family members.
pub struct FamilyMemberRepo;

impl FamilyMemberRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateFamilyMember,
    ) -> Result<FamilyMember, sqlx::Error> {
        let query = format!(
            "INSERT INTO family_members \
                (user_id, full_name, relationship, date_of_birth, gender, blood_type, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(user_id)
            .bind(&input.full_name)
            .bind(&input.relationship)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(&input.blood_type)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FamilyMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM family_members WHERE id = $1");
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's family members in alphabetical order.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<FamilyMember>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM family_members WHERE user_id = $1 ORDER BY full_name ASC, id ASC"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Apply the non-`None` fields of `input`. Returns `None` if the row is gone.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFamilyMember,
    ) -> Result<Option<FamilyMember>, sqlx::Error> {
        let query = format!(
            "UPDATE family_members SET
                full_name = COALESCE($2, full_name),
                relationship = COALESCE($3, relationship),
                date_of_birth = COALESCE($4, date_of_birth),
                gender = COALESCE($5, gender),
                blood_type = COALESCE($6, blood_type),
                notes = COALESCE($7, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FamilyMember>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.relationship)
            .bind(input.date_of_birth)
            .bind(&input.gender)
            .bind(&input.blood_type)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete a family member. Linked records keep their data with
    /// `family_member_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM family_members WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
