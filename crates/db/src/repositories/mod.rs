//! Repository layer: one zero-sized struct per table exposing async query
//! functions that take a `&PgPool`.

pub mod family_member_repo;
pub mod health_metric_repo;
pub mod medical_record_repo;
pub mod reminder_repo;
pub mod role_repo;
pub mod session_repo;
pub mod user_repo;
pub mod wellness_tip_repo;

pub use family_member_repo::FamilyMemberRepo;
pub use health_metric_repo::HealthMetricRepo;
pub use medical_record_repo::MedicalRecordRepo;
pub use reminder_repo::ReminderRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use wellness_tip_repo::WellnessTipRepo;
