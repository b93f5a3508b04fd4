//! Domain logic for the Healthbook backend.
//!
//! Everything here is pure: no I/O, no database access. The API and
//! repository layers call into these modules for validation, role checks,
//! and severity classification.

pub mod error;
pub mod family_member;
pub mod health_metric;
pub mod medical_record;
pub mod pagination;
pub mod reminder;
pub mod roles;
pub mod severity;
pub mod text_validation;
pub mod types;
pub mod wellness_tip;
