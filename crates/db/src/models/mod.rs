pub mod family_member;
pub mod health_metric;
pub mod medical_record;
pub mod reminder;
pub mod session;
pub mod user;
pub mod wellness_tip;
