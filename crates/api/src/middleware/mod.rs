//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller identified by a JWT Bearer token.
//! - [`rbac::RequireSuperadmin`] -- rejects everyone but `superadmin`.

pub mod auth;
pub mod rbac;
