//! Authorization extractors.
//!
//! - [`auth::RequirePermission`] -- Requires a bearer token granting one permission.

pub mod auth;
