//! Bearer-token verification for the permission-guarded endpoints.
//!
//! - [`jwt`] -- Authorization header parsing and HS256 token validation.

pub mod jwt;
