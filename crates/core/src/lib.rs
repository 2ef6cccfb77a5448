//! Domain logic shared by the classroom services.
//!
//! Nothing in this crate touches the network or the database, so every
//! rule here is unit-testable in isolation.

pub mod booking;
pub mod coffee;
pub mod error;
pub mod pagination;
pub mod search;
pub mod trivia;
pub mod types;
