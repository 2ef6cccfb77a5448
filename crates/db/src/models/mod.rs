//! Row models and request DTOs.

pub mod artist;
pub mod category;
pub mod drink;
pub mod person;
pub mod question;
pub mod show;
pub mod todo;
pub mod venue;
