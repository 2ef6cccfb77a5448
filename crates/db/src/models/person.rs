//! Person model for the hello-world service.

use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `persons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePerson {
    pub name: String,
}
