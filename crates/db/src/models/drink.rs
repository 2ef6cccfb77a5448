//! Coffee-shop drink model and DTOs.

use classroom_core::coffee::{self, RecipeInput, RecipePart, ShortRecipePart};
use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `drinks` table. The recipe is stored as JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct Drink {
    pub id: DbId,
    pub title: String,
    pub recipe: Json<Vec<RecipePart>>,
}

/// Public drink representation.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkShort {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<ShortRecipePart>,
}

/// Detailed drink representation including ingredient names.
#[derive(Debug, Clone, Serialize)]
pub struct DrinkLong {
    pub id: DbId,
    pub title: String,
    pub recipe: Vec<RecipePart>,
}

impl Drink {
    pub fn short(&self) -> DrinkShort {
        DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe: coffee::short(&self.recipe),
        }
    }

    pub fn long(&self) -> DrinkLong {
        DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: coffee::long(&self.recipe),
        }
    }
}

/// Body of `POST /drinks`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDrink {
    pub title: String,
    pub recipe: RecipeInput,
}

/// Body of `PATCH /drinks/{id}`. Only provided fields change.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDrink {
    pub title: Option<String>,
    pub recipe: Option<RecipeInput>,
}
