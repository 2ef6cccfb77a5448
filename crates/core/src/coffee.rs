//! Coffee-shop drink recipes and the permissions that guard drink management.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Permissions
// ---------------------------------------------------------------------------

/// View drinks with full recipe details.
pub const PERM_GET_DRINKS_DETAIL: &str = "get:drinks-detail";

/// Create drinks.
pub const PERM_POST_DRINKS: &str = "post:drinks";

/// Edit drinks.
pub const PERM_PATCH_DRINKS: &str = "patch:drinks";

/// Delete drinks.
pub const PERM_DELETE_DRINKS: &str = "delete:drinks";

/// Check that `required` is among the `granted` permissions.
pub fn check_permission(required: &str, granted: &[String]) -> Result<(), CoreError> {
    if granted.iter().any(|p| p == required) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!("Permission '{required}' not found")))
    }
}

// ---------------------------------------------------------------------------
// Recipes
// ---------------------------------------------------------------------------

/// One ingredient of a drink: what it is, how it is drawn, and how many
/// parts of the cup it fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePart {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// Public projection of a recipe part; hides the ingredient name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortRecipePart {
    pub color: String,
    pub parts: i32,
}

/// Recipe payload as clients send it: a list of parts or a single part.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeInput {
    Many(Vec<RecipePart>),
    One(RecipePart),
}

impl RecipeInput {
    /// Normalize into a list of parts.
    pub fn into_parts(self) -> Vec<RecipePart> {
        match self {
            RecipeInput::Many(parts) => parts,
            RecipeInput::One(part) => vec![part],
        }
    }
}

/// Project a recipe to its public form (color and parts only).
pub fn short(recipe: &[RecipePart]) -> Vec<ShortRecipePart> {
    recipe
        .iter()
        .map(|p| ShortRecipePart {
            color: p.color.clone(),
            parts: p.parts,
        })
        .collect()
}

/// Project a recipe to its detailed form (every field).
pub fn long(recipe: &[RecipePart]) -> Vec<RecipePart> {
    recipe.to_vec()
}

/// Validate a drink title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    Ok(())
}

/// Validate a recipe: at least one part, every part named, colored and
/// taking at least one part of the cup.
pub fn validate_recipe(recipe: &[RecipePart]) -> Result<(), CoreError> {
    if recipe.is_empty() {
        return Err(CoreError::Validation(
            "recipe must contain at least one part".into(),
        ));
    }
    for (i, part) in recipe.iter().enumerate() {
        if part.name.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "recipe[{i}].name must not be empty"
            )));
        }
        if part.color.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "recipe[{i}].color must not be empty"
            )));
        }
        if part.parts < 1 {
            return Err(CoreError::Validation(format!(
                "recipe[{i}].parts must be at least 1, got {}",
                part.parts
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn water() -> RecipePart {
        RecipePart {
            name: "water".into(),
            color: "blue".into(),
            parts: 1,
        }
    }

    // -- permissions ---------------------------------------------------------

    #[test]
    fn granted_permission_passes() {
        let granted = vec![PERM_GET_DRINKS_DETAIL.to_string(), PERM_POST_DRINKS.to_string()];
        assert!(check_permission(PERM_POST_DRINKS, &granted).is_ok());
    }

    #[test]
    fn missing_permission_is_forbidden() {
        let granted = vec![PERM_GET_DRINKS_DETAIL.to_string()];
        assert_matches!(
            check_permission(PERM_DELETE_DRINKS, &granted),
            Err(CoreError::Forbidden(_))
        );
    }

    #[test]
    fn empty_grant_is_forbidden() {
        assert!(check_permission(PERM_PATCH_DRINKS, &[]).is_err());
    }

    // -- projections ---------------------------------------------------------

    #[test]
    fn short_hides_ingredient_names() {
        let s = short(&[water()]);
        assert_eq!(
            s,
            vec![ShortRecipePart {
                color: "blue".into(),
                parts: 1
            }]
        );
        let json = serde_json::to_value(&s).unwrap();
        assert!(json[0].get("name").is_none());
    }

    #[test]
    fn long_keeps_everything() {
        assert_eq!(long(&[water()]), vec![water()]);
    }

    // -- RecipeInput ---------------------------------------------------------

    #[test]
    fn single_part_payload_is_normalized() {
        let input: RecipeInput =
            serde_json::from_str(r#"{"name": "water", "color": "blue", "parts": 1}"#).unwrap();
        assert_eq!(input.into_parts(), vec![water()]);
    }

    #[test]
    fn list_payload_is_kept() {
        let input: RecipeInput = serde_json::from_str(
            r#"[{"name": "water", "color": "blue", "parts": 1},
                {"name": "milk", "color": "grey", "parts": 2}]"#,
        )
        .unwrap();
        assert_eq!(input.into_parts().len(), 2);
    }

    // -- validation ----------------------------------------------------------

    #[test]
    fn valid_recipe_passes() {
        assert!(validate_recipe(&[water()]).is_ok());
    }

    #[test]
    fn empty_recipe_fails() {
        assert!(validate_recipe(&[]).is_err());
    }

    #[test]
    fn zero_parts_fails() {
        let mut part = water();
        part.parts = 0;
        assert!(validate_recipe(&[part]).is_err());
    }

    #[test]
    fn blank_name_fails() {
        let mut part = water();
        part.name = " ".into();
        assert!(validate_recipe(&[part]).is_err());
    }

    #[test]
    fn blank_title_fails() {
        assert!(validate_title("").is_err());
        assert!(validate_title("Latte").is_ok());
    }
}
