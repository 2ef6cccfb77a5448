//! Trivia rules: question validation, lenient numeric inputs and quiz play.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Easiest allowed difficulty.
pub const MIN_DIFFICULTY: i32 = 1;

/// Hardest allowed difficulty.
pub const MAX_DIFFICULTY: i32 = 5;

/// Quiz category id that means "questions from every category".
pub const ALL_CATEGORIES: DbId = 0;

/// A numeric field that clients send either as a JSON number or as a string
/// holding a number (the trivia frontend posts `"category": "1"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(i64),
    Text(String),
}

impl NumberOrString {
    /// Resolve to an integer, naming `field` in the error if it is not one.
    pub fn to_i64(&self, field: &str) -> Result<i64, CoreError> {
        match self {
            NumberOrString::Number(n) => Ok(*n),
            NumberOrString::Text(s) => s.trim().parse().map_err(|_| {
                CoreError::Validation(format!("{field} must be an integer, got '{s}'"))
            }),
        }
    }
}

/// The quiz category as posted by clients: either `{"id": .., "type": ..}`
/// or a bare id.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Object {
        id: NumberOrString,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
    Id(NumberOrString),
}

impl QuizCategory {
    /// Category id to draw from, or `None` for [`ALL_CATEGORIES`].
    pub fn category_id(&self) -> Result<Option<DbId>, CoreError> {
        let raw = match self {
            QuizCategory::Object { id, .. } => id,
            QuizCategory::Id(id) => id,
        };
        let id = raw.to_i64("quiz_category.id")?;
        if id == ALL_CATEGORIES {
            Ok(None)
        } else {
            Ok(Some(id))
        }
    }
}

/// Validate the user-supplied fields of a new question.
pub fn validate_new_question(
    question: &str,
    answer: &str,
    difficulty: i32,
) -> Result<(), CoreError> {
    if question.trim().is_empty() {
        return Err(CoreError::Validation("question must not be empty".into()));
    }
    if answer.trim().is_empty() {
        return Err(CoreError::Validation("answer must not be empty".into()));
    }
    validate_difficulty(difficulty)
}

/// Validate that a difficulty lies within `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
pub fn validate_difficulty(difficulty: i32) -> Result<(), CoreError> {
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(CoreError::Validation(format!(
            "difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}, got {difficulty}"
        )));
    }
    Ok(())
}

/// Choose the next quiz question uniformly at random.
///
/// Candidates whose id appears in `previous` are skipped. Returns `None`
/// once every candidate has been asked.
pub fn pick_next_question<'a, T, R>(
    candidates: &'a [T],
    id_of: impl Fn(&T) -> DbId,
    previous: &[DbId],
    rng: &mut R,
) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    let remaining: Vec<&T> = candidates
        .iter()
        .filter(|c| !previous.contains(&id_of(*c)))
        .collect();
    remaining.choose(rng).copied()
}
