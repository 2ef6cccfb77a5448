//! Trivia question model and request DTOs.

use classroom_core::trivia::{NumberOrString, QuizCategory};
use classroom_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// Body of `POST /questions`. Numeric fields may arrive as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestion {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    pub category: NumberOrString,
    pub difficulty: NumberOrString,
}

/// Validated question ready for insertion.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

/// Body of the question search endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuestions {
    #[serde(default)]
    pub search_term: String,
}

/// Body of the quiz endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<DbId>,
    pub quiz_category: Option<QuizCategory>,
}
