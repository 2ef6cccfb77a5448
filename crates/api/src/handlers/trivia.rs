//! Handlers for the trivia API: categories, paginated questions, search and
//! quiz play.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classroom_core::error::CoreError;
use classroom_core::pagination::paginate;
use classroom_core::trivia::{pick_next_question, validate_new_question};
use classroom_core::types::DbId;
use classroom_db::models::question::{
    CreateQuestion, NewQuestion, Question, QuizRequest, SearchQuestions,
};
use classroom_db::repositories::{CategoryRepo, QuestionRepo};
use classroom_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::PageParams;
use crate::response::SuccessResponse;
use crate::state::AppState;

#[derive(Serialize)]
pub struct CategoriesPayload {
    pub categories: Vec<String>,
}

#[derive(Serialize)]
pub struct QuestionPagePayload {
    pub questions: Vec<Question>,
    pub categories: Vec<String>,
    pub total_questions: i64,
}

/// A page of questions filtered by search term or category.
#[derive(Serialize)]
pub struct FilteredQuestionsPayload {
    pub questions: Vec<Question>,
    pub category: Option<String>,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct CreatedPayload {
    pub created: DbId,
    pub category: String,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct DeletedQuestionPayload {
    pub deleted: DbId,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct QuizPayload {
    pub question: Option<Question>,
}

/// Category type names in id order.
async fn category_types(pool: &DbPool) -> AppResult<Vec<String>> {
    let categories = CategoryRepo::list(pool).await?;
    Ok(categories.into_iter().map(|c| c.kind).collect())
}

/// Slice out `page`; an empty page is a 404.
fn page_or_not_found(items: &[Question], page: i64) -> AppResult<Vec<Question>> {
    let questions = paginate(items, page);
    if questions.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(questions)
}

/// GET /trivia/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = category_types(&state.pool).await?;
    if categories.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(SuccessResponse::new(CategoriesPayload { categories })))
}

/// GET /trivia/questions?page=N
pub async fn list_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let all = QuestionRepo::list(&state.pool).await?;
    let questions = page_or_not_found(&all, params.page())?;
    let categories = category_types(&state.pool).await?;

    Ok(Json(SuccessResponse::new(QuestionPagePayload {
        questions,
        categories,
        total_questions: all.len() as i64,
    })))
}

/// POST /trivia/questions
///
/// `category` and `difficulty` may arrive as numbers or numeric strings.
/// An unknown category is a 422.
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let category_id = input.category.to_i64("category")?;
    let difficulty = i32::try_from(input.difficulty.to_i64("difficulty")?).map_err(|_| {
        CoreError::Validation("difficulty is out of range".into())
    })?;
    validate_new_question(&input.question, &input.answer, difficulty)?;

    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Unknown category {category_id}")))?;

    let (question, total_questions) = QuestionRepo::create(
        &state.pool,
        &NewQuestion {
            question: input.question,
            answer: input.answer,
            category: category.id,
            difficulty,
        },
    )
    .await?;

    tracing::info!(question_id = question.id, category_id, "Question created");

    Ok(Json(SuccessResponse::new(CreatedPayload {
        created: question.id,
        category: category.kind,
        total_questions,
    })))
}

/// DELETE /trivia/questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let total_questions = QuestionRepo::delete(&state.pool, question_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }))?;

    tracing::info!(question_id, total_questions, "Question deleted");

    Ok(Json(SuccessResponse::new(DeletedQuestionPayload {
        deleted: question_id,
        total_questions,
    })))
}

/// POST /trivia/search_question?page=N
///
/// Case-insensitive substring match on the question text. No match is a 404.
pub async fn search_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(input): AppJson<SearchQuestions>,
) -> AppResult<impl IntoResponse> {
    let found = QuestionRepo::search(&state.pool, &input.search_term).await?;
    let questions = page_or_not_found(&found, params.page())?;
    let total_questions = QuestionRepo::count(&state.pool).await?;

    tracing::debug!(term = %input.search_term, matches = found.len(), "Question search");

    Ok(Json(SuccessResponse::new(FilteredQuestionsPayload {
        questions,
        category: None,
        total_questions,
    })))
}

/// GET /trivia/category/{id}/questions?page=N
pub async fn questions_by_category(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<DbId>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))?;

    let in_category = QuestionRepo::list_by_category(&state.pool, category_id).await?;
    let questions = page_or_not_found(&in_category, params.page())?;
    let total_questions = QuestionRepo::count(&state.pool).await?;

    Ok(Json(SuccessResponse::new(FilteredQuestionsPayload {
        questions,
        category: Some(category.kind),
        total_questions,
    })))
}

/// POST /trivia/quizzes
///
/// A random question from the chosen category (or all of them for id 0)
/// that is not among `previous_questions`. `question` is `null` once the
/// pool is exhausted.
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(input): AppJson<QuizRequest>,
) -> AppResult<impl IntoResponse> {
    let category_id = match &input.quiz_category {
        Some(category) => category.category_id()?,
        None => None,
    };

    let candidates = QuestionRepo::quiz_pool(&state.pool, category_id).await?;
    let question = pick_next_question(
        &candidates,
        |q| q.id,
        &input.previous_questions,
        &mut rand::rng(),
    )
    .cloned();

    tracing::debug!(
        category_id = ?category_id,
        previous = input.previous_questions.len(),
        next = ?question.as_ref().map(|q| q.id),
        "Quiz question drawn",
    );

    Ok(Json(SuccessResponse::new(QuizPayload { question })))
}
