//! Handlers for the coffee-shop drinks API.
//!
//! Listing drinks is public and shows only colors and proportions. Everything
//! else requires a bearer token granting the matching permission.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use classroom_core::coffee::{validate_recipe, validate_title};
use classroom_core::error::CoreError;
use classroom_core::types::DbId;
use classroom_db::models::drink::{CreateDrink, DrinkLong, DrinkShort, UpdateDrink};
use classroom_db::repositories::DrinkRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::{
    DeleteDrinks, GetDrinksDetail, PatchDrinks, PostDrinks, RequirePermission,
};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Empty payload for `{ "success": true }`.
#[derive(Serialize)]
pub struct Empty {}

#[derive(Serialize)]
pub struct ShortDrinksPayload {
    pub drinks: Vec<DrinkShort>,
}

#[derive(Serialize)]
pub struct LongDrinksPayload {
    pub drinks: Vec<DrinkLong>,
}

#[derive(Serialize)]
pub struct DeletedDrinkPayload {
    pub delete: DbId,
}

fn drink_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Drink", id })
}

/// GET /coffee
pub async fn index() -> impl IntoResponse {
    Json(SuccessResponse::new(Empty {}))
}

/// GET /coffee/drinks
pub async fn list_drinks(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    let drinks = drinks.iter().map(|d| d.short()).collect();

    Ok(Json(SuccessResponse::new(ShortDrinksPayload { drinks })))
}

/// GET /coffee/drinks-detail
pub async fn list_drinks_detail(
    _perm: RequirePermission<GetDrinksDetail>,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let drinks = DrinkRepo::list(&state.pool).await?;
    let drinks = drinks.iter().map(|d| d.long()).collect();

    Ok(Json(SuccessResponse::new(LongDrinksPayload { drinks })))
}

/// POST /coffee/drinks
///
/// `recipe` may be a list of parts or a single part. A taken title is a 422.
pub async fn create_drink(
    RequirePermission(claims, _): RequirePermission<PostDrinks>,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDrink>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title)?;
    let recipe = input.recipe.into_parts();
    validate_recipe(&recipe)?;

    let drink = DrinkRepo::create(&state.pool, input.title.trim(), &recipe).await?;
    tracing::info!(drink_id = drink.id, sub = %claims.sub, "Drink created");

    Ok(Json(SuccessResponse::new(LongDrinksPayload {
        drinks: vec![drink.long()],
    })))
}

/// PATCH /coffee/drinks/{id}
///
/// Replaces the title and/or the whole recipe.
pub async fn update_drink(
    RequirePermission(claims, _): RequirePermission<PatchDrinks>,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateDrink>,
) -> AppResult<impl IntoResponse> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    let recipe = input.recipe.map(|r| r.into_parts());
    if let Some(recipe) = &recipe {
        validate_recipe(recipe)?;
    }

    let drink = DrinkRepo::update(
        &state.pool,
        drink_id,
        input.title.as_deref().map(str::trim),
        recipe.as_deref(),
    )
    .await?
    .ok_or_else(|| drink_not_found(drink_id))?;

    tracing::info!(drink_id, sub = %claims.sub, "Drink updated");

    Ok(Json(SuccessResponse::new(LongDrinksPayload {
        drinks: vec![drink.long()],
    })))
}

/// DELETE /coffee/drinks/{id}
pub async fn delete_drink(
    RequirePermission(claims, _): RequirePermission<DeleteDrinks>,
    State(state): State<AppState>,
    AppPath(drink_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !DrinkRepo::delete(&state.pool, drink_id).await? {
        return Err(drink_not_found(drink_id));
    }

    tracing::info!(drink_id, sub = %claims.sub, "Drink deleted");

    Ok(Json(SuccessResponse::new(DeletedDrinkPayload { delete: drink_id })))
}
