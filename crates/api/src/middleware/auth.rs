//! Permission-checking extractor for the coffee-shop endpoints.

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use classroom_core::coffee::{
    check_permission, PERM_DELETE_DRINKS, PERM_GET_DRINKS_DETAIL, PERM_PATCH_DRINKS,
    PERM_POST_DRINKS,
};

use crate::auth::jwt::{parse_bearer, validate_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// A permission string a route can demand, lifted to the type level.
pub trait Permission {
    const NAME: &'static str;
}

/// `get:drinks-detail`
pub struct GetDrinksDetail;
/// `post:drinks`
pub struct PostDrinks;
/// `patch:drinks`
pub struct PatchDrinks;
/// `delete:drinks`
pub struct DeleteDrinks;

impl Permission for GetDrinksDetail {
    const NAME: &'static str = PERM_GET_DRINKS_DETAIL;
}

impl Permission for PostDrinks {
    const NAME: &'static str = PERM_POST_DRINKS;
}

impl Permission for PatchDrinks {
    const NAME: &'static str = PERM_PATCH_DRINKS;
}

impl Permission for DeleteDrinks {
    const NAME: &'static str = PERM_DELETE_DRINKS;
}

/// Verified token claims of a caller holding permission `P`.
///
/// Rejections:
/// - missing or malformed `Authorization` header, bad signature, expired
///   token: 401
/// - token without a `permissions` claim: 400
/// - permission not granted: 403
///
/// ```ignore
/// async fn create_drink(
///     RequirePermission(claims, _): RequirePermission<PostDrinks>,
/// ) -> AppResult<Json<()>> {
///     tracing::info!(sub = %claims.sub, "creating drink");
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePermission<P: Permission>(pub Claims, pub PhantomData<P>);

impl<P: Permission> FromRequestParts<AppState> for RequirePermission<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = parse_bearer(header)?;
        let claims = validate_token(token, &state.config.auth)?;

        let granted = claims.permissions.as_deref().ok_or_else(|| {
            AppError::BadRequest("Permissions not included in JWT.".into())
        })?;
        check_permission(P::NAME, granted)?;

        tracing::debug!(sub = %claims.sub, permission = P::NAME, "Permission granted");
        Ok(RequirePermission(claims, PhantomData))
    }
}
