//! Authentication middleware for session tokens

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::{debug, warn};

use crate::{error::ApiError, models::User, state::AppState};

/// Authenticated user information
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Bearer token the request was authenticated with, absent for the
/// development fallback
#[derive(Debug, Clone)]
pub struct SessionToken(pub Option<String>);

/// Authentication middleware
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer.map(|TypedHeader(auth)| auth.token().to_string());

    // A header that is present but not a bearer credential never falls back
    if token.is_none() && req.headers().contains_key(AUTHORIZATION) {
        warn!("Rejected malformed authorization header");
        return Err(ApiError::Unauthorized);
    }

    let user = state
        .sessions
        .resolve(token.as_deref())
        .await?
        .ok_or_else(|| {
            warn!("Rejected request without a valid session");
            ApiError::Unauthorized
        })?;

    debug!("Authenticated user {}", user.id);

    // Insert the user into the request extensions
    req.extensions_mut().insert(CurrentUser(user));
    req.extensions_mut().insert(SessionToken(token));

    Ok(next.run(req).await)
}
