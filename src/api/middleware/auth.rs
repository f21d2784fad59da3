//! JWT authentication middleware.
//!
//! `auth_middleware` rejects requests without a valid access token;
//! `optional_auth_middleware` only attaches the user when one is present.
//! Handlers read the result through the [`AuthUser`] and [`MaybeAuthUser`]
//! extractors.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;
use crate::store::DynStore;
use crate::utils::jwt::{Claims, validate_access_token};

/// Authenticated user, stored in request extensions by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
    pub name: String,
}

impl TryFrom<Claims> for AuthUser {
    type Error = AppError;

    fn try_from(claims: Claims) -> AppResult<Self> {
        Ok(Self {
            user_id: claims.user_id()?,
            email: claims.email,
            name: claims.name,
        })
    }
}

fn bearer_token(request: &Request) -> AppResult<&str> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    value.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::unauthorized("Invalid authorization header format. Expected: Bearer <token>")
    })
}

/// Matches token claims against the stored account. Ids are reissued when a
/// store is recreated, so the email must agree as well.
pub(crate) async fn resolve_account(store: &DynStore, claims: Claims) -> AppResult<AuthUser> {
    let claimed = AuthUser::try_from(claims)?;
    match store.find_user_by_id(claimed.user_id).await? {
        Some(user) if user.email == claimed.email => Ok(AuthUser {
            user_id: user.id,
            email: user.email,
            name: user.name,
        }),
        _ => Err(AppError::unauthorized("Account no longer exists")),
    }
}

fn access_claims(request: &Request, secret: &str) -> AppResult<Claims> {
    validate_access_token(bearer_token(request)?, secret)
}

/// Requires `Authorization: Bearer <access token>`; 401 otherwise.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = access_claims(&request, &state.jwt_config.secret)?;
    let auth_user = resolve_account(&state.store, claims).await?;
    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

/// Attaches the user when a valid token is sent. A missing or invalid token,
/// or one whose account cannot be loaded, leaves the request anonymous.
pub async fn optional_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = access_claims(&request, &state.jwt_config.secret);
    let resolved = match claims {
        Ok(claims) => resolve_account(&state.store, claims).await,
        Err(e) => Err(e),
    };
    match resolved {
        Ok(auth_user) => {
            request.extensions_mut().insert(auth_user);
        }
        Err(e) if request.headers().contains_key(header::AUTHORIZATION) => {
            tracing::debug!(error = %e, "Ignoring invalid token on optional-auth route");
        }
        Err(_) => {}
    }
    next.run(request).await
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> AppResult<Self> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// The signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

impl MaybeAuthUser {
    pub fn user_id(&self) -> Option<i32> {
        self.0.as_ref().map(|u| u.user_id)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(parts.extensions.get::<AuthUser>().cloned()))
    }
}
