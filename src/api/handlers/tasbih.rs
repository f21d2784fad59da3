//! Tasbih counter persistence.

use axum::{Json, extract::State, middleware};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::TASBIH_TAG;
use crate::api::dto::{
    ErrorResponse, SaveTasbihRequest, TasbihCountResponse, TasbihCountsQuery,
    TasbihCountsResponse, TasbihPresetResponse,
};
use crate::api::middleware::{AuthUser, auth_middleware};
use crate::error::AppResult;
use crate::services::DEFAULT_DAYS;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// # Routes
/// - `GET /counts` (auth)
/// - `POST /save` (auth)
/// - `GET /presets`
pub fn tasbih_routes(state: AppState) -> OpenApiRouter<AppState> {
    let protected = OpenApiRouter::new()
        .routes(routes!(counts))
        .routes(routes!(save))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    OpenApiRouter::new().routes(routes!(presets)).merge(protected)
}

/// GET /api/tasbih/counts - Daily counts, newest first
#[utoipa::path(
    get,
    path = "/counts",
    tag = TASBIH_TAG,
    params(TasbihCountsQuery),
    responses(
        (status = 200, description = "Daily counts", body = TasbihCountsResponse),
        (status = 400, description = "Invalid range", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn counts(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedQuery(query): ValidatedQuery<TasbihCountsQuery>,
) -> AppResult<Json<TasbihCountsResponse>> {
    let rows = state
        .services
        .tasbih
        .counts(auth_user.user_id, query.days)
        .await?;

    let counts: Vec<TasbihCountResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(TasbihCountsResponse {
        days: query.days.unwrap_or(DEFAULT_DAYS),
        total: counts.iter().map(|c| i64::from(c.count)).sum(),
        counts,
    }))
}

/// POST /api/tasbih/save - Store the day's total
#[utoipa::path(
    post,
    path = "/save",
    tag = TASBIH_TAG,
    request_body = SaveTasbihRequest,
    responses(
        (status = 200, description = "Stored count", body = TasbihCountResponse),
        (status = 400, description = "Negative count or future date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn save(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(payload): ValidatedJson<SaveTasbihRequest>,
) -> AppResult<Json<TasbihCountResponse>> {
    let row = state
        .services
        .tasbih
        .save(auth_user.user_id, payload.count, payload.date)
        .await?;
    Ok(Json(row.into()))
}

/// GET /api/tasbih/presets - Suggested phrases and targets
#[utoipa::path(
    get,
    path = "/presets",
    tag = TASBIH_TAG,
    responses(
        (status = 200, description = "Tasbih presets", body = Vec<TasbihPresetResponse>)
    )
)]
async fn presets(State(state): State<AppState>) -> Json<Vec<TasbihPresetResponse>> {
    Json(
        state
            .services
            .tasbih
            .presets()
            .iter()
            .map(Into::into)
            .collect(),
    )
}
