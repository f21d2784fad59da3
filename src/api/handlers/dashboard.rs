use axum::{Json, extract::State, middleware};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::DASHBOARD_TAG;
use crate::api::dto::DashboardStatsResponse;
use crate::api::middleware::{MaybeAuthUser, optional_auth_middleware};
use crate::state::AppState;

pub fn dashboard_routes(state: AppState) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(stats))
        .route_layer(middleware::from_fn_with_state(state, optional_auth_middleware))
}

/// GET /api/dashboard/stats - Progress summary
///
/// Anonymous callers, and callers whose data cannot be loaded, get sample
/// numbers with `demo: true`.
#[utoipa::path(
    get,
    path = "/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsResponse)
    ),
    security((), ("bearerAuth" = []))
)]
async fn stats(State(state): State<AppState>, user: MaybeAuthUser) -> Json<DashboardStatsResponse> {
    Json(state.services.dashboard.stats(user.user_id()).await.into())
}
