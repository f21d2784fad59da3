//! Azkar browsing, search, progress and bookmarks.
//!
//! Browsing and search accept an optional token; writes and per-user reads
//! require one.

use axum::{
    Json,
    extract::{Path, Query, State},
    middleware,
};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::api::doc::AZKAR_TAG;
use crate::api::dto::{
    AzkarResponse, BookmarkRequest, BookmarkResponse, CategoryDetailResponse, CategoryResponse,
    DayProgressResponse, ErrorResponse, ProgressQuery, ProgressRequest, ProgressResponse,
    SearchQuery, SearchResponse,
};
use crate::api::middleware::{AuthUser, MaybeAuthUser, auth_middleware, optional_auth_middleware};
use crate::error::AppResult;
use crate::state::AppState;
use crate::utils::validate::{ValidatedJson, ValidatedQuery};

/// # Routes
/// - `GET /categories`
/// - `GET /category/{name}`
/// - `GET /search`
/// - `GET|POST /progress`
/// - `POST /bookmark`
/// - `GET /bookmarks`
pub fn azkar_routes(state: AppState) -> OpenApiRouter<AppState> {
    let public = OpenApiRouter::new()
        .routes(routes!(list_categories))
        .routes(routes!(get_category))
        .routes(routes!(search))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_auth_middleware,
        ));

    let protected = OpenApiRouter::new()
        .routes(routes!(record_progress, get_progress))
        .routes(routes!(toggle_bookmark))
        .routes(routes!(list_bookmarks))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}

/// GET /api/azkar/categories - Categories with entry counts
#[utoipa::path(
    get,
    path = "/categories",
    tag = AZKAR_TAG,
    responses(
        (status = 200, description = "All categories", body = Vec<CategoryResponse>)
    )
)]
async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategoryResponse>> {
    let categories = state.services.azkar.list_categories().await;
    Json(categories.into_iter().map(Into::into).collect())
}

/// GET /api/azkar/category/{name} - One category and its entries
///
/// With a token each entry carries today's progress and bookmark state.
#[utoipa::path(
    get,
    path = "/category/{name}",
    tag = AZKAR_TAG,
    params(("name" = String, Path, description = "Category name, e.g. `morning`")),
    responses(
        (status = 200, description = "Category with entries ordered by title", body = CategoryDetailResponse),
        (status = 404, description = "Unknown category", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = []))
)]
async fn get_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
    user: MaybeAuthUser,
) -> AppResult<Json<CategoryDetailResponse>> {
    let detail = state
        .services
        .azkar
        .get_category(&name, user.user_id())
        .await?;
    Ok(Json(detail.into()))
}

/// GET /api/azkar/search - Search the catalog
#[utoipa::path(
    get,
    path = "/search",
    tag = AZKAR_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching entries in catalog order", body = SearchResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = []))
)]
async fn search(
    State(state): State<AppState>,
    user: MaybeAuthUser,
    ValidatedQuery(query): ValidatedQuery<SearchQuery>,
) -> Json<SearchResponse> {
    let results = state
        .services
        .search
        .search(&query.q, query.limit, user.user_id())
        .await;
    Json(SearchResponse {
        query: query.q,
        results: results.into_iter().map(Into::into).collect(),
    })
}

/// POST /api/azkar/progress - Set today's count for an entry
#[utoipa::path(
    post,
    path = "/progress",
    tag = AZKAR_TAG,
    request_body = ProgressRequest,
    responses(
        (status = 200, description = "Stored progress", body = ProgressResponse),
        (status = 400, description = "Invalid request data", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown azkar", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn record_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(payload): ValidatedJson<ProgressRequest>,
) -> AppResult<Json<ProgressResponse>> {
    let record = state
        .services
        .progress
        .record(auth_user.user_id, payload.azkar_id, payload.completed)
        .await?;
    Ok(Json(record.into()))
}

/// GET /api/azkar/progress - One day's progress
#[utoipa::path(
    get,
    path = "/progress",
    tag = AZKAR_TAG,
    params(ProgressQuery),
    responses(
        (status = 200, description = "Progress rows for the day", body = DayProgressResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn get_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<ProgressQuery>,
) -> AppResult<Json<DayProgressResponse>> {
    let (date, rows) = state
        .services
        .progress
        .for_day(auth_user.user_id, query.date)
        .await?;
    Ok(Json(DayProgressResponse {
        date,
        entries: rows.into_iter().map(Into::into).collect(),
    }))
}

/// POST /api/azkar/bookmark - Toggle a bookmark
#[utoipa::path(
    post,
    path = "/bookmark",
    tag = AZKAR_TAG,
    request_body = BookmarkRequest,
    responses(
        (status = 200, description = "New bookmark state", body = BookmarkResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown azkar", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn toggle_bookmark(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(payload): ValidatedJson<BookmarkRequest>,
) -> AppResult<Json<BookmarkResponse>> {
    let bookmarked = state
        .services
        .bookmarks
        .toggle(auth_user.user_id, payload.azkar_id)
        .await?;
    Ok(Json(BookmarkResponse {
        azkar_id: payload.azkar_id,
        bookmarked,
    }))
}

/// GET /api/azkar/bookmarks - Bookmarked entries, latest first
#[utoipa::path(
    get,
    path = "/bookmarks",
    tag = AZKAR_TAG,
    responses(
        (status = 200, description = "Bookmarked entries", body = Vec<AzkarResponse>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
async fn list_bookmarks(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<Vec<AzkarResponse>>> {
    let azkar = state.services.bookmarks.list(auth_user.user_id).await?;
    Ok(Json(azkar.into_iter().map(Into::into).collect()))
}
