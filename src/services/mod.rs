//! Service layer for business logic operations.
//!
//! Services sit between handlers and the store. Each one is cheap to
//! clone: it holds the shared store handle and the application clock.

mod azkar_service;
mod bookmark_service;
mod clock;
mod dashboard_service;
mod progress_service;
mod search_service;
mod tasbih_service;
mod user_service;

pub use azkar_service::{AzkarService, AzkarView, CategoryDetail};
pub use bookmark_service::BookmarkService;
pub use clock::Clock;
pub use dashboard_service::{DashboardInputs, DashboardService, aggregate, streak};
pub use progress_service::{ProgressRecord, ProgressService};
pub use search_service::SearchService;
pub use tasbih_service::{DEFAULT_DAYS, MAX_DAYS, TasbihService};
pub use user_service::UserService;

use crate::store::DynStore;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
    pub azkar: AzkarService,
    pub search: SearchService,
    pub progress: ProgressService,
    pub bookmarks: BookmarkService,
    pub tasbih: TasbihService,
    pub dashboard: DashboardService,
}

impl Services {
    pub fn new(store: DynStore, clock: Clock) -> Self {
        Self {
            users: UserService::new(store.clone()),
            azkar: AzkarService::new(store.clone(), clock.clone()),
            search: SearchService::new(store.clone(), clock.clone()),
            progress: ProgressService::new(store.clone(), clock.clone()),
            bookmarks: BookmarkService::new(store.clone()),
            tasbih: TasbihService::new(store.clone(), clock.clone()),
            dashboard: DashboardService::new(store, clock),
        }
    }
}
