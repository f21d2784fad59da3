//! Application state for Axum web framework.

use crate::config::JwtConfig;
use crate::services::{Clock, Services};
use crate::store::DynStore;

/// Shared by every handler. Cloning copies a few `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Used directly by the health checks
    pub store: DynStore,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn new(store: DynStore, jwt_config: JwtConfig, clock: Clock) -> Self {
        Self {
            services: Services::new(store.clone(), clock),
            store,
            jwt_config,
        }
    }
}
