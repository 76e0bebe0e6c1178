//! Application state.

use common::config::AppConfig;
use common::errors::AppResult;

use crate::store::UserStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: UserStore,
}

impl AppState {
    /// Creates the application state, opening the local user store.
    ///
    /// Fails if the store cannot be opened or migrated; the caller treats
    /// that as fatal since no requests can be served without it.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let store = UserStore::connect(&config.database_url, config.max_connections).await?;
        Ok(Self { config, store })
    }
}
