use std::sync::Arc;

use crate::config::Settings;
use crate::database::DbPool;

/// Application state shared across handlers. Built once at startup and
/// passed explicitly; there are no process-wide singletons.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, db_pool: DbPool) -> Self {
        Self {
            db_pool,
            settings: Arc::new(settings),
        }
    }
}
