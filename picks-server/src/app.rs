use std::{path::PathBuf, sync::Arc};

use axum::Router;
use picks_config::Config;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::debug;

/// Shared, immutable server state.
#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn entry_path(&self) -> PathBuf {
        self.config.assets.entry_path()
    }
}

pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let entry = state.entry_path();
    debug!(
        root = %config.assets.root().display(),
        entry = %entry.display(),
        "building static asset router"
    );

    // Unknown paths resolve to the entry document with a 200, which keeps
    // client-side routes reloadable.
    let assets = ServeDir::new(config.assets.root())
        .append_index_html_on_directories(false)
        .fallback(ServeFile::new(&entry));

    let router = Router::new()
        .route_service("/", ServeFile::new(&entry))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http());

    if config.dev_mode {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
