use std::{path::PathBuf, sync::Arc};

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, middlewares, routes};
pub use infrastructure::{export, telemetry, utils};

use entities::bundle::ContentBundle;
use repositories::content_source::JsonFileSource;
use use_cases::{catalog::CatalogHandler, stamp::SystemStamper};

/// Shared, read-only state of the preview server.
pub struct AppState {
    pub app_name: String,
    pub bundle: Arc<ContentBundle>,
    pub out_dir: PathBuf,
}

pub type AppCatalogHandler = CatalogHandler<JsonFileSource, SystemStamper>;

impl AppState {
    pub fn new(config: &settings::AppConfig, bundle: ContentBundle) -> Self {
        AppState {
            app_name: config.name.clone(),
            bundle: Arc::new(bundle),
            out_dir: config.out_dir.clone(),
        }
    }
}

impl AppCatalogHandler {
    pub fn from_config(config: &settings::AppConfig) -> Self {
        CatalogHandler::new(JsonFileSource::new(config.content_dir.clone()), SystemStamper)
    }
}
