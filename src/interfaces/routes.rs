use actix_web::web;

use crate::handlers::{assets::serve_asset, home::home};

mod content;

/// Read-only preview routes. Built assets are the fallback for anything else.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.configure(content::config_routes);

    cfg.default_service(web::to(serve_asset));
}
