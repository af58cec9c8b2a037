use std::time::Duration;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use humantime::format_duration;

use crate::{constants::START_TIME, AppState};

#[get("/")]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let uptime = Utc::now().signed_duration_since(*START_TIME);
    let uptime = format_duration(Duration::from_secs(uptime.num_seconds().max(0) as u64));

    HttpResponse::Ok().json(serde_json::json!({
        "message": format!("{} preview server", state.app_name),
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime": uptime.to_string(),
        "content": state.bundle.counts(),
        "endpoints": ["/api/content", "/api/projects", "/api/blog-posts", "/api/publications"]
    }))
}
