use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use tokio::fs;
use tracing::{debug, instrument};

use crate::{
    errors::AppError,
    utils::assets::{content_type_for, resolve_asset},
    AppState,
};

/// Serves a built file from the output directory. Only `GET` and `HEAD`.
#[instrument(skip(req, state), fields(path = %req.path()))]
pub async fn serve_asset(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return Ok(HttpResponse::MethodNotAllowed()
            .json(serde_json::json!({"error": "Preview server is read-only"})));
    }

    let path = resolve_asset(&state.out_dir, req.path()).await?;

    let bytes = fs::read(&path)
        .await
        .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;

    debug!("Serving {} ({} bytes)", path.display(), bytes.len());

    Ok(HttpResponse::Ok()
        .content_type(content_type_for(&path, &bytes))
        .body(bytes))
}
