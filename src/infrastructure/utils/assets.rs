use std::path::{Component, Path, PathBuf};

use derive_more::Display;
use tokio::fs;

use crate::errors::AppError;

/// Errors while resolving a built asset for the preview server.
#[derive(Debug, Display)]
pub enum AssetError {
    #[display("Path escapes the output directory: {_0}")]
    Traversal(String),

    #[display("Hidden path segment: {_0}")]
    Hidden(String),

    #[display("Asset not found: {_0}")]
    Missing(String),

    #[display("Failed to read asset: {_0}")]
    Io(std::io::Error),
}

impl From<AssetError> for AppError {
    fn from(err: AssetError) -> Self {
        match err {
            // Do not reveal what exists outside the output directory
            AssetError::Traversal(_) | AssetError::Missing(_) => AppError::NotFound(err.to_string()),
            AssetError::Hidden(_) => AppError::Forbidden(err.to_string()),
            AssetError::Io(_) => AppError::Io(err.to_string()),
        }
    }
}

/// True when any segment of a URL path starts with a dot (`**/.*`),
/// including a percent-encoded one.
pub fn has_hidden_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        segment.starts_with('.')
            || segment.get(..3).is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}

/// Maps a request path onto a file inside `root`.
///
/// Directory hits resolve to their `index.html`.
pub async fn resolve_asset(root: &Path, request_path: &str) -> Result<PathBuf, AssetError> {
    let relative = request_path.trim_start_matches('/');
    let mut resolved = root.to_path_buf();

    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => {
                if part.to_string_lossy().starts_with('.') {
                    return Err(AssetError::Hidden(request_path.to_string()));
                }
                resolved.push(part);
            }
            Component::CurDir => {}
            _ => return Err(AssetError::Traversal(request_path.to_string())),
        }
    }

    let metadata = match fs::metadata(&resolved).await {
        Ok(m) => m,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AssetError::Missing(request_path.to_string()));
        }
        Err(e) => return Err(AssetError::Io(e)),
    };

    if metadata.is_dir() {
        resolved.push("index.html");
        if !fs::try_exists(&resolved).await.map_err(AssetError::Io)? {
            return Err(AssetError::Missing(request_path.to_string()));
        }
    }

    Ok(resolved)
}

/// Content type for an asset: known text extensions first, then sniffed
/// from the bytes.
pub fn content_type_for(path: &Path, bytes: &[u8]) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase());

    let by_extension = match ext.as_deref() {
        Some("html") | Some("htm") => Some("text/html; charset=utf-8"),
        Some("css") => Some("text/css; charset=utf-8"),
        Some("js") | Some("mjs") => Some("text/javascript; charset=utf-8"),
        Some("json") | Some("map") => Some("application/json"),
        Some("svg") => Some("image/svg+xml"),
        Some("txt") => Some("text/plain; charset=utf-8"),
        Some("xml") => Some("application/xml"),
        _ => None,
    };

    if let Some(mime) = by_extension {
        return mime.to_string();
    }

    infer::get(bytes)
        .map(|kind| kind.mime_type().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
