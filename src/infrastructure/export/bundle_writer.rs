use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::{debug, info};

use crate::{
    constants::BUNDLE_FILE_NAME,
    entities::{bundle::ContentBundle, schema::ContentKind},
    errors::AppError,
};

/// Writes the content bundle and one file per collection into `out_dir`.
///
/// With `empty_out_dir` the directory is cleared first. Returns the written paths.
pub async fn export_bundle(
    bundle: &ContentBundle,
    out_dir: &Path,
    empty_out_dir: bool,
) -> Result<Vec<PathBuf>, AppError> {
    if empty_out_dir && fs::try_exists(out_dir).await? {
        debug!("Emptying output directory {}", out_dir.display());
        fs::remove_dir_all(out_dir).await?;
    }
    fs::create_dir_all(out_dir).await?;

    let mut written = Vec::with_capacity(4);

    written.push(write_json(&out_dir.join(BUNDLE_FILE_NAME), bundle).await?);
    for kind in ContentKind::ALL {
        let path = out_dir.join(kind.file_name());
        let path = match kind {
            ContentKind::Project => write_json(&path, &bundle.projects).await?,
            ContentKind::BlogPost => write_json(&path, &bundle.blog_posts).await?,
            ContentKind::Publication => write_json(&path, &bundle.publications).await?,
        };
        written.push(path);
    }

    info!("Exported {} content files to {}", written.len(), out_dir.display());
    Ok(written)
}

async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<PathBuf, AppError> {
    let body = serde_json::to_vec_pretty(value)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize {}: {}", path.display(), e)))?;

    fs::write(path, body)
        .await
        .map_err(|e| AppError::Io(format!("{}: {}", path.display(), e)))?;

    Ok(path.to_path_buf())
}
