use std::{io, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::{
    entities::schema::ContentKind,
    errors::AppError,
};

/// Where content collections come from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Raw JSON text of a collection, `None` when the collection does not exist.
    async fn read_collection(&self, kind: ContentKind) -> Result<Option<String>, AppError>;
}

/// Collections stored as `<content_dir>/<collection>.json` arrays.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub content_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        JsonFileSource { content_dir: content_dir.into() }
    }

    pub fn collection_path(&self, kind: ContentKind) -> PathBuf {
        self.content_dir.join(kind.file_name())
    }
}

#[async_trait]
impl ContentSource for JsonFileSource {
    async fn read_collection(&self, kind: ContentKind) -> Result<Option<String>, AppError> {
        let path = self.collection_path(kind);

        match fs::read_to_string(&path).await {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(format!("{}: {}", path.display(), e))),
        }
    }
}
