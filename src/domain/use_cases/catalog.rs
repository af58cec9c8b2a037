use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    entities::{
        blog_post::BlogPost,
        bundle::ContentBundle,
        project::Project,
        publication::Publication,
        schema::ContentRecord,
    },
    errors::AppError,
    repositories::content_source::ContentSource,
    use_cases::stamp::Stamper,
};

/// Loads the site's content collections and acts as their storing system:
/// drafts get their system fields here and identifiers are kept unique.
pub struct CatalogHandler<S, T>
where
    S: ContentSource,
    T: Stamper,
{
    pub source: S,
    pub stamper: T,
}

impl<S, T> CatalogHandler<S, T>
where
    S: ContentSource,
    T: Stamper,
{
    pub fn new(source: S, stamper: T) -> Self {
        CatalogHandler { source, stamper }
    }

    /// Loads all three collections.
    pub async fn load(&self) -> Result<ContentBundle, AppError> {
        let bundle = ContentBundle {
            projects: self.load_collection::<Project>().await?,
            blog_posts: self.load_collection::<BlogPost>().await?,
            publications: self.load_collection::<Publication>().await?,
        };

        let counts = bundle.counts();
        info!(
            projects = counts.projects,
            blog_posts = counts.blog_posts,
            publications = counts.publications,
            "Content catalog loaded"
        );

        Ok(bundle)
    }

    /// Loads one collection in file order. A missing collection is empty.
    pub async fn load_collection<R: ContentRecord>(&self) -> Result<Vec<R>, AppError> {
        let kind = R::KIND;

        let Some(raw) = self.source.read_collection(kind).await? else {
            warn!("No {} collection found, treating it as empty", kind.collection_name());
            return Ok(Vec::new());
        };

        let entries: Vec<Value> = serde_json::from_str(&raw).map_err(|e| {
            AppError::InvalidContent(format!("{}: {}", kind.file_name(), e))
        })?;

        let mut drafts = 0usize;
        let mut records = Vec::with_capacity(entries.len());

        for (index, entry) in entries.into_iter().enumerate() {
            let is_draft = entry.get("id").is_none();
            let record: R = if is_draft {
                drafts += 1;
                let draft: R::Insert = parse_entry(kind.file_name(), index, entry)?;
                self.stamper.stamp(draft)
            } else {
                parse_entry::<R>(kind.file_name(), index, entry)?
            };
            records.push(record);
        }

        ensure_unique_ids(&records)?;

        if drafts > 0 {
            warn!(
                "Assigned identifiers to {} draft {} entries; they change on every build until written back",
                drafts, kind
            );
        }
        debug!("Loaded {} {} entries", records.len(), kind);

        Ok(records)
    }
}

fn parse_entry<D: serde::de::DeserializeOwned>(
    file: String,
    index: usize,
    entry: Value,
) -> Result<D, AppError> {
    serde_json::from_value(entry)
        .map_err(|e| AppError::InvalidContent(format!("{} entry {}: {}", file, index, e)))
}

/// Identifiers must be unique within a collection.
pub fn ensure_unique_ids<R: ContentRecord>(records: &[R]) -> Result<(), AppError> {
    let mut seen = HashSet::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.id()) {
            return Err(AppError::Conflict(format!(
                "duplicate {} id '{}'",
                R::KIND,
                record.id()
            )));
        }
    }

    Ok(())
}
