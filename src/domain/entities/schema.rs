use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Serialize, de::DeserializeOwned};

/// The three content collections of the site.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    #[display("project")]
    Project,
    #[display("blog post")]
    BlogPost,
    #[display("publication")]
    Publication,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Project,
        ContentKind::BlogPost,
        ContentKind::Publication,
    ];

    /// Collection file stem, shared by the content directory and the build output.
    pub fn collection_name(&self) -> &'static str {
        match self {
            ContentKind::Project => "projects",
            ContentKind::BlogPost => "blog-posts",
            ContentKind::Publication => "publications",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.collection_name())
    }
}

/// A full, persisted content record.
pub trait ContentRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Insert: InsertRecord<Record = Self>;

    const KIND: ContentKind;
    /// Every wire field name of the full shape.
    const FIELDS: &'static [&'static str];
    /// Fields assigned by the storing system, never by the submitter.
    const SYSTEM_FIELDS: &'static [&'static str];

    fn id(&self) -> &str;
}

/// The shape a content creator submits before system fields exist.
pub trait InsertRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    type Record: ContentRecord<Insert = Self>;

    const FIELDS: &'static [&'static str];

    /// Builds the full record, using `at` for every system timestamp.
    fn into_record_at(self, id: String, at: DateTime<Utc>) -> Self::Record;
}

/// Fields on which the insert shape of `R` disagrees with
/// "full shape minus system fields". Empty when the two are in sync.
pub fn insert_field_drift<R: ContentRecord>() -> Vec<&'static str> {
    let expected: BTreeSet<&'static str> = R::FIELDS
        .iter()
        .copied()
        .filter(|f| !R::SYSTEM_FIELDS.contains(f))
        .collect();
    let actual: BTreeSet<&'static str> = <R::Insert as InsertRecord>::FIELDS.iter().copied().collect();

    expected.symmetric_difference(&actual).copied().collect()
}
