use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    flag::StringFlag,
    option_fields::OptionalString,
    schema::{ContentKind, ContentRecord, InsertRecord},
    timestamp::Timestamp,
};

/// An article or paper published elsewhere and linked from the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url: String,
    /// Venue name.
    pub publication: String,
    pub category: String,
    pub published_at: Timestamp,
    pub featured: StringFlag,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub priority: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub read_time: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
    pub created_at: Timestamp,
}

/// `publishedAt` is the venue's date and stays with the submitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsertPublication {
    pub title: String,
    pub description: String,
    pub url: String,
    pub publication: String,
    pub category: String,
    pub published_at: Timestamp,
    pub featured: StringFlag,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub priority: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub read_time: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
}

impl InsertPublication {
    pub fn into_record(self, id: impl Into<String>, created_at: impl Into<Timestamp>) -> Publication {
        Publication {
            id: id.into(),
            title: self.title,
            description: self.description,
            url: self.url,
            publication: self.publication,
            category: self.category,
            published_at: self.published_at,
            featured: self.featured,
            priority: self.priority,
            read_time: self.read_time,
            image_url: self.image_url,
            created_at: created_at.into(),
        }
    }
}

impl From<Publication> for InsertPublication {
    fn from(p: Publication) -> Self {
        InsertPublication {
            title: p.title,
            description: p.description,
            url: p.url,
            publication: p.publication,
            category: p.category,
            published_at: p.published_at,
            featured: p.featured,
            priority: p.priority,
            read_time: p.read_time,
            image_url: p.image_url,
        }
    }
}

impl ContentRecord for Publication {
    type Insert = InsertPublication;

    const KIND: ContentKind = ContentKind::Publication;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "url",
        "publication",
        "category",
        "publishedAt",
        "featured",
        "priority",
        "readTime",
        "imageUrl",
        "createdAt",
    ];
    const SYSTEM_FIELDS: &'static [&'static str] = &["id", "createdAt"];

    fn id(&self) -> &str {
        &self.id
    }
}

impl InsertRecord for InsertPublication {
    type Record = Publication;

    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "url",
        "publication",
        "category",
        "publishedAt",
        "featured",
        "priority",
        "readTime",
        "imageUrl",
    ];

    fn into_record_at(self, id: String, at: DateTime<Utc>) -> Publication {
        self.into_record(id, at)
    }
}
