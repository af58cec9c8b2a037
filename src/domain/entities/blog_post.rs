use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    flag::StringFlag,
    option_fields::OptionalString,
    schema::{ContentKind, ContentRecord, InsertRecord},
    timestamp::Timestamp,
};

// ───── Records ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    /// URL-safe identifier used in post links.
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Human-readable, e.g. "5 min read".
    pub read_time: String,
    pub published: StringFlag,
    pub published_at: Timestamp,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
    pub created_at: Timestamp,
}

/// Blog post as submitted. Both `createdAt` and `publishedAt` are
/// assigned downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsertBlogPost {
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub content: String,
    pub tags: Vec<String>,
    pub read_time: String,
    pub published: StringFlag,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
}

// ───── Conversions ──────────────────────────────────────────────────

impl InsertBlogPost {
    pub fn into_record(
        self,
        id: impl Into<String>,
        created_at: impl Into<Timestamp>,
        published_at: impl Into<Timestamp>,
    ) -> BlogPost {
        BlogPost {
            id: id.into(),
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            tags: self.tags,
            read_time: self.read_time,
            published: self.published,
            published_at: published_at.into(),
            image_url: self.image_url,
            created_at: created_at.into(),
        }
    }
}

impl From<BlogPost> for InsertBlogPost {
    fn from(post: BlogPost) -> Self {
        InsertBlogPost {
            title: post.title,
            slug: post.slug,
            excerpt: post.excerpt,
            content: post.content,
            tags: post.tags,
            read_time: post.read_time,
            published: post.published,
            image_url: post.image_url,
        }
    }
}

// ───── Schema ───────────────────────────────────────────────────────

impl ContentRecord for BlogPost {
    type Insert = InsertBlogPost;

    const KIND: ContentKind = ContentKind::BlogPost;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "slug",
        "excerpt",
        "content",
        "tags",
        "readTime",
        "published",
        "publishedAt",
        "imageUrl",
        "createdAt",
    ];
    const SYSTEM_FIELDS: &'static [&'static str] = &["id", "createdAt", "publishedAt"];

    fn id(&self) -> &str {
        &self.id
    }
}

impl InsertRecord for InsertBlogPost {
    type Record = BlogPost;

    const FIELDS: &'static [&'static str] = &[
        "title",
        "slug",
        "excerpt",
        "content",
        "tags",
        "readTime",
        "published",
        "imageUrl",
    ];

    fn into_record_at(self, id: String, at: DateTime<Utc>) -> BlogPost {
        self.into_record(id, at, at)
    }
}
