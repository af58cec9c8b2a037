#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Utc};
use portfolio_content::{
    entities::{
        blog_post::{BlogPost, InsertBlogPost},
        project::{InsertProject, Project},
        publication::Publication,
        schema::ContentKind,
        OptionField,
    },
    use_cases::stamp::Stamper,
};
use serde_json::{json, Value};
use tempfile::TempDir;

/// The project record used as the canonical example across tests.
pub fn sample_project_json() -> Value {
    json!({
        "id": "p1",
        "title": "Site",
        "description": "d",
        "content": "c",
        "technologies": ["ts", "react"],
        "category": "web",
        "featured": "true",
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

pub fn sample_blog_post_json() -> Value {
    json!({
        "id": "b1",
        "title": "Hello",
        "slug": "hello",
        "excerpt": "First post",
        "content": "Body",
        "tags": ["intro", "meta"],
        "readTime": "3 min read",
        "published": "true",
        "publishedAt": "2024-02-01T09:30:00Z",
        "imageUrl": null,
        "createdAt": "2024-01-31"
    })
}

pub fn sample_publication_json() -> Value {
    json!({
        "id": "pub1",
        "title": "On Caching",
        "description": "An essay",
        "url": "https://example.com/caching",
        "publication": "Example Journal",
        "category": "essay",
        "publishedAt": 1704067200000_i64,
        "featured": "false",
        "priority": "high",
        "readTime": null,
        "createdAt": "2024-01-01T00:00:00.000Z"
    })
}

pub fn sample_project() -> Project {
    serde_json::from_value(sample_project_json()).unwrap()
}

pub fn sample_blog_post() -> BlogPost {
    serde_json::from_value(sample_blog_post_json()).unwrap()
}

pub fn sample_publication() -> Publication {
    serde_json::from_value(sample_publication_json()).unwrap()
}

pub fn draft_project(title: &str) -> InsertProject {
    InsertProject {
        title: title.to_string(),
        description: "draft".into(),
        content: "draft body".into(),
        technologies: vec!["rust".into()],
        github_url: OptionField::Absent,
        live_url: OptionField::Null,
        image_url: "https://example.com/cover.png".into(),
        category: "tools".into(),
        featured: "false".into(),
    }
}

pub fn draft_blog_post(slug: &str) -> InsertBlogPost {
    InsertBlogPost {
        title: "Draft".into(),
        slug: slug.to_string(),
        excerpt: "draft".into(),
        content: "draft body".into(),
        tags: vec![],
        read_time: "1 min read".into(),
        published: "false".into(),
        image_url: OptionField::Absent,
    }
}

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Deterministic stamper: `id-1`, `id-2`, ... at a fixed instant.
#[derive(Default)]
pub struct SequenceStamper {
    next: std::sync::atomic::AtomicUsize,
}

impl Stamper for SequenceStamper {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, std::sync::atomic::Ordering::SeqCst) + 1;
        format!("id-{}", n)
    }

    fn now(&self) -> DateTime<Utc> {
        fixed_instant()
    }
}

/// Scratch content directory, removed on drop.
pub struct TestContentDir {
    pub dir: TempDir,
}

impl TestContentDir {
    pub fn new() -> Self {
        TestContentDir { dir: tempfile::tempdir().expect("Failed to create temp dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_collection(&self, kind: ContentKind, entries: &Value) -> PathBuf {
        let path = self.dir.path().join(kind.file_name());
        std::fs::write(&path, serde_json::to_vec_pretty(entries).unwrap()).unwrap();
        path
    }

    pub fn write_raw(&self, kind: ContentKind, raw: &str) -> PathBuf {
        let path = self.dir.path().join(kind.file_name());
        std::fs::write(&path, raw).unwrap();
        path
    }
}
