use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{
    flag::StringFlag,
    option_fields::OptionalString,
    schema::{ContentKind, ContentRecord, InsertRecord},
    timestamp::Timestamp,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    /// Display order.
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub github_url: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub live_url: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
    pub category: String,
    pub featured: StringFlag,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InsertProject {
    pub title: String,
    pub description: String,
    pub content: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub github_url: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub live_url: OptionalString,
    #[serde(default, skip_serializing_if = "OptionalString::is_absent")]
    pub image_url: OptionalString,
    pub category: String,
    pub featured: StringFlag,
}

impl InsertProject {
    pub fn into_record(self, id: impl Into<String>, created_at: impl Into<Timestamp>) -> Project {
        Project {
            id: id.into(),
            title: self.title,
            description: self.description,
            content: self.content,
            technologies: self.technologies,
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            category: self.category,
            featured: self.featured,
            created_at: created_at.into(),
        }
    }
}

impl From<Project> for InsertProject {
    fn from(project: Project) -> Self {
        InsertProject {
            title: project.title,
            description: project.description,
            content: project.content,
            technologies: project.technologies,
            github_url: project.github_url,
            live_url: project.live_url,
            image_url: project.image_url,
            category: project.category,
            featured: project.featured,
        }
    }
}

impl ContentRecord for Project {
    type Insert = InsertProject;

    const KIND: ContentKind = ContentKind::Project;
    const FIELDS: &'static [&'static str] = &[
        "id",
        "title",
        "description",
        "content",
        "technologies",
        "githubUrl",
        "liveUrl",
        "imageUrl",
        "category",
        "featured",
        "createdAt",
    ];
    const SYSTEM_FIELDS: &'static [&'static str] = &["id", "createdAt"];

    fn id(&self) -> &str {
        &self.id
    }
}

impl InsertRecord for InsertProject {
    type Record = Project;

    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "content",
        "technologies",
        "githubUrl",
        "liveUrl",
        "imageUrl",
        "category",
        "featured",
    ];

    fn into_record_at(self, id: String, at: DateTime<Utc>) -> Project {
        self.into_record(id, at)
    }
}
