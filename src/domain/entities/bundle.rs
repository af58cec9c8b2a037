use serde::{Deserialize, Serialize};

use crate::entities::{blog_post::BlogPost, project::Project, publication::Publication};

/// Everything the renderer reads, in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub projects: Vec<Project>,
    pub blog_posts: Vec<BlogPost>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCounts {
    pub projects: usize,
    pub blog_posts: usize,
    pub publications: usize,
}

impl ContentBundle {
    pub fn counts(&self) -> ContentCounts {
        ContentCounts {
            projects: self.projects.len(),
            blog_posts: self.blog_posts.len(),
            publications: self.publications.len(),
        }
    }
}
