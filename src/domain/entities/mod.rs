pub mod blog_post;
pub mod bundle;
pub mod flag;
pub mod option_fields;
pub mod project;
pub mod publication;
pub mod schema;
pub mod timestamp;

pub use blog_post::{BlogPost, InsertBlogPost};
pub use bundle::{ContentBundle, ContentCounts};
pub use flag::StringFlag;
pub use option_fields::{OptionField, OptionalString};
pub use project::{InsertProject, Project};
pub use publication::{InsertPublication, Publication};
pub use schema::{ContentKind, ContentRecord, InsertRecord};
pub use timestamp::Timestamp;
