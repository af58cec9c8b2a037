use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// All three collections in one file, read by the renderer.
pub const BUNDLE_FILE_NAME: &str = "content.json";
