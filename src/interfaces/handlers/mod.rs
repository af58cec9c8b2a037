pub mod assets;
pub mod content;
pub mod home;
