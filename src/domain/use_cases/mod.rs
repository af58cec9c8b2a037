pub mod catalog;
pub mod stamp;
