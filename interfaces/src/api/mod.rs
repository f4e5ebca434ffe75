pub mod error;
pub mod meeting;
