pub mod meeting_server;
pub mod utils;
