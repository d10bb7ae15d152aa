pub mod authentication;
pub mod videos;

pub use authentication::Authentication;
pub use videos::{VideoManagement, VideoRecord};
