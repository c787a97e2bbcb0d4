//! Core domain types

pub mod document;
pub mod filename;
pub mod media;

pub use document::Document;
pub use filename::{normalize, rewrite_image_url, trailing_segment};
pub use media::is_image;
