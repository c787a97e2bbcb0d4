//! Application configuration and constants

// === JSON Fields ===
pub const IMAGE_URL_FIELD: &str = "image_url";
pub const TITLE_FIELD: &str = "title";

// === Storage ===
pub const BACKUP_SUFFIX: &str = ".backup";

// === File Extensions ===
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "tiff", "webp",
];

// === Prompt ===
pub const CONFIRM_ANSWERS: &[&str] = &["y", "yes"];
