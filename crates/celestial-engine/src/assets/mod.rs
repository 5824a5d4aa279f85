pub mod loader;
pub mod manifest;
pub mod image_loader;
