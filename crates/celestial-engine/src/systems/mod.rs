pub mod render;
pub mod audio;
pub mod vector;
