use std::path::Path;

use crate::api::types::ClipId;
use crate::components::sprite::SpriteComponent;
use crate::error::EngineError;

/// Startup asset collaborator.
///
/// Sprites come back already scaled to `width x height` with per-pixel
/// transparency. Every failure is fatal: callers propagate the error out of
/// `Game::init` and the frame loop never starts.
pub trait AssetLoader {
    /// Load an image at `path` and scale it to the given pixel size.
    fn load_sprite(&mut self, path: &Path, width: u32, height: u32) -> Result<SpriteComponent, EngineError>;

    /// Register an audio clip at `path`.
    fn load_sound(&mut self, path: &Path) -> Result<ClipId, EngineError>;
}

/// Reject zero-sized sprite requests before any file is touched.
pub(crate) fn check_sprite_size(path: &Path, width: u32, height: u32) -> Result<(), EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidSpriteSize {
            path: path.to_path_buf(),
            width,
            height,
        });
    }
    Ok(())
}
