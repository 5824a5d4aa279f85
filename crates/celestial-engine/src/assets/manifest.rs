use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::api::types::{ClipId, SpriteId};
use crate::assets::loader::{check_sprite_size, AssetLoader};
use crate::components::sprite::SpriteComponent;
use crate::error::EngineError;

/// Every sprite and sound a game registered, in registration order.
/// Serialized to JSON so the host page knows which files to fetch and which
/// handle each one answers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub sprites: Vec<SpriteDescriptor>,
    #[serde(default)]
    pub sounds: Vec<SoundDescriptor>,
}

/// A sprite file scaled to a fixed pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    pub id: u32,
    /// Relative path with `/` separators (e.g. "planets/sun.png").
    pub path: String,
    pub width: u32,
    pub height: u32,
}

/// An audio clip file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDescriptor {
    pub id: u32,
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&SpriteDescriptor> {
        self.sprites.iter().find(|s| s.id == id.0)
    }

    pub fn sound(&self, id: ClipId) -> Option<&SoundDescriptor> {
        self.sounds.iter().find(|s| s.id == id.0)
    }
}

fn wire_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Asset loader that only assigns handles and records a manifest.
///
/// Used where another party owns the files (the browser fetches them after
/// reading the manifest) and in tests. Requesting the same file twice at the
/// same size returns the same handle.
#[derive(Debug, Default)]
pub struct ManifestLoader {
    manifest: AssetManifest,
}

impl ManifestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest(&self) -> &AssetManifest {
        &self.manifest
    }

    pub fn into_manifest(self) -> AssetManifest {
        self.manifest
    }
}

impl AssetLoader for ManifestLoader {
    fn load_sprite(&mut self, path: &Path, width: u32, height: u32) -> Result<SpriteComponent, EngineError> {
        check_sprite_size(path, width, height)?;
        let path = wire_path(path);
        let existing = self
            .manifest
            .sprites
            .iter()
            .find(|s| s.path == path && s.width == width && s.height == height);
        let id = match existing {
            Some(desc) => desc.id,
            None => {
                let id = self.manifest.sprites.len() as u32;
                self.manifest.sprites.push(SpriteDescriptor { id, path, width, height });
                id
            }
        };
        Ok(SpriteComponent::new(SpriteId(id), width, height))
    }

    fn load_sound(&mut self, path: &Path) -> Result<ClipId, EngineError> {
        let path = wire_path(path);
        if let Some(desc) = self.manifest.sounds.iter().find(|s| s.path == path) {
            return Ok(ClipId(desc.id));
        }
        let id = self.manifest.sounds.len() as u32;
        self.manifest.sounds.push(SoundDescriptor { id, path });
        Ok(ClipId(id))
    }
}
