use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::api::types::{ClipId, SpriteId};
use crate::assets::loader::{check_sprite_size, AssetLoader};
use crate::components::sprite::SpriteComponent;
use crate::error::EngineError;

/// A decoded sprite, scaled and ready to upload.
#[derive(Debug, Clone)]
pub struct SpriteImage {
    pub path: PathBuf,
    pub pixels: RgbaImage,
}

impl SpriteImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}

/// Scale an image to `width x height` RGBA.
///
/// Fully transparent pixels get their color zeroed before scaling so that
/// bilinear filtering does not bleed hidden background color into the
/// visible edge. Images without an alpha channel come out fully opaque.
pub fn prepare_sprite(image: DynamicImage, width: u32, height: u32) -> RgbaImage {
    let has_alpha = image.color().has_alpha();
    let mut rgba = image.into_rgba8();
    if has_alpha {
        for pixel in rgba.pixels_mut() {
            if pixel[3] == 0 {
                pixel[0] = 0;
                pixel[1] = 0;
                pixel[2] = 0;
            }
        }
    }
    if rgba.dimensions() == (width, height) {
        return rgba;
    }
    imageops::resize(&rgba, width, height, FilterType::Triangle)
}

/// Filesystem asset loader rooted at a directory.
///
/// Decodes sprites with the `image` crate and keeps them in load order
/// (`SpriteId` = index). Sounds are only checked for existence; decoding is
/// left to the sound player.
#[derive(Debug)]
pub struct ImageLoader {
    root: PathBuf,
    sprites: Vec<SpriteImage>,
    sounds: Vec<PathBuf>,
}

impl ImageLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            sprites: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&SpriteImage> {
        self.sprites.get(id.0 as usize)
    }

    pub fn sprites(&self) -> &[SpriteImage] {
        &self.sprites
    }

    pub fn sound_path(&self, id: ClipId) -> Option<&Path> {
        self.sounds.get(id.0 as usize).map(PathBuf::as_path)
    }

    fn existing_file(&self, path: &Path) -> Result<PathBuf, EngineError> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(EngineError::MissingAsset { path: full });
        }
        Ok(full)
    }
}

impl AssetLoader for ImageLoader {
    fn load_sprite(&mut self, path: &Path, width: u32, height: u32) -> Result<SpriteComponent, EngineError> {
        check_sprite_size(path, width, height)?;
        let full = self.existing_file(path)?;
        let decode = |full: &Path| -> Result<DynamicImage, image::ImageError> {
            Ok(ImageReader::open(full)?.with_guessed_format()?.decode()?)
        };
        let image = decode(&full).map_err(|source| EngineError::DecodeAsset {
            path: full.clone(),
            source,
        })?;

        let pixels = prepare_sprite(image, width, height);
        let id = SpriteId(self.sprites.len() as u32);
        log::debug!("loaded sprite {} as {:?} ({width}x{height})", full.display(), id);
        self.sprites.push(SpriteImage { path: full, pixels });
        Ok(SpriteComponent::new(id, width, height))
    }

    fn load_sound(&mut self, path: &Path) -> Result<ClipId, EngineError> {
        let full = self.existing_file(path)?;
        let id = ClipId(self.sounds.len() as u32);
        self.sounds.push(full);
        Ok(id)
    }
}
