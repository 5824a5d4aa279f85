use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a game from starting.
///
/// All variants are startup failures: once the frame loop runs, input
/// dispatch and rendering have no error path.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A sprite or sound file is not present at its expected path.
    #[error("asset not found: {}", path.display())]
    MissingAsset { path: PathBuf },

    /// A sprite file exists but could not be decoded.
    #[error("failed to decode image {}", path.display())]
    DecodeAsset {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A sprite was requested with a zero dimension.
    #[error("invalid sprite size {width}x{height} for {}", path.display())]
    InvalidSpriteSize { path: PathBuf, width: u32, height: u32 },

    /// A body definition violates a registry invariant.
    #[error("invalid body `{name}`: {reason}")]
    InvalidBody { name: String, reason: String },

    /// A body has no descriptive text.
    #[error("no speech text for body `{name}`")]
    MissingSpeech { name: String },
}

impl EngineError {
    pub fn invalid_body(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBody {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_item() {
        let err = EngineError::MissingAsset { path: PathBuf::from("planets/sun.png") };
        assert_eq!(err.to_string(), "asset not found: planets/sun.png");

        let err = EngineError::invalid_body("Earth", "period must be > 0");
        assert_eq!(err.to_string(), "invalid body `Earth`: period must be > 0");
    }
}
