use super::error::DetectorError;
use super::models::ModelSet;
use super::types::Detection;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Camera request forwarded to whichever backend owns the device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureConstraints {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// "user" for the front camera, "environment" for the rear one
    #[serde(default = "default_facing_mode")]
    pub facing_mode: String,
    /// Display the feed (and overlay) flipped horizontally
    #[serde(default = "default_mirrored")]
    pub mirrored: bool,
}

fn default_width() -> u32 {
    640
}

fn default_height() -> u32 {
    480
}

fn default_facing_mode() -> String {
    "user".to_string()
}

fn default_mirrored() -> bool {
    true
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            facing_mode: default_facing_mode(),
            mirrored: default_mirrored(),
        }
    }
}

/// The unified interface for any face/expression detector 🔍
#[async_trait]
pub trait ExpressionDetector: Send + Sync {
    /// Short name for logs and the status line
    fn name(&self) -> &'static str;

    /// Prepare a capture session once the models are on disk
    async fn start(
        &self,
        _models: &ModelSet,
        _capture: &CaptureConstraints,
    ) -> Result<(), DetectorError> {
        Ok(())
    }

    /// Sample the current frame. `Ok(None)` means no face was found.
    async fn detect(&self) -> Result<Option<Detection>, DetectorError>;
}
