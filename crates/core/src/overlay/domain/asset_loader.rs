use std::path::Path;

use super::overlay_asset::OverlayImage;

/// Produces a drawable overlay image given a path.
///
/// Decoding details (format support, color conversion) live in
/// infrastructure; the store and compositor only ever see the decoded
/// RGBA result.
pub trait AssetLoader: Send {
    fn load(&self, path: &Path) -> Result<OverlayImage, Box<dyn std::error::Error>>;
}
