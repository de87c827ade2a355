use std::path::Path;

use crate::overlay::domain::asset_loader::AssetLoader;
use crate::overlay::domain::overlay_asset::OverlayImage;

/// Decodes overlay assets with the `image` crate, converting to RGBA.
///
/// Overlay sprites are small, so pure-Rust decoding is plenty fast here.
pub struct ImageAssetLoader;

impl AssetLoader for ImageAssetLoader {
    fn load(&self, path: &Path) -> Result<OverlayImage, Box<dyn std::error::Error>> {
        let decoded = image::open(path)
            .map_err(|e| format!("failed to decode overlay asset {}: {e}", path.display()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(OverlayImage::new(rgba.into_raw(), width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_png_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        let mut img = image::RgbaImage::new(3, 2);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgba([10, 20, 30, 200]);
        }
        img.save(&path).unwrap();

        let loader = ImageAssetLoader;
        let overlay = loader.load(&path).unwrap();
        assert_eq!(overlay.width(), 3);
        assert_eq!(overlay.height(), 2);
        assert_eq!(overlay.pixel(2, 1), [10, 20, 30, 200]);
    }

    #[test]
    fn test_load_rgb_gains_opaque_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("opaque.png");
        let mut img = image::RgbImage::new(2, 2);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([50, 100, 150]);
        }
        img.save(&path).unwrap();

        let loader = ImageAssetLoader;
        let overlay = loader.load(&path).unwrap();
        assert_eq!(overlay.pixel(0, 0), [50, 100, 150, 255]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let loader = ImageAssetLoader;
        assert!(loader.load(Path::new("/nonexistent/sprite.png")).is_err());
    }
}
