/// Default overlay opacity, matching the reference filter look.
pub const DEFAULT_OPACITY: f32 = 0.8;

/// Default soften (blur) radius in pixels applied to overlay sprites.
pub const DEFAULT_SOFTEN_RADIUS: f32 = 1.0;

/// Translucent rose RGBA used for lip tinting under multiply blend.
pub const DEFAULT_LIP_TINT: [u8; 4] = [200, 60, 90, 110];

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
