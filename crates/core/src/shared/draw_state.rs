/// Pixel-combination function used when drawing over existing pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
}

impl BlendMode {
    /// Combines one channel of an incoming pixel with the destination.
    ///
    /// The result is the fully-blended value; opacity weighting happens
    /// separately so the same math serves every alpha level.
    pub fn apply(self, dst: u8, src: u8) -> u8 {
        match self {
            BlendMode::Normal => src,
            BlendMode::Multiply => ((dst as u16 * src as u16 + 127) / 255) as u8,
            BlendMode::Screen => {
                255 - (((255 - dst as u16) * (255 - src as u16) + 127) / 255) as u8
            }
        }
    }

    pub fn from_name(name: &str) -> Option<BlendMode> {
        match name {
            "normal" => Some(BlendMode::Normal),
            "multiply" => Some(BlendMode::Multiply),
            "screen" => Some(BlendMode::Screen),
            _ => None,
        }
    }
}

/// Explicit draw parameters scoped around a single draw operation.
///
/// Replaces the ambient alpha/blend/filter state of a 2D graphics context:
/// draws receive the state they run under, and scopes restore the default
/// before anything else touches the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    pub opacity: f32,
    pub blend_mode: BlendMode,
    pub soften_radius: f32,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            blend_mode: BlendMode::Normal,
            soften_radius: 0.0,
        }
    }
}

impl DrawState {
    pub fn is_default(&self) -> bool {
        *self == DrawState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── BlendMode::apply ─────────────────────────────────────────────

    #[test]
    fn test_normal_returns_source() {
        assert_eq!(BlendMode::Normal.apply(10, 200), 200);
        assert_eq!(BlendMode::Normal.apply(255, 0), 0);
    }

    #[rstest]
    #[case::black_absorbs(100, 0, 0)]
    #[case::white_identity(100, 255, 100)]
    #[case::half(128, 128, 64)]
    fn test_multiply(#[case] dst: u8, #[case] src: u8, #[case] expected: u8) {
        assert_eq!(BlendMode::Multiply.apply(dst, src), expected);
    }

    #[rstest]
    #[case::black_identity(100, 0, 100)]
    #[case::white_saturates(100, 255, 255)]
    #[case::half(128, 128, 192)]
    fn test_screen(#[case] dst: u8, #[case] src: u8, #[case] expected: u8) {
        assert_eq!(BlendMode::Screen.apply(dst, src), expected);
    }

    #[test]
    fn test_multiply_never_brightens() {
        for dst in [0u8, 50, 128, 255] {
            for src in [0u8, 50, 128, 255] {
                assert!(BlendMode::Multiply.apply(dst, src) <= dst.max(src));
            }
        }
    }

    #[test]
    fn test_screen_never_darkens() {
        for dst in [0u8, 50, 128, 255] {
            for src in [0u8, 50, 128, 255] {
                assert!(BlendMode::Screen.apply(dst, src) >= dst.min(src));
            }
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(BlendMode::from_name("normal"), Some(BlendMode::Normal));
        assert_eq!(BlendMode::from_name("multiply"), Some(BlendMode::Multiply));
        assert_eq!(BlendMode::from_name("screen"), Some(BlendMode::Screen));
        assert_eq!(BlendMode::from_name("overlay"), None);
    }

    // ── DrawState ────────────────────────────────────────────────────

    #[test]
    fn test_default_state() {
        let state = DrawState::default();
        assert_eq!(state.opacity, 1.0);
        assert_eq!(state.blend_mode, BlendMode::Normal);
        assert_eq!(state.soften_radius, 0.0);
        assert!(state.is_default());
    }

    #[test]
    fn test_non_default_state() {
        let state = DrawState {
            opacity: 0.5,
            blend_mode: BlendMode::Screen,
            soften_radius: 2.0,
        };
        assert!(!state.is_default());
    }
}
