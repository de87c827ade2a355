use crate::shared::frame::Frame;

/// Pull-based source of RGB frames.
///
/// `next_frame` returns `Ok(None)` once the stream is exhausted. Frames
/// carry a monotonically increasing index starting at zero.
pub trait FrameSource: Send {
    fn next_frame(&mut self) -> Result<Option<Frame>, Box<dyn std::error::Error>>;

    /// Releases underlying resources. Safe to call more than once.
    fn close(&mut self);
}
