use crate::shared::canvas::Canvas;

/// Consumer of composited canvases, one call per pipeline cycle.
pub trait DisplaySink: Send {
    fn present(&mut self, canvas: &Canvas) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes and releases the sink. Called once at shutdown.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
