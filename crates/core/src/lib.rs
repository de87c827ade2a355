pub mod compositing;
pub mod detection;
pub mod geometry;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod video;
