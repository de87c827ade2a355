pub mod cpu_compositor;
pub mod polygon;
pub mod soften;
pub mod sprite;
