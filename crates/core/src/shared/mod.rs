pub mod canvas;
pub mod constants;
pub mod draw_state;
pub mod frame;
pub mod landmarks;
