pub mod app;
pub mod canvas;
pub mod clock;
pub mod theme;
pub mod timer;
pub mod window;

pub const DEFAULT_SIZE: i32 = 600;
