use std::f64::consts::PI;

pub mod arc;
pub mod gradation;
pub mod hands;
pub mod layout;
pub mod scene;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

pub use arc::RotatingArc;
pub use hands::{ClockTime, HandKind, LocalClock, TimeSource};
pub use layout::DialLayout;
pub use scene::{ClockScene, FrameTick, SceneParams};
pub use surface::{StrokeStyle, Surface};

pub const MAIN_RADIUS_FACTOR: f64 = 0.75 * 0.5; // of the shorter canvas side
pub const DELTA_RADIUS_FACTOR: f64 = 0.075; // of the main radius
pub const HOUR_COUNT: usize = 12;
pub const SUBDIVISIONS: usize = 5; // minute ticks per hour step
pub const START_OFFSET: f64 = -PI / 2.0; // 12 o'clock

pub const NUMERAL_FONT_SIZE: f64 = 24.0;
pub const NUMERAL_OFFSET: f64 = 3.0; // in delta radii, inward from the main radius
pub const HOUR_TICK_WIDTH: f64 = 4.0;
pub const HOUR_MARK_LENGTH: f64 = 1.0;
pub const MINUTE_TICK_WIDTH: f64 = 2.0;
pub const MINUTE_TICK_LENGTH: f64 = 10.0;

pub const BASE_ANGULAR_SPEED: f64 = PI / 2.0; // rad/s at speed 1
