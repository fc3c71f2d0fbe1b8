use super::surface::Surface;
use chrono::{Local, Timelike};
use gyrectl::geometry::{Point, deg2rad};
use strum::{Display as StrumDisplay, EnumIter, IntoEnumIterator};

/// Whole hours, minutes and seconds. Hands never move between whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }
}

pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        let now = Local::now();
        ClockTime::new(now.hour(), now.minute(), now.second())
    }
}

/// A frozen time.
impl TimeSource for ClockTime {
    fn now(&self) -> ClockTime {
        *self
    }
}

/// Draw order is declaration order, so the second hand ends up on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, StrumDisplay)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    /// Degrees clockwise from +x; -90 points at 12 o'clock.
    pub fn angle_degrees(&self, time: ClockTime) -> f64 {
        let turn = match self {
            Self::Hour => (time.hours % 12) as f64 / 12.0,
            Self::Minute => time.minutes as f64 / 60.0,
            Self::Second => time.seconds as f64 / 60.0,
        };
        turn * 360.0 - 90.0
    }

    pub fn length_factor(&self) -> f64 {
        match self {
            Self::Hour => 0.5,
            Self::Minute => 0.8,
            Self::Second => 0.9,
        }
    }

    pub fn width(&self) -> f64 {
        match self {
            Self::Hour => 6.0,
            Self::Minute => 4.0,
            Self::Second => 2.0,
        }
    }

    pub fn tip(&self, center: Point, main_radius: f64, time: ClockTime) -> Point {
        Point::polar(
            center,
            main_radius * self.length_factor(),
            deg2rad(self.angle_degrees(time)),
        )
    }
}

/// Samples `clock` once and strokes the three hands from `center`.
pub fn render<S: Surface>(
    surface: &mut S,
    clock: &impl TimeSource,
    center: Point,
    main_radius: f64,
) -> Result<(), S::Error> {
    let time = clock.now();
    for hand in HandKind::iter() {
        surface.set_line_width(hand.width());
        surface.stroke_line(center, hand.tip(center, main_radius, time))?;
    }
    Ok(())
}
