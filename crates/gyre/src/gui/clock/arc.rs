use super::BASE_ANGULAR_SPEED;
use super::surface::Surface;
use gyrectl::geometry::Point;
use std::f64::consts::TAU;

/// A stroked arc that spins around its center.
///
/// `x`, `y` and `radius` are moved by the owner on resize; the start and end angles are
/// fixed for the life of the arc.
#[derive(Debug, Clone, PartialEq)]
pub struct RotatingArc {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    start_angle: f64,
    end_angle: f64,
    rotation: f64,
}

impl RotatingArc {
    pub fn new(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            rotation: 0.0,
        }
    }

    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Advance by `delta_seconds`; a negative `speed` turns the other way.
    pub fn update(&mut self, delta_seconds: f64, speed: f64) {
        self.rotation = (self.rotation + delta_seconds * speed * BASE_ANGULAR_SPEED).rem_euclid(TAU);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.stroke_arc(
            self.center(),
            self.radius,
            self.start_angle + self.rotation,
            self.end_angle + self.rotation,
        )
    }
}
