use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `center` along `angle` (radians, clockwise from +x in
    /// screen space).
    pub fn polar(center: Point, radius: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(center.x + radius * cos, center.y + radius * sin)
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

pub fn deg2rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn rad2deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_deg2rad() {
        assert_eq!(deg2rad(0.0), 0.0);
        assert!((deg2rad(180.0) - PI).abs() < EPS);
        assert!((deg2rad(-90.0) + PI / 2.0).abs() < EPS);
        assert!((deg2rad(360.0) - 2.0 * PI).abs() < EPS);
        assert!((rad2deg(deg2rad(42.5)) - 42.5).abs() < EPS);
    }

    #[test]
    fn test_polar_points_up_at_minus_quarter_turn() {
        let center = Point::new(200.0, 150.0);
        let p = Point::polar(center, 10.0, -PI / 2.0);
        assert!((p.x - 200.0).abs() < EPS);
        assert!((p.y - 140.0).abs() < EPS);
        assert!((center.distance(p) - 10.0).abs() < EPS);
    }
}
