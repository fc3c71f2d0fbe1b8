use super::{DELTA_RADIUS_FACTOR, MAIN_RADIUS_FACTOR};
use gyrectl::geometry::Point;

/// Radii of the dial, derived from the canvas size.
///
/// Both radii are written together in [`DialLayout::recompute`], so a reader never sees
/// a `delta_radius` that belongs to an older `main_radius`. Degenerate canvas sizes
/// (zero or negative) are not rejected; they just produce a degenerate dial.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialLayout {
    pub width: f64,
    pub height: f64,
    pub main_radius: f64,
    pub delta_radius: f64,
}

impl DialLayout {
    pub fn new(width: f64, height: f64) -> Self {
        let mut layout = Self::default();
        layout.recompute(width, height);
        layout
    }

    pub fn recompute(&mut self, width: f64, height: f64) {
        let main_radius = width.min(height) * MAIN_RADIUS_FACTOR;
        *self = Self {
            width,
            height,
            main_radius,
            delta_radius: main_radius * DELTA_RADIUS_FACTOR,
        };
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of arc `index` in a stack of `count`: one delta per index, centered on the
    /// main radius.
    pub fn arc_radius(&self, index: usize, count: usize) -> f64 {
        self.main_radius + (index as f64 - count as f64 / 2.0) * self.delta_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_radii_follow_shorter_side() {
        let cases = [
            (400.0, 300.0, 112.5),
            (300.0, 400.0, 112.5),
            (1920.0, 1080.0, 405.0),
            (100.0, 100.0, 37.5),
        ];

        for (w, h, expected) in cases {
            let layout = DialLayout::new(w, h);
            assert!((layout.main_radius - expected).abs() < EPS);
            assert!((layout.delta_radius - layout.main_radius * 0.075).abs() < EPS);
        }
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut layout = DialLayout::new(640.0, 480.0);
        layout.recompute(800.0, 600.0);
        let first = layout;
        layout.recompute(800.0, 600.0);
        assert_eq!(first, layout);
        assert_eq!(layout.center(), Point::new(400.0, 300.0));
    }

    #[test]
    fn test_degenerate_canvas_is_not_rejected() {
        let layout = DialLayout::new(0.0, 300.0);
        assert_eq!(layout.main_radius, 0.0);
        assert_eq!(layout.delta_radius, 0.0);

        let layout = DialLayout::new(-40.0, 300.0);
        assert!(layout.main_radius < 0.0);
        assert!((layout.delta_radius - layout.main_radius * 0.075).abs() < EPS);
    }

    #[test]
    fn test_arc_radius_centers_stack() {
        let layout = DialLayout::new(400.0, 300.0);
        // single arc sits half a delta inside the main radius
        assert!((layout.arc_radius(0, 1) - (112.5 - 8.4375 / 2.0)).abs() < EPS);
        assert!((layout.arc_radius(1, 2) - 112.5).abs() < EPS);
        assert!((layout.arc_radius(2, 3) - (112.5 + 8.4375 / 2.0)).abs() < EPS);
    }
}
