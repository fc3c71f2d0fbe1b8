use super::arc::RotatingArc;
use super::gradation;
use super::hands::{self, LocalClock, TimeSource};
use super::layout::DialLayout;
use super::surface::{StrokeStyle, Surface};
use gyrectl::geometry::deg2rad;
use palette::Srgba;
use rand::Rng;
use std::ops::RangeInclusive;

pub const LINE_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=10.0;
pub const SPEED_RANGE: RangeInclusive<f64> = -2.0..=2.0;
pub const SPEED_STEP: f64 = 0.25;

fn clamp_line_width(width: f64) -> f64 {
    width.clamp(*LINE_WIDTH_RANGE.start(), *LINE_WIDTH_RANGE.end())
}

fn snap_speed(speed: f64) -> f64 {
    ((speed / SPEED_STEP).round() * SPEED_STEP).clamp(*SPEED_RANGE.start(), *SPEED_RANGE.end())
}

/// Style knobs read on every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub line_width: f64,
    pub speed: f64,
    pub color: Srgba<f64>,
    pub background: Srgba<f64>,
    /// Gates arc animation only; gradations and hands are always redrawn.
    pub animate: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            speed: 1.0,
            color: Srgba::new(1.0, 1.0, 1.0, 1.0),
            background: Srgba::new(0.0, 0.0, 0.0, 1.0),
            animate: true,
        }
    }
}

impl SceneParams {
    /// Brings out-of-range values back into range. Non-finite numbers fall back to the
    /// defaults.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let line_width = if self.line_width.is_finite() {
            clamp_line_width(self.line_width)
        } else {
            defaults.line_width
        };
        let speed = if self.speed.is_finite() {
            snap_speed(self.speed)
        } else {
            defaults.speed
        };
        Self {
            line_width,
            speed,
            ..self
        }
    }

    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.color, self.line_width)
    }
}

/// Host-supplied frame signal: whether this frame should be drawn, and the time since
/// the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    pub active: bool,
    pub delta_ms: f64,
}

impl FrameTick {
    pub fn new(active: bool, delta_ms: f64) -> Self {
        Self { active, delta_ms }
    }

    pub fn delta_seconds(&self) -> f64 {
        self.delta_ms / 1000.0
    }
}

type Observer = Box<dyn Fn()>;

/// The clock scene: dial, decorative arcs and hands.
///
/// Two entry points drive it. [`ClockScene::resize`] recomputes the layout, moves the
/// arcs and redraws; [`ClockScene::update`] redraws once per active frame. Parameter
/// setters notify the observer registered with [`ClockScene::set_on_change`] so the
/// host can schedule [`ClockScene::draw_update`].
pub struct ClockScene<C: TimeSource = LocalClock> {
    layout: DialLayout,
    arcs: Vec<RotatingArc>,
    params: SceneParams,
    clock: C,
    on_change: Option<Observer>,
}

impl<C: TimeSource> ClockScene<C> {
    pub fn new<R: Rng>(
        width: f64,
        height: f64,
        params: SceneParams,
        arc_count: usize,
        rng: &mut R,
        clock: C,
    ) -> Self {
        let layout = DialLayout::new(width, height);
        let center = layout.center();

        let arcs = (0..arc_count)
            .map(|i| {
                // the outermost arcs of the stack are full circles
                let (start, end) = if i == 0 || i == arc_count - 1 {
                    (0.0, deg2rad(360.0))
                } else {
                    let start = deg2rad(rng.random_range(0.0..360.0));
                    let end = deg2rad(rng.random_range(0.0..360.0));
                    (start, end)
                };
                RotatingArc::new(
                    center.x,
                    center.y,
                    layout.arc_radius(i, arc_count),
                    start,
                    end,
                )
            })
            .collect();

        Self {
            layout,
            arcs,
            params: params.normalized(),
            clock,
            on_change: None,
        }
    }

    pub fn layout(&self) -> &DialLayout {
        &self.layout
    }

    pub fn arcs(&self) -> &[RotatingArc] {
        &self.arcs
    }

    pub fn params(&self) -> &SceneParams {
        &self.params
    }

    pub fn set_on_change(&mut self, observer: impl Fn() + 'static) {
        self.on_change = Some(Box::new(observer));
    }

    fn notify(&self) {
        if let Some(observer) = &self.on_change {
            observer();
        }
    }

    pub fn resize<S: Surface>(
        &mut self,
        surface: &mut S,
        width: f64,
        height: f64,
    ) -> Result<(), S::Error> {
        self.layout.recompute(width, height);
        log::debug!(
            "resized to {}x{}: main radius {}, delta radius {}",
            width,
            height,
            self.layout.main_radius,
            self.layout.delta_radius
        );

        let center = self.layout.center();
        let count = self.arcs.len();
        for (i, arc) in self.arcs.iter_mut().enumerate() {
            arc.x = center.x;
            arc.y = center.y;
            arc.radius = self.layout.arc_radius(i, count);
        }

        self.draw_update(surface, 0.0)
    }

    /// Draws one frame unless the host marked it inactive. Returns whether anything
    /// was drawn.
    pub fn update<S: Surface>(
        &mut self,
        surface: &mut S,
        tick: FrameTick,
    ) -> Result<bool, S::Error> {
        if !tick.active {
            return Ok(false);
        }
        self.draw_update(surface, tick.delta_seconds())?;
        Ok(true)
    }

    /// Full redraw. Arcs advance by `delta_seconds` when animation is on; pass zero to
    /// repaint the current state unchanged apart from the hands.
    pub fn draw_update<S: Surface>(
        &mut self,
        surface: &mut S,
        delta_seconds: f64,
    ) -> Result<(), S::Error> {
        surface.clear(self.params.background)?;

        let style = self.params.stroke_style();
        surface.set_stroke(&style);
        gradation::render(surface, &self.layout)?;

        // gradations leave their own tick width behind
        surface.set_stroke(&style);
        for arc in self.arcs.iter_mut() {
            if self.params.animate {
                arc.update(delta_seconds, self.params.speed);
            }
            arc.draw(surface)?;
        }

        hands::render(
            surface,
            &self.clock,
            self.layout.center(),
            self.layout.main_radius,
        )
    }

    pub fn set_line_width(&mut self, width: f64) {
        if width.is_finite() {
            self.params.line_width = clamp_line_width(width);
        } else {
            log::warn!("ignoring line width {}", width);
        }
        self.notify();
    }

    pub fn set_speed(&mut self, speed: f64) {
        if speed.is_finite() {
            self.params.speed = snap_speed(speed);
        } else {
            log::warn!("ignoring speed {}", speed);
        }
        self.notify();
    }

    pub fn set_color(&mut self, color: Srgba<f64>) {
        self.params.color = color;
        self.notify();
    }

    pub fn set_animate(&mut self, animate: bool) {
        self.params.animate = animate;
        self.notify();
    }

    /// Replaces every parameter at once, notifying a single time.
    pub fn set_params(&mut self, params: SceneParams) {
        self.params = params.normalized();
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::clock::hands::ClockTime;
    use crate::gui::clock::testing::{DrawOp, RecordingSurface};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::Cell;
    use std::f64::consts::TAU;
    use std::rc::Rc;

    const EPS: f64 = 1e-9;

    fn scene(width: f64, height: f64, arcs: usize, seed: u64) -> ClockScene<ClockTime> {
        let mut rng = StdRng::seed_from_u64(seed);
        ClockScene::new(
            width,
            height,
            SceneParams::default(),
            arcs,
            &mut rng,
            ClockTime::new(0, 0, 0),
        )
    }

    #[test]
    fn test_single_arc_is_full_circle() {
        let scene = scene(400.0, 300.0, 1, 7);

        assert!((scene.layout().main_radius - 112.5).abs() < EPS);
        assert!((scene.layout().delta_radius - 8.4375).abs() < EPS);

        let [arc] = scene.arcs() else {
            panic!("expected one arc");
        };
        assert_eq!(arc.start_angle(), 0.0);
        assert!((arc.end_angle() - TAU).abs() < EPS);
        assert_eq!((arc.x, arc.y), (200.0, 150.0));
        assert!((arc.radius - (112.5 - 8.4375 / 2.0)).abs() < EPS);
    }

    #[test]
    fn test_interior_arc_survives_resize() {
        let mut scene = scene(400.0, 300.0, 3, 42);

        let arcs = scene.arcs();
        assert_eq!(arcs[0].start_angle(), 0.0);
        assert!((arcs[0].end_angle() - TAU).abs() < EPS);
        assert_eq!(arcs[2].start_angle(), 0.0);
        assert!((arcs[2].end_angle() - TAU).abs() < EPS);
        let (start, end) = (arcs[1].start_angle(), arcs[1].end_angle());
        assert!((0.0..TAU).contains(&start));
        assert!((0.0..TAU).contains(&end));

        let mut surface = RecordingSurface::default();
        scene.resize(&mut surface, 800.0, 600.0).unwrap();

        let layout = *scene.layout();
        for (i, arc) in scene.arcs().iter().enumerate() {
            assert_eq!((arc.x, arc.y), (400.0, 300.0));
            assert!((arc.radius - layout.arc_radius(i, 3)).abs() < EPS);
        }
        assert_eq!(scene.arcs()[1].start_angle(), start);
        assert_eq!(scene.arcs()[1].end_angle(), end);
    }

    #[test]
    fn test_seeded_construction_is_deterministic() {
        let a = scene(640.0, 480.0, 5, 99);
        let b = scene(640.0, 480.0, 5, 99);
        assert_eq!(a.arcs(), b.arcs());
    }

    #[test]
    fn test_empty_arc_collection_still_draws() {
        let mut scene = scene(400.0, 300.0, 0, 1);
        let mut surface = RecordingSurface::default();
        assert!(scene.update(&mut surface, FrameTick::new(true, 16.0)).unwrap());
        assert!(surface.arcs().is_empty());
        assert_eq!(surface.texts().len(), 12);
    }

    #[test]
    fn test_inactive_frame_draws_nothing() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        let mut surface = RecordingSurface::default();

        assert!(!scene.update(&mut surface, FrameTick::new(false, 16.0)).unwrap());
        assert!(surface.ops.is_empty());
        assert_eq!(scene.arcs()[0].rotation(), 0.0);
    }

    #[test]
    fn test_frame_draw_order() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        let mut surface = RecordingSurface::default();
        assert!(scene.update(&mut surface, FrameTick::new(true, 500.0)).unwrap());

        let style = scene.params().stroke_style();
        assert_eq!(surface.ops[0], DrawOp::Clear);
        assert_eq!(surface.ops[1], DrawOp::Style(style));

        let arc_pos = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::Arc { .. }))
            .unwrap();
        assert_eq!(surface.ops[arc_pos - 1], DrawOp::Style(style));
        assert!(surface.ops[..arc_pos].iter().any(|op| matches!(op, DrawOp::Text { .. })));

        // arcs use the configured width, not the last tick width
        let DrawOp::Arc { width, start, .. } = &surface.ops[arc_pos] else {
            unreachable!()
        };
        assert_eq!(*width, 2.0);
        assert!((start - 0.25 * std::f64::consts::PI).abs() < EPS);

        let tail: Vec<f64> = surface.ops[arc_pos + 1..]
            .iter()
            .map(|op| match op {
                DrawOp::Line { width, .. } => *width,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(tail, vec![6.0, 4.0, 2.0]);
    }

    #[test]
    fn test_animation_gate() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        scene.set_animate(false);
        let mut surface = RecordingSurface::default();

        scene.update(&mut surface, FrameTick::new(true, 1000.0)).unwrap();
        assert_eq!(scene.arcs()[0].rotation(), 0.0);
        assert_eq!(surface.arcs().len(), 1);
    }

    #[test]
    fn test_resize_redraw_does_not_advance_arcs() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        let mut surface = RecordingSurface::default();
        scene.resize(&mut surface, 400.0, 300.0).unwrap();
        assert_eq!(scene.arcs()[0].rotation(), 0.0);
        assert_eq!(surface.ops[0], DrawOp::Clear);
    }

    #[test]
    fn test_setters_clamp_and_notify() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        scene.set_on_change(move || counter.set(counter.get() + 1));

        scene.set_line_width(25.0);
        assert_eq!(scene.params().line_width, 10.0);
        scene.set_line_width(0.0);
        assert_eq!(scene.params().line_width, 1.0);
        scene.set_line_width(f64::NAN);
        assert_eq!(scene.params().line_width, 1.0);

        scene.set_speed(1.1);
        assert_eq!(scene.params().speed, 1.0);
        scene.set_speed(-0.3);
        assert_eq!(scene.params().speed, -0.25);
        scene.set_speed(7.0);
        assert_eq!(scene.params().speed, 2.0);

        scene.set_color(Srgba::new(1.0, 0.0, 0.0, 1.0));
        scene.set_animate(false);

        assert_eq!(calls.get(), 8);
    }

    #[test]
    fn test_set_params_normalizes() {
        let mut scene = scene(400.0, 300.0, 1, 1);
        scene.set_params(SceneParams {
            line_width: -3.0,
            speed: -9.0,
            ..SceneParams::default()
        });
        assert_eq!(scene.params().line_width, 1.0);
        assert_eq!(scene.params().speed, -2.0);
    }
}
