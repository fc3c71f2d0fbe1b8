use cairo::Context;
use gyrectl::geometry::Point;
use palette::Srgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl From<LineCap> for cairo::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => cairo::LineCap::Butt,
            LineCap::Round => cairo::LineCap::Round,
            LineCap::Square => cairo::LineCap::Square,
        }
    }
}

/// Global stroke state set once per redraw; shapes drawn afterwards inherit it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Srgba<f64>,
    pub line_width: f64,
    pub cap: LineCap,
}

impl StrokeStyle {
    pub fn new(color: Srgba<f64>, line_width: f64) -> Self {
        Self {
            color,
            line_width,
            cap: LineCap::Round,
        }
    }
}

/// 2D target the dial is drawn into. Strokes and text use whatever style was last set.
pub trait Surface {
    type Error;

    fn clear(&mut self, background: Srgba<f64>) -> Result<(), Self::Error>;

    fn set_stroke(&mut self, style: &StrokeStyle);

    fn set_line_width(&mut self, width: f64);

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), Self::Error>;

    /// Clockwise arc from `start` to `end` (radians).
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), Self::Error>;

    fn fill_text_centered(
        &mut self,
        text: &str,
        at: Point,
        font_size: f64,
    ) -> Result<(), Self::Error>;
}

impl Surface for Context {
    type Error = cairo::Error;

    fn clear(&mut self, background: Srgba<f64>) -> Result<(), cairo::Error> {
        self.save()?;
        self.set_operator(cairo::Operator::Source);
        let (r, g, b, a) = background.into_components();
        self.set_source_rgba(r, g, b, a);
        self.paint()?;
        self.restore()
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        let (r, g, b, a) = style.color.into_components();
        self.set_source_rgba(r, g, b, a);
        self.set_line_cap(style.cap.into());
        Context::set_line_width(self, style.line_width);
    }

    fn set_line_width(&mut self, width: f64) {
        Context::set_line_width(self, width);
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), cairo::Error> {
        self.new_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke()
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), cairo::Error> {
        self.new_path();
        // negative radii draw nothing
        self.arc(center.x, center.y, radius.max(0.0), start, end);
        self.stroke()
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        at: Point,
        font_size: f64,
    ) -> Result<(), cairo::Error> {
        self.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.set_font_size(font_size);
        let ext = self.text_extents(text)?;
        self.move_to(
            at.x - (ext.width() / 2.0 + ext.x_bearing()),
            at.y - (ext.height() / 2.0 + ext.y_bearing()),
        );
        self.show_text(text)
    }
}
