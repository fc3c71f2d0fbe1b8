use super::surface::{StrokeStyle, Surface};
use gyrectl::geometry::Point;
use palette::Srgba;
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    Style(StrokeStyle),
    Line {
        from: Point,
        to: Point,
        width: f64,
    },
    Arc {
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
        width: f64,
    },
    Text {
        text: String,
        at: Point,
        size: f64,
    },
}

/// Surface that records what would have been drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    line_width: f64,
}

impl RecordingSurface {
    pub fn lines_with_width(&self, width: f64) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, width: w } if *w == width => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn arcs(&self) -> Vec<&DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Arc { .. }))
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self, _background: Srgba<f64>) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.line_width = style.line_width;
        self.ops.push(DrawOp::Style(*style));
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width: self.line_width,
        });
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f64,
        start: f64,
        end: f64,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Arc {
            center,
            radius,
            start,
            end,
            width: self.line_width,
        });
        Ok(())
    }

    fn fill_text_centered(
        &mut self,
        text: &str,
        at: Point,
        font_size: f64,
    ) -> Result<(), Infallible> {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            at,
            size: font_size,
        });
        Ok(())
    }
}
