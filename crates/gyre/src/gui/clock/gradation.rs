use super::layout::DialLayout;
use super::surface::Surface;
use super::{
    HOUR_COUNT, HOUR_MARK_LENGTH, HOUR_TICK_WIDTH, MINUTE_TICK_LENGTH, MINUTE_TICK_WIDTH,
    NUMERAL_FONT_SIZE, NUMERAL_OFFSET, START_OFFSET, SUBDIVISIONS,
};
use gyrectl::geometry::Point;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourMark {
    pub numeral: u32,
    /// Where the numeral is centered; the hour tick starts here.
    pub anchor: Point,
    pub tick_end: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinuteTick {
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

/// Angle of position `i` out of `n` around the dial, 0 at 12 o'clock, clockwise.
pub fn dial_angle(i: usize, n: usize) -> f64 {
    2.0 * PI * i as f64 / n as f64 + START_OFFSET
}

pub fn numeral(hour: usize) -> u32 {
    if hour == 0 { 12 } else { hour as u32 }
}

pub fn hour_marks(layout: &DialLayout) -> impl Iterator<Item = HourMark> + '_ {
    let center = layout.center();
    let numeral_radius = layout.main_radius - NUMERAL_OFFSET * layout.delta_radius;
    let tick_radius = layout.main_radius - layout.delta_radius - HOUR_MARK_LENGTH;

    (0..HOUR_COUNT).map(move |i| {
        let angle = dial_angle(i, HOUR_COUNT);
        HourMark {
            numeral: numeral(i),
            anchor: Point::polar(center, numeral_radius, angle),
            tick_end: Point::polar(center, tick_radius, angle),
        }
    })
}

/// The 48 minute ticks; positions shared with an hour mark are skipped.
pub fn minute_ticks(layout: &DialLayout) -> impl Iterator<Item = MinuteTick> + '_ {
    let total = HOUR_COUNT * SUBDIVISIONS;
    let center = layout.center();
    let outer = layout.main_radius - layout.delta_radius;
    let inner = outer + MINUTE_TICK_LENGTH;

    (0..total)
        .filter(|i| i % SUBDIVISIONS != 0)
        .map(move |i| {
            let angle = dial_angle(i, total);
            MinuteTick {
                index: i,
                start: Point::polar(center, inner, angle),
                end: Point::polar(center, outer, angle),
            }
        })
}

/// Draws numerals, hour ticks and minute ticks. Color and caps come from the caller.
pub fn render<S: Surface>(surface: &mut S, layout: &DialLayout) -> Result<(), S::Error> {
    for mark in hour_marks(layout) {
        surface.fill_text_centered(&mark.numeral.to_string(), mark.anchor, NUMERAL_FONT_SIZE)?;
        surface.set_line_width(HOUR_TICK_WIDTH);
        surface.stroke_line(mark.anchor, mark.tick_end)?;
    }

    surface.set_line_width(MINUTE_TICK_WIDTH);
    for tick in minute_ticks(layout) {
        surface.stroke_line(tick.start, tick.end)?;
    }
    Ok(())
}
