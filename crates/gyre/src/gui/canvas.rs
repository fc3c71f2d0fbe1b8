use cairo::{Context, Format, ImageSurface};

/// Off-screen image the scene draws into. The widget's draw callback only copies it
/// to the screen, so a frame the scene skips keeps showing the previous one.
#[derive(Debug)]
pub struct Canvas {
    surface: ImageSurface,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = ImageSurface::create(Format::ARgb32, width.max(1), height.max(1))?;
        Ok(Self { surface })
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Replaces the backing image; its content is discarded.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), cairo::Error> {
        if width.max(1) != self.width() || height.max(1) != self.height() {
            *self = Self::new(width, height)?;
        }
        Ok(())
    }

    /// A fresh drawing context for one scene call.
    pub fn context(&self) -> Result<Context, cairo::Error> {
        Context::new(&self.surface)
    }

    pub fn paint_onto(&self, cr: &Context) -> Result<(), cairo::Error> {
        cr.set_source_surface(&self.surface, 0.0, 0.0)?;
        cr.paint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::clock::{ClockScene, ClockTime, FrameTick, SceneParams};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pixel(canvas: &mut Canvas, x: usize, y: usize) -> [u8; 4] {
        canvas.surface.flush();
        let stride = canvas.surface.stride() as usize;
        let data = canvas.surface.data().unwrap();
        let offset = y * stride + x * 4;
        [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]]
    }

    #[test]
    fn test_resize_keeps_minimum_size() {
        let mut canvas = Canvas::new(400, 300).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (400, 300));

        canvas.resize(0, -5).unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1, 1));
    }

    #[test]
    fn test_scene_draws_hands_from_center() {
        let mut canvas = Canvas::new(400, 300).unwrap();
        let mut scene = ClockScene::new(
            400.0,
            300.0,
            SceneParams::default(),
            1,
            &mut StdRng::seed_from_u64(3),
            ClockTime::new(0, 0, 0),
        );

        {
            let mut cr = canvas.context().unwrap();
            assert!(scene.update(&mut cr, FrameTick::new(true, 16.0)).unwrap());
        }

        // white hands cross the center, the corner keeps the black background
        assert_eq!(pixel(&mut canvas, 200, 150), [255, 255, 255, 255]);
        assert_eq!(pixel(&mut canvas, 0, 0), [0, 0, 0, 255]);
    }
}
