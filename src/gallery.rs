use raylib::prelude::*;
use crate::constants::*;
use crate::indicator::IndicatorRow;
use crate::slide::Slide;
use crate::stage::Stage;

/// The window-backed stage: loaded slides plus one indicator dot per slide.
pub struct Gallery {
    slides: Vec<Slide>,
    indicators: IndicatorRow,
}

impl Gallery {
    pub fn new(slides: Vec<Slide>) -> Self {
        let indicators = IndicatorRow::new(slides.len());
        Self { slides, indicators }
    }

    /// 1-based slide number of the dot under a window-space point.
    pub fn dot_at(&self, point: Vector2, screen_width: f32, screen_height: f32) -> Option<usize> {
        to_render_space(point, screen_width, screen_height).and_then(|p| self.indicators.hit(p))
    }

    pub fn render(&self, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) {
        rl.draw_texture_mode(thread, framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(thread);
            d.clear_background(Color::BLACK);
            for slide in self.slides.iter() {
                slide.draw(&mut d);
            }
            self.indicators.draw(&mut d);
        });
    }
}

/// Maps a point in window pixels to the fixed render target the window shows
/// stretched. `None` while the window has no area.
pub fn to_render_space(point: Vector2, screen_width: f32, screen_height: f32) -> Option<Vector2> {
    if screen_width <= 0.0 || screen_height <= 0.0 {
        return None;
    }
    Some(Vector2::new(
        point.x * RENDER_WIDTH as f32 / screen_width,
        point.y * RENDER_HEIGHT as f32 / screen_height,
    ))
}

impl Stage for Gallery {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = visible;
        }
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        self.indicators.set_active(index, active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_has_no_dots() {
        let gallery = Gallery::new(Vec::new());
        assert_eq!(gallery.slide_count(), 0);
        assert_eq!(gallery.indicator_count(), 0);
        assert_eq!(gallery.dot_at(Vector2::new(10.0, 10.0), 960.0, 540.0), None);
    }

    #[test]
    fn minimized_window_hits_nothing() {
        let gallery = Gallery::new(Vec::new());
        assert_eq!(gallery.dot_at(Vector2::zero(), 0.0, 0.0), None);
        assert_eq!(to_render_space(Vector2::new(5.0, 5.0), 800.0, 0.0), None);
    }

    #[test]
    fn half_size_window_click_lands_on_dot() {
        let row = IndicatorRow::new(3);
        let center = row.center(1);
        let (sw, sh) = (RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 * 0.5);
        let click = Vector2::new(center.x * 0.5, center.y * 0.5);

        let mapped = to_render_space(click, sw, sh).expect("window has area");
        assert!((mapped.x - center.x).abs() < 0.01);
        assert!((mapped.y - center.y).abs() < 0.01);
        assert_eq!(row.hit(mapped), Some(2));
    }

    #[test]
    fn stretched_window_scales_each_axis_separately() {
        // twice as wide, same height
        let mapped = to_render_space(Vector2::new(200.0, 100.0), RENDER_WIDTH as f32 * 2.0, RENDER_HEIGHT as f32)
            .expect("window has area");
        assert_eq!(mapped, Vector2::new(100.0, 100.0));
    }
}
