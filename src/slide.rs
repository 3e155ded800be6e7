use raylib::prelude::*;
use crate::constants::*;

pub struct Slide {
    image: Texture2D,
    scale: f32,
    pub visible: bool,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        let scale = fit_scale(image.width(), image.height());
        Self {
            image,
            scale,
            visible: false,
        }
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        if !self.visible {
            return;
        }
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scaled_width = tex_width * self.scale;
        let scaled_height = tex_height * self.scale;

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                (RENDER_WIDTH as f32 - scaled_width) * 0.5,
                (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
    }
}

/// Scale that fits an image inside the render target with a margin.
/// Images already small enough keep their size.
pub fn fit_scale(width: i32, height: i32) -> f32 {
    if width <= 0 || height <= 0 {
        return 1.0;
    }
    let max_w = RENDER_WIDTH as f32 * SLIDE_FIT;
    let max_h = RENDER_HEIGHT as f32 * SLIDE_FIT;
    (max_w / width as f32).min(max_h / height as f32).min(1.0)
}
