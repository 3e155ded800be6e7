use std::time::Duration;

pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const SLIDE_PERIOD: Duration = Duration::from_millis(3000); // Time between automatic advances
pub const SLIDE_FIT: f32 = 0.9;               // Largest fraction of the render target a slide may cover

pub const DOT_RADIUS: f32 = 9.0;              // Indicator dot radius (render pixels)
pub const DOT_SPACING: f32 = 32.0;            // Distance between dot centers
pub const DOT_BOTTOM_MARGIN: f32 = 40.0;      // Distance from the bottom edge to the dot row
