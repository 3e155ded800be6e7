use raylib::prelude::*;
use crate::constants::*;

/// A centered row of dots near the bottom of the render target, one per slide.
pub struct IndicatorRow {
    active: Vec<bool>,
}

impl IndicatorRow {
    pub fn new(count: usize) -> Self {
        Self { active: vec![false; count] }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[cfg(test)]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn set_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.active.get_mut(index) {
            *dot = active;
        }
    }

    /// Distance between dot centers. Long rows are packed tighter so every
    /// dot stays inside the render target.
    pub fn spacing(&self) -> f32 {
        DOT_SPACING.min(RENDER_WIDTH as f32 / self.len().max(1) as f32)
    }

    pub fn radius(&self) -> f32 {
        DOT_RADIUS.min(self.spacing() * 0.4)
    }

    /// Center of dot `index` (0-based) in render coordinates.
    pub fn center(&self, index: usize) -> Vector2 {
        let spacing = self.spacing();
        let row_width = self.len().saturating_sub(1) as f32 * spacing;
        let first_x = RENDER_WIDTH as f32 * 0.5 - row_width * 0.5;
        Vector2::new(
            first_x + index as f32 * spacing,
            RENDER_HEIGHT as f32 - DOT_BOTTOM_MARGIN,
        )
    }

    /// 1-based number of the dot under `point`, if any.
    pub fn hit(&self, point: Vector2) -> Option<usize> {
        let radius = self.radius();
        (0..self.len())
            .find(|&i| {
                let c = self.center(i);
                let (dx, dy) = (point.x - c.x, point.y - c.y);
                dx * dx + dy * dy <= radius * radius
            })
            .map(|i| i + 1)
    }

    pub fn draw(&self, d: &mut impl RaylibDraw) {
        let radius = self.radius();
        for (i, active) in self.active.iter().enumerate() {
            let c = self.center(i);
            if *active {
                d.draw_circle_v(c, radius, Color::WHITE);
            } else {
                d.draw_circle_v(c, radius, Color::new(255, 255, 255, 70));
                d.draw_circle_lines(c.x as i32, c.y as i32, radius, Color::LIGHTGRAY);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_is_centered() {
        let row = IndicatorRow::new(3);
        let middle = row.center(1);
        assert_eq!(middle.x, RENDER_WIDTH as f32 * 0.5);
        assert_eq!(row.center(2).x - row.center(0).x, 2.0 * DOT_SPACING);
        assert_eq!(middle.y, RENDER_HEIGHT as f32 - DOT_BOTTOM_MARGIN);
    }

    #[test]
    fn hit_maps_to_one_based_dot() {
        let row = IndicatorRow::new(4);
        assert_eq!(row.hit(row.center(0)), Some(1));
        let c = row.center(3);
        assert_eq!(row.hit(Vector2::new(c.x + DOT_RADIUS - 1.0, c.y)), Some(4));
    }

    #[test]
    fn hit_misses_between_dots() {
        let row = IndicatorRow::new(2);
        let between = Vector2::new(RENDER_WIDTH as f32 * 0.5, RENDER_HEIGHT as f32 - DOT_BOTTOM_MARGIN);
        assert_eq!(row.hit(between), None);
        assert_eq!(row.hit(Vector2::new(0.0, 0.0)), None);
    }

    #[test]
    fn long_rows_stay_on_screen() {
        let row = IndicatorRow::new(200);
        assert!(row.spacing() < DOT_SPACING);
        for i in 0..row.len() {
            let c = row.center(i);
            assert!(c.x - row.radius() >= 0.0 && c.x + row.radius() <= RENDER_WIDTH as f32);
        }
        assert_eq!(row.hit(row.center(0)), Some(1));
        assert_eq!(row.hit(row.center(199)), Some(200));
        assert_eq!(row.hit(row.center(100)), Some(101));
    }

    #[test]
    fn short_rows_keep_full_size() {
        let row = IndicatorRow::new(5);
        assert_eq!(row.spacing(), DOT_SPACING);
        assert_eq!(row.radius(), DOT_RADIUS);
    }

    #[test]
    fn out_of_range_dots_are_ignored() {
        let mut row = IndicatorRow::new(2);
        row.set_active(5, true);
        assert!(!row.is_active(5));
        row.set_active(1, true);
        assert!(row.is_active(1));
        assert!(!row.is_active(0));
    }
}
