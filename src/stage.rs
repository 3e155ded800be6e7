/// The display surface a slideshow drives: a row of slides and a parallel
/// row of indicators. Indices are 0-based.
pub trait Stage {
    fn slide_count(&self) -> usize;
    fn set_slide_visible(&mut self, index: usize, visible: bool);
    fn indicator_count(&self) -> usize;
    fn set_indicator_active(&mut self, index: usize, active: bool);
}
