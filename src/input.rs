use crate::controller::SlideshowController;
use crate::stage::Stage;

/// A manual navigation request coming from the keyboard or mouse.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Navigation {
    Next,
    Previous,
    Jump(i64),
}

impl Navigation {
    pub fn apply<S: Stage>(self, show: &mut SlideshowController<S>) {
        match self {
            Navigation::Next => show.advance(1),
            Navigation::Previous => show.advance(-1),
            Navigation::Jump(n) => show.jump_to(n),
        }
    }
}

/// Keys pressed during one frame. `digit` is the number on the key (1-9).
#[derive(Debug, Default, Clone, Copy)]
pub struct Pressed {
    pub next: bool,
    pub previous: bool,
    pub digit: Option<usize>,
}

/// Jump requested by digit `digit`, only when such a slide exists.
pub fn digit_jump(digit: usize, len: usize) -> Option<Navigation> {
    (1..=len).contains(&digit).then_some(Navigation::Jump(digit as i64))
}

/// Navigation for one frame's key presses, in the order they are applied.
pub fn navigation(pressed: Pressed, len: usize) -> Vec<Navigation> {
    let mut actions = Vec::new();
    if pressed.next {
        actions.push(Navigation::Next);
    }
    if pressed.previous {
        actions.push(Navigation::Previous);
    }
    if let Some(jump) = pressed.digit.and_then(|d| digit_jump(d, len)) {
        actions.push(jump);
    }
    actions
}
