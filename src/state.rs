#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TimerState {
    Idle,  // Not started yet, no automatic advance pending
    Armed, // A repeating timer is counting towards the next advance
}

/// What the display operation does with the indicator dots.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub enum IndicatorPolicy {
    /// Drop the active marker from every dot and leave them all inactive.
    #[default]
    ClearOnly,
    /// Drop the marker from every dot, then mark the dot of the shown slide.
    HighlightCurrent,
}
