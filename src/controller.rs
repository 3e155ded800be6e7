use std::time::Duration;
use log::debug;
use crate::constants::SLIDE_PERIOD;
use crate::error::{Result, SlideshowError};
use crate::stage::Stage;
use crate::state::{IndicatorPolicy, TimerState};
use crate::timer::RepeatingTimer;

/// Shows one slide of a [`Stage`] at a time and advances on a repeating timer.
///
/// The public index is 1-based. It is kept as a plain integer and brought back
/// into `[1, len]` by every display, wrapping at both ends.
pub struct SlideshowController<S: Stage> {
    stage: S,
    policy: IndicatorPolicy,
    period: Duration,
    current: i64,
    timer: Option<RepeatingTimer>,
    rearm_count: u64,
}

impl<S: Stage> SlideshowController<S> {
    pub fn new(stage: S, policy: IndicatorPolicy) -> Result<Self> {
        Self::with_period(stage, policy, SLIDE_PERIOD)
    }

    pub(crate) fn with_period(stage: S, policy: IndicatorPolicy, period: Duration) -> Result<Self> {
        if stage.slide_count() == 0 {
            return Err(SlideshowError::NoSlides);
        }
        Ok(Self {
            stage,
            policy,
            period,
            current: 1,
            timer: None,
            rearm_count: 0,
        })
    }

    /// Shows the first slide and starts the automatic advance.
    pub fn initialize(&mut self) {
        self.current = 1;
        self.display(1);
        self.rearm(1);
    }

    /// Steps one slide backwards when `n` is negative, forwards otherwise.
    ///
    /// The timer is replaced. Its step is `n + 2` after a single step back so
    /// the automatic advance resumes forwards, `n + 1` in every other case.
    pub fn advance(&mut self, n: i64) {
        self.cancel();
        let target = if n < 0 {
            self.current.saturating_sub(1)
        } else {
            self.current.saturating_add(1)
        };
        self.display(target);

        let next = if n == -1 { n + 2 } else { n.saturating_add(1) };
        self.rearm(next);
        debug!("advance({}) -> slide {}, next automatic step {}", n, self.current, next);
    }

    /// Shows slide `n` directly and restarts the timer from there.
    pub fn jump_to(&mut self, n: i64) {
        self.cancel();
        self.rearm(n.saturating_add(1));
        self.display(n);
        debug!("jump_to({}) -> slide {}", n, self.current);
    }

    /// Feeds elapsed time to the armed timer, advancing when it fires.
    pub fn tick(&mut self, dt: Duration) {
        let fired = self.timer.as_mut().and_then(|timer| timer.tick(dt));
        if let Some(step) = fired {
            self.advance(step);
        }
    }

    pub fn current(&self) -> usize {
        self.current as usize
    }

    pub fn len(&self) -> usize {
        self.stage.slide_count()
    }

    pub fn timer_state(&self) -> TimerState {
        if self.timer.is_some() {
            TimerState::Armed
        } else {
            TimerState::Idle
        }
    }

    #[cfg(test)]
    pub fn timer(&self) -> Option<&RepeatingTimer> {
        self.timer.as_ref()
    }

    /// How many timers have been armed since construction.
    pub fn rearm_count(&self) -> u64 {
        self.rearm_count
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    fn cancel(&mut self) {
        self.timer = None;
    }

    fn rearm(&mut self, step: i64) {
        self.timer = Some(RepeatingTimer::new(self.period, step));
        self.rearm_count += 1;
    }

    fn display(&mut self, n: i64) {
        let count = self.stage.slide_count();
        let len = count as i64;
        self.current = if n > len {
            1
        } else if n < 1 {
            len
        } else {
            n
        };

        for i in 0..count {
            self.stage.set_slide_visible(i, false);
        }
        for i in 0..self.stage.indicator_count() {
            self.stage.set_indicator_active(i, false);
        }

        let shown = (self.current - 1) as usize;
        self.stage.set_slide_visible(shown, true);
        if self.policy == IndicatorPolicy::HighlightCurrent && shown < self.stage.indicator_count() {
            self.stage.set_indicator_active(shown, true);
        }
    }
}
