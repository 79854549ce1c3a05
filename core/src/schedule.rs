//! Refresh and Rotation Schedule
//!
//! One `tick()` per second decides what the display does next: trigger
//! a full feed refresh, rotate the deck, or nothing. The counter runs
//! in `[0, refresh_interval]`; it resets to 0 immediately after a
//! refresh fires and resumes counting from 1 on the following tick
//! (evaluate, then increment).
//!
//! Counter 0 is always an idle tick: a naive `counter % scroll == 0`
//! check would also rotate on the tick right after a refresh reset, and
//! that double action is deliberately excluded.

/// What a single tick asks the display to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    /// Trigger a full, non-blocking feed refresh.
    Refresh,
    /// Rotate the deck (last card to the front).
    Rotate,
    /// No mutation this second.
    Idle,
}

/// The tick counter and its decision rule.
#[derive(Clone, Debug)]
pub struct Schedule {
    counter: u32,
    refresh_interval: u32,
    scroll_interval: u32,
}

impl Schedule {
    /// Create a schedule. Intervals are clamped to at least 1 second.
    #[must_use]
    pub fn new(refresh_interval: u32, scroll_interval: u32) -> Self {
        Self {
            counter: 1,
            refresh_interval: refresh_interval.max(1),
            scroll_interval: scroll_interval.max(1),
        }
    }

    /// Advance one second and report the action for this tick.
    pub fn tick(&mut self) -> TickAction {
        if self.counter == self.refresh_interval {
            self.counter = 0;
            return TickAction::Refresh;
        }

        let action = if self.counter > 0 && self.counter % self.scroll_interval == 0 {
            TickAction::Rotate
        } else {
            TickAction::Idle
        };
        self.counter += 1;
        action
    }

    /// Reset the counter as if a refresh just fired. Used when the user
    /// forces a refresh out of band.
    pub fn restart(&mut self) {
        self.counter = 0;
    }

    /// Seconds until the next scheduled refresh, for the header
    /// countdown.
    #[must_use]
    pub fn until_refresh(&self) -> u32 {
        self.refresh_interval.saturating_sub(self.counter)
    }

    /// Length of the animated ellipsis for the current tick (cycles
    /// through 0..=4 dots).
    #[must_use]
    pub fn ellipsis_len(&self) -> usize {
        ((4 + self.counter) % 5) as usize
    }

    /// Current counter value.
    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }
}
