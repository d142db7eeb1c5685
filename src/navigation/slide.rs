use std::time::{Duration, Instant};

pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    None,
    Left,
    Right,
}

/// Visual-only marker of the last next/previous move.
///
/// Expires after `duration`; expiry is checked by `tick`, so a late tick
/// only keeps the indicator on screen a little longer.
#[derive(Debug, Clone, Copy)]
pub struct SlideTransition {
    direction: SlideDirection,
    started_at: Option<Instant>,
    duration: Duration,
}

impl SlideTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            direction: SlideDirection::None,
            started_at: None,
            duration,
        }
    }

    pub fn start(&mut self, direction: SlideDirection, now: Instant) {
        self.direction = direction;
        self.started_at = Some(now);
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(started_at) = self.started_at else {
            return;
        };

        if now.saturating_duration_since(started_at) >= self.duration {
            self.direction = SlideDirection::None;
            self.started_at = None;
        }
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

}

impl Default for SlideTransition {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_DURATION)
    }
}

#[cfg(test)]
#[path = "slide_tests.rs"]
mod slide_tests;
