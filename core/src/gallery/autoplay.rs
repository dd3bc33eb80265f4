use std::time::Duration;

use serde::Serialize;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identifies one armed autoplay timer. Ticks carrying a handle that is no
/// longer current are ignored, so stopping autoplay cancels every pending tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AutoplayHandle {
    generation: u64,
}

/// Owns at most one outstanding autoplay timer.
#[derive(Debug)]
pub struct AutoplayScheduler {
    interval: Duration,
    current: Option<AutoplayHandle>,
    next_generation: u64,
}

impl AutoplayScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            current: None,
            next_generation: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the timer; re-arming an active scheduler keeps the existing handle.
    pub fn arm(&mut self) -> AutoplayHandle {
        if let Some(handle) = self.current {
            return handle;
        }
        let handle = AutoplayHandle {
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.current = Some(handle);
        handle
    }

    /// Returns whether a timer was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn handle(&self) -> Option<AutoplayHandle> {
        self.current
    }

    pub fn is_current(&self, handle: AutoplayHandle) -> bool {
        self.current == Some(handle)
    }
}

/// Delivers periodic ticks for `handle` until `on_tick` returns `false`.
///
/// The first tick fires one full period after the call; a zero period is
/// raised to one millisecond. Ticks never overlap:
/// each callback runs to completion before the next period is awaited.
/// Returns the number of ticks `on_tick` accepted.
pub async fn drive<F>(handle: AutoplayHandle, period: Duration, mut on_tick: F) -> usize
where
    F: FnMut(AutoplayHandle) -> bool,
{
    let period = period.max(MIN_PERIOD);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut accepted = 0;
    loop {
        ticker.tick().await;
        if !on_tick(handle) {
            break;
        }
        accepted += 1;
    }
    accepted
}
