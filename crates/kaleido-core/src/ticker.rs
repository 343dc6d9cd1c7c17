use std::time::{Duration, Instant};

/// Interval between animation ticks (50 Hz nominal).
pub const TICK_PERIOD: Duration = Duration::from_millis(20);

/// Most ticks delivered by a single `due_ticks` call. A stall longer than
/// this re-bases the deadline instead of bursting the backlog, keeping the
/// clock bounded-rate.
const MAX_CATCH_UP: u32 = 5;

/// Bounded-rate clock driving the scene.
///
/// Two states, Stopped and Running; initial Stopped. The host polls
/// [`Ticker::due_ticks`] with the current time and the ticker answers how
/// many whole periods have elapsed since the last delivery. The first tick
/// lands one full period after `run`; resuming after a pause schedules the
/// next tick one full period ahead, so a pause never produces a burst.
#[derive(Debug, Clone)]
pub struct Ticker {
    running: bool,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            running: false,
            next_due: None,
        }
    }

    /// Start delivering ticks. Idempotent: calling while running keeps the
    /// current deadline.
    pub fn run(&mut self, now: Instant) {
        if !self.running {
            self.running = true;
            self.next_due = Some(now + TICK_PERIOD);
        }
    }

    /// Stop delivering ticks. A no-op when already stopped.
    pub fn pause(&mut self) {
        self.running = false;
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of ticks due at `now`, advancing the internal deadline.
    /// Returns 0 while stopped.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if !self.running {
            return 0;
        }
        let Some(mut next) = self.next_due else {
            return 0;
        };

        let mut ticks = 0;
        while now >= next && ticks < MAX_CATCH_UP {
            ticks += 1;
            next += TICK_PERIOD;
        }
        if now >= next {
            // Still behind after the cap: drop the backlog, stay on rate.
            next = now + TICK_PERIOD;
        }
        self.next_due = Some(next);
        ticks
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}
