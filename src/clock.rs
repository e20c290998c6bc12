/// Fixed-rate scheduler for the game loop.
///
/// A `Clock` runs its body once per period (`1 / fps` seconds), sleeping
/// away whatever time the body leaves over, until its [`ClockHandle`] is
/// cancelled.  Tests bypass it entirely and single-step
/// [`Game::tick`](crate::game::Game::tick) directly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct Clock {
    period: Duration,
    cancelled: Arc<AtomicBool>,
}

/// Cancellation handle for a running clock.  Cloneable and thread-safe, so
/// the loop body or another thread can stop the loop.
#[derive(Clone)]
pub struct ClockHandle {
    cancelled: Arc<AtomicBool>,
}

impl ClockHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Clock {
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / fps.max(1) as f64),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn handle(&self) -> ClockHandle {
        ClockHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    /// Run `body` at the fixed rate until the handle is cancelled or the
    /// body fails.  Each iteration runs to completion before the next
    /// begins.
    pub fn run<E>(&self, mut body: impl FnMut() -> Result<(), E>) -> Result<(), E> {
        while !self.cancelled.load(Ordering::Relaxed) {
            let tick_start = Instant::now();
            body()?;

            let elapsed = tick_start.elapsed();
            if elapsed < self.period {
                std::thread::sleep(self.period - elapsed);
            }
        }
        Ok(())
    }
}
