//! Simulated upload progress.
//!
//! A cosmetic percentage advanced on a timer. It runs alongside the request
//! and is not tied to bytes sent.

use rand::Rng;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use vidshare_core::constants::{PROGRESS_MAX_STEP, PROGRESS_TICK_MS};

pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Next value after one tick, capped at 100.
pub fn advance(current: f64, step: f64) -> f64 {
    (current + step.max(0.0)).min(PROGRESS_COMPLETE)
}

/// Background task publishing a fake percentage on a watch channel.
///
/// Dropping the simulator aborts the task.
pub struct ProgressSimulator {
    receiver: watch::Receiver<f64>,
    handle: JoinHandle<()>,
}

impl ProgressSimulator {
    pub fn start() -> Self {
        Self::with_tick(Duration::from_millis(PROGRESS_TICK_MS))
    }

    pub fn with_tick(tick: Duration) -> Self {
        let (sender, receiver) = watch::channel(0.0);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick);
            // first tick fires immediately
            interval.tick().await;

            let mut progress = 0.0;
            while progress < PROGRESS_COMPLETE {
                interval.tick().await;
                let step = rand::rng().random_range(0.0..PROGRESS_MAX_STEP);
                progress = advance(progress, step);
                if sender.send(progress).is_err() {
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.receiver.clone()
    }

    pub fn current(&self) -> f64 {
        *self.receiver.borrow()
    }
}

impl Drop for ProgressSimulator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
