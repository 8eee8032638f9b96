//! Countdown driver.
//!
//! Produces a live sequence of [`TimeBreakdown`] values for a target
//! instant on a fixed tick interval. One ticker task per driver:
//! re-subscribing aborts the previous task before spawning the next, so two
//! loops can never feed the same consumer. The all-zero breakdown is sent
//! exactly once, after which the loop ends and the channel closes -- the
//! close after the zero value is the completion signal.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

use crate::breakdown::{breakdown, TimeBreakdown};

/// Default tick interval. A tuning knob, not a correctness property.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(69);

/// Owns at most one live recomputation loop.
#[derive(Debug, Default)]
pub struct CountdownDriver {
    ticker: Option<JoinHandle<()>>,
}

impl CountdownDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a countdown toward `target`, cancelling any previous loop
    /// first. Breakdowns arrive on the returned channel every `interval`
    /// (the first immediately); the stream ends right after the single
    /// all-zero value, or earlier if cancelled.
    pub fn subscribe(
        &mut self,
        target: DateTime<Utc>,
        interval: Duration,
    ) -> mpsc::UnboundedReceiver<TimeBreakdown> {
        self.cancel();

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let left = breakdown(target, Utc::now());
                let done = left.is_zero();
                if tx.send(left).is_err() {
                    // Consumer dropped the receiver.
                    break;
                }
                if done {
                    debug!(%target, "countdown completed");
                    break;
                }
            }
        });
        self.ticker = Some(handle);
        rx
    }

    /// Abort the active loop immediately. A cancelled loop cannot deliver
    /// further values: aborting takes effect at the tick await point,
    /// before the next send.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            debug!("countdown cancelled");
        }
    }

    /// True while a subscription's loop is still live.
    pub fn is_active(&self) -> bool {
        self.ticker.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for CountdownDriver {
    fn drop(&mut self) {
        self.cancel();
    }
}
