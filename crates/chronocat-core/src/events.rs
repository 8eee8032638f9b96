use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::facade::TimerMode;
use crate::timer::FocusStatus;

/// Every state transition in the system produces an Event.
/// The CLI prints them; embedders can forward them to a UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        end: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    SessionReset {
        at: DateTime<Utc>,
    },
    /// A running session's end instant was reached and observed.
    SessionCompleted {
        label: String,
        duration_min: u64,
        at: DateTime<Utc>,
    },
    TargetSet {
        target: DateTime<Utc>,
        at: DateTime<Utc>,
    },
    TargetCleared {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        mode: TimerMode,
        focus_status: FocusStatus,
        focus_label: String,
        remaining_ms: u64,
        duration_ms: u64,
        target: Option<DateTime<Utc>>,
        effective_target: Option<DateTime<Utc>>,
        at: DateTime<Utc>,
    },
}
