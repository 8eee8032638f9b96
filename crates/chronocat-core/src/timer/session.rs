//! Focus session state machine.
//!
//! A wall-clock-based state machine over three states:
//!
//! ```text
//! Idle -> Running <-> Paused
//!   ^________|_________|   (reset)
//! ```
//!
//! The clock is a tagged union: while Running the absolute end instant is
//! the single source of truth; while Idle or Paused the frozen remaining
//! milliseconds are. The two can never both be meaningful because the type
//! cannot represent that.
//!
//! Every transition persists the full session snapshot to the settings store
//! before returning (write-through, no batching), so a reload mid-session
//! recovers the exact same logical state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::settings::{self, keys, DEFAULT_FOCUS_DURATION_MIN, DEFAULT_FOCUS_LABEL};
use crate::storage::SettingsStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusStatus {
    Idle,
    Running,
    Paused,
}

/// Authoritative time source per state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusClock {
    Idle { remaining_ms: u64 },
    Paused { remaining_ms: u64 },
    Running { end: DateTime<Utc> },
}

/// One focus timer instance. Created with defaults on first use; persists
/// indefinitely across reloads via the settings store.
#[derive(Debug, Clone)]
pub struct FocusSession {
    clock: FocusClock,
    /// Configured session length. Edits propagate to the remaining time
    /// only while Idle.
    duration_ms: u64,
    label: String,
}

impl FocusSession {
    /// Load the persisted session, reconciling temporal inconsistencies.
    ///
    /// If the stored status is Running but the end instant already passed
    /// while unobserved, the session transitions to the reset outcome and a
    /// `SessionCompleted` event is returned (it did complete, just without
    /// a witness). A Running session whose end is still ahead resumes
    /// silently. Malformed stored values fall back to defaults.
    pub fn load<S: SettingsStore>(
        store: &S,
        now: DateTime<Utc>,
    ) -> Result<(Self, Option<Event>)> {
        let duration_min = match settings::read_i64(store, keys::FOCUS_DURATION, 0) {
            min if min > 0 => min as u64,
            _ => DEFAULT_FOCUS_DURATION_MIN,
        };
        let duration_ms = duration_min.saturating_mul(60_000);
        let label = settings::read_string(store, keys::FOCUS_LABEL, DEFAULT_FOCUS_LABEL);
        let status = settings::read_string(store, keys::FOCUS_STATUS, "idle");

        let frozen_remaining = match settings::read_i64(store, keys::FOCUS_REMAINING, -1) {
            ms if ms >= 0 => ms as u64,
            _ => duration_ms,
        };

        let mut session = Self {
            clock: FocusClock::Idle {
                remaining_ms: frozen_remaining,
            },
            duration_ms,
            label,
        };

        let mut event = None;
        match status.as_str() {
            "running" => {
                let end = settings::read_i64(store, keys::FOCUS_END_TIME, i64::MIN);
                let end = DateTime::from_timestamp_millis(end);
                match end {
                    Some(end) if end > now => {
                        session.clock = FocusClock::Running { end };
                        debug!(%end, "resumed running focus session");
                    }
                    _ => {
                        // Completed (or lost its end instant) while
                        // unobserved: reconcile to the reset outcome rather
                        // than surfacing negative remaining time.
                        session.clock = FocusClock::Idle {
                            remaining_ms: session.duration_ms,
                        };
                        session.persist(store)?;
                        if end.is_some() {
                            event = Some(Event::SessionCompleted {
                                label: session.label.clone(),
                                duration_min: session.duration_min(),
                                at: now,
                            });
                            debug!("reconciled focus session that completed unobserved");
                        }
                    }
                }
            }
            "paused" => {
                session.clock = FocusClock::Paused {
                    remaining_ms: frozen_remaining,
                };
            }
            _ => {}
        }

        Ok((session, event))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn status(&self) -> FocusStatus {
        match self.clock {
            FocusClock::Idle { .. } => FocusStatus::Idle,
            FocusClock::Paused { .. } => FocusStatus::Paused,
            FocusClock::Running { .. } => FocusStatus::Running,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn duration_min(&self) -> u64 {
        self.duration_ms / 60_000
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Milliseconds left at `now`. Frozen while Idle/Paused, derived from
    /// the end instant while Running (never negative).
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> u64 {
        match self.clock {
            FocusClock::Idle { remaining_ms } | FocusClock::Paused { remaining_ms } => {
                remaining_ms
            }
            FocusClock::Running { end } => {
                end.signed_duration_since(now).num_milliseconds().max(0) as u64
            }
        }
    }

    /// The end instant while Running, absent otherwise.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        match self.clock {
            FocusClock::Running { end } => Some(end),
            _ => None,
        }
    }

    /// The instant a countdown against this session counts down to: the end
    /// instant while Running, otherwise a perpetually refreshed preview of
    /// `now + remaining`. Lets the countdown driver treat both modes and
    /// all session states uniformly.
    pub fn effective_target(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self.clock {
            FocusClock::Running { end } => end,
            FocusClock::Idle { remaining_ms } | FocusClock::Paused { remaining_ms } => {
                now + Duration::milliseconds(remaining_ms as i64)
            }
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Idle/Paused -> Running with `end = now + remaining`. No-op while
    /// Running.
    pub fn start<S: SettingsStore>(
        &mut self,
        now: DateTime<Utc>,
        store: &S,
    ) -> Result<Option<Event>> {
        match self.clock {
            FocusClock::Idle { remaining_ms } | FocusClock::Paused { remaining_ms } => {
                let end = now + Duration::milliseconds(remaining_ms as i64);
                self.clock = FocusClock::Running { end };
                self.persist(store)?;
                debug!(%end, "focus session started");
                Ok(Some(Event::SessionStarted { end, at: now }))
            }
            FocusClock::Running { .. } => Ok(None),
        }
    }

    /// Running -> Paused, freezing `remaining = max(0, end - now)`. No-op
    /// otherwise.
    pub fn pause<S: SettingsStore>(
        &mut self,
        now: DateTime<Utc>,
        store: &S,
    ) -> Result<Option<Event>> {
        match self.clock {
            FocusClock::Running { end } => {
                let remaining_ms =
                    end.signed_duration_since(now).num_milliseconds().max(0) as u64;
                self.clock = FocusClock::Paused { remaining_ms };
                self.persist(store)?;
                debug!(remaining_ms, "focus session paused");
                Ok(Some(Event::SessionPaused {
                    remaining_ms,
                    at: now,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Any state -> Idle with `remaining = duration`, end instant cleared.
    pub fn reset<S: SettingsStore>(&mut self, store: &S) -> Result<Option<Event>> {
        self.clock = FocusClock::Idle {
            remaining_ms: self.duration_ms,
        };
        self.persist(store)?;
        debug!("focus session reset");
        Ok(Some(Event::SessionReset { at: Utc::now() }))
    }

    /// Observe completion: Running with `end <= now` transitions to the
    /// reset outcome and reports the finished session. No-op otherwise.
    pub fn complete<S: SettingsStore>(
        &mut self,
        now: DateTime<Utc>,
        store: &S,
    ) -> Result<Option<Event>> {
        match self.clock {
            FocusClock::Running { end } if end <= now => {
                self.clock = FocusClock::Idle {
                    remaining_ms: self.duration_ms,
                };
                self.persist(store)?;
                debug!("focus session completed");
                Ok(Some(Event::SessionCompleted {
                    label: self.label.clone(),
                    duration_min: self.duration_min(),
                    at: now,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Change the configured duration. Only while Idle does the edit
    /// propagate to the remaining time; Paused and Running keep their
    /// frozen remaining / end instant untouched. Zero is rejected and the
    /// prior value retained.
    pub fn set_duration_min<S: SettingsStore>(
        &mut self,
        minutes: u64,
        store: &S,
    ) -> Result<()> {
        if minutes == 0 {
            return Err(ValidationError::InvalidDuration { minutes }.into());
        }
        self.duration_ms = minutes.saturating_mul(60_000);
        if let FocusClock::Idle { remaining_ms } = &mut self.clock {
            *remaining_ms = self.duration_ms;
        }
        self.persist(store)?;
        debug!(minutes, "focus duration changed");
        Ok(())
    }

    pub fn set_label<S: SettingsStore>(&mut self, label: &str, store: &S) -> Result<()> {
        self.label = label.to_string();
        self.persist(store)?;
        Ok(())
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Write the full session snapshot. The end-time key exists exactly
    /// while Running; the remaining key exactly otherwise.
    fn persist<S: SettingsStore>(&self, store: &S) -> Result<()> {
        let status = match self.status() {
            FocusStatus::Idle => "idle",
            FocusStatus::Running => "running",
            FocusStatus::Paused => "paused",
        };
        store.set(keys::FOCUS_STATUS, status)?;
        store.set(keys::FOCUS_DURATION, &self.duration_min().to_string())?;
        store.set(keys::FOCUS_LABEL, &self.label)?;
        match self.clock {
            FocusClock::Idle { remaining_ms } | FocusClock::Paused { remaining_ms } => {
                store.set(keys::FOCUS_REMAINING, &remaining_ms.to_string())?;
                store.remove(keys::FOCUS_END_TIME)?;
            }
            FocusClock::Running { end } => {
                store.set(keys::FOCUS_END_TIME, &end.timestamp_millis().to_string())?;
                store.remove(keys::FOCUS_REMAINING)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::TimeZone;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn fresh(store: &MemoryStore) -> FocusSession {
        FocusSession::load(store, at(0)).unwrap().0
    }

    #[test]
    fn defaults_on_first_use() {
        let store = MemoryStore::new();
        let s = fresh(&store);
        assert_eq!(s.status(), FocusStatus::Idle);
        assert_eq!(s.duration_min(), 25);
        assert_eq!(s.remaining_ms(at(0)), 25 * 60_000);
        assert_eq!(s.label(), "Focus");
        assert!(s.end().is_none());
    }

    #[test]
    fn start_computes_end_from_remaining() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        let ev = s.start(at(1_000), &store).unwrap();
        assert!(matches!(ev, Some(Event::SessionStarted { .. })));
        assert_eq!(s.status(), FocusStatus::Running);
        assert_eq!(s.end(), Some(at(1_000 + 25 * 60_000)));
        // Second start is a no-op.
        assert!(s.start(at(2_000), &store).unwrap().is_none());
        assert_eq!(s.end(), Some(at(1_000 + 25 * 60_000)));
    }

    #[test]
    fn start_pause_roundtrip_preserves_remaining() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        let before = s.remaining_ms(at(0));
        s.start(at(0), &store).unwrap();
        let ev = s.pause(at(0), &store).unwrap();
        match ev {
            Some(Event::SessionPaused { remaining_ms, .. }) => {
                assert_eq!(remaining_ms, before)
            }
            other => panic!("expected SessionPaused, got {other:?}"),
        }
        assert_eq!(s.status(), FocusStatus::Paused);
        assert_eq!(s.remaining_ms(at(99)), before);
        assert!(s.end().is_none());
    }

    #[test]
    fn pause_after_elapsed_time_freezes_the_difference() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.start(at(0), &store).unwrap();
        s.pause(at(10 * 60_000), &store).unwrap();
        assert_eq!(s.remaining_ms(at(0)), 15 * 60_000);
    }

    #[test]
    fn pause_past_end_clamps_to_zero() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.start(at(0), &store).unwrap();
        s.pause(at(26 * 60_000), &store).unwrap();
        assert_eq!(s.remaining_ms(at(0)), 0);
    }

    #[test]
    fn reset_from_every_state() {
        let store = MemoryStore::new();

        let mut s = fresh(&store);
        s.reset(&store).unwrap();
        assert_eq!(s.status(), FocusStatus::Idle);
        assert_eq!(s.remaining_ms(at(0)), s.duration_ms());

        s.start(at(0), &store).unwrap();
        s.reset(&store).unwrap();
        assert_eq!(s.status(), FocusStatus::Idle);
        assert_eq!(s.remaining_ms(at(0)), s.duration_ms());
        assert!(s.end().is_none());

        s.start(at(0), &store).unwrap();
        s.pause(at(1_000), &store).unwrap();
        s.reset(&store).unwrap();
        assert_eq!(s.status(), FocusStatus::Idle);
        assert_eq!(s.remaining_ms(at(0)), s.duration_ms());
    }

    #[test]
    fn set_duration_propagates_to_remaining_only_while_idle() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);

        // Idle: duration edits propagate live.
        s.set_duration_min(40, &store).unwrap();
        assert_eq!(s.remaining_ms(at(0)), 40 * 60_000);

        // Running: end instant untouched.
        s.start(at(0), &store).unwrap();
        let end = s.end().unwrap();
        s.set_duration_min(5, &store).unwrap();
        assert_eq!(s.end(), Some(end));

        // Paused: frozen remaining untouched.
        s.pause(at(60_000), &store).unwrap();
        let frozen = s.remaining_ms(at(0));
        s.set_duration_min(50, &store).unwrap();
        assert_eq!(s.remaining_ms(at(0)), frozen);
    }

    #[test]
    fn zero_duration_rejected_and_prior_value_retained() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.set_duration_min(40, &store).unwrap();
        assert!(s.set_duration_min(0, &store).is_err());
        assert_eq!(s.duration_min(), 40);
        assert_eq!(s.remaining_ms(at(0)), 40 * 60_000);
    }

    #[test]
    fn write_through_snapshot_survives_reload() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.set_duration_min(30, &store).unwrap();
        s.set_label("Deep Work", &store).unwrap();
        s.start(at(5_000), &store).unwrap();

        let (reloaded, event) = FocusSession::load(&store, at(6_000)).unwrap();
        assert!(event.is_none());
        assert_eq!(reloaded.status(), FocusStatus::Running);
        assert_eq!(reloaded.end(), s.end());
        assert_eq!(reloaded.label(), "Deep Work");
        assert_eq!(reloaded.duration_min(), 30);
    }

    #[test]
    fn paused_snapshot_survives_reload() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.start(at(0), &store).unwrap();
        s.pause(at(4 * 60_000), &store).unwrap();

        let (reloaded, _) = FocusSession::load(&store, at(10 * 60_000)).unwrap();
        assert_eq!(reloaded.status(), FocusStatus::Paused);
        assert_eq!(reloaded.remaining_ms(at(0)), 21 * 60_000);
    }

    #[test]
    fn recovery_reconciles_expired_running_session() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.start(at(0), &store).unwrap();
        let end = s.end().unwrap();

        let (reloaded, event) =
            FocusSession::load(&store, end + Duration::seconds(1)).unwrap();
        assert_eq!(reloaded.status(), FocusStatus::Idle);
        assert_eq!(reloaded.remaining_ms(at(0)), reloaded.duration_ms());
        assert!(reloaded.end().is_none());
        assert!(matches!(event, Some(Event::SessionCompleted { .. })));

        // The reconciliation was itself persisted.
        let (again, event) = FocusSession::load(&store, end + Duration::seconds(2)).unwrap();
        assert_eq!(again.status(), FocusStatus::Idle);
        assert!(event.is_none());
    }

    #[test]
    fn complete_observes_a_finished_running_session_once() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);
        s.start(at(0), &store).unwrap();

        assert!(s.complete(at(60_000), &store).unwrap().is_none()); // not done yet
        let ev = s.complete(at(25 * 60_000), &store).unwrap();
        assert!(matches!(ev, Some(Event::SessionCompleted { .. })));
        assert_eq!(s.status(), FocusStatus::Idle);
        assert!(s.complete(at(26 * 60_000), &store).unwrap().is_none());
    }

    #[test]
    fn effective_target_per_state() {
        let store = MemoryStore::new();
        let mut s = fresh(&store);

        // Idle: a refreshed preview of now + remaining.
        assert_eq!(s.effective_target(at(1_000)), at(1_000 + 25 * 60_000));
        assert_eq!(s.effective_target(at(2_000)), at(2_000 + 25 * 60_000));

        // Running: the fixed end instant.
        s.start(at(0), &store).unwrap();
        assert_eq!(s.effective_target(at(7_777)), at(25 * 60_000));

        // Paused: preview again, from the frozen remaining.
        s.pause(at(60_000), &store).unwrap();
        assert_eq!(s.effective_target(at(0)), at(24 * 60_000));
    }

    #[test]
    fn malformed_persisted_values_fall_back_to_defaults() {
        let store = MemoryStore::new();
        store.set(keys::FOCUS_DURATION, "soon").unwrap();
        store.set(keys::FOCUS_REMAINING, "-40").unwrap();
        store.set(keys::FOCUS_STATUS, "sprinting").unwrap();

        let s = fresh(&store);
        assert_eq!(s.status(), FocusStatus::Idle);
        assert_eq!(s.duration_min(), 25);
        assert_eq!(s.remaining_ms(at(0)), 25 * 60_000);
    }
}
