//! Timer facade.
//!
//! Aggregates mode selection (countdown to a fixed target instant vs a
//! pausable focus session), display preferences, and the focus session
//! controller behind one read/write surface. Consumers receive accessors
//! and command methods; the persistence port is injected, never ambient.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ValidationError};
use crate::events::Event;
use crate::quotes::{self, Quote};
use crate::settings::{self, keys, Preferences};
use crate::storage::SettingsStore;
use crate::timer::FocusSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Target,
    Focus,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerMode::Target => write!(f, "target"),
            TimerMode::Focus => write!(f, "focus"),
        }
    }
}

impl FromStr for TimerMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "target" => Ok(TimerMode::Target),
            "focus" => Ok(TimerMode::Focus),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

/// The single entry point consumers drive the core through.
pub struct TimerFacade<S: SettingsStore> {
    store: S,
    session: FocusSession,
    mode: TimerMode,
}

impl<S: SettingsStore> TimerFacade<S> {
    /// Load persisted state, reconciling a focus session that completed
    /// while unobserved (the reconciliation event, if any, is returned so
    /// callers can surface or record it).
    pub fn load(store: S, now: DateTime<Utc>) -> Result<(Self, Option<Event>)> {
        let (session, recovery) = FocusSession::load(&store, now)?;
        let mode = settings::read_string(&store, keys::TIMER_MODE, "target")
            .parse()
            .unwrap_or(TimerMode::Target);
        Ok((
            Self {
                store,
                session,
                mode,
            },
            recovery,
        ))
    }

    /// Access to the injected persistence port (for collaborators such as
    /// the session history living on the same backend).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Mode and target ──────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TimerMode) -> Result<()> {
        self.mode = mode;
        self.store.set(keys::TIMER_MODE, &mode.to_string())?;
        debug!(%mode, "timer mode changed");
        Ok(())
    }

    /// The stored fixed target instant, if any. Malformed values read as
    /// absent.
    pub fn target_date(&self) -> Option<DateTime<Utc>> {
        settings::read_instant(&self.store, keys::TARGET_DATE)
    }

    /// Set the fixed target. A target on the same calendar day as `now`
    /// collapses to "no target set" and clears the stored value, matching
    /// the date-picker behavior this core grew out of.
    pub fn set_target_date(
        &mut self,
        target: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Event> {
        if target.date_naive() == now.date_naive() {
            self.store.remove(keys::TARGET_DATE)?;
            debug!("same-day target collapsed to none");
            return Ok(Event::TargetCleared { at: now });
        }
        settings::write_instant(&self.store, keys::TARGET_DATE, target)?;
        debug!(%target, "target date set");
        Ok(Event::TargetSet { target, at: now })
    }

    pub fn clear_target(&mut self) -> Result<Event> {
        self.store.remove(keys::TARGET_DATE)?;
        Ok(Event::TargetCleared { at: Utc::now() })
    }

    /// The instant the countdown is currently counting down to. `None` in
    /// Target mode with no target stored -- an idle state, not an error.
    pub fn effective_target(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self.mode {
            TimerMode::Target => self.target_date(),
            TimerMode::Focus => Some(self.session.effective_target(now)),
        }
    }

    // ── Focus session pass-throughs ──────────────────────────────────

    pub fn session(&self) -> &FocusSession {
        &self.session
    }

    pub fn start(&mut self, now: DateTime<Utc>) -> Result<Option<Event>> {
        self.session.start(now, &self.store)
    }

    pub fn pause(&mut self, now: DateTime<Utc>) -> Result<Option<Event>> {
        self.session.pause(now, &self.store)
    }

    pub fn reset(&mut self) -> Result<Option<Event>> {
        self.session.reset(&self.store)
    }

    pub fn complete(&mut self, now: DateTime<Utc>) -> Result<Option<Event>> {
        self.session.complete(now, &self.store)
    }

    pub fn set_duration_min(&mut self, minutes: u64) -> Result<()> {
        self.session.set_duration_min(minutes, &self.store)
    }

    pub fn set_label(&mut self, label: &str) -> Result<()> {
        self.session.set_label(label, &self.store)
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn preferences(&self) -> Preferences {
        Preferences::load(&self.store)
    }

    pub fn set_color(&mut self, color: &str) -> Result<()> {
        settings::validate_color(color)?;
        self.store.set(keys::COLOR, color)?;
        Ok(())
    }

    pub fn set_message(&mut self, message: &str) -> Result<()> {
        settings::validate_message(message)?;
        self.store.set(keys::MESSAGE, message)?;
        Ok(())
    }

    pub fn set_numbers_animated(&mut self, on: bool) -> Result<()> {
        settings::write_bool(&self.store, keys::NUMBERS_ANIMATED, on)?;
        Ok(())
    }

    pub fn set_color_animated(&mut self, on: bool) -> Result<()> {
        settings::write_bool(&self.store, keys::COLOR_ANIMATED, on)?;
        Ok(())
    }

    pub fn set_show_quote(&mut self, on: bool) -> Result<()> {
        settings::write_bool(&self.store, keys::SHOW_QUOTE, on)?;
        Ok(())
    }

    pub fn set_show_milliseconds(&mut self, on: bool) -> Result<()> {
        settings::write_bool(&self.store, keys::SHOW_MILLISECONDS, on)?;
        Ok(())
    }

    /// Pin a quote by index, or pass `-1` to derive it from the date again.
    pub fn set_quote_index(&mut self, index: i64) -> Result<()> {
        self.store.set(keys::QUOTE_INDEX, &index.to_string())?;
        Ok(())
    }

    /// The quote to display: pinned by a stored non-negative index, else
    /// derived from the day of the month.
    pub fn quote(&self, today: DateTime<Utc>) -> &'static Quote {
        let index = settings::read_i64(&self.store, keys::QUOTE_INDEX, -1);
        quotes::quote_at(index).unwrap_or_else(|| quotes::quote_of_day(today.date_naive()))
    }

    /// Full state snapshot event.
    pub fn snapshot(&self, now: DateTime<Utc>) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            focus_status: self.session.status(),
            focus_label: self.session.label().to_string(),
            remaining_ms: self.session.remaining_ms(now),
            duration_ms: self.session.duration_ms(),
            target: self.target_date(),
            effective_target: self.effective_target(now),
            at: now,
        }
    }

}
