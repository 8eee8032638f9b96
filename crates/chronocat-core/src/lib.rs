//! # Chrono Catalyst Core Library
//!
//! Core business logic for the Chrono Catalyst countdown timer. It tracks
//! remaining time either against a fixed future instant (target mode) or
//! within a bounded, pausable focus session (focus mode), surviving
//! restarts via write-through key-value persistence.
//!
//! ## Architecture
//!
//! - **Breakdown calculator**: pure decomposition of a time delta into
//!   display units
//! - **Focus session**: wall-clock state machine (Idle/Running/Paused)
//!   whose absolute end instant is persisted, making it reload-safe
//! - **Countdown driver**: one cancellable recomputation loop per consumer,
//!   with edge-triggered completion
//! - **Timer facade**: mode selection, display preferences, and the single
//!   effective target instant
//! - **Storage**: SQLite-backed key-value settings and session history
//!
//! ## Key Components
//!
//! - [`breakdown`]: the calculation engine
//! - [`FocusSession`]: the session state machine
//! - [`CountdownDriver`]: the tick loop
//! - [`TimerFacade`]: the consumer surface
//! - [`Database`]: persistence backend

pub mod breakdown;
pub mod error;
pub mod events;
pub mod facade;
pub mod quotes;
pub mod settings;
pub mod storage;
pub mod timer;

pub use breakdown::{breakdown, TimeBreakdown};
pub use error::{CoreError, Result, StoreError, ValidationError};
pub use events::Event;
pub use facade::{TimerFacade, TimerMode};
pub use quotes::Quote;
pub use settings::Preferences;
pub use storage::{Database, MemoryStore, SettingsStore, Stats};
pub use timer::{CountdownDriver, FocusSession, FocusStatus, DEFAULT_TICK_INTERVAL};
