pub mod config;
pub mod focus;
pub mod mode;
pub mod quote;
pub mod stats;
pub mod status;
pub mod target;
pub mod watch;

use chrono::{Duration, Utc};
use chronocat_core::{Database, Event, TimerFacade};

/// Open the database and load the facade, recording and printing a focus
/// session that finished while no process was watching.
pub(crate) fn load_facade() -> Result<TimerFacade<Database>, Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let now = Utc::now();
    let (facade, recovered) = TimerFacade::load(db, now)?;
    if let Some(event) = recovered {
        if let Event::SessionCompleted {
            ref label,
            duration_min,
            at,
        } = event
        {
            facade.store().record_session(
                label,
                duration_min,
                at - Duration::minutes(duration_min as i64),
                at,
            )?;
        }
        println!("{}", serde_json::to_string_pretty(&event)?);
    }
    Ok(facade)
}

/// Record an observed completion to the session history.
pub(crate) fn record_completion(
    facade: &TimerFacade<Database>,
    event: &Event,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Event::SessionCompleted {
        label,
        duration_min,
        at,
    } = event
    {
        facade.store().record_session(
            label,
            *duration_min,
            *at - Duration::minutes(*duration_min as i64),
            *at,
        )?;
    }
    Ok(())
}
