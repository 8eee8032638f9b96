use chrono::{NaiveDate, TimeZone, Utc};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum TargetAction {
    /// Set the target date (YYYY-MM-DD). Picking today clears the target.
    Set {
        /// Target calendar date
        date: String,
    },
    /// Clear the target date
    Clear,
    /// Print the stored target date
    Show,
}

pub fn run(action: TargetAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::load_facade()?;

    match action {
        TargetAction::Set { date } => {
            let parsed: NaiveDate = date
                .parse()
                .map_err(|_| chronocat_core::ValidationError::InvalidDate(date.clone()))?;
            let target = Utc.from_utc_datetime(&parsed.and_hms_opt(0, 0, 0).unwrap());
            let event = facade.set_target_date(target, Utc::now())?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TargetAction::Clear => {
            let event = facade.clear_target()?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TargetAction::Show => match facade.target_date() {
            Some(target) => println!("{}", target.to_rfc3339()),
            None => println!("no target set"),
        },
    }
    Ok(())
}
