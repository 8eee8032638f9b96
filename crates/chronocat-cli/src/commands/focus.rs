use chrono::Utc;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum FocusAction {
    /// Start or resume the focus session
    Start,
    /// Pause the running session
    Pause,
    /// Reset to idle with a full duration
    Reset,
    /// Print the session state as JSON
    Status,
    /// Set the session duration in minutes
    Duration {
        /// Minutes (must be greater than zero)
        minutes: u64,
    },
    /// Set the session label
    Label {
        /// Free-text session name
        text: String,
    },
}

pub fn run(action: FocusAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::load_facade()?;
    let now = Utc::now();

    match action {
        FocusAction::Start => match facade.start(now)? {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("already running"),
        },
        FocusAction::Pause => match facade.pause(now)? {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("not running"),
        },
        FocusAction::Reset => {
            if let Some(event) = facade.reset()? {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        FocusAction::Status => {
            // Observe a session that finished since the last command.
            if let Some(event) = facade.complete(now)? {
                super::record_completion(&facade, &event)?;
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            let snapshot = facade.snapshot(Utc::now());
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        FocusAction::Duration { minutes } => {
            facade.set_duration_min(minutes)?;
            println!("ok");
        }
        FocusAction::Label { text } => {
            facade.set_label(&text)?;
            println!("ok");
        }
    }
    Ok(())
}
