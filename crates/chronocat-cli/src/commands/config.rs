use clap::Subcommand;

use chronocat_core::settings::keys;
use chronocat_core::ValidationError;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a settings value (prints the default if unset)
    Get {
        /// Settings key (e.g. "color", "showMilliseconds")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List display preferences as JSON
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::load_facade()?;

    match action {
        ConfigAction::Get { key } => {
            let prefs = facade.preferences();
            let value = match key.as_str() {
                keys::COLOR => prefs.color,
                keys::MESSAGE => prefs.message,
                keys::NUMBERS_ANIMATED => prefs.is_numbers_animated.to_string(),
                keys::COLOR_ANIMATED => prefs.is_color_animated.to_string(),
                keys::SHOW_QUOTE => prefs.show_quote.to_string(),
                keys::SHOW_MILLISECONDS => prefs.show_milliseconds.to_string(),
                keys::QUOTE_INDEX => prefs.quote_index.to_string(),
                keys::TIMER_MODE => facade.mode().to_string(),
                keys::FOCUS_DURATION => facade.session().duration_min().to_string(),
                keys::FOCUS_LABEL => facade.session().label().to_string(),
                keys::TARGET_DATE => facade
                    .target_date()
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_default(),
                _ => return Err(ValidationError::UnknownKey(key).into()),
            };
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            match key.as_str() {
                keys::COLOR => facade.set_color(&value)?,
                keys::MESSAGE => facade.set_message(&value)?,
                keys::NUMBERS_ANIMATED => facade.set_numbers_animated(parse_bool(&value)?)?,
                keys::COLOR_ANIMATED => facade.set_color_animated(parse_bool(&value)?)?,
                keys::SHOW_QUOTE => facade.set_show_quote(parse_bool(&value)?)?,
                keys::SHOW_MILLISECONDS => {
                    facade.set_show_milliseconds(parse_bool(&value)?)?
                }
                keys::QUOTE_INDEX => facade.set_quote_index(value.parse()?)?,
                keys::TIMER_MODE => facade.set_mode(value.parse()?)?,
                keys::FOCUS_DURATION => facade.set_duration_min(value.parse()?)?,
                keys::FOCUS_LABEL => facade.set_label(&value)?,
                _ => return Err(ValidationError::UnknownKey(key).into()),
            }
            println!("ok");
        }
        ConfigAction::List => {
            let prefs = facade.preferences();
            println!("{}", serde_json::to_string_pretty(&prefs)?);
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, Box<dyn std::error::Error>> {
    Ok(value.parse::<bool>()?)
}
