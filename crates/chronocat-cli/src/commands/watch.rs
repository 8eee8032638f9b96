use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use chronocat_core::{CountdownDriver, FocusStatus, TimeBreakdown, TimerMode};

/// Run the live countdown until completion or Ctrl-C.
pub fn run(interval_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(watch(interval_ms))
}

async fn watch(interval_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut facade = super::load_facade()?;
    let now = Utc::now();
    let show_ms = facade.preferences().show_milliseconds;

    // A focus session that isn't running has nothing live to watch; show
    // the frozen remaining time instead of counting down a preview.
    if facade.mode() == TimerMode::Focus
        && facade.session().status() != FocusStatus::Running
    {
        let frozen = chronocat_core::breakdown(facade.session().effective_target(now), now);
        println!("{}", format_breakdown(&frozen, show_ms));
        println!("session is {:?}, not running", facade.session().status());
        return Ok(());
    }

    let Some(target) = facade.effective_target(now) else {
        println!("no target set");
        return Ok(());
    };

    let mut driver = CountdownDriver::new();
    let mut rx = driver.subscribe(target, Duration::from_millis(interval_ms));

    let mut stdout = std::io::stdout();
    while let Some(left) = rx.recv().await {
        if left.is_zero() {
            break;
        }
        write!(stdout, "\r\x1b[K{}", format_breakdown(&left, show_ms))?;
        stdout.flush()?;
    }
    println!("\nTime completed!");

    if facade.mode() == TimerMode::Focus {
        if let Some(event) = facade.complete(Utc::now())? {
            super::record_completion(&facade, &event)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

/// Render a breakdown, skipping leading units that are zero (seconds and
/// milliseconds always show; milliseconds only when enabled).
fn format_breakdown(b: &TimeBreakdown, show_ms: bool) -> String {
    let units = [
        (b.years, "y"),
        (b.months, "mo"),
        (b.days, "d"),
        (b.hours, "h"),
        (b.minutes, "m"),
    ];
    let mut parts: Vec<String> = Vec::new();
    for (value, unit) in units {
        if value > 0 || !parts.is_empty() {
            parts.push(format!("{value}{unit}"));
        }
    }
    parts.push(format!("{}s", b.seconds));
    if show_ms {
        parts.push(format!("{:03}ms", b.milliseconds));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_leading_zero_units() {
        let b = TimeBreakdown {
            years: 0,
            months: 0,
            days: 2,
            hours: 0,
            minutes: 5,
            seconds: 9,
            milliseconds: 420,
        };
        assert_eq!(format_breakdown(&b, true), "2d 0h 5m 9s 420ms");
        assert_eq!(format_breakdown(&b, false), "2d 0h 5m 9s");
    }

    #[test]
    fn seconds_always_render() {
        assert_eq!(format_breakdown(&TimeBreakdown::ZERO, false), "0s");
        assert_eq!(format_breakdown(&TimeBreakdown::ZERO, true), "0s 000ms");
    }
}
