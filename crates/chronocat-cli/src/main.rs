use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "chronocat-cli", version, about = "Chrono Catalyst CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fixed target date management
    Target {
        #[command(subcommand)]
        action: commands::target::TargetAction,
    },
    /// Focus session control
    Focus {
        #[command(subcommand)]
        action: commands::focus::FocusAction,
    },
    /// Settings management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Switch between target and focus mode
    Mode {
        /// "target" or "focus"
        mode: String,
    },
    /// Run the live countdown in the terminal
    Watch {
        /// Tick interval in milliseconds
        #[arg(long, default_value = "69")]
        interval_ms: u64,
    },
    /// Print the current state as JSON
    Status,
    /// Completed focus session statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Print the quote of the day
    Quote,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Target { action } => commands::target::run(action),
        Commands::Focus { action } => commands::focus::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Mode { mode } => commands::mode::run(&mode),
        Commands::Watch { interval_ms } => commands::watch::run(interval_ms),
        Commands::Status => commands::status::run(),
        Commands::Stats { action } => commands::stats::run(action),
        Commands::Quote => commands::quote::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
