use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habits", version, about = "Track habits and daily streaks")]
struct Cli {
    /// Habit file to use instead of the configured one
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a habit
    Add {
        /// Habit name
        name: String,
        /// Free-text description
        #[arg(default_value = "")]
        description: String,
        /// Replace an existing habit of the same name, discarding its history
        #[arg(long)]
        replace: bool,
    },
    /// Remove a habit
    Remove {
        /// Habit name
        name: String,
    },
    /// Mark a habit done
    Done {
        /// Habit name
        name: String,
        /// Completion date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all habits
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the streak report
    Report {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Merge another habit file into this one
    Merge {
        /// Habit file to merge in
        other: PathBuf,
    },
    /// Interactive menu
    Menu,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

/// Install the stderr subscriber. `RUST_LOG` wins over `--verbose` when set.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let file = cli.file;
    let result = match cli.command {
        Commands::Add {
            name,
            description,
            replace,
        } => commands::habits::add(file, &name, &description, replace),
        Commands::Remove { name } => commands::habits::remove(file, &name),
        Commands::Done { name, date } => commands::habits::done(file, &name, date.as_deref()),
        Commands::List { json } => commands::habits::list(file, json),
        Commands::Report { json } => commands::habits::report(file, json),
        Commands::Merge { other } => commands::habits::merge(file, &other),
        Commands::Menu => commands::menu::run(file),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
