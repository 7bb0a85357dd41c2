use anyhow::Result;
use clap::{Parser, Subcommand};

use duit_cli::cli::{
    handle_add_command, handle_clear_command, handle_config_command, handle_demo_command,
    handle_list_command, handle_summary_command, AddCommands,
};
use duit_cli::config::DuitPaths;
use duit_cli::storage::Store;

#[derive(Parser)]
#[command(
    name = "duit",
    version,
    about = "Command-line personal finance ledger",
    long_about = "duit records income and expense events in a single JSON \
                  ledger and computes monthly summaries of income, expenses, \
                  and balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new transaction
    #[command(subcommand)]
    Add(AddCommands),

    /// List all transactions in ledger order
    List,

    /// Show the summary for a month (defaults to the current month)
    Summary {
        /// Year (e.g. 2024)
        #[arg(short, long)]
        year: Option<i32>,
        /// Month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Delete all transactions (asks for confirmation)
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Seed three sample transactions and print this month's summary
    Demo,

    /// Show resolved configuration paths
    Config,
}

/// Initializes the global tracing subscriber with sensible defaults.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("duit_cli=warn".parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let paths = DuitPaths::new()?;
    paths.ensure_directories()?;
    let store = Store::new(paths.ledger_file());

    match cli.command {
        Commands::Add(cmd) => handle_add_command(&store, cmd)?,
        Commands::List => handle_list_command(&store)?,
        Commands::Summary { year, month } => handle_summary_command(&store, year, month)?,
        Commands::Clear { yes } => handle_clear_command(&store, yes)?,
        Commands::Demo => handle_demo_command(&store)?,
        Commands::Config => handle_config_command(&paths)?,
    }

    Ok(())
}
