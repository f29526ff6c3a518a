//! userdi CLI - User management wired through a dependency injection container
//!
//! This CLI is a thin driver over the library:
//! - Running the reference add/get/list scenario
//! - Listing users seeded from a configuration file
//! - Looking up a single user by email

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "userdi")]
#[command(version, about = "User management through a DI container", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference scenario
    Demo(userdi::cli::commands::demo::DemoArgs),

    /// List configured users
    List(userdi::cli::commands::list::ListArgs),

    /// Look up a user by email
    Get(userdi::cli::commands::get::GetArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Demo(args) => userdi::cli::commands::demo::execute(args),
        Commands::List(args) => userdi::cli::commands::list::execute(args),
        Commands::Get(args) => userdi::cli::commands::get::execute(args),
    }
}
