//! Vandari CLI - Database migrations and seeding.
//!
//! # Usage
//!
//! ```bash
//! # Apply catalog migrations
//! vandari migrate
//!
//! # Load the launch inventory into an empty catalog
//! vandari seed
//!
//! # Insert the launch inventory even if products exist
//! vandari seed --force
//! ```
//!
//! # Environment Variables
//!
//! - `API_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vandari")]
#[command(author, version, about = "Vandari CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run catalog database migrations
    Migrate,
    /// Seed the catalog with the launch inventory
    Seed {
        /// Insert even when the catalog already has products
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { force } => {
            commands::seed::run(force).await?;
        }
    }
    Ok(())
}
