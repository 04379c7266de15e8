//! DevHub - Entry Point
//!
//! Binary entry point for the DevHub search API. Lives in the `devhub`
//! facade crate next to the library re-exports.

// Force-link devhub-providers to ensure linkme registrations are included
extern crate devhub_providers;

use clap::Parser;
use devhub_server::run;

/// Command line interface for DevHub
#[derive(Parser, Debug)]
#[command(name = "devhub")]
#[command(about = "DevHub - Community platform search API")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
