//! # tally
//!
//! Registers a member and prints the priced order.
//!
//! ```text
//! TALLY_DISCOUNT_POLICY=fixed tally --member-id 1 --grade VIP --item itemA --price 10000
//! ```

use clap::Parser;
use tracing::{error, info};

use tally_cli::config::PricingConfig;
use tally_cli::{render, run, Cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = PricingConfig::load()?;

    // Logs go to stderr so stdout carries only the order
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(policy = ?config.policy.kind, "Starting tally");

    let order = run(&config, &cli).map_err(|e| {
        error!(error = %e, "Order failed");
        e
    })?;

    println!("{}", render(&order, cli.json)?);
    Ok(())
}
