//! gcp-rider - pick a Compute Engine VM and ssh into it

#![cfg_attr(test, allow(clippy::expect_used))]

use clap::Parser;

use gcp_rider::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
