//! # vzr — vzremote CLI
//!
//! Manages OpenVZ containers on a remote host by issuing `vzctl`/`vzlist`
//! commands over SSH. One subcommand per container operation.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}
