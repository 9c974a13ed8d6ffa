#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::process;

use anyhow::Error;
use tracing_subscriber::EnvFilter;
use yansi::Paint;

use crate::application::cli;
use crate::application::cli::RunMode;
use crate::application::client::Client;
use crate::application::server::Server;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Confab has failed with the following error.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    process::exit(1);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| return EnvFilter::new("confab=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = match cli::parse() {
        Ok(Some(mode)) => mode,
        Ok(None) => {
            process::exit(0);
        }
        Err(err) => {
            handle_error(err);
            return;
        }
    };

    let res = match mode {
        RunMode::Serve => Server::start().await,
        RunMode::Client => Client::start().await,
    };

    if let Err(err) = res {
        handle_error(err);
    }

    process::exit(0);
}
