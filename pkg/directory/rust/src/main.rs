// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use roster_directory::cli::Args;
use roster_directory::{Directory, ServerConfig, config, serve};
use roster_model::Roster;
use tokio::net::TcpListener;
use tokio::signal::unix::{SignalKind, signal};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = config::load_config(&args.config)?;
    let log_level = config::get_log_level(file_config.as_ref());
    roster_log::init_with_level(log_level)?;
    info!(
        "roster-directoryd starting (version {})",
        env!("CARGO_PKG_VERSION")
    );
    if file_config.is_none() {
        warn!(
            "Config file not found at {}. Using defaults and environment.",
            args.config.display()
        );
    }

    let mut server_config = ServerConfig::resolve(file_config)?;
    if let Some(port) = args.port {
        server_config.port = port;
    }
    if let Some(bind) = args.bind {
        server_config.bind_address = bind;
    }

    let roster = Roster::authored().context("built-in roster is invalid")?;
    let directory = Directory::new(roster);

    let addr = server_config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;

    let mut sigterm = signal(SignalKind::terminate()).context("Failed to setup SIGTERM handler")?;
    let mut sigint = signal(SignalKind::interrupt()).context("Failed to setup SIGINT handler")?;
    let shutdown = async move {
        tokio::select! {
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down"),
            _ = sigint.recv() => info!("Received SIGINT, shutting down"),
        }
    };

    serve(listener, directory, server_config.cors_layer(), shutdown).await?;
    info!("roster-directoryd stopped");
    Ok(())
}
