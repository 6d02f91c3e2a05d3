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
#![deny(clippy::print_stderr)]

use std::io::{self, BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{Level, debug, warn};
use roster_showcase::cli::Args;
use roster_showcase::{
    Choice, Command, DirectoryClient, Outcome, PreferenceStore, Showcase, execute, render_help,
    render_page,
};

fn log_level() -> Level {
    // Quiet by default so log lines do not interleave with the page.
    std::env::var("ROSTER_LOG_LEVEL")
        .or_else(|_| std::env::var("LOG_LEVEL"))
        .map(|v| roster_log::parse_level(&v))
        .unwrap_or(Level::Warn)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    roster_log::init_with_level(log_level())?;
    if args.no_color {
        colored::control::set_override(false);
    }

    let store = PreferenceStore::new(
        args.prefs
            .clone()
            .unwrap_or_else(PreferenceStore::default_path),
    );
    let theme = match args.theme {
        Some(theme) => {
            if let Err(e) = store.save_theme(theme) {
                warn!("{e}");
            }
            theme
        }
        None => store.load_theme(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut showcase = Showcase::new(theme);

    if args.splash_ms > 0 {
        writeln!(out, "{}", render_page(&showcase))?;
        out.flush()?;
        tokio::time::sleep(Duration::from_millis(args.splash_ms)).await;
    }
    showcase.finish_splash();

    let client = DirectoryClient::new(&args.api_url)?;
    showcase.begin_fetch();
    let fetched = client.fetch_members().await;
    showcase.load(fetched);

    if let Some(search) = &args.search {
        showcase.set_search(search.as_str());
    }
    if let Some(role) = &args.role {
        showcase.set_role(Choice::parse(role));
    }
    if let Some(location) = &args.location {
        showcase.set_location(Choice::parse(location));
    }
    if let Some(id) = args.open
        && !showcase.select(id)
    {
        warn!("no visible member with id {id}");
    }

    writeln!(out, "{}", render_page(&showcase))?;
    if args.once {
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            debug!("stdin closed");
            break;
        };
        let line = line.context("could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let outcome = Command::parse(&line).and_then(|cmd| execute(&mut showcase, cmd));
        match outcome {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Help) => writeln!(out, "{}", render_help())?,
            Ok(Outcome::ThemeChanged(theme)) => {
                if let Err(e) = store.save_theme(theme) {
                    warn!("{e}");
                }
                writeln!(out, "{}", render_page(&showcase))?;
            }
            Ok(Outcome::Redraw) => writeln!(out, "{}", render_page(&showcase))?,
            Err(e) => writeln!(out, "{e}")?,
        }
    }
    Ok(())
}
