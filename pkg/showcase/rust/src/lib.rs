// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod cli;
pub mod client;
pub mod command;
mod errors;
pub mod fallback;
pub mod filter;
pub mod render;
pub mod state;
pub mod theme;

pub use client::DirectoryClient;
pub use command::{Command, Outcome, execute};
pub use errors::{CommandError, FetchError, PreferenceError};
pub use filter::{Choice, Filters};
pub use render::{Palette, render_help, render_page, render_splash};
pub use state::Showcase;
pub use theme::{PreferenceStore, Theme};
