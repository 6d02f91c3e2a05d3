// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use clap::Parser;

use crate::client::DEFAULT_API_URL;
use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(
    name = "roster-showcase",
    version,
    about = "Browse the organization member roster in the terminal"
)]
pub struct Args {
    /// Base URL of the directory service
    #[arg(long, env = "ROSTER_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Preferences file (default: ~/.config/roster/preferences.yaml)
    #[arg(long, env = "ROSTER_PREFS")]
    pub prefs: Option<PathBuf>,

    /// How long the splash screen stays up, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub splash_ms: u64,

    /// Initial name/bio search
    #[arg(long)]
    pub search: Option<String>,

    /// Initial role filter, or `all`
    #[arg(long)]
    pub role: Option<String>,

    /// Initial location filter, or `all`
    #[arg(long)]
    pub location: Option<String>,

    /// Open this member's details after loading
    #[arg(long, value_name = "ID")]
    pub open: Option<u32>,

    /// Use and remember this theme (light or dark)
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Render once and exit instead of prompting
    #[arg(long)]
    pub once: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub no_color: bool,
}
