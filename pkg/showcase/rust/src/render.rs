// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Text rendering of the showcase. Everything here is a pure function of the
//! state, so the same page can be printed or asserted on.
//!
//! Styling goes through `colored`, which honors `NO_COLOR`, `CLICOLOR` and
//! `colored::control::set_override`.

use colored::{Color, ColoredString, Colorize};
use roster_model::Member;

use crate::filter::{unique_locations, unique_roles};
use crate::state::Showcase;
use crate::theme::Theme;

const BIO_PREVIEW_CHARS: usize = 90;
const RULE_WIDTH: usize = 60;

pub const DEMO_DATA_NOTICE: &str = "Using demo data - API connection failed";
pub const EMPTY_VIEW: &str = "No members found matching your criteria";
pub const NO_FILTERS: &str = "No filters applied";

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    title: Color,
    accent: Color,
    text: Color,
    muted: Color,
    alert: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                title: Color::Blue,
                accent: Color::Magenta,
                text: Color::Black,
                muted: Color::BrightBlack,
                alert: Color::Red,
            },
            Theme::Dark => Self {
                title: Color::BrightCyan,
                accent: Color::BrightMagenta,
                text: Color::BrightWhite,
                muted: Color::White,
                alert: Color::BrightRed,
            },
        }
    }

    pub fn title(&self, s: &str) -> ColoredString {
        s.color(self.title).bold()
    }

    pub fn accent(&self, s: &str) -> ColoredString {
        s.color(self.accent)
    }

    pub fn text(&self, s: &str) -> ColoredString {
        s.color(self.text)
    }

    pub fn muted(&self, s: &str) -> ColoredString {
        s.color(self.muted)
    }

    pub fn alert(&self, s: &str) -> ColoredString {
        s.color(self.alert)
    }
}

pub fn render_splash(palette: &Palette) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    [
        palette.muted(&rule).to_string(),
        String::new(),
        palette.title(&centered("GDGC")).to_string(),
        palette.accent(&centered("Member Showcase")).to_string(),
        String::new(),
        palette.muted(&rule).to_string(),
    ]
    .join("\n")
}

/// The whole screen for the current state: the splash while it is up,
/// otherwise the member page.
pub fn render_page(showcase: &Showcase) -> String {
    let palette = Palette::for_theme(showcase.theme());
    if showcase.in_splash() {
        return render_splash(&palette);
    }

    let mut lines = Vec::new();

    lines.push(format!(
        "{}  {}",
        palette.title("GDGC Members"),
        palette.muted(&format!("[{} theme]", showcase.theme()))
    ));
    lines.push(palette.muted(&"-".repeat(RULE_WIDTH)).to_string());
    push_filters(&mut lines, showcase, &palette);
    lines.push(String::new());

    if showcase.is_loading() {
        lines.push(palette.accent("Loading members...").to_string());
        return lines.join("\n");
    }

    if let Some(reason) = showcase.notice() {
        lines.push(palette.alert(DEMO_DATA_NOTICE).to_string());
        lines.push(palette.muted(&format!("  {reason}")).to_string());
        lines.push(String::new());
    }

    lines.push(palette.muted(&showcase.summary()).to_string());
    lines.push(String::new());

    if showcase.filtered().is_empty() {
        lines.push(palette.muted(EMPTY_VIEW).to_string());
    } else {
        for member in showcase.filtered() {
            push_card(&mut lines, member, &palette);
            lines.push(String::new());
        }
    }

    if let Some(member) = showcase.selected() {
        lines.push(String::new());
        push_detail(&mut lines, member, &palette);
    }

    lines.join("\n")
}

pub fn render_help() -> String {
    [
        "Commands:",
        "  search <text>          filter by name or bio (no text clears)",
        "  role <name|all>        filter by role",
        "  location <name|all>    filter by location",
        "  open <id>              show a member's details",
        "  close                  close the details",
        "  theme                  toggle light/dark",
        "  reset                  clear every filter",
        "  help                   show this list",
        "  quit                   exit",
    ]
    .join("\n")
}

fn push_filters(lines: &mut Vec<String>, showcase: &Showcase, palette: &Palette) {
    let filters = showcase.filters();
    if filters.is_active() {
        let search = if filters.search.is_empty() {
            "-".to_string()
        } else {
            format!("{:?}", filters.search)
        };
        lines.push(format!(
            "Search: {}   Role: {}   Location: {}",
            palette.accent(&search),
            palette.accent(&filters.role.to_string()),
            palette.accent(&filters.location.to_string()),
        ));
    } else {
        lines.push(palette.muted(NO_FILTERS).to_string());
    }

    let members = showcase.members();
    if members.is_empty() {
        return;
    }
    lines.push(
        palette
            .muted(&format!("  roles: all, {}", unique_roles(members).join(", ")))
            .to_string(),
    );
    lines.push(
        palette
            .muted(&format!(
                "  locations: all, {}",
                unique_locations(members).join(", ")
            ))
            .to_string(),
    );
}

fn push_card(lines: &mut Vec<String>, member: &Member, palette: &Palette) {
    lines.push(format!(
        "{} {}",
        palette.muted(&format!("[{}]", member.id)),
        palette.title(&member.name)
    ));
    lines.push(format!("    {}", palette.accent(&member.role)));
    lines.push(format!(
        "    {}",
        palette.text(&truncate(&member.bio, BIO_PREVIEW_CHARS))
    ));
    lines.push(format!(
        "    {}",
        palette.muted(&member.headline_skills().join(" | "))
    ));
    lines.push(format!(
        "    {}",
        palette.muted(&format!("@ {}", member.location))
    ));
}

fn push_detail(lines: &mut Vec<String>, member: &Member, palette: &Palette) {
    let rule = "=".repeat(RULE_WIDTH);
    lines.push(palette.accent(&rule).to_string());
    lines.push(palette.title(&member.name).to_string());
    lines.push(palette.accent(&member.role).to_string());
    lines.push(String::new());
    lines.push(palette.text(&member.bio).to_string());
    lines.push(String::new());
    lines.push(format!("Skills:   {}", member.skills.join(", ")));
    lines.push(format!("Location: {}", member.location));
    lines.push(format!("Email:    {}", member.email));
    lines.push(format!("GitHub:   {}", member.github_url()));
    // An unparseable date is shown as authored.
    let joined = match member.joined_on() {
        Ok(date) => date.to_string(),
        Err(_) => member.joined_date.clone(),
    };
    lines.push(format!("Joined:   {joined}"));
    lines.push(palette.muted("(type `close` to dismiss)").to_string());
    lines.push(palette.accent(&rule).to_string());
}

fn centered(s: &str) -> String {
    let width = s.chars().count();
    let pad = RULE_WIDTH.saturating_sub(width) / 2;
    format!("{}{s}", " ".repeat(pad))
}

/// Shorten to at most `max` characters, ending in "..." when cut.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}
