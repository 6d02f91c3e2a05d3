// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use crate::errors::CommandError;
use crate::filter::Choice;
use crate::state::Showcase;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Role(Choice),
    Location(Choice),
    Open(u32),
    Close,
    Theme,
    Reset,
    Help,
    Quit,
}

/// What the caller should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    ThemeChanged(Theme),
    Help,
    Quit,
}

impl Command {
    /// Parse one prompt line. The first word is the command; the rest of the
    /// line, trimmed, is its argument.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "role" => Ok(Command::Role(choice("role", rest)?)),
            "location" | "loc" => Ok(Command::Location(choice("location", rest)?)),
            "open" | "o" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "open",
                        what: "a member id",
                    });
                }
                rest.parse()
                    .map(Command::Open)
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))
            }
            "close" | "c" => Ok(Command::Close),
            "theme" | "t" => Ok(Command::Theme),
            "reset" => Ok(Command::Reset),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(line.to_string())),
        }
    }
}

fn choice(command: &'static str, arg: &str) -> Result<Choice, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            what: "a value or `all`",
        });
    }
    Ok(Choice::parse(arg))
}

pub fn execute(showcase: &mut Showcase, command: Command) -> Result<Outcome, CommandError> {
    match command {
        Command::Search(term) => showcase.set_search(term),
        Command::Role(role) => showcase.set_role(role),
        Command::Location(location) => showcase.set_location(location),
        Command::Open(id) => {
            if !showcase.select(id) {
                return Err(CommandError::NoSuchMember(id));
            }
        }
        Command::Close => showcase.close_detail(),
        Command::Theme => return Ok(Outcome::ThemeChanged(showcase.toggle_theme())),
        Command::Reset => showcase.reset_filters(),
        Command::Help => return Ok(Outcome::Help),
        Command::Quit => return Ok(Outcome::Quit),
    }
    Ok(Outcome::Redraw)
}
