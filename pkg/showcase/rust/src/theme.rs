// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, warn};

use crate::errors::PreferenceError;

pub const THEME_KEY: &str = "roster-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme {other:?}, expected light or dark")),
        }
    }
}

/// Small YAML key/value file holding client preferences across sessions.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.config/roster/preferences.yaml`, or a dotfile in the working
    /// directory when `HOME` is unset.
    pub fn default_path() -> PathBuf {
        match std::env::var_os("HOME") {
            Some(home) => Path::new(&home).join(".config/roster/preferences.yaml"),
            None => PathBuf::from(".roster-preferences.yaml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved theme; light when nothing usable is stored.
    pub fn load_theme(&self) -> Theme {
        let entries = match self.read() {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{e}; using the light theme");
                return Theme::default();
            }
        };
        match entries.get(THEME_KEY).map(|v| v.parse::<Theme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(e)) => {
                warn!("ignoring stored theme: {e}");
                Theme::default()
            }
            None => Theme::default(),
        }
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PreferenceError> {
        // Keep unrelated keys; a corrupt file is replaced.
        let mut entries = self.read().unwrap_or_default();
        entries.insert(THEME_KEY.to_string(), theme.as_str().to_string());
        self.write(&entries)?;
        debug!("saved theme {theme} to {}", self.path.display());
        Ok(())
    }

    fn read(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(PreferenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_yaml::from_str(&contents).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let write_err = |source| PreferenceError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        let contents = serde_yaml::to_string(entries).map_err(PreferenceError::Encode)?;
        std::fs::write(&self.path, contents).map_err(write_err)
    }
}
