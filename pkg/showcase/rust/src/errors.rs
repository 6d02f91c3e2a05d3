// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Failed to fetch members: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Failed to fetch members (HTTP {0})")]
    Status(reqwest::StatusCode),
    #[error("Failed to parse members response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("could not read preferences {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse preferences {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("could not write preferences {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode preferences: {0}")]
    Encode(#[source] serde_yaml::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },
    #[error("{0:?} is not a member id")]
    InvalidId(String),
    #[error("no visible member with id {0}")]
    NoSuchMember(u32),
}
