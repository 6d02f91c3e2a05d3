// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;

use hyper::Method;
use hyper::header::HeaderValue;
use serde::Deserialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::ConfigError;

pub const DEFAULT_PORT: u16 = 3001;

/// Origins of the hosted showcase and local development.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://gdgc-project-git-main-hitensjs-projects.vercel.app",
    "http://localhost:3000",
];

/// The on-disk YAML shape. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub bind_address: Option<IpAddr>,
    pub port: Option<u16>,
    pub allowed_origins: Option<Vec<String>>,
    pub log_level: Option<String>,
}

/// Loads the YAML config file if it exists.
pub fn load_config(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // An empty file deserializes as unit, not as an empty mapping.
    if contents.trim().is_empty() {
        return Ok(Some(FileConfig::default()));
    }
    serde_yaml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

pub fn get_log_level(config: Option<&FileConfig>) -> log::Level {
    if let Ok(level) = env::var("ROSTER_LOG_LEVEL") {
        return roster_log::parse_level(&level);
    }

    if let Ok(level) = env::var("LOG_LEVEL") {
        return roster_log::parse_level(&level);
    }

    config
        .and_then(|c| c.log_level.as_deref())
        .map(roster_log::parse_level)
        .unwrap_or(log::Level::Info)
}

/// Fully resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|&o| HeaderValue::from_static(o))
                .collect(),
        }
    }
}

impl ServerConfig {
    /// Merge the file config with the environment.
    ///
    /// Port precedence: `ROSTER_PORT`, then `PORT`, then the file, then 3001.
    /// Origins: `ROSTER_ALLOWED_ORIGINS` (comma separated), then the file, then
    /// the built-in defaults.
    pub fn resolve(file: Option<FileConfig>) -> Result<Self, ConfigError> {
        let file = file.unwrap_or_default();
        let mut config = ServerConfig::default();

        if let Some(addr) = file.bind_address {
            config.bind_address = addr;
        }

        let from_env = match env_port("ROSTER_PORT")? {
            Some(port) => Some(port),
            None => env_port("PORT")?,
        };
        if let Some(port) = from_env.or(file.port) {
            config.port = port;
        }

        let origins = match env::var("ROSTER_ALLOWED_ORIGINS") {
            Ok(list) => Some(
                list.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            Err(_) => file.allowed_origins,
        };
        if let Some(origins) = origins {
            config.allowed_origins = parse_origins(&origins)?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Allow-listed origins, `GET` only.
    pub fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed_origins.iter().cloned()))
            .allow_methods([Method::GET])
    }
}

fn env_port(var: &'static str) -> Result<Option<u16>, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key: var, value }),
        Err(_) => Ok(None),
    }
}

fn parse_origins(origins: &[String]) -> Result<Vec<HeaderValue>, ConfigError> {
    origins
        .iter()
        .map(|o| {
            let trimmed = o.trim().trim_end_matches('/');
            if trimmed.is_empty() || trimmed == "*" {
                return Err(ConfigError::InvalidOrigin(o.clone()));
            }
            HeaderValue::from_str(trimmed).map_err(|_| ConfigError::InvalidOrigin(o.clone()))
        })
        .collect()
}
