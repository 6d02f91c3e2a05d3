// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/roster/directory.yaml";

#[derive(Debug, Parser)]
#[command(
    name = "roster-directoryd",
    version,
    about = "Serve the organization member roster over HTTP"
)]
pub struct Args {
    /// YAML config file; a missing file means defaults
    #[arg(short, long, env = "ROSTER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Port to listen on, overriding the config file and environment
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Address to bind, overriding the config file
    #[arg(long)]
    pub bind: Option<IpAddr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        temp_env::with_var_unset("ROSTER_CONFIG", || {
            let args = Args::try_parse_from(["roster-directoryd"]).unwrap();
            assert_eq!(args.config, PathBuf::from(DEFAULT_CONFIG_PATH));
            assert_eq!(args.port, None);
            assert_eq!(args.bind, None);
        });
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "roster-directoryd",
            "--config",
            "/tmp/dir.yaml",
            "-p",
            "8080",
            "--bind",
            "127.0.0.1",
        ])
        .unwrap();
        assert_eq!(args.config, PathBuf::from("/tmp/dir.yaml"));
        assert_eq!(args.port, Some(8080));
        assert_eq!(args.bind, Some("127.0.0.1".parse().unwrap()));
    }

    #[test]
    fn test_config_from_env() {
        temp_env::with_var("ROSTER_CONFIG", Some("/srv/roster.yaml"), || {
            let args = Args::try_parse_from(["roster-directoryd"]).unwrap();
            assert_eq!(args.config, PathBuf::from("/srv/roster.yaml"));
        });
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Args::try_parse_from(["roster-directoryd", "--port", "99999"]).is_err());
    }
}
