// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! The showcase client against a live directory service, and against nothing.

use std::net::SocketAddr;
use std::process::Command;

use roster_directory::{Directory, ServerConfig, serve};
use roster_model::Roster;
use roster_showcase::render::DEMO_DATA_NOTICE;
use roster_showcase::{Choice, DirectoryClient, FetchError, Showcase, Theme, render_page};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

struct LiveDirectory {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    task: JoinHandle<std::io::Result<()>>,
}

impl LiveDirectory {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, rx) = oneshot::channel::<()>();
        let directory = Directory::new(Roster::authored().unwrap());
        let task = tokio::spawn(serve(
            listener,
            directory,
            ServerConfig::default().cors_layer(),
            async move {
                let _ = rx.await;
            },
        ));
        Self { addr, stop, task }
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    async fn shutdown(self) {
        let _ = self.stop.send(());
        self.task.await.unwrap().unwrap();
    }
}

/// An address nothing listens on.
async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_fetch_members_from_live_directory() {
    let directory = LiveDirectory::start().await;
    let client = DirectoryClient::new(&directory.base_url()).unwrap();

    let members = client.fetch_members().await.unwrap();
    assert_eq!(members, Roster::authored().unwrap().into_members());

    let mut showcase = Showcase::new(Theme::Light);
    showcase.finish_splash();
    showcase.begin_fetch();
    showcase.load(Ok(members));
    assert!(showcase.notice().is_none());

    showcase.set_search("web3");
    showcase.set_role(Choice::parse("all"));
    colored::control::set_override(false);
    let page = render_page(&showcase);
    assert!(page.contains(&showcase.summary()));
    assert!(!page.contains(DEMO_DATA_NOTICE));

    directory.shutdown().await;
}

#[tokio::test]
async fn test_fetch_member_and_health() {
    let directory = LiveDirectory::start().await;
    let client = DirectoryClient::new(&format!("{}/", directory.base_url())).unwrap();

    let rahul = client.fetch_member(2).await.unwrap().unwrap();
    assert_eq!(rahul.name, "Rahul Verma");
    assert_eq!(rahul.role, "UI/UX Designer");

    assert!(client.fetch_member(99).await.unwrap().is_none());
    assert_eq!(client.health().await.unwrap(), "API is running");

    directory.shutdown().await;
}

#[tokio::test]
async fn test_unreachable_directory_falls_back_to_demo_data() {
    let client = DirectoryClient::new(&closed_port().await).unwrap();

    let fetched = client.fetch_members().await;
    assert!(matches!(fetched, Err(FetchError::Request(_))), "{fetched:?}");

    let mut showcase = Showcase::new(Theme::Dark);
    showcase.finish_splash();
    showcase.begin_fetch();
    showcase.load(fetched);

    assert!(!showcase.is_loading());
    assert!(!showcase.filtered().is_empty());
    assert!(showcase.notice().unwrap().starts_with("Failed to fetch members"));

    colored::control::set_override(false);
    let page = render_page(&showcase);
    assert!(page.contains(DEMO_DATA_NOTICE));
    assert!(page.contains("Priya Sharma"));
    assert!(page.contains("Rahul Verma"));
}

#[tokio::test]
async fn test_wrong_endpoint_is_a_status_error() {
    let directory = LiveDirectory::start().await;
    let client = DirectoryClient::new(&format!("{}/api", directory.base_url())).unwrap();

    let fetched = client.fetch_members().await;
    assert!(
        matches!(fetched, Err(FetchError::Status(s)) if s == reqwest::StatusCode::NOT_FOUND),
        "{fetched:?}"
    );

    directory.shutdown().await;
}

fn run_showcase_once(api_url: &str, extra_args: &[&str], envs: &[(&str, &str)]) -> String {
    let prefs = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_roster-showcase"))
        .args(["--api-url", api_url, "--splash-ms", "0", "--once"])
        .arg("--prefs")
        .arg(prefs.path().join("prefs.yaml"))
        .args(extra_args)
        .envs(envs.iter().copied())
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    String::from_utf8(output.stdout).unwrap()
}

#[tokio::test]
async fn test_binary_output_is_plain_without_color() {
    let api_url = closed_port().await;

    for (args, envs) in [
        (&["--no-color", "--theme", "dark"][..], &[][..]),
        (&[][..], &[("NO_COLOR", "1")][..]),
    ] {
        let stdout = run_showcase_once(&api_url, args, envs);
        assert!(!stdout.contains('\x1b'), "escape codes in {stdout:?}");
        assert!(stdout.contains("GDGC Members"), "{stdout}");
        assert!(stdout.contains(DEMO_DATA_NOTICE), "{stdout}");
        assert!(stdout.contains("Rahul Verma"), "{stdout}");
    }
}
