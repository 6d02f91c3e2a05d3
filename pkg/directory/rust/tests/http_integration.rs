// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashSet;
use std::net::SocketAddr;

use roster_directory::{Directory, ServerConfig, serve};
use roster_model::Roster;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const ALLOWED: &str = "http://localhost:3000";

struct TestServer {
    addr: SocketAddr,
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<std::io::Result<()>>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let directory = Directory::new(Roster::authored().unwrap());
        let cors = ServerConfig::default().cors_layer();
        let task = tokio::spawn(serve(listener, directory, cors, async move {
            let _ = rx.await;
        }));
        Self {
            addr,
            stop: Some(tx),
            task: Some(task),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.stop.take() {
            let _ = tx.send(());
        }
        if let Some(task) = self.task.take() {
            task.await.unwrap().unwrap();
        }
    }
}

async fn get_json(url: &str) -> (reqwest::StatusCode, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_list_count_matches_data() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server.url("/members")).await;
    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(body["count"].as_u64().unwrap() as usize, data.len());

    let ids: HashSet<u64> = data.iter().map(|m| m["id"].as_u64().unwrap()).collect();
    assert_eq!(ids.len(), data.len(), "member ids must be unique");

    server.stop().await;
}

#[tokio::test]
async fn test_lookup_returns_exact_record() {
    let server = TestServer::start().await;
    let (_, list) = get_json(&server.url("/members")).await;

    for member in list["data"].as_array().unwrap() {
        let id = member["id"].as_u64().unwrap();
        let (status, body) = get_json(&server.url(&format!("/members/{id}"))).await;
        assert_eq!(status, 200);
        assert_eq!(body["success"], true);
        assert_eq!(&body["data"], member);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_lookup_absent_id() {
    let server = TestServer::start().await;

    for id in ["42", "0", "not-a-number"] {
        let (status, body) = get_json(&server.url(&format!("/members/{id}"))).await;
        assert_eq!(status, 404, "id {id}");
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Member not found");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_health() {
    let server = TestServer::start().await;

    let (status, body) = get_json(&server.url("/health")).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "API is running");

    server.stop().await;
}

#[tokio::test]
async fn test_head_requests() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let response = client.head(server.url("/members")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );
    assert!(response.bytes().await.unwrap().is_empty());

    let response = client.head(server.url("/members/99")).send().await.unwrap();
    assert_eq!(response.status(), 404);

    server.stop().await;
}

#[tokio::test]
async fn test_cors_allowed_origin() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .get(server.url("/members"))
        .header("Origin", ALLOWED)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        ALLOWED
    );

    server.stop().await;
}

#[tokio::test]
async fn test_cors_rejected_origin() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .get(server.url("/members"))
        .header("Origin", "https://evil.example.com")
        .send()
        .await
        .unwrap();
    // The request is still served; the browser enforces the missing header.
    assert_eq!(response.status(), 200);
    assert!(
        response
            .headers()
            .get("access-control-allow-origin")
            .is_none()
    );

    server.stop().await;
}

#[tokio::test]
async fn test_cors_preflight_allows_get_only() {
    let server = TestServer::start().await;

    let response = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, server.url("/members"))
        .header("Origin", ALLOWED)
        .header("Access-Control-Request-Method", "GET")
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    let methods = response
        .headers()
        .get("access-control-allow-methods")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(methods, "GET");

    server.stop().await;
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let server = TestServer::start().await;
    let addr = server.addr;
    server.stop().await;

    assert!(reqwest::get(format!("http://{addr}/health")).await.is_err());
}
