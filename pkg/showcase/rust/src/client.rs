// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! HTTP client for the directory service.

use std::time::Duration;

use log::{debug, info};
use reqwest::StatusCode;
use roster_model::Member;
use serde::Deserialize;

use crate::errors::FetchError;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// `GET /members` is read either as the `{ data: [...] }` envelope or as a
/// bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum MembersBody {
    Envelope { data: Vec<Member> },
    Bare(Vec<Member>),
}

impl MembersBody {
    fn into_members(self) -> Vec<Member> {
        match self {
            MembersBody::Envelope { data } | MembersBody::Bare(data) => data,
        }
    }
}

#[derive(Deserialize)]
struct MemberBody {
    data: Member,
}

#[derive(Deserialize)]
struct HealthBody {
    status: String,
}

#[derive(Clone)]
pub struct DirectoryClient {
    base_url: String,
    client: reqwest::Client,
}

impl DirectoryClient {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The one fetch a showcase session performs.
    pub async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let url = format!("{}/members", self.base_url);
        info!("Fetching members from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body: MembersBody = response.json().await.map_err(FetchError::Decode)?;
        let members = body.into_members();
        debug!("Fetched {} members", members.len());
        Ok(members)
    }

    /// Look up one member. A 404 is an expected miss, not an error.
    pub async fn fetch_member(&self, id: u32) -> Result<Option<Member>, FetchError> {
        let url = format!("{}/members/{id}", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: MemberBody = response.json().await.map_err(FetchError::Decode)?;
                Ok(Some(body.data))
            }
            status => Err(FetchError::Status(status)),
        }
    }

    pub async fn health(&self) -> Result<String, FetchError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Request)?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }
        let body: HealthBody = response.json().await.map_err(FetchError::Decode)?;
        Ok(body.status)
    }
}
