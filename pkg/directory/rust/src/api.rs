// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! JSON envelopes returned by the directory endpoints.

use roster_model::Member;
use serde::Serialize;

pub const HEALTH_STATUS: &str = "API is running";
pub const LIST_FAILED: &str = "Server error while fetching members";
pub const LOOKUP_FAILED: &str = "Error while fetching member";
pub const MEMBER_NOT_FOUND: &str = "Member not found";
pub const ROUTE_NOT_FOUND: &str = "Route not found";

/// `GET /members`
#[derive(Debug, Serialize)]
pub struct MemberList<'a> {
    pub success: bool,
    pub count: usize,
    pub data: &'a [Member],
}

impl<'a> MemberList<'a> {
    pub fn new(data: &'a [Member]) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// `GET /members/:id`
#[derive(Debug, Serialize)]
pub struct MemberDetail<'a> {
    pub success: bool,
    pub data: &'a Member,
}

impl<'a> MemberDetail<'a> {
    pub fn new(data: &'a Member) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Failure<'a> {
    pub success: bool,
    pub message: &'a str,
}

impl<'a> Failure<'a> {
    pub fn new(message: &'a str) -> Self {
        Self {
            success: false,
            message,
        }
    }
}

/// `GET /health`
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            status: HEALTH_STATUS,
        }
    }
}
