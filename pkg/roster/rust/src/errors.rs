// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MemberError {
    #[error("member id must be positive")]
    InvalidId,
    #[error("member {id}: field `{field}` is empty")]
    EmptyField { id: u32, field: &'static str },
    #[error("member {id}: joined date {value:?} is not a YYYY-MM-DD date")]
    InvalidJoinedDate { id: u32, value: String },
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("could not parse roster document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    InvalidMember(#[from] MemberError),
    #[error("duplicate member id {0}")]
    DuplicateId(u32),
}
