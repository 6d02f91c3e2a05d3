// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::collections::HashSet;

use crate::errors::RosterError;
use crate::member::Member;

static AUTHORED_ROSTER: &str = include_str!("../data/members.yaml");

/// An ordered, validated collection of members with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Validate every member and reject duplicate ids. Authoring order is kept.
    pub fn new(members: Vec<Member>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(members.len());
        for member in &members {
            member.validate()?;
            if !seen.insert(member.id) {
                return Err(RosterError::DuplicateId(member.id));
            }
        }
        Ok(Self { members })
    }

    /// Parse a YAML sequence of members.
    pub fn from_yaml(doc: &str) -> Result<Self, RosterError> {
        let members: Vec<Member> = serde_yaml::from_str(doc)?;
        Self::new(members)
    }

    /// The organization roster compiled into the binary.
    pub fn authored() -> Result<Self, RosterError> {
        Self::from_yaml(AUTHORED_ROSTER)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: u32) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn into_members(self) -> Vec<Member> {
        self.members
    }
}
