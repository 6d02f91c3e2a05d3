// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Client-side search and filtering over the fetched roster.

use std::collections::HashSet;
use std::fmt;

use roster_model::Member;

const ALL: &str = "all";

/// A drop-down selection: either every value or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Choice {
    #[default]
    All,
    Exactly(String),
}

impl Choice {
    /// `"all"` selects everything; any other value must match exactly.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Choice::All
        } else {
            Choice::Exactly(value.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Choice::All => true,
            Choice::Exactly(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "{ALL}"),
            Choice::Exactly(value) => write!(f, "{value}"),
        }
    }
}

/// The three independent predicates of the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub role: Choice,
    pub location: Choice,
}

impl Filters {
    pub fn matches(&self, member: &Member) -> bool {
        self.matches_search(member)
            && self.role.matches(&member.role)
            && self.location.matches(&member.location)
    }

    /// Members passing every active predicate, in source order.
    pub fn apply(&self, members: &[Member]) -> Vec<Member> {
        members
            .iter()
            .filter(|m| self.matches(m))
            .cloned()
            .collect()
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.role.is_all() || !self.location.is_all()
    }

    fn matches_search(&self, member: &Member) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        member.name.to_lowercase().contains(&term) || member.bio.to_lowercase().contains(&term)
    }
}

/// Distinct roles in first-seen order.
pub fn unique_roles(members: &[Member]) -> Vec<&str> {
    unique_by(members, |m| &m.role)
}

/// Distinct locations in first-seen order.
pub fn unique_locations(members: &[Member]) -> Vec<&str> {
    unique_by(members, |m| &m.location)
}

fn unique_by<'a>(members: &'a [Member], key: impl Fn(&'a Member) -> &'a String) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    members
        .iter()
        .map(key)
        .map(String::as_str)
        .filter(|v| seen.insert(*v))
        .collect()
}
