// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use serde::{Deserialize, Serialize};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::errors::MemberError;

const JOINED_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Number of skills shown on a member card.
pub const HEADLINE_SKILLS: usize = 3;

/// A single roster record.
///
/// Field names on the wire are camelCase (`joinedDate`), matching what the
/// directory has always served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub photo: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub location: String,
    pub email: String,
    pub github: String,
    pub joined_date: String,
}

impl Member {
    pub fn joined_on(&self) -> Result<Date, MemberError> {
        Date::parse(&self.joined_date, JOINED_DATE_FORMAT).map_err(|_| {
            MemberError::InvalidJoinedDate {
                id: self.id,
                value: self.joined_date.clone(),
            }
        })
    }

    /// Every field must be present and non-empty, and the joined date must parse.
    pub fn validate(&self) -> Result<(), MemberError> {
        if self.id == 0 {
            return Err(MemberError::InvalidId);
        }

        let fields = [
            ("name", &self.name),
            ("role", &self.role),
            ("photo", &self.photo),
            ("bio", &self.bio),
            ("location", &self.location),
            ("email", &self.email),
            ("github", &self.github),
            ("joinedDate", &self.joined_date),
        ];
        if let Some(&(field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(MemberError::EmptyField { id: self.id, field });
        }
        if self.skills.is_empty() || self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(MemberError::EmptyField {
                id: self.id,
                field: "skills",
            });
        }

        self.joined_on().map(|_| ())
    }

    pub fn github_url(&self) -> String {
        format!("github.com/{}", self.github)
    }

    pub fn headline_skills(&self) -> &[String] {
        let n = self.skills.len().min(HEADLINE_SKILLS);
        self.skills.get(..n).unwrap_or_default()
    }
}
