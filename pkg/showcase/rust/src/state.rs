// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::warn;
use roster_model::Member;

use crate::errors::FetchError;
use crate::fallback::fallback_members;
use crate::filter::{Choice, Filters};
use crate::theme::Theme;

/// Client-side state of one showcase session.
///
/// `members` is the source of truth; `filtered` is derived from it and the
/// filters, and is recomputed whenever either changes.
#[derive(Debug, Clone)]
pub struct Showcase {
    splash: bool,
    loading: bool,
    members: Vec<Member>,
    filtered: Vec<Member>,
    filters: Filters,
    notice: Option<String>,
    selected: Option<u32>,
    theme: Theme,
}

impl Showcase {
    pub fn new(theme: Theme) -> Self {
        Self {
            splash: true,
            loading: false,
            members: Vec::new(),
            filtered: Vec::new(),
            filters: Filters::default(),
            notice: None,
            selected: None,
            theme,
        }
    }

    pub fn in_splash(&self) -> bool {
        self.splash
    }

    pub fn finish_splash(&mut self) {
        self.splash = false;
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.notice = None;
    }

    /// Take the outcome of the one fetch. A failure keeps the UI populated with
    /// demo members and surfaces the reason.
    pub fn load(&mut self, fetched: Result<Vec<Member>, FetchError>) {
        self.members = match fetched {
            Ok(members) => members,
            Err(e) => {
                warn!("{e}; showing demo data");
                self.notice = Some(e.to_string());
                fallback_members()
            }
        };
        self.loading = false;
        self.refresh();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        self.refresh();
    }

    pub fn set_role(&mut self, role: Choice) {
        self.filters.role = role;
        self.refresh();
    }

    pub fn set_location(&mut self, location: Choice) {
        self.filters.location = location;
        self.refresh();
    }

    pub fn reset_filters(&mut self) {
        self.filters = Filters::default();
        self.refresh();
    }

    /// Open the detail overlay for a visible member. Returns false when no card
    /// with that id is on screen.
    pub fn select(&mut self, id: u32) -> bool {
        if self.filtered.iter().any(|m| m.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn filtered(&self) -> &[Member] {
        &self.filtered
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selected(&self) -> Option<&Member> {
        let id = self.selected?;
        self.members.iter().find(|m| m.id == id)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {} of {} members",
            self.filtered.len(),
            self.members.len()
        )
    }

    fn refresh(&mut self) {
        self.filtered = self.filters.apply(&self.members);
    }
}
