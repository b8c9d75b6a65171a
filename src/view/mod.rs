//! View Module
//!
//! Typed snapshot of everything the dashboard displays: input fields,
//! result areas, lists, and which elements are visible in the current
//! session mode. Handlers in [`crate::dashboard`] are the only writers.

pub mod messages;
pub mod render;

pub use render::{render_section, Section};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{AgentId, PermissionLevel, QueryChunk};

/// Whether a user session is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Elements whose visibility depends on the session mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    UsernameInput,
    LoginButton,
    LogoutButton,
    UserInfo,
    AgentsSection,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::UsernameInput,
        Element::LoginButton,
        Element::LogoutButton,
        Element::UserInfo,
        Element::AgentsSection,
    ];

    /// Shown only while logged out
    pub fn anonymous_only(&self) -> bool {
        matches!(self, Element::UsernameInput | Element::LoginButton)
    }
}

/// Filter word list area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ListView {
    Items(Vec<String>),
    /// The list could not be loaded; a single error item is shown
    Error(String),
}

impl Default for ListView {
    fn default() -> Self {
        ListView::Items(Vec::new())
    }
}

impl ListView {
    /// Rendered list items, one per line
    pub fn items(&self) -> Vec<&str> {
        match self {
            ListView::Items(items) => items.iter().map(String::as_str).collect(),
            ListView::Error(message) => vec![message.as_str()],
        }
    }
}

/// Query results area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum QueryResultsView {
    /// A status or error line
    Message(String),
    /// Retrieved chunks, rendered verbatim in order
    Chunks(Vec<QueryChunk>),
}

impl Default for QueryResultsView {
    fn default() -> Self {
        QueryResultsView::Message(String::new())
    }
}

/// Everything the dashboard shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    // Filter words
    pub filter_word: String,
    pub filter_list: ListView,
    pub filter_message: String,
    pub filtered_result: String,

    // Documents
    pub pdf_file: Option<PathBuf>,
    pub upload_status: String,
    pub query_text: String,
    pub query_results: QueryResultsView,

    // Session
    pub username_input: String,
    pub current_username: String,
    pub current_permission: Option<PermissionLevel>,
    pub agents_list: Vec<AgentId>,
    pub mode: SessionMode,

    /// Alert messages not yet shown to the user
    #[serde(skip)]
    pub alerts: Vec<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self, element: Element) -> bool {
        match self.mode {
            SessionMode::LoggedOut => element.anonymous_only(),
            SessionMode::LoggedIn => !element.anonymous_only(),
        }
    }

    pub fn show_logged_in(&mut self) {
        self.mode = SessionMode::LoggedIn;
    }

    /// Switch to logged-out mode and clear all session fields
    pub fn hide_logged_in(&mut self) {
        self.mode = SessionMode::LoggedOut;
        self.current_username.clear();
        self.current_permission = None;
        self.agents_list.clear();
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    /// Drain pending alerts
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
