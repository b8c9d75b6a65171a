//! Dashboard
//!
//! One async handler per UI action. Each handler reads its inputs from the
//! [`ViewState`], performs the request through an [`Api`], and writes either
//! the result or a static error text back into the view. Request errors never
//! escape a handler; the most recent one is kept in [`Dashboard::take_error`]
//! for callers that need an exit status.

use tracing::{debug, info, warn};

use crate::client::types::QueryRequest;
use crate::client::{Api, ClientError};
use crate::types::{FilterWord, PermissionLevel, DEFAULT_TOP_K};
use crate::util::truncate_for_log;
use crate::view::messages::*;
use crate::view::{ListView, QueryResultsView, ViewState};

/// The API client façade and the view it drives
pub struct Dashboard<A: Api> {
    api: A,
    view: ViewState,
    top_k: usize,
    last_error: Option<ClientError>,
}

impl<A: Api> Dashboard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: ViewState::new(),
            top_k: DEFAULT_TOP_K,
            last_error: None,
        }
    }

    /// Number of chunks requested by [`Dashboard::query_documents`]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn set_top_k(&mut self, top_k: usize) {
        self.top_k = top_k;
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Input fields are written through here before invoking a handler
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// The most recent request failure, cleared on read
    pub fn take_error(&mut self) -> Option<ClientError> {
        self.last_error.take()
    }

    fn record(&mut self, action: &str, err: ClientError) {
        warn!("{} failed: {}", action, err);
        self.last_error = Some(err);
    }

    fn fail_with_alert(&mut self, alert: &str, action: &str, err: ClientError) {
        self.view.alert(alert);
        self.record(action, err);
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Initial load: fetch the filter list and probe the session
    pub async fn load(&mut self) {
        self.update_filter_list().await;
        self.check_login_status().await;
    }

    // ========================================================================
    // Filter words
    // ========================================================================

    pub async fn update_filter_list(&mut self) {
        match self.api.list_filter_words().await {
            Ok(words) => {
                debug!("Loaded {} filter words", words.len());
                self.view.filter_list = ListView::Items(words);
            }
            Err(e) => {
                self.view.filter_list = ListView::Error(FILTER_LIST_ERROR.to_string());
                self.record("List filter words", e);
            }
        }
    }

    pub async fn add_filter_word(&mut self) {
        let Some(word) = FilterWord::parse(&self.view.filter_word) else {
            return;
        };
        match self.api.add_filter_word(word.as_str()).await {
            Ok(()) => {
                info!("Added filter word '{}'", word);
                self.view.filter_word.clear();
                self.update_filter_list().await;
            }
            Err(e) => self.fail_with_alert(ADD_FILTER_WORD_FAILED, "Add filter word", e),
        }
    }

    pub async fn delete_filter_word(&mut self) {
        let Some(word) = FilterWord::parse(&self.view.filter_word) else {
            return;
        };
        match self.api.delete_filter_word(word.as_str()).await {
            Ok(()) => {
                info!("Deleted filter word '{}'", word);
                self.view.filter_word.clear();
                self.update_filter_list().await;
            }
            Err(e) => self.fail_with_alert(DELETE_FILTER_WORD_FAILED, "Delete filter word", e),
        }
    }

    /// Send the message field as-is; an empty message is still sent
    pub async fn filter_message(&mut self) {
        let message = self.view.filter_message.clone();
        debug!("Filtering message: {}", truncate_for_log(&message, 80));
        match self.api.filter_message(&message).await {
            Ok(filtered) => self.view.filtered_result = filtered,
            Err(e) => {
                self.view.filtered_result = FILTER_MESSAGE_ERROR.to_string();
                self.record("Filter message", e);
            }
        }
    }

    // ========================================================================
    // Documents
    // ========================================================================

    pub async fn upload_and_index(&mut self) {
        let Some(path) = self.view.pdf_file.clone() else {
            self.view.upload_status = SELECT_FILE_PROMPT.to_string();
            return;
        };
        self.view.upload_status = UPLOADING.to_string();
        match self.api.index_document(&path).await {
            Ok(message) => {
                info!("Indexed {}", path.display());
                self.view.upload_status = message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| UPLOAD_SUCCESS.to_string());
            }
            Err(e) => {
                self.view.upload_status = UPLOAD_ERROR.to_string();
                self.record("Upload document", e);
            }
        }
    }

    pub async fn query_documents(&mut self) {
        let query_text = self.view.query_text.trim().to_string();
        if query_text.is_empty() {
            self.view.query_results = QueryResultsView::Message(QUERY_PROMPT.to_string());
            return;
        }
        self.view.query_results = QueryResultsView::Message(QUERYING.to_string());

        let request = QueryRequest::new(query_text, self.top_k);
        match self.api.query(&request).await {
            Ok(chunks) if chunks.is_empty() => {
                self.view.query_results = QueryResultsView::Message(NO_RESULTS.to_string());
            }
            Ok(chunks) => {
                debug!("Query returned {} chunks", chunks.len());
                self.view.query_results = QueryResultsView::Chunks(chunks);
            }
            Err(e) => {
                self.view.query_results = QueryResultsView::Message(QUERY_ERROR.to_string());
                self.record("Query documents", e);
            }
        }
    }

    // ========================================================================
    // Session
    // ========================================================================

    pub async fn login(&mut self) {
        let username = self.view.username_input.trim().to_string();
        if username.is_empty() {
            return;
        }
        if let Err(e) = self.api.login(&username).await {
            return self.fail_with_alert(LOGIN_FAILED, "Login", e);
        }
        self.view.username_input.clear();
        if let Err(e) = self.update_user_info(Some(0)).await {
            return self.fail_with_alert(LOGIN_FAILED, "Login", e);
        }
        info!("Logged in as {}", username);
        self.view.current_username = username;
        self.view.show_logged_in();
    }

    pub async fn logout(&mut self) {
        match self.api.logout().await {
            Ok(()) => {
                info!("Logged out");
                self.view.hide_logged_in();
            }
            Err(e) => self.fail_with_alert(LOGOUT_FAILED, "Logout", e),
        }
    }

    /// Probe the session by listing agents; any failure means logged out
    pub async fn check_login_status(&mut self) {
        match self.update_user_info(None).await {
            Ok(()) => self.view.show_logged_in(),
            Err(e) => {
                debug!("No active session: {}", e);
                self.view.hide_logged_in();
            }
        }
    }

    /// Refresh the agent list and, when given, the shown permission level
    pub async fn update_user_info(
        &mut self,
        permission: Option<PermissionLevel>,
    ) -> Result<(), ClientError> {
        let agents = self.api.list_agents().await?;
        self.view.agents_list = agents;
        if let Some(level) = permission {
            self.view.current_permission = Some(level);
        }
        Ok(())
    }

    pub async fn increase_permission(&mut self) {
        let result = match self.api.increase_permission().await {
            Ok(level) => self.update_user_info(Some(level)).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.fail_with_alert(INCREASE_PERMISSION_FAILED, "Increase permission", e);
        }
    }

    pub async fn decrease_permission(&mut self) {
        let result = match self.api.decrease_permission().await {
            Ok(level) => self.update_user_info(Some(level)).await,
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            self.fail_with_alert(DECREASE_PERMISSION_FAILED, "Decrease permission", e);
        }
    }
}
