//! Static texts shown in the view

pub const FILTER_LIST_ERROR: &str = "Error loading filter words";
pub const ADD_FILTER_WORD_FAILED: &str = "Failed to add filter word";
pub const DELETE_FILTER_WORD_FAILED: &str = "Failed to delete filter word";
pub const FILTER_MESSAGE_ERROR: &str = "Error filtering message";

pub const SELECT_FILE_PROMPT: &str = "Please select a PDF file.";
pub const UPLOADING: &str = "Uploading...";
pub const UPLOAD_SUCCESS: &str = "File indexed successfully!";
pub const UPLOAD_ERROR: &str = "Error uploading or indexing file.";

pub const QUERY_PROMPT: &str = "Please enter a query.";
pub const QUERYING: &str = "Querying...";
pub const NO_RESULTS: &str = "No results found.";
pub const QUERY_ERROR: &str = "Error querying documents.";

pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGOUT_FAILED: &str = "Logout failed";
pub const INCREASE_PERMISSION_FAILED: &str = "Failed to increase permission";
pub const DECREASE_PERMISSION_FAILED: &str = "Failed to decrease permission";
