//! Plain-text rendering of the view

use std::fmt::Write;

use super::{QueryResultsView, SessionMode, ViewState};

/// Separator printed after each query chunk
pub const CHUNK_SEPARATOR: &str = "----------------------------------------";

/// Part of the view affected by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    FilterList,
    FilteredResult,
    Upload,
    QueryResults,
    Session,
    All,
}

pub fn render_section(view: &ViewState, section: Section) -> String {
    let mut out = String::new();
    match section {
        Section::FilterList => render_filter_list(view, &mut out),
        Section::FilteredResult => out.push_str(&view.filtered_result),
        Section::Upload => out.push_str(&view.upload_status),
        Section::QueryResults => render_query_results(&view.query_results, &mut out),
        Section::Session => render_session(view, &mut out),
        Section::All => {
            out.push_str("Filter words:\n");
            render_filter_list(view, &mut out);
            let _ = writeln!(out, "\nFiltered message: {}", view.filtered_result);
            let _ = writeln!(out, "Upload: {}", view.upload_status);
            out.push_str("Query results:\n");
            render_query_results(&view.query_results, &mut out);
            out.push('\n');
            render_session(view, &mut out);
        }
    }
    out.trim_end().to_string()
}

fn render_filter_list(view: &ViewState, out: &mut String) {
    for item in view.filter_list.items() {
        let _ = writeln!(out, "  - {}", item);
    }
}

fn render_query_results(results: &QueryResultsView, out: &mut String) {
    match results {
        QueryResultsView::Message(message) => {
            let _ = writeln!(out, "{}", message);
        }
        QueryResultsView::Chunks(chunks) => {
            for chunk in chunks {
                let _ = writeln!(out, "{}", chunk.chunk);
                let _ = writeln!(out, "{}", CHUNK_SEPARATOR);
            }
        }
    }
}

fn render_session(view: &ViewState, out: &mut String) {
    match view.mode {
        SessionMode::LoggedOut => out.push_str("Not logged in\n"),
        SessionMode::LoggedIn => {
            if view.current_username.is_empty() {
                out.push_str("Logged in\n");
            } else {
                let _ = writeln!(out, "Logged in as {}", view.current_username);
            }
            if let Some(level) = view.current_permission {
                let _ = writeln!(out, "Permission: {}", level);
            }
            let _ = writeln!(out, "Agents ({}):", view.agents_list.len());
            for agent in &view.agents_list {
                let _ = writeln!(out, "  - {}", agent);
            }
        }
    }
}
