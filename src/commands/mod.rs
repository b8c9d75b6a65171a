//! CLI commands
//!
//! Every UI action is an [`Action`]; one-shot subcommands and the shell both
//! route through [`apply`].

mod documents;
mod filter;
mod init;
mod session;
mod shell;

pub use init::init_config;
pub use shell::run_shell;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Subcommand, ValueEnum};
use dot3_client::{
    client::{HttpApi, SessionStore},
    config::Config,
    view::{render_section, Section, ViewState},
    Dashboard,
};
use reqwest::cookie::CookieStore;
use tracing::debug;

/// How command output is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// The full view as JSON
    Json,
}

/// A single UI action
#[derive(Debug, Clone, Subcommand)]
pub enum Action {
    /// Manage filter words
    Filter {
        #[command(subcommand)]
        action: FilterAction,
    },

    /// Run a message through the server's filter
    FilterMessage {
        /// Message text (may be empty)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },

    /// Upload a PDF for indexing
    Upload {
        /// Path to the PDF file
        path: Option<PathBuf>,
    },

    /// Query indexed documents
    Query {
        /// Number of chunks to return
        #[arg(short = 'k', long, value_parser = clap::value_parser!(u64).range(1..))]
        top_k: Option<u64>,

        /// Query text
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Log in and start a session
    Login {
        /// Username
        username: Option<String>,
    },

    /// End the current session
    Logout,

    /// Show whether a session is active, with its agents
    Status,

    /// Change the session's permission level
    Permission {
        #[command(subcommand)]
        change: PermissionChange,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum FilterAction {
    /// Show the filter word list
    List,
    /// Add a filter word
    Add { word: Option<String> },
    /// Remove a filter word
    Delete { word: Option<String> },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum PermissionChange {
    /// Raise the permission level
    Increase,
    /// Lower the permission level
    Decrease,
}

/// A dashboard bound to the configured server plus its session file
pub struct Context {
    pub dashboard: Dashboard<HttpApi>,
    session: SessionStore,
    persist: bool,
}

impl Context {
    pub fn open(config: &Config) -> Result<Self> {
        let base_url = config.base_url()?;
        let session = SessionStore::new(&config.session.file, base_url);
        let jar = if config.session.persist {
            session.load()?
        } else {
            Arc::default()
        };
        let api = HttpApi::new(&config.server, jar).context("Failed to create HTTP client")?;
        let dashboard = Dashboard::new(api).with_top_k(config.query.top_k);
        Ok(Self {
            dashboard,
            session,
            persist: config.session.persist,
        })
    }

    /// Current `Cookie` header sent to the server
    pub fn cookie_header(&self) -> Option<String> {
        let api = self.dashboard.api();
        api.cookie_jar()
            .cookies(api.base_url())
            .and_then(|value| value.to_str().ok().map(str::to_string))
    }

    /// Save the cookie jar, or drop the saved session after a logout
    pub fn persist(&self, logged_out: bool) -> Result<()> {
        if !self.persist {
            return Ok(());
        }
        if logged_out {
            return self.session.clear();
        }
        self.session.save(self.dashboard.api().cookie_jar())
    }
}

/// Apply an action to the dashboard and return the section it affected
pub async fn apply(dashboard: &mut Dashboard<HttpApi>, action: &Action) -> Section {
    debug!("Applying {:?}", action);
    match action {
        Action::Filter { action } => filter::apply_filter(dashboard, action).await,
        Action::FilterMessage { message } => filter::filter_message(dashboard, message).await,
        Action::Upload { path } => documents::upload(dashboard, path.clone()).await,
        Action::Query { top_k, text } => {
            documents::query(dashboard, text, top_k.map(|k| k as usize)).await
        }
        Action::Login { username } => session::login(dashboard, username.as_deref()).await,
        Action::Logout => session::logout(dashboard).await,
        Action::Status => session::status(dashboard).await,
        Action::Permission { change } => session::change_permission(dashboard, *change).await,
    }
}

pub fn print_view(view: &ViewState, section: Section, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let text = render_section(view, section);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}

/// Run one action against the server, as a single button press
pub async fn run_action(config: Config, action: Action, format: OutputFormat) -> Result<()> {
    let mut ctx = Context::open(&config)?;

    // The page always knew its session state before these buttons were usable
    if matches!(action, Action::Permission { .. }) {
        ctx.dashboard.check_login_status().await;
    }

    let section = apply(&mut ctx.dashboard, &action).await;
    print_view(ctx.dashboard.view(), section, format)?;
    for alert in ctx.dashboard.view_mut().take_alerts() {
        eprintln!("{}", alert);
    }

    let error = ctx.dashboard.take_error();
    let logged_out = matches!(action, Action::Logout) && error.is_none();
    ctx.persist(logged_out)?;

    match error {
        Some(e) => Err(anyhow::Error::new(e).context("Request failed")),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // Nothing listens here; requests fail with a transport error
    const UNREACHABLE: &str = "http://127.0.0.1:9/";

    fn config(session_file: &Path) -> Config {
        let mut config = Config::default();
        config.server.base_url = UNREACHABLE.to_string();
        config.session.file = session_file.to_path_buf();
        config
    }

    fn set_cookie(ctx: &Context, cookie: &str) {
        let api = ctx.dashboard.api();
        api.cookie_jar().add_cookie_str(cookie, api.base_url());
    }

    #[test]
    fn test_persist_saves_session_then_logout_clears_it() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.json");
        let ctx = Context::open(&config(&path)).unwrap();

        set_cookie(&ctx, "session=abc123");
        ctx.persist(false).unwrap();
        assert!(path.exists());

        let reopened = Context::open(&config(&path)).unwrap();
        assert_eq!(reopened.cookie_header().as_deref(), Some("session=abc123"));

        ctx.persist(true).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_persist_disabled_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("session.json");
        let mut cfg = config(&path);
        cfg.session.persist = false;
        let ctx = Context::open(&cfg).unwrap();

        set_cookie(&ctx, "session=abc123");
        ctx.persist(false).unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_query_top_k_override_is_restored() {
        let tmp = tempfile::tempdir().unwrap();
        let mut ctx = Context::open(&config(&tmp.path().join("session.json"))).unwrap();
        assert_eq!(ctx.dashboard.top_k(), 3);

        let action = Action::Query {
            top_k: Some(7),
            text: vec!["what".to_string(), "is".to_string(), "rust".to_string()],
        };
        let section = apply(&mut ctx.dashboard, &action).await;

        assert_eq!(section, Section::QueryResults);
        assert_eq!(ctx.dashboard.view().query_text, "what is rust");
        assert_eq!(ctx.dashboard.top_k(), 3);
        assert!(ctx.dashboard.take_error().is_some());
    }
}
