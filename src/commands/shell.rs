//! Interactive shell
//!
//! Plays the role of the open page: loads once, then applies one action per
//! input line and re-renders the affected part of the view.

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dot3_client::{client::cookie_value, config::Config, view::Section};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{apply, print_view, Action, Context, OutputFormat};

#[derive(Parser)]
#[command(name = "dot3>", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Action(Action),

    /// Show the whole view
    View,

    /// Show the value of a session cookie
    Cookie { name: String },

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Split a line the way a POSIX shell would, then parse it with the
/// subcommand grammar. Tokenizer errors are reported like clap errors.
fn parse_line(line: &str) -> Result<ShellLine, clap::Error> {
    let words = shell_words::split(line).map_err(|e| {
        clap::Error::raw(clap::error::ErrorKind::InvalidValue, format!("{}\n", e))
    })?;
    ShellLine::try_parse_from(words)
}

fn prompt() -> Result<()> {
    print!("dot3> ");
    std::io::stdout().flush()?;
    Ok(())
}

pub async fn run_shell(config: Config, format: OutputFormat) -> Result<()> {
    let mut ctx = Context::open(&config)?;
    info!("Connecting to {}", config.server.base_url);

    ctx.dashboard.load().await;
    if let Some(e) = ctx.dashboard.take_error() {
        debug!("Initial load incomplete: {}", e);
    }
    print_view(ctx.dashboard.view(), Section::All, format)?;
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            prompt()?;
            continue;
        }

        match parse_line(line) {
            Ok(ShellLine {
                command: ShellCommand::Quit,
            }) => break,
            Ok(ShellLine {
                command: ShellCommand::View,
            }) => print_view(ctx.dashboard.view(), Section::All, format)?,
            Ok(ShellLine {
                command: ShellCommand::Cookie { name },
            }) => {
                let header = ctx.cookie_header().unwrap_or_default();
                match cookie_value(&header, &name) {
                    Some(value) => println!("{}={}", name, value),
                    None => println!("{} is not set", name),
                }
            }
            Ok(ShellLine {
                command: ShellCommand::Action(action),
            }) => {
                let section = apply(&mut ctx.dashboard, &action).await;
                print_view(ctx.dashboard.view(), section, format)?;
                for alert in ctx.dashboard.view_mut().take_alerts() {
                    eprintln!("! {}", alert);
                }
                let failed = ctx.dashboard.take_error().is_some();
                ctx.persist(matches!(action, Action::Logout) && !failed)?;
            }
            Err(e) => {
                let _ = e.print();
            }
        }
        prompt()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{FilterAction, PermissionChange};

    fn action(line: &str) -> Action {
        match parse_line(line).unwrap().command {
            ShellCommand::Action(action) => action,
            _ => panic!("'{}' did not parse as an action", line),
        }
    }

    #[test]
    fn test_quit_and_exit() {
        assert!(matches!(parse_line("quit").unwrap().command, ShellCommand::Quit));
        assert!(matches!(parse_line("exit").unwrap().command, ShellCommand::Quit));
    }

    #[test]
    fn test_view_and_cookie() {
        assert!(matches!(parse_line("view").unwrap().command, ShellCommand::View));
        match parse_line("cookie session").unwrap().command {
            ShellCommand::Cookie { name } => assert_eq!(name, "session"),
            _ => panic!("expected cookie command"),
        }
    }

    #[test]
    fn test_quoted_filter_word_keeps_spaces() {
        match action(r#"filter add "foo bar""#) {
            Action::Filter {
                action: FilterAction::Add { word },
            } => assert_eq!(word.as_deref(), Some("foo bar")),
            other => panic!("unexpected {:?}", other),
        }
        match action(r#"filter delete 'spam'"#) {
            Action::Filter {
                action: FilterAction::Delete { word },
            } => assert_eq!(word.as_deref(), Some("spam")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_quoted_message_is_sent_verbatim() {
        match action(r#"filter-message "keep   these    spaces ""#) {
            Action::FilterMessage { message } => {
                assert_eq!(message, vec!["keep   these    spaces ".to_string()])
            }
            other => panic!("unexpected {:?}", other),
        }
        match action(r#"filter-message """#) {
            Action::FilterMessage { message } => assert_eq!(message, vec![String::new()]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_query_with_top_k() {
        match action("query -k 5 what is rust") {
            Action::Query { top_k, text } => {
                assert_eq!(top_k, Some(5));
                assert_eq!(text, vec!["what", "is", "rust"]);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_line("query -k 0 what is rust").is_err());
    }

    #[test]
    fn test_session_actions() {
        assert!(matches!(action("login alice"), Action::Login { username: Some(u) } if u == "alice"));
        assert!(matches!(action("logout"), Action::Logout));
        assert!(matches!(
            action("permission increase"),
            Action::Permission {
                change: PermissionChange::Increase
            }
        ));
    }

    #[test]
    fn test_unclosed_quote_is_an_error() {
        let err = parse_line(r#"filter add "foo"#).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
