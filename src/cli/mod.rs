//! Command-line interface for dxkit.
//!
//! Provides commands for generating identifiers, building and dispatching
//! events, and inspecting the resolved configuration.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::debug;

use crate::config;
use crate::event::{
    boxed, chain, handler_fn, middleware, with_headers, with_payload, Event, EventOption,
    Handler,
};
use crate::util::Id;

/// dxkit - event envelopes and small helpers
#[derive(Parser, Debug)]
#[command(name = "dxkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random identifiers
    Id {
        /// How many identifiers to print
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Identifier length (defaults to the configured length)
        #[arg(short, long)]
        length: Option<usize>,

        /// Alphabet to draw from (defaults to the configured alphabet)
        #[arg(short, long)]
        alphabet: Option<String>,
    },

    /// Build an event and dispatch it to stdout
    Event {
        /// Event name
        name: String,

        /// Header as KEY=VALUE (repeatable)
        #[arg(short = 'H', long = "header", value_parser = parse_header)]
        headers: Vec<(String, String)>,

        /// JSON payload
        #[arg(short, long)]
        payload: Option<String>,

        /// Decorate the built event (new identity, same headers and payload)
        #[arg(long)]
        decorate: bool,
    },

    /// Show resolved configuration
    Config,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Id {
                count,
                length,
                alphabet,
            } => generate_ids(count, length, alphabet),
            Commands::Event {
                name,
                headers,
                payload,
                decorate,
            } => emit_event(name, headers, payload, decorate),
            Commands::Config => show_config(),
        }
    }
}

/// Parse a `KEY=VALUE` header argument
fn parse_header(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", raw)),
    }
}

/// Print identifiers using flags, then config, then built-in defaults
fn generate_ids(count: usize, length: Option<usize>, alphabet: Option<String>) -> Result<()> {
    let cfg = config::config()?;
    let length = length.unwrap_or(cfg.ids.length);
    let alphabet = alphabet.unwrap_or_else(|| cfg.ids.alphabet.clone());

    debug!(count, length, "generating identifiers");
    for _ in 0..count {
        println!("{}", Id::with_length_and_alphabet(length, &alphabet));
    }

    Ok(())
}

/// Build the options for an event from CLI arguments
fn build_options(
    headers: Vec<(String, String)>,
    payload: Option<String>,
) -> Result<Vec<EventOption>> {
    let mut options = vec![with_headers(headers)];

    if let Some(raw) = payload {
        let value: Value = serde_json::from_str(&raw)
            .with_context(|| format!("Payload is not valid JSON: {}", raw))?;
        options.push(with_payload(value));
    }

    Ok(options)
}

/// Render an event as sorted `Key: value` lines followed by the payload
fn render_event(event: &Event) -> String {
    let headers: BTreeMap<&String, &String> = event.headers().iter().collect();

    let mut out = String::new();
    for (key, value) in headers {
        out.push_str(&format!("{}: {}\n", key, value));
    }
    match event.payload() {
        Some(payload) => out.push_str(&format!("\n{}\n", payload)),
        None => out.push_str("\n(no payload)\n"),
    }
    out
}

/// Build an event and send it through the logging chain to stdout
fn emit_event(
    name: String,
    headers: Vec<(String, String)>,
    payload: Option<String>,
    decorate: bool,
) -> Result<()> {
    let options = build_options(headers, payload)?;

    let mut event = Event::new(name, &options);
    if decorate {
        let original = event.id().to_string();
        event = event.decorate(&[]);
        debug!(original_id = %original, event_id = %event.id(), "decorated event");
    }

    let printer = handler_fn(|event: Event| print!("{}", render_event(&event)));
    let dispatch = chain(printer, vec![boxed(middleware::logging())]);
    dispatch.handle(event);

    Ok(())
}

/// Show the resolved configuration
fn show_config() -> Result<()> {
    let cfg = config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Identifiers:");
    println!("  Length:   {}", cfg.ids.length);
    println!("  Alphabet: {}", cfg.ids.alphabet);
    println!();
    println!("Logging:");
    println!("  Filter:   {}", cfg.log_filter);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("AggregateID=42"),
            Ok(("AggregateID".to_string(), "42".to_string()))
        );
        // Only the first '=' splits
        assert_eq!(
            parse_header("Query=a=b"),
            Ok(("Query".to_string(), "a=b".to_string()))
        );
        assert_eq!(parse_header("Empty="), Ok(("Empty".to_string(), String::new())));
        assert!(parse_header("novalue").is_err());
        assert!(parse_header("=value").is_err());
    }

    #[test]
    fn test_build_options_with_payload() {
        let options = build_options(
            vec![("Tenant".to_string(), "acme".to_string())],
            Some(r#"{"total": 10}"#.to_string()),
        )
        .unwrap();

        let event = Event::new("OrderPlaced", &options);
        assert_eq!(event.header("Tenant"), "acme");
        assert_eq!(event.payload(), Some(&json!({"total": 10})));
    }

    #[test]
    fn test_build_options_rejects_bad_json() {
        let err = build_options(Vec::new(), Some("{not json".to_string())).unwrap_err();
        assert!(err.to_string().contains("Payload is not valid JSON"));
    }

    #[test]
    fn test_render_event_sorts_headers() {
        let event = Event::new("OrderPlaced", &[with_headers([("AggregateID", "42")])]);
        let rendered = render_event(&event);
        let keys: Vec<&str> = rendered
            .lines()
            .take_while(|line| !line.is_empty())
            .filter_map(|line| line.split(": ").next())
            .collect();

        assert_eq!(keys, vec!["AggregateID", "EventID", "EventName", "IssuedAt"]);
        assert!(rendered.ends_with("(no payload)\n"));
    }

    #[test]
    fn test_cli_parses_event_command() {
        let cli = Cli::try_parse_from([
            "dxkit", "event", "OrderPlaced", "-H", "AggregateID=42", "--decorate",
        ])
        .unwrap();

        match cli.command {
            Commands::Event {
                name,
                headers,
                decorate,
                ..
            } => {
                assert_eq!(name, "OrderPlaced");
                assert_eq!(headers, vec![("AggregateID".to_string(), "42".to_string())]);
                assert!(decorate);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
