//! Interactive front-end for the docsearch session core.
//!
//! A terminal stand-in for the browser UI: a prompt that accepts
//! `name=value` search criteria and per-row commands against the current
//! result set, rendering snapshots between commands.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use docsearch_executor::{FailurePolicy, MockLookup, SearchExecutor};
use docsearch_store::SessionStore;

mod repl;

use repl::ReplCommand;

/// Command-line options for the simulated backend.
#[derive(Debug, Parser)]
#[command(name = "docsearch", about = "Document search session REPL")]
struct Options {
    /// Simulated lookup latency in milliseconds.
    #[arg(long, default_value_t = 1000)]
    latency_ms: u64,

    /// Probability (0.0..=1.0) that a lookup fails.
    #[arg(long, default_value_t = 0.0)]
    fail_rate: f64,

    /// Abort lookups that take longer than this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log state transitions to stderr.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let options = Options::parse();

    let level = if options.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    let mut lookup = MockLookup::with_sample_results()
        .with_latency(Duration::from_millis(options.latency_ms));
    if options.fail_rate > 0.0 {
        lookup = lookup.with_failure_policy(FailurePolicy::Random {
            probability: options.fail_rate,
            message: "Network error: Failed to fetch results.".to_string(),
        });
    }

    let store = SessionStore::shared();
    let mut executor = SearchExecutor::new(Arc::clone(&store), Arc::new(lookup));
    if let Some(ms) = options.timeout_ms {
        executor = executor.with_timeout(Duration::from_millis(ms));
    }

    println!("Document search session. Type 'help' for commands.");
    let mut editor = DefaultEditor::new().context("failed to initialize line editor")?;

    loop {
        match editor.readline("docsearch> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);
                match ReplCommand::parse(line) {
                    Ok(ReplCommand::Quit) => break,
                    Ok(command) => repl::run(&runtime, &store, &executor, command),
                    Err(message) => println!("{message}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("read error"),
        }
    }

    Ok(())
}
