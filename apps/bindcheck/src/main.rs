//! # bindcheck - Keymap Binding Validator
//!
//! The main binary for the bindcheck validation engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │             apps/bindcheck (THE BINARY)      │
//! │                                              │
//! │  ┌────────────┐   ┌───────────────────────┐  │
//! │  │    CLI     │   │  manifest / keymap    │  │
//! │  │   (clap)   │   │     (toml + serde)    │  │
//! │  └─────┬──────┘   └──────────┬────────────┘  │
//! │        └──────────┬──────────┘               │
//! │                   ▼                          │
//! │          ┌─────────────────┐                 │
//! │          │ bindcheck-core  │                 │
//! │          │  (THE LOGIC)    │                 │
//! │          └─────────────────┘                 │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! bindcheck -m behaviors.toml validate -k keymap.toml
//! bindcheck -m behaviors.toml resolve key_press
//! bindcheck -m behaviors.toml audit --json-mode
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Initialize tracing. BINDCHECK_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("BINDCHECK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_env("BINDCHECK_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| "bindcheck=info,bindcheck_core=warn".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
