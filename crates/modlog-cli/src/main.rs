//! Audit log decoder entry point
//!
//! Run with:
//! ```bash
//! cargo run -p modlog-cli -- page.json
//! cat page.json | cargo run -p modlog-cli
//! ```
//!
//! Configuration is loaded from environment variables (see `DecodeConfig`).

mod output;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use modlog_common::{try_init_tracing, DecodeConfig, TracingConfig};
use modlog_core::AuditLog;
use modlog_decode::{decode_all, ReferencePolicy};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "modlog",
    version,
    about = "Decode a moderation audit log page into typed JSON records",
    long_about = "Reads one audit log page (entries plus user and webhook side tables) \
                  from FILE or stdin and prints one JSON object per entry. Entries that \
                  fail to decode are printed with their error and do not stop the run."
)]
struct Cli {
    /// Audit log JSON file; reads stdin when omitted
    file: Option<PathBuf>,

    /// How to treat target users missing from the user table (lenient, strict)
    #[arg(short, long, value_parser = parse_policy)]
    policy: Option<ReferencePolicy>,
}

fn parse_policy(raw: &str) -> Result<ReferencePolicy, String> {
    ReferencePolicy::from_name(raw).ok_or_else(|| format!("unknown policy `{raw}`"))
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!(error = %e, "Decode run failed");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DecodeConfig::from_env().context("Failed to load configuration")?;

    if let Err(e) = try_init_tracing(&TracingConfig::for_config(&config)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let policy = cli.policy.unwrap_or(config.reference_policy);
    info!(env = ?config.env, policy = policy.as_str(), "Configuration loaded");

    let raw = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let log: AuditLog = serde_json::from_str(&raw).context("Input is not an audit log page")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for entry in decode_all(&log, policy) {
        let record = output::render(&entry)?;
        writeln!(out, "{record}")?;
    }
    out.flush()?;

    Ok(())
}
