//! zerd-decode: hex inscription decoder.
//!
//! ```text
//! zerd-decode <HEX> [ENCODING]
//! zerd-decode --tx <SCRIPT_SIG_HEX>
//! ```

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use zerd_decoder::{ScriptSigOutcome, decode_hex_report, decode_script_sig, to_pretty_json};
use zerd_text_fmt::TextEncoding;

// Used through the library.
use serde as _;
use serde_json as _;
use thiserror as _;
use zerd_envelope_fmt as _;

#[cfg(test)]
use hex as _;
#[cfg(test)]
use proptest as _;

/// Decode hex-encoded inscription text, or extract an inscription envelope
/// from a transaction input's scriptSig.
#[derive(Parser, Debug)]
#[command(name = "zerd-decode", version)]
struct Args {
    /// Hex string to decode, with or without a `0x` prefix
    #[arg(required_unless_present = "tx", conflicts_with = "tx")]
    hex: Option<String>,

    /// Text encoding of the decoded bytes [default: utf-8]
    #[arg(requires = "hex")]
    encoding: Option<String>,

    /// Extract an inscription from scriptSig hex instead
    #[arg(long, value_name = "SCRIPT_SIG_HEX")]
    tx: Option<String>,

    /// Log why nothing was found when no inscription is present
    #[arg(long, requires = "tx")]
    explain: bool,

    /// Log filter directive, overridden by `RUST_LOG`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    if let Some(script_sig_hex) = &args.tx {
        return run_tx(script_sig_hex, args.explain);
    }

    let hex = args.hex.as_deref().context("hex string required")?;
    let encoding = match &args.encoding {
        Some(name) => name.parse::<TextEncoding>()?,
        None => TextEncoding::default(),
    };
    let report = decode_hex_report(hex, encoding).context("failed to decode hex")?;
    println!("{}", to_pretty_json(&report)?);
    Ok(ExitCode::SUCCESS)
}

fn run_tx(script_sig_hex: &str, explain: bool) -> anyhow::Result<ExitCode> {
    let outcome = decode_script_sig(script_sig_hex).context("failed to decode scriptSig")?;

    match outcome {
        ScriptSigOutcome::Found(report) => {
            println!("{}", to_pretty_json(&report)?);
            Ok(ExitCode::SUCCESS)
        }
        ScriptSigOutcome::NotFound(reason) => {
            if explain {
                warn!(%reason, "no inscription");
            }
            println!("No inscription found in scriptSig");
            Ok(ExitCode::FAILURE)
        }
    }
}
