//! CLI entry point for tagguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `tagguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use tagguard_app::{
    build_envelope, runtime_failure_result, serialize_envelope, status_exit_code, Dispatcher,
    HookRequest,
};
use tagguard_types::{EvaluationResult, InvocationPoint, ResultEnvelope};
use time::OffsetDateTime;

#[derive(Parser, Debug)]
#[command(
    name = "tagguard",
    version,
    about = "Required-tag compliance hook for resource provisioning"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a provisioning request against the configured required tags.
    Evaluate {
        /// Path to the JSON request file.
        #[arg(long)]
        request: Utf8PathBuf,

        /// Where to write the result envelope (stdout if not specified).
        #[arg(long)]
        result_out: Option<Utf8PathBuf>,
    },

    /// Print the JSON schema of the result envelope.
    Schema,
}

/// On-disk request shape: the invocation point plus the hook request fields.
#[derive(Debug, Deserialize)]
struct RequestPayload {
    #[serde(rename = "invocationPoint")]
    invocation_point: InvocationPoint,
    #[serde(flatten)]
    request: HookRequest,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Evaluate {
            request,
            result_out,
        } => cmd_evaluate(&request, result_out.as_deref()),
        Commands::Schema => cmd_schema(),
    }
}

fn cmd_evaluate(request_path: &Utf8Path, result_out: Option<&Utf8Path>) -> anyhow::Result<()> {
    let started_at = OffsetDateTime::now_utc();

    let outcome = (|| -> anyhow::Result<(RequestPayload, EvaluationResult)> {
        let text = std::fs::read_to_string(request_path)
            .with_context(|| format!("read request: {request_path}"))?;
        let payload: RequestPayload =
            serde_json::from_str(&text).context("parse request")?;

        let dispatcher = Dispatcher::standard();
        let result = dispatcher.dispatch(payload.invocation_point, &payload.request)?;
        Ok((payload, result))
    })();

    match outcome {
        Ok((payload, result)) => {
            let status = result.status;
            let envelope = build_envelope(
                Some(payload.invocation_point),
                &payload.request,
                started_at,
                result,
            );
            emit_envelope(&envelope, result_out)?;

            let code = status_exit_code(status);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            // Best-effort failure envelope so the pipeline still sees a
            // structured result.
            let envelope = build_envelope(
                None,
                &HookRequest::default(),
                started_at,
                runtime_failure_result(&format!("{err:#}")),
            );
            let _ = emit_envelope(&envelope, result_out);
            eprintln!("tagguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn emit_envelope(envelope: &ResultEnvelope, out: Option<&Utf8Path>) -> anyhow::Result<()> {
    let text = serialize_envelope(envelope)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create directory: {parent}"))?;
            }
            std::fs::write(path, text).with_context(|| format!("write result: {path}"))?;
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ResultEnvelope);
    let text = serde_json::to_string_pretty(&schema).context("serialize schema")?;
    println!("{text}");
    Ok(())
}
