// Framework bootstrap for the one-shot request binary.

use crate::domain::Envelope;
use crate::frameworks::client::default_helper;
use crate::frameworks::config::{self, RunConfig};
use std::error::Error;
use tokio::sync::oneshot;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if config::log_format_json() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Issue the configured request and wait for its callback to fire.
pub async fn run(config: RunConfig) -> Envelope {
    let (tx, rx) = oneshot::channel();

    let task = default_helper().dispatch(
        config.descriptor(),
        Some(move |envelope: Envelope| {
            let _ = tx.send(envelope);
        }),
    );

    // A dropped sender means the request task died before delivering.
    match rx.await {
        Ok(envelope) => envelope,
        Err(_) => {
            if let Err(e) = task.await {
                tracing::error!(error = %e, "request task failed");
            }
            Envelope::fallback()
        }
    }
}

pub async fn run_with_config() -> Result<(), Box<dyn Error>> {
    init_runtime();

    let config = RunConfig::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "invalid request configuration");
    })?;
    tracing::debug!(
        verb = %config.verb,
        base_url = %config.base_url,
        endpoint = ?config.endpoint,
        has_body = config.body.is_some(),
        "request configured"
    );

    let envelope = run(config).await;
    tracing::info!(is_error = envelope.is_error(), "request delivered");

    // Logs go to stderr so stdout carries only the envelope.
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}
