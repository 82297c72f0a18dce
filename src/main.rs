//! Terminal harness for the Hytex front-end services.
//!
//! Wires a channel-backed surface to a log renderer, binds a login form to
//! the configured compression server, and feeds it from stdin: each line is
//! a set of `name=value` pairs treated as one submit gesture.

use std::sync::Arc;

use anyhow::Context;
use hytex_bridge::event::{SubmitEvent, SurfaceEvent};
use hytex_client::{
    Feedback, FormSource, RequestClient, SubmitOptions, bind_form_submission, validate,
};
use hytex_ui::{ChannelSurface, LoadingIndicator, Notifier, Surface};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_colors(true)
        .with_local_timestamps()
        .init()
        .context("failed to build logger instance")?;

    let config = hytex_client::config::load_config()
        .await
        .context("failed to load config")?;

    let (surface, mut ui_events) = ChannelSurface::new();
    tokio::spawn(async move {
        while let Some(event) = ui_events.recv().await {
            render(event);
        }
    });

    let surface: Arc<dyn Surface> = surface;
    let feedback = Feedback {
        notifier: Notifier::new(surface.clone(), config.toast),
        loading: LoadingIndicator::new(surface),
    };

    let login_url = format!("{}/login", config.server_url.trim_end_matches('/'));
    let (submits_tx, submits_rx) = mpsc::channel(16);
    let options = SubmitOptions::new()
        .validate(|data| {
            data.get("email")
                .and_then(Value::as_str)
                .is_some_and(validate::is_valid_email)
        })
        .on_success(|response| log::info!("Login accepted: {response:?}"));

    bind_form_submission(
        Some(FormSource {
            id: String::from("login-form"),
            submits: submits_rx,
        }),
        login_url,
        options,
        feedback,
        RequestClient::new(),
    )
    .detach();

    log::info!(
        "Enter `name=value` pairs separated by spaces (e.g. `email=a@b.co password=secret`); Ctrl-D exits"
    );
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let fields: Vec<(String, String)> = line
            .split_whitespace()
            .filter_map(|pair| pair.split_once('='))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        if fields.is_empty() {
            log::warn!("No fields recognized; nothing submitted");
            continue;
        }
        if submits_tx.send(SubmitEvent { fields }).await.is_err() {
            break;
        }
    }

    Ok(())
}

/// Renders surface events as log lines, standing in for a real page.
fn render(event: SurfaceEvent) {
    match event {
        SurfaceEvent::ToastInserted { id, notification } => {
            log::info!(
                "[{id}] {} ({}) {}",
                notification.severity.css_suffix(),
                notification.severity.icon(),
                notification.message
            );
        }
        SurfaceEvent::ToastShown(id) => log::debug!("[{id}] shown"),
        SurfaceEvent::ToastExiting(id) => log::debug!("[{id}] exiting"),
        SurfaceEvent::ToastRemoved(id) => log::debug!("[{id}] removed"),
        SurfaceEvent::LoadingVisible(visible) => {
            log::info!("loading overlay: {}", if visible { "on" } else { "off" });
        }
        SurfaceEvent::DropZoneHover { zone, active } => {
            log::debug!("drop zone {zone} hover: {active}");
        }
    }
}
