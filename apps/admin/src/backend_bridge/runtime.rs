//! Runtime bridge between the UI command queue and backend event intake.

use std::thread::{self, JoinHandle};

use client_core::{FileMemberSource, HttpMemberSource, MemberSource};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::MemberSourceConfig;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::FetchMembers { source } => {
                        let event = fetch_members(&source).await;
                        if ui_tx.send(event).is_err() {
                            tracing::warn!("ui loop gone; dropping fetched members");
                            break;
                        }
                    }
                    BackendCommand::Shutdown => {
                        tracing::debug!("backend: shutdown");
                        break;
                    }
                }
            }
        });
    })
}

async fn fetch_members(source: &MemberSourceConfig) -> UiEvent {
    let source: Box<dyn MemberSource> = match source {
        MemberSourceConfig::Http(url) => match HttpMemberSource::new(url) {
            Ok(source) => Box::new(source),
            Err(err) => {
                return UiEvent::Error(UiError::from_fetch_error(
                    UiErrorContext::FetchMembers,
                    &err,
                ))
            }
        },
        MemberSourceConfig::File(path) => Box::new(FileMemberSource::new(path.clone())),
    };

    let origin = source.origin();
    tracing::info!(%origin, "backend: fetch_members");
    match source.fetch_members().await {
        Ok(members) => UiEvent::MembersLoaded { origin, members },
        Err(err) => {
            tracing::error!(%origin, "backend: fetch_members failed: {err}");
            UiEvent::Error(UiError::from_fetch_error(
                UiErrorContext::FetchMembers,
                &err,
            ))
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
