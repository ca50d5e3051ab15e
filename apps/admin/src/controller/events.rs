//! UI/backend events and error modeling for the admin front end.

use client_core::FetchError;
use shared::domain::Member;

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    MembersLoaded {
        origin: String,
        members: Vec<Member>,
    },
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    FetchMembers,
    General,
}

pub fn classify_fetch_failure(error: &UiError) -> String {
    match error.category() {
        UiErrorCategory::Transport => format!(
            "Member source unreachable; check the URL/network and restart. ({})",
            error.message()
        ),
        UiErrorCategory::Validation => format!(
            "Member source returned unusable data; check the configured source. ({})",
            error.message()
        ),
        UiErrorCategory::Unknown => format!("Failed to load members: {}", error.message()),
    }
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        Self {
            category: UiErrorCategory::Unknown,
            context,
            message: message.into(),
        }
    }

    /// Categorizes by failure kind: the source could not be reached, or it
    /// was reached and its address or payload was unusable.
    pub fn from_fetch_error(context: UiErrorContext, err: &FetchError) -> Self {
        let category = match err {
            FetchError::Request { .. } | FetchError::Status { .. } | FetchError::Io { .. } => {
                UiErrorCategory::Transport
            }
            FetchError::InvalidUrl { .. }
            | FetchError::UnsupportedScheme(_)
            | FetchError::Decode { .. } => UiErrorCategory::Validation,
        };

        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
