use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::domain::Member;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid member source url '{url}': {source}")]
    InvalidUrl { url: String, source: url::ParseError },
    #[error("unsupported member source scheme '{0}'; expected http or https")]
    UnsupportedScheme(String),
    #[error("request to {origin} failed: {source}")]
    Request {
        origin: String,
        source: reqwest::Error,
    },
    #[error("{origin} answered with status {status}")]
    Status { origin: String, status: StatusCode },
    #[error("failed to read {origin}: {source}")]
    Io {
        origin: String,
        source: std::io::Error,
    },
    #[error("{origin} returned malformed member JSON: {source}")]
    Decode {
        origin: String,
        source: serde_json::Error,
    },
}

/// One-shot supplier of the member list.
#[async_trait]
pub trait MemberSource: Send + Sync {
    fn origin(&self) -> String;
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError>;
}

pub struct HttpMemberSource {
    http: Client,
    url: Url,
}

impl HttpMemberSource {
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let url = parse_source_url(url)?;
        Ok(Self {
            http: Client::new(),
            url,
        })
    }
}

pub fn parse_source_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim()).map_err(|source| FetchError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::UnsupportedScheme(other.to_string())),
    }
}

#[async_trait]
impl MemberSource for HttpMemberSource {
    fn origin(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let origin = self.origin();
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                origin: origin.clone(),
                source,
            })?;
        let status = response.status();
        debug!(origin = %origin, status = %status, "member source responded");
        if !status.is_success() {
            return Err(FetchError::Status { origin, status });
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                origin: origin.clone(),
                source,
            })?;
        decode_members(&origin, &body)
    }
}

/// Reads a previously exported members JSON file.
pub struct FileMemberSource {
    path: PathBuf,
}

impl FileMemberSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MemberSource for FileMemberSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let origin = self.origin();
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                origin: origin.clone(),
                source,
            })?;
        decode_members(&origin, &body)
    }
}

fn decode_members(origin: &str, body: &[u8]) -> Result<Vec<Member>, FetchError> {
    serde_json::from_slice(body).map_err(|source| FetchError::Decode {
        origin: origin.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
