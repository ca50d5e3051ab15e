use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";
pub const DEFAULT_CONFIG_PATH: &str = "admin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberSourceConfig {
    Http(String),
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: MemberSourceConfig,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: MemberSourceConfig::Http(DEFAULT_SOURCE_URL.into()),
            page_size: record_set::DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    source_url: Option<String>,
    source_file: Option<PathBuf>,
    page_size: Option<usize>,
}

/// Defaults, then `path` if it exists, then the process environment.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

pub fn load_settings_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read '{}'", path.display()));
        }
    }

    apply_env(&mut settings, env);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.source_url {
        settings.source = MemberSourceConfig::Http(v);
    }
    if let Some(v) = file_cfg.source_file {
        settings.source = MemberSourceConfig::File(v);
    }
    if let Some(v) = file_cfg.page_size {
        settings.page_size = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("MEMBERS_URL") {
        settings.source = MemberSourceConfig::Http(v);
    }
    if let Some(v) = env("APP__SOURCE_URL") {
        settings.source = MemberSourceConfig::Http(v);
    }
    if let Some(v) = env("APP__SOURCE_FILE") {
        settings.source = MemberSourceConfig::File(v.into());
    }
    if let Some(v) = env("APP__PAGE_SIZE") {
        match v.trim().parse::<usize>() {
            Ok(parsed) => settings.page_size = parsed,
            Err(_) => tracing::warn!(value = %v, "ignoring unparsable APP__PAGE_SIZE"),
        }
    }
}

impl Settings {
    pub fn apply_cli(
        &mut self,
        source_url: Option<String>,
        source_file: Option<PathBuf>,
        page_size: Option<usize>,
    ) {
        if let Some(v) = source_url {
            self.source = MemberSourceConfig::Http(v);
        }
        if let Some(v) = source_file {
            self.source = MemberSourceConfig::File(v);
        }
        if let Some(v) = page_size {
            self.page_size = v;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be at least 1");
        }
        if let MemberSourceConfig::Http(url) = &self.source {
            client_core::parse_source_url(url)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
