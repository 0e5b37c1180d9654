use super::ConfigError;
use crate::terminal::validate::is_valid_absolute_url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_SUBMISSIONS_TABLE: &str = "student_submissions";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 15;

pub const BACKEND_URL_ENV: &str = "PORTAIL_BACKEND_URL";
pub const BACKEND_ANON_KEY_ENV: &str = "PORTAIL_BACKEND_ANON_KEY";
pub const BACKEND_TABLE_ENV: &str = "PORTAIL_BACKEND_TABLE";

fn default_table() -> String {
    DEFAULT_SUBMISSIONS_TABLE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_BACKEND_TIMEOUT_SECS
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BackendSettings {
    pub fn masked_anon_key(&self) -> String {
        let chars: Vec<char> = self.anon_key.chars().collect();
        if chars.len() <= 8 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{tail}", "*".repeat(chars.len() - 4))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Settings {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn apply_env_overrides(&mut self) {
        if let Some(url) = non_empty_env(BACKEND_URL_ENV) {
            self.backend.url = url.trim().to_string();
        }
        if let Some(key) = non_empty_env(BACKEND_ANON_KEY_ENV) {
            self.backend.anon_key = key.trim().to_string();
        }
        if let Some(table) = non_empty_env(BACKEND_TABLE_ENV) {
            self.backend.table = table.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let backend = &self.backend;
        if backend.url.trim().is_empty() {
            return Err(ConfigError::Settings(format!(
                "`backend.url` is required (or set {BACKEND_URL_ENV})"
            )));
        }
        if !is_valid_absolute_url(&backend.url) {
            return Err(ConfigError::Settings(format!(
                "`backend.url` must be an absolute url, got `{}`",
                backend.url
            )));
        }
        if backend.anon_key.trim().is_empty() {
            return Err(ConfigError::Settings(format!(
                "`backend.anon_key` is required (or set {BACKEND_ANON_KEY_ENV})"
            )));
        }
        if backend.table.is_empty()
            || !backend
                .table
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            return Err(ConfigError::Settings(format!(
                "`backend.table` must be a non-empty identifier, got `{}`",
                backend.table
            )));
        }
        if backend.timeout_secs == 0 {
            return Err(ConfigError::Settings(
                "`backend.timeout_secs` must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        Settings {
            backend: BackendSettings {
                url: "https://project.supabase.co".to_string(),
                anon_key: "anon-key-0123456789".to_string(),
                ..BackendSettings::default()
            },
        }
    }

    #[test]
    fn yaml_defaults_fill_table_and_timeout() {
        let settings: Settings =
            serde_yaml::from_str("backend:\n  url: https://p.supabase.co\n  anon_key: k\n")
                .expect("parse");
        assert_eq!(settings.backend.table, DEFAULT_SUBMISSIONS_TABLE);
        assert_eq!(settings.backend.timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
    }

    #[test]
    fn validate_rejects_relative_backend_url() {
        let mut settings = valid_settings();
        settings.backend.url = "project.supabase.co".to_string();
        let err = settings.validate().expect_err("relative url");
        assert!(err.to_string().contains("absolute url"), "{err}");
    }

    #[test]
    fn validate_rejects_table_with_path_characters() {
        let mut settings = valid_settings();
        settings.backend.table = "students?select=*".to_string();
        assert!(settings.validate().is_err());
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn masked_key_keeps_only_last_four_characters() {
        let settings = valid_settings();
        assert_eq!(settings.backend.masked_anon_key(), "***************6789");
    }
}
