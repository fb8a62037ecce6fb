//! Environment-driven settings.

use crate::Result;
use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use url::Url;

pub const TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const BASE_URL_VAR: &str = "GITHUB_API_BASE_URL";
pub const DEBUG_VAR: &str = "DEBUG";
pub const DEFAULT_USER_VAR: &str = "GITHUB_DEFAULT_USER";
pub const DEFAULT_REPO_VAR: &str = "GITHUB_DEFAULT_REPO";
pub const OUTPUT_DIR_VAR: &str = "OUTPUT_DIR";
pub const LOG_FILTER_VAR: &str = "RUST_LOG";

const FALLBACK_OWNER: &str = "kubernetes";
const FALLBACK_REPO: &str = "kubernetes";

/// Settings read from the environment at startup.
#[derive(Clone)]
pub struct Settings {
    pub token: String,

    /// Alternate API host, such as a GitHub Enterprise installation.
    pub base_url: Option<Url>,
    pub debug: bool,
    pub default_owner: String,
    pub default_repo: String,
    pub output_dir: Option<Utf8PathBuf>,

    /// Log filter directives in `env_logger` syntax.
    pub log_filter: Option<String>,
}

impl core::fmt::Debug for Settings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url.as_ref().map(Url::as_str))
            .field("debug", &self.debug)
            .field("default_owner", &self.default_owner)
            .field("default_repo", &self.default_repo)
            .field("output_dir", &self.output_dir)
            .field("log_filter", &self.log_filter)
            .finish()
    }
}

impl Settings {
    /// Reads settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let Some(token) = get(TOKEN_VAR) else {
            bail!("{TOKEN_VAR} is not set; export a personal access token or add it to a .env file");
        };

        let base_url = get(BASE_URL_VAR)
            .map(|raw| Url::parse(&raw).with_context(|| format!("invalid {BASE_URL_VAR} '{raw}'")))
            .transpose()?;

        let debug = get(DEBUG_VAR).is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");

        Ok(Self {
            token,
            base_url,
            debug,
            default_owner: get(DEFAULT_USER_VAR).unwrap_or_else(|| FALLBACK_OWNER.to_string()),
            default_repo: get(DEFAULT_REPO_VAR).unwrap_or_else(|| FALLBACK_REPO.to_string()),
            output_dir: get(OUTPUT_DIR_VAR).map(Utf8PathBuf::from),
            log_filter: get(LOG_FILTER_VAR),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_minimal() {
        let settings = Settings::from_lookup(lookup(&[(TOKEN_VAR, "ghp_abc")])).unwrap();
        assert_eq!(settings.token, "ghp_abc");
        assert!(settings.base_url.is_none());
        assert!(!settings.debug);
        assert_eq!(settings.default_owner, "kubernetes");
        assert_eq!(settings.default_repo, "kubernetes");
        assert!(settings.output_dir.is_none());
        assert!(settings.log_filter.is_none());
    }

    #[test]
    fn test_everything_set() {
        let settings = Settings::from_lookup(lookup(&[
            (TOKEN_VAR, " ghp_abc "),
            (BASE_URL_VAR, "https://ghe.example.com/api/v3"),
            (DEBUG_VAR, "TRUE"),
            (DEFAULT_USER_VAR, "rust-lang"),
            (DEFAULT_REPO_VAR, "cargo"),
            (OUTPUT_DIR_VAR, "/tmp/out"),
            (LOG_FILTER_VAR, "github=trace"),
        ]))
        .unwrap();

        assert_eq!(settings.token, "ghp_abc");
        assert_eq!(settings.base_url.unwrap().as_str(), "https://ghe.example.com/api/v3");
        assert!(settings.debug);
        assert_eq!(settings.default_owner, "rust-lang");
        assert_eq!(settings.default_repo, "cargo");
        assert_eq!(settings.output_dir.unwrap(), "/tmp/out");
        assert_eq!(settings.log_filter.as_deref(), Some("github=trace"));
    }

    #[test]
    fn test_missing_or_blank_token() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(err.to_string().contains(TOKEN_VAR));

        let err = Settings::from_lookup(lookup(&[(TOKEN_VAR, "   ")])).unwrap_err();
        assert!(err.to_string().contains(TOKEN_VAR));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Settings::from_lookup(lookup(&[(TOKEN_VAR, "t"), (BASE_URL_VAR, "not a url")])).unwrap_err();
        assert!(err.to_string().contains(BASE_URL_VAR));
    }

    #[test]
    fn test_debug_values() {
        for (value, expected) in [("true", true), ("1", true), ("false", false), ("yes", false)] {
            let settings = Settings::from_lookup(lookup(&[(TOKEN_VAR, "t"), (DEBUG_VAR, value)])).unwrap();
            assert_eq!(settings.debug, expected, "DEBUG={value}");
        }
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let settings = Settings::from_lookup(lookup(&[(TOKEN_VAR, "ghp_secret")])).unwrap();
        assert!(!format!("{settings:?}").contains("ghp_secret"));
    }
}
