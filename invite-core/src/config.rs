use reqwest::Url;
use thiserror::Error;

/// Datastore endpoint, e.g. `https://<project>.supabase.co`
pub const SUPABASE_URL_VAR: &str = "INVITE_SUPABASE_URL";
/// Public (anon) API key; safe to ship to the browser
pub const SUPABASE_ANON_KEY_VAR: &str = "INVITE_SUPABASE_ANON_KEY";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} is not a valid http(s) URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Datastore connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub supabase_url: Url,
    pub supabase_anon_key: String,
}

impl Config {
    /// Load settings for the current target.
    ///
    /// Native builds read `.env` and the process environment, falling back to
    /// values captured at compile time. The browser build only has the
    /// compile-time values.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Loaded .env");
        }
        Self::from_lookup(|key| layered(key, |k| std::env::var(k).ok(), build_env))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_build_env()
    }

    /// Settings baked in by `cargo build` / `dx build` from the build environment.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Build from any key/value source. Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |var: &'static str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let raw_url = require(SUPABASE_URL_VAR)?;
        let supabase_url = Url::parse(&raw_url)
            .ok()
            .filter(|u| matches!(u.scheme(), "http" | "https"))
            .ok_or_else(|| ConfigError::InvalidUrl {
                var: SUPABASE_URL_VAR,
                value: raw_url.clone(),
            })?;
        let supabase_anon_key = require(SUPABASE_ANON_KEY_VAR)?;

        Ok(Self {
            supabase_url,
            supabase_anon_key,
        })
    }
}

/// First non-blank value from `primary`, else `fallback`. A variable set to
/// an empty string does not hide the fallback.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn layered(
    key: &str,
    primary: impl Fn(&str) -> Option<String>,
    fallback: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    primary(key)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| fallback(key))
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        SUPABASE_URL_VAR => option_env!("INVITE_SUPABASE_URL"),
        SUPABASE_ANON_KEY_VAR => option_env!("INVITE_SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_ok() {
        let config = Config::from_lookup(lookup(&[
            (SUPABASE_URL_VAR, "https://abc.supabase.co"),
            (SUPABASE_ANON_KEY_VAR, " anon-key "),
        ]))
        .unwrap();
        assert_eq!(config.supabase_url.host_str(), Some("abc.supabase.co"));
        assert_eq!(config.supabase_anon_key, "anon-key");
    }

    #[test]
    fn test_missing_url() {
        let err = Config::from_lookup(lookup(&[(SUPABASE_ANON_KEY_VAR, "k")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing(SUPABASE_URL_VAR));
    }

    #[test]
    fn test_empty_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            (SUPABASE_URL_VAR, "https://abc.supabase.co"),
            (SUPABASE_ANON_KEY_VAR, "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(SUPABASE_ANON_KEY_VAR));
    }

    #[test]
    fn test_empty_env_value_falls_back_to_build_value() {
        let env = lookup(&[(SUPABASE_URL_VAR, ""), (SUPABASE_ANON_KEY_VAR, "env-key")]);
        let build = lookup(&[
            (SUPABASE_URL_VAR, "https://built.supabase.co"),
            (SUPABASE_ANON_KEY_VAR, "built-key"),
        ]);
        let config = Config::from_lookup(|key| layered(key, &env, &build)).unwrap();
        assert_eq!(config.supabase_url.host_str(), Some("built.supabase.co"));
        assert_eq!(config.supabase_anon_key, "env-key");
    }

    #[test]
    fn test_invalid_url() {
        for bad in ["not a url", "ftp://abc.supabase.co"] {
            let err = Config::from_lookup(lookup(&[
                (SUPABASE_URL_VAR, bad),
                (SUPABASE_ANON_KEY_VAR, "k"),
            ]))
            .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { .. }), "{bad}");
        }
    }
}
