//! Session configuration: partial user options and their fully-defaulted form.

use serde::Deserialize;

/// Default name of the environment variable holding the shared password.
pub const DEFAULT_ENV_KEY: &str = "SESSION_PASSWORD";

/// Default name of the session cookie.
pub const DEFAULT_COOKIE_NAME: &str = "session";

/// Default cookie lifetime in seconds (7 days).
pub const DEFAULT_MAX_AGE: u64 = 60 * 60 * 24 * 7;

/// User-supplied session options. Every field is optional; absent fields take
/// the documented defaults when the config is [resolved](SessionConfig::resolve).
///
/// # Example
///
/// ```
/// use sesher::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_env_key("MY_SECRET_PASSWORD")
///     .with_cookie_name("auth")
///     .with_max_age(60 * 60 * 24)
///     .resolve();
///
/// assert_eq!(config.cookie_name(), "auth");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name of the environment variable that contains the password.
    pub env_key: Option<String>,
    /// Name of the cookie that stores the session state.
    pub cookie_name: Option<String>,
    /// Cookie max age in seconds.
    pub max_age: Option<u64>,
}

impl SessionConfig {
    pub fn with_env_key(mut self, env_key: impl Into<String>) -> Self {
        self.env_key = Some(env_key.into());
        self
    }

    pub fn with_cookie_name(mut self, cookie_name: impl Into<String>) -> Self {
        self.cookie_name = Some(cookie_name.into());
        self
    }

    pub fn with_max_age(mut self, max_age: u64) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Build a partial config from `SESHER_ENV_KEY`, `SESHER_COOKIE_NAME` and
    /// `SESHER_MAX_AGE`. Unset variables stay absent.
    pub fn from_env() -> Self {
        let max_age = std::env::var("SESHER_MAX_AGE")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(seconds) => Some(seconds),
                Err(e) => {
                    tracing::warn!("Ignoring invalid SESHER_MAX_AGE {:?}: {}", raw, e);
                    None
                }
            });

        Self {
            env_key: std::env::var("SESHER_ENV_KEY").ok(),
            cookie_name: std::env::var("SESHER_COOKIE_NAME").ok(),
            max_age,
        }
    }

    /// Merge the supplied fields over the defaults.
    pub fn resolve(self) -> ResolvedSessionConfig {
        ResolvedSessionConfig {
            env_key: self.env_key.unwrap_or_else(|| DEFAULT_ENV_KEY.to_string()),
            cookie_name: self
                .cookie_name
                .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_string()),
            max_age: self.max_age.unwrap_or(DEFAULT_MAX_AGE),
        }
    }
}

/// Fully-defaulted session configuration. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSessionConfig {
    env_key: String,
    cookie_name: String,
    max_age: u64,
}

impl ResolvedSessionConfig {
    pub fn env_key(&self) -> &str {
        &self.env_key
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }
}

impl Default for ResolvedSessionConfig {
    fn default() -> Self {
        SessionConfig::default().resolve()
    }
}

impl From<SessionConfig> for ResolvedSessionConfig {
    fn from(config: SessionConfig) -> Self {
        config.resolve()
    }
}
