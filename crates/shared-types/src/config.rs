use serde::{Deserialize, Serialize};

/// Default simulated sign-in round trip.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;

fn default_login_delay_ms() -> u64 {
    DEFAULT_LOGIN_DELAY_MS
}

/// Session tuning, the `[session]` table of `config.toml`.
///
/// A missing table or field falls back to the defaults, so an empty file
/// behaves like no file at all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionSettings {
    /// Artificial delay standing in for the authentication round trip.
    #[serde(default = "default_login_delay_ms")]
    pub login_delay_ms: u64,
    /// Give up on a sign-in after this long. Unset means wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_timeout_ms: Option<u64>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            login_timeout_ms: None,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub session: SessionSettings,
}
