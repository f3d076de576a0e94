use shared_types::{AppConfig, SessionSettings};
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<SessionSettings> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Overrides `session.login_delay_ms`.
pub const LOGIN_DELAY_ENV: &str = "DIJA_LOGIN_DELAY_MS";
/// Overrides `session.login_timeout_ms`. `0` or `off` disables the timeout.
pub const LOGIN_TIMEOUT_ENV: &str = "DIJA_LOGIN_TIMEOUT_MS";

/// Read `config.toml` and the environment (including `.env`), and store the
/// result in the global `OnceLock`. Only the first call has effect.
///
/// A missing or unparseable file yields the defaults.
pub fn load_settings() -> &'static SessionSettings {
    SETTINGS.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let mut settings = read_config_file(Path::new(CONFIG_PATH));
        apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
        tracing::info!(?settings, "session settings loaded");
        settings
    })
}

fn read_config_file(path: &Path) -> SessionSettings {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_config(&contents).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "config parse failed, using defaults");
            SessionSettings::default()
        }),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "no config file, using defaults");
            SessionSettings::default()
        }
    }
}

/// Parse the contents of a `config.toml`.
pub fn parse_config(contents: &str) -> Result<SessionSettings, toml::de::Error> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config.session)
}

/// Apply environment overrides found through `lookup`. Values that do not
/// parse are ignored with a warning.
pub fn apply_env_overrides(
    settings: &mut SessionSettings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(raw) = lookup(LOGIN_DELAY_ENV) {
        match raw.trim().parse() {
            Ok(ms) => settings.login_delay_ms = ms,
            Err(_) => tracing::warn!(%raw, "ignoring invalid {LOGIN_DELAY_ENV}"),
        }
    }

    if let Some(raw) = lookup(LOGIN_TIMEOUT_ENV) {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("off") {
            settings.login_timeout_ms = None;
        } else {
            match raw.parse::<u64>() {
                Ok(0) => settings.login_timeout_ms = None,
                Ok(ms) => settings.login_timeout_ms = Some(ms),
                Err(_) => tracing::warn!(%raw, "ignoring invalid {LOGIN_TIMEOUT_ENV}"),
            }
        }
    }
}
