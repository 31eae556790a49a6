//! Search limits and word-list location, read from TOML.
//!
//! The embedded `default_settings.toml` applies unless a CLI run installs its
//! own file through [`init_custom`] before the first search reads
//! [`settings`]. `SearchConfig::default()` is built from the `[search]` table.

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Replace the embedded defaults. Only effective before `settings()` is first read.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Process-wide settings, parsed on first use.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// The embedded defaults, as exported by `wordladder settings-export`.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

/// Upper bound on `search.depth_multiplier`.
pub const MAX_DEPTH_MULTIPLIER: usize = 64;
/// Upper bound on `search.deadline_ms`: one day.
pub const MAX_DEADLINE_MS: u64 = 24 * 60 * 60 * 1000;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub search: SearchSettings,
    pub ingest: IngestSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    pub max_routes: usize,
    pub deadline_ms: u64,
    pub quiescence_ms: u64,
    pub depth_multiplier: usize,
    /// 0 means one worker per logical CPU.
    pub workers: usize,
    pub queue_capacity: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IngestSettings {
    pub remote_url: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(search.max_routes);
    check_positive!(search.deadline_ms);
    check_positive!(search.depth_multiplier);
    check_positive!(search.queue_capacity);

    macro_rules! check_at_most {
        ($section:ident . $field:ident, $max:expr) => {
            if s.$section.$field > $max {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: format!("must be at most {}", $max),
                });
            }
        };
    }

    check_at_most!(search.depth_multiplier, MAX_DEPTH_MULTIPLIER);
    check_at_most!(search.deadline_ms, MAX_DEADLINE_MS);
    check_at_most!(search.quiescence_ms, MAX_DEADLINE_MS);

    let url = s.ingest.remote_url.as_str();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(SettingsError::InvalidValue {
            field: "ingest.remote_url".to_string(),
            reason: "must be an http:// or https:// URL".to_string(),
        });
    }

    Ok(())
}
