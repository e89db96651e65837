use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::info;
use validator::Validate;

/// Default values for configuration
const DEFAULT_VARIANT_DEBOUNCE_MS: u64 = 250;
const DEFAULT_SKU_DEBOUNCE_MS: u64 = 200;
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const CONFIG_DIR: &str = "config";

/// Tunable settings for a form session.
///
/// The two debounce windows stagger the variant and SKU regeneration passes
/// so a burst of edits settles into one rebuild each.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct FormSettings {
    /// Quiet period after an axis-group edit before variants regenerate.
    #[serde(default = "default_variant_debounce_ms")]
    #[validate(range(min = 0, max = 60_000))]
    pub variant_debounce_ms: u64,

    /// Quiet period after a unit or name edit before SKUs regenerate.
    #[serde(default = "default_sku_debounce_ms")]
    #[validate(range(min = 0, max = 60_000))]
    pub sku_debounce_ms: u64,

    /// Buffered capacity of the session event channel.
    #[serde(default = "default_event_channel_capacity")]
    #[validate(range(min = 1))]
    pub event_channel_capacity: usize,

    /// Log level filter applied when the caller initializes logging.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable lines.
    #[serde(default)]
    pub log_json: bool,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            variant_debounce_ms: default_variant_debounce_ms(),
            sku_debounce_ms: default_sku_debounce_ms(),
            event_channel_capacity: default_event_channel_capacity(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] ConfigError),

    #[error("Configuration validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Default value functions
fn default_variant_debounce_ms() -> u64 {
    DEFAULT_VARIANT_DEBOUNCE_MS
}
fn default_sku_debounce_ms() -> u64 {
    DEFAULT_SKU_DEBOUNCE_MS
}
fn default_event_channel_capacity() -> usize {
    DEFAULT_EVENT_CHANNEL_CAPACITY
}
fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Initializes tracing using the provided log level as the default filter
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_directive = format!("skuforge={}", level);
    let filter_directive = env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default_directive);

    let filter = EnvFilter::new(filter_directive);
    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

/// Layers configuration sources in this order:
/// 1. Default config (config/default.toml)
/// 2. Environment-specific config (config/{env}.toml)
/// 3. Environment variables (SKUFORGE_*)
pub fn load_settings() -> Result<FormSettings, SettingsError> {
    let run_env = env::var("RUN_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| DEFAULT_ENV.to_string());
    info!("Loading settings for environment: {}", run_env);

    let config = Config::builder()
        .set_default("variant_debounce_ms", DEFAULT_VARIANT_DEBOUNCE_MS)?
        .set_default("sku_debounce_ms", DEFAULT_SKU_DEBOUNCE_MS)?
        .set_default(
            "event_channel_capacity",
            DEFAULT_EVENT_CHANNEL_CAPACITY as u64,
        )?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("log_json", false)?
        .add_source(File::with_name(&format!("{}/default", CONFIG_DIR)).required(false))
        .add_source(File::with_name(&format!("{}/{}", CONFIG_DIR, run_env)).required(false))
        .add_source(Environment::with_prefix("SKUFORGE").separator("__"))
        .build()?;

    let settings: FormSettings = config.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}
