use crate::errors::GuardError;
use super::credentials::load_api_key;

pub const DEFAULT_API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_SCANNER: &str = "checkupdates";

/// Settings that come from the command line, before the environment is consulted.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key_env: String,
    pub model: String,
    pub base_url: String,
    pub scanner: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            scanner: DEFAULT_SCANNER.to_string(),
        }
    }
}

/// Resolved run configuration. The credential is read once here and
/// handed down explicitly; nothing below reads the environment.
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub scanner: String,
}

impl Config {
    pub fn from_env(settings: Settings) -> Result<Self, GuardError> {
        let api_key = load_api_key(&settings.api_key_env)?;
        Ok(Self {
            api_key,
            model: settings.model,
            base_url: settings.base_url,
            scanner: settings.scanner,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("scanner", &self.scanner)
            .finish()
    }
}
