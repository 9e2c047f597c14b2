use std::path::Path;
use crate::errors::GuardError;
use tracing::{debug, warn};

/// Load a `.env` file from the current directory or its parents.
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => report_dotenv_error(&e),
    }
}

/// Load a specific `.env` file, without overriding existing variables.
pub fn load_dotenv_from(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) => report_dotenv_error(&e),
    }
}

fn report_dotenv_error(e: &dotenvy::Error) {
    if e.not_found() {
        debug!("No .env file found");
    } else {
        warn!(error = %e, "Failed to load .env file");
    }
}

/// Read the AI service credential from the named environment variable.
/// Absent, empty, or whitespace-only values are a configuration error.
pub fn load_api_key(var_name: &str) -> Result<String, GuardError> {
    match std::env::var(var_name) {
        Ok(value) if !value.trim().is_empty() => {
            debug!(var = %var_name, "Resolved API key from environment");
            Ok(value)
        }
        _ => Err(GuardError::Config(format!(
            "No {} environment variable found. Please set it in your .env file.",
            var_name
        ))),
    }
}

/// Redact sensitive values in a string. Replaces each secret with [REDACTED].
pub fn redact_credentials(text: &str, secrets: &[&str]) -> String {
    let mut result = text.to_string();
    for secret in secrets {
        if !secret.is_empty() && secret.len() >= 4 {
            result = result.replace(secret, "[REDACTED]");
        }
    }
    result
}
