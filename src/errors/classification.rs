use super::types::GuardError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
}

impl GuardError {
    /// Stable label for structured logs.
    pub fn classify(&self) -> ErrorClassification {
        let error_type = match self {
            GuardError::Config(_) => "ConfigError",
            GuardError::Authentication(_) => "AuthenticationError",
            GuardError::RateLimit(_) => "RateLimitError",
            GuardError::Network(_) => "NetworkError",
            GuardError::LLMApi(_) => "LLMApiError",
            GuardError::Scanner(_) => "ScannerError",
            GuardError::Json(_) => "JsonError",
        };
        ErrorClassification { error_type }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_label() {
        let err = GuardError::Config("missing key".into());
        assert_eq!(err.classify().error_type, "ConfigError");
    }

    #[test]
    fn test_network_error_label() {
        let err = GuardError::Network("connection refused".into());
        assert_eq!(err.classify().error_type, "NetworkError");
    }

    #[test]
    fn test_rate_limit_label() {
        let err = GuardError::RateLimit("too many requests".into());
        assert_eq!(err.classify().error_type, "RateLimitError");
    }

    #[test]
    fn test_scanner_label() {
        let err = GuardError::Scanner("checkupdates not found".into());
        assert_eq!(err.classify().error_type, "ScannerError");
    }

    #[test]
    fn test_display_includes_category() {
        let err = GuardError::Config("No GOOGLE_API_KEY environment variable found.".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: No GOOGLE_API_KEY environment variable found."
        );
    }
}
