use miette::Diagnostic;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives. Fixed when the client is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Base URL is empty")]
    #[diagnostic(help("Set FAQBOT_API_URL when building, e.g. https://faq.example.com"))]
    Empty,
    #[error("Base URL must start with http:// or https://, got {0}")]
    UnsupportedScheme(String),
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');

        if base_url.is_empty() {
            return Err(ConfigError::Empty);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::UnsupportedScheme(base_url.to_owned()));
        }

        Ok(Self {
            base_url: base_url.to_owned(),
        })
    }

    /// Reads `FAQBOT_API_URL` at compile time, falling back to a local backend.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(option_env!("FAQBOT_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slashes() {
        let config = Config::new("https://faq.example.com//").unwrap();

        assert_eq!(config.base_url(), "https://faq.example.com");
        assert_eq!(config.endpoint("/ask"), "https://faq.example.com/ask");
    }

    #[test]
    fn rejects_empty_and_non_http_urls() {
        assert_eq!(Config::new("  "), Err(ConfigError::Empty));
        assert_eq!(
            Config::new("ftp://faq.example.com"),
            Err(ConfigError::UnsupportedScheme(
                "ftp://faq.example.com".to_owned()
            ))
        );
    }

    #[test]
    fn build_env_config_is_valid() {
        assert!(Config::from_build_env().is_ok());
    }
}
