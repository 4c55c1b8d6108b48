//! Configuration builder trait
//!
//! Common shape for configuration structures: defaults, validation,
//! environment loading and merging.

use crate::Result;

/// Trait for configuration structures that support validation, environment
/// loading and merging
///
/// # Example
///
/// ```rust,ignore
/// use cause_chain::config::ConfigBuilder;
///
/// #[derive(Clone, Default)]
/// struct ReportConfig {
///     pub redact: bool,
/// }
///
/// impl ConfigBuilder for ReportConfig {
///     fn from_env(prefix: &str) -> cause_chain::Result<Self> {
///         let redact = std::env::var(format!("{}REDACT", prefix)).is_ok_and(|v| v == "1");
///         Ok(Self { redact })
///     }
///
///     fn merge(&mut self, other: Self) -> &mut Self {
///         self.redact = other.redact;
///         self
///     }
/// }
/// ```
pub trait ConfigBuilder: Default + Clone {
    /// Validate the configuration
    ///
    /// Returns an error if a value is out of range.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Load configuration from environment variables
    ///
    /// Variables follow the pattern `{PREFIX}{FIELD_NAME}` with the field
    /// name uppercased. Fields without a variable keep their default.
    fn from_env(prefix: &str) -> Result<Self>;

    /// Merge another configuration into this one
    ///
    /// Values from `other` win. Returns self for chaining.
    fn merge(&mut self, other: Self) -> &mut Self;

    /// Create and validate the default configuration
    fn build() -> Result<Self> {
        let config = Self::default();
        config.validate()?;
        Ok(config)
    }

    /// Layer environment values over the defaults, then validate
    fn from_env_with_defaults(prefix: &str) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::from_env(prefix)?);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainError;

    #[derive(Debug, Clone, PartialEq)]
    struct TestConfig {
        limit: i64,
        labels: Vec<String>,
    }

    impl Default for TestConfig {
        fn default() -> Self {
            Self {
                limit: 10,
                labels: vec!["default".to_string()],
            }
        }
    }

    impl ConfigBuilder for TestConfig {
        fn validate(&self) -> Result<()> {
            if self.limit < 0 {
                return Err(ChainError::Config("limit must be non-negative".into()));
            }
            Ok(())
        }

        fn from_env(prefix: &str) -> Result<Self> {
            let limit = if prefix == "NEGATIVE_" { -1 } else { 42 };
            Ok(Self {
                limit,
                labels: vec!["from_env".to_string()],
            })
        }

        fn merge(&mut self, other: Self) -> &mut Self {
            self.limit = other.limit;
            self.labels.extend(other.labels);
            self
        }
    }

    #[test]
    fn test_build() {
        let config = TestConfig::build().unwrap();
        assert_eq!(config, TestConfig::default());
    }

    #[test]
    fn test_merge() {
        let mut config = TestConfig::default();
        config.merge(TestConfig {
            limit: 3,
            labels: vec!["b".to_string()],
        });

        assert_eq!(config.limit, 3);
        assert_eq!(config.labels, vec!["default", "b"]);
    }

    #[test]
    fn test_from_env_with_defaults_prefers_env() {
        let config = TestConfig::from_env_with_defaults("TEST_").unwrap();
        assert_eq!(config.limit, 42);
        assert_eq!(config.labels, vec!["default", "from_env"]);
    }

    #[test]
    fn test_from_env_with_defaults_validates() {
        let result = TestConfig::from_env_with_defaults("NEGATIVE_");
        assert!(matches!(result, Err(ChainError::Config(_))));
    }
}
