use crate::{SignupError, SignupResult};

/// Runtime configuration for the post-confirmation handler.
///
/// Both `REGION` and `TABLE_NAME` are Lambda environment variables set by the
/// infrastructure stack. They are read once at process startup; a missing or
/// empty value is fatal before any event is processed.
#[derive(Debug, Clone)]
pub struct HandlerConfig {
    pub region: String,
    pub table_name: String,
}

impl HandlerConfig {
    pub fn new(region: impl Into<String>, table_name: impl Into<String>) -> SignupResult<Self> {
        let region = region.into();
        let table_name = table_name.into();

        if region.trim().is_empty() {
            return Err(SignupError::ConfigurationError(
                "REGION must not be empty".to_string(),
            ));
        }
        if table_name.trim().is_empty() {
            return Err(SignupError::ConfigurationError(
                "TABLE_NAME must not be empty".to_string(),
            ));
        }

        Ok(Self { region, table_name })
    }

    /// Create handler config from environment variables
    pub fn from_env() -> SignupResult<Self> {
        let region = std::env::var("REGION")
            .map_err(|_| SignupError::ConfigurationError("REGION not set".to_string()))?;

        let table_name = std::env::var("TABLE_NAME")
            .map_err(|_| SignupError::ConfigurationError("TABLE_NAME not set".to_string()))?;

        Self::new(region, table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = HandlerConfig::new("eu-west-2", "UsersTable").unwrap();

        assert_eq!(config.region, "eu-west-2");
        assert_eq!(config.table_name, "UsersTable");
    }

    #[test]
    fn test_from_env() {
        // Single test owns the env vars so parallel tests don't interleave
        std::env::set_var("REGION", "eu-west-2");
        std::env::set_var("TABLE_NAME", "UsersTable");

        let config = HandlerConfig::from_env().unwrap();
        assert_eq!(config.region, "eu-west-2");
        assert_eq!(config.table_name, "UsersTable");

        std::env::remove_var("REGION");
        let err = HandlerConfig::from_env().unwrap_err();
        assert!(matches!(err, SignupError::ConfigurationError(_)));

        std::env::remove_var("TABLE_NAME");
    }

    #[test]
    fn test_empty_region_rejected() {
        let err = HandlerConfig::new("", "UsersTable").unwrap_err();
        assert!(matches!(err, SignupError::ConfigurationError(_)));
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let err = HandlerConfig::new("eu-west-2", "  ").unwrap_err();
        assert!(matches!(err, SignupError::ConfigurationError(_)));
    }
}
