use crate::config::{DEFAULT_ALLOW_ORIGIN, DEFAULT_USER_ID};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::env;

/// Settings for the serverless entry point, read from the function environment.
#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub default_user_id: String,
    pub allow_origin: String,
    pub catalog_path: Option<String>,
}

impl Default for LambdaConfig {
    fn default() -> Self {
        Self {
            default_user_id: DEFAULT_USER_ID.to_string(),
            allow_origin: DEFAULT_ALLOW_ORIGIN.to_string(),
            catalog_path: None,
        }
    }
}

impl LambdaConfig {
    pub fn from_env() -> Self {
        Self {
            default_user_id: env::var("DEFAULT_USER_ID")
                .unwrap_or_else(|_| DEFAULT_USER_ID.to_string()),
            allow_origin: env::var("ALLOW_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOW_ORIGIN.to_string()),
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}

impl ConfigProvider for LambdaConfig {
    fn default_user_id(&self) -> &str {
        &self.default_user_id
    }

    fn allow_origin(&self) -> &str {
        &self.allow_origin
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog_path.as_deref()
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("default_user_id", &self.default_user_id)?;
        validate_non_empty_string("allow_origin", &self.allow_origin)?;

        if let Some(path) = &self.catalog_path {
            validate_path("catalog_path", path)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}
