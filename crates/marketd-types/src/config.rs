//! Configuration types for marketd modules.

use serde::{Deserialize, Serialize};

use crate::{LedgerError, Result, constants};

/// Configuration for the order module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAppConfig {
    /// Module name, reported in the `app` tag of delivered transactions.
    pub name: String,
    /// Query namespace claimed by the module. Must end with `/`.
    pub query_prefix: String,
}

impl Default for OrderAppConfig {
    fn default() -> Self {
        Self {
            name: constants::ORDER_APP_NAME.to_string(),
            query_prefix: constants::ORDER_PATH.to_string(),
        }
    }
}

impl OrderAppConfig {
    /// Check the configuration before a module is built from it.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LedgerError::Configuration(
                "module name must not be empty".to_string(),
            ));
        }
        if !self.query_prefix.ends_with(constants::PATH_SEPARATOR) {
            return Err(LedgerError::Configuration(format!(
                "query prefix {:?} must end with '{}'",
                self.query_prefix,
                constants::PATH_SEPARATOR,
            )));
        }
        Ok(())
    }
}
