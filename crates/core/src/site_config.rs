//! Site configuration value types and validation.
//!
//! Every `site_configs` row declares a `config_type` that gives its
//! string `value` meaning. Admin saves are validated against that type
//! before anything touches the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a config value.
pub const MAX_VALUE_LENGTH: usize = 2000;

/// Semantic type of a [`site config`](self) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigType {
    Text,
    Url,
    Email,
    Phone,
    Color,
    Select,
}

impl ConfigType {
    /// The lowercase text form stored in the `config_type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ConfigType::Text => "text",
            ConfigType::Url => "url",
            ConfigType::Email => "email",
            ConfigType::Phone => "phone",
            ConfigType::Color => "color",
            ConfigType::Select => "select",
        }
    }

    /// Parse the stored text form.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "text" => Ok(ConfigType::Text),
            "url" => Ok(ConfigType::Url),
            "email" => Ok(ConfigType::Email),
            "phone" => Ok(ConfigType::Phone),
            "color" => Ok(ConfigType::Color),
            "select" => Ok(ConfigType::Select),
            other => Err(CoreError::Validation(format!(
                "Unknown config type '{other}'"
            ))),
        }
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a config value against its declared type.
pub fn validate_value(config_type: ConfigType, value: &str) -> Result<(), CoreError> {
    if value.len() > MAX_VALUE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Config value exceeds maximum length of {MAX_VALUE_LENGTH} characters"
        )));
    }

    match config_type {
        ConfigType::Text => Ok(()),
        ConfigType::Url => {
            if value.starts_with("http://") || value.starts_with("https://") {
                Ok(())
            } else {
                Err(CoreError::Validation(
                    "URL value must start with http:// or https://".to_string(),
                ))
            }
        }
        ConfigType::Email => {
            let valid = value
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
            if valid {
                Ok(())
            } else {
                Err(CoreError::Validation(
                    "Email value must be of the form user@domain.tld".to_string(),
                ))
            }
        }
        ConfigType::Phone => {
            let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
            let valid = digits >= 5
                && value
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')'));
            if valid {
                Ok(())
            } else {
                Err(CoreError::Validation(
                    "Phone value may contain digits, spaces, and +-() only".to_string(),
                ))
            }
        }
        ConfigType::Color => {
            let hex = value.strip_prefix('#').unwrap_or("");
            let valid = matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
            if valid {
                Ok(())
            } else {
                Err(CoreError::Validation(
                    "Color value must be #rgb or #rrggbb".to_string(),
                ))
            }
        }
        ConfigType::Select => {
            if value.trim().is_empty() {
                Err(CoreError::Validation(
                    "Select value must not be empty".to_string(),
                ))
            } else {
                Ok(())
            }
        }
    }
}
