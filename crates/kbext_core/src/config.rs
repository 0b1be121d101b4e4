//! Registry configuration.
//!
//! # Responsibility
//! - Hold tunables of registry initialization.
//! - Accept partial documents; missing fields fall back to defaults.
//!
//! # Invariants
//! - `type_name_hint` is at least 1.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default target length of abbreviated type names in log records.
pub const DEFAULT_TYPE_NAME_HINT: usize = 20;

/// How initialization treats extensions sharing one `bean_name`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateIdPolicy {
    /// Keep all duplicates; lookup returns the earliest in sort order.
    #[default]
    FirstWins,
    /// Fail initialization and keep the previously published snapshot.
    Reject,
}

/// Registry initialization settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub duplicate_ids: DuplicateIdPolicy,
    /// Target length for abbreviated type names in `kb_extension_found` records.
    pub type_name_hint: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::default(),
            type_name_hint: DEFAULT_TYPE_NAME_HINT,
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.type_name_hint == 0 {
            return Err(ConfigError::InvalidTypeNameHint(self.type_name_hint));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidTypeNameHint(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTypeNameHint(value) => {
                write!(f, "type_name_hint must be at least 1, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}
