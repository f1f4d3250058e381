// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake configuration
//!
//! ```toml
//! default_locale = "en"
//!
//! [ids]
//! strategy = "sequential"
//! prefix = "notification"
//! ```

use crate::error::ConfigError;
use herald_core::{IdGen, Locale, SequentialIdGen, UuidIdGen};
use serde::Deserialize;

/// Settings for a [`NotificationFake`](crate::NotificationFake)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FakeConfig {
    /// Locale recorded when a notification carries none
    pub default_locale: Option<Locale>,
    /// How notification ids are generated
    pub ids: IdStrategy,
}

/// Notification id generation strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum IdStrategy {
    /// Random UUID v4 strings
    #[default]
    Uuid,
    /// `<prefix>-1`, `<prefix>-2`, ...
    Sequential {
        #[serde(default = "default_prefix")]
        prefix: String,
    },
}

fn default_prefix() -> String {
    "notification".to_string()
}

impl FakeConfig {
    /// Parse configuration from TOML content
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: FakeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_default_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    pub fn with_sequential_ids(mut self, prefix: impl Into<String>) -> Self {
        self.ids = IdStrategy::Sequential {
            prefix: prefix.into(),
        };
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match &self.ids {
            IdStrategy::Sequential { prefix } if prefix.is_empty() => Err(ConfigError::EmptyIdPrefix),
            _ => Ok(()),
        }
    }

    pub(crate) fn id_gen(&self) -> Box<dyn IdGen> {
        match &self.ids {
            IdStrategy::Uuid => Box::new(UuidIdGen),
            IdStrategy::Sequential { prefix } => Box::new(SequentialIdGen::new(prefix.clone())),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
