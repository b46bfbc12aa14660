//! Strength checker - threshold policy over the dictionary adjuster.
//!
//! This is the surface an external validation layer calls: it owns a
//! configured adjuster (its own dictionary and threshold snapshot) and
//! yields a boolean verdict. Absent passwords are weak by definition and
//! never reach the scoring engine.

use secrecy::{ExposeSecret, SecretString};

use crate::adjuster::DictionaryAdjuster;
use crate::config::{AdjusterConfig, ConfigError};

/// Classifies passwords as weak or strong against a configured minimum
/// entropy.
///
/// Each checker owns an immutable config/dictionary snapshot; checkers
/// with different configurations share nothing. To reconfigure, construct
/// a new checker and swap it in whole.
#[derive(Debug, Clone)]
pub struct StrengthChecker {
    adjuster: DictionaryAdjuster,
}

impl StrengthChecker {
    /// Builds a checker from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for invalid option values; this is the
    /// only failure point, verdicts themselves never fail.
    pub fn new(config: AdjusterConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            adjuster: DictionaryAdjuster::new(config)?,
        })
    }

    /// Checker with the default configuration (18-bit minimum).
    pub fn with_defaults() -> Self {
        Self::new(AdjusterConfig::default()).expect("default config is valid")
    }

    /// `true` when the password's adjusted entropy falls below the
    /// configured minimum. An absent password is weak and is not scored.
    pub fn is_weak(&self, password: Option<&SecretString>) -> bool {
        match password {
            None => true,
            Some(secret) => self.adjuster.is_weak(secret.expose_secret()),
        }
    }

    /// Strict complement of [`is_weak`](Self::is_weak).
    pub fn is_strong(&self, password: Option<&SecretString>) -> bool {
        !self.is_weak(password)
    }

    /// The adjuster backing this checker, for callers that want the raw
    /// bit estimate alongside the verdict.
    pub fn adjuster(&self) -> &DictionaryAdjuster {
        &self.adjuster
    }
}
