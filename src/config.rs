//! Adjuster configuration - value object, validated once at construction.

use thiserror::Error;

/// Configuration errors, reported from construction and never from
/// scoring.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("min_word_length must be at least 1")]
    ZeroMinWordLength,
    #[error("min_entropy must be a finite, non-negative number of bits (got {0})")]
    InvalidMinEntropy(f64),
    #[error("extra dictionary word at index {0} is blank")]
    BlankExtraWord(usize),
}

/// Options for a [`DictionaryAdjuster`](crate::DictionaryAdjuster) or
/// [`StrengthChecker`](crate::StrengthChecker).
///
/// Read once at construction; instances own their snapshot, so changing
/// configuration means constructing a new instance.
#[derive(Debug, Clone)]
pub struct AdjusterConfig {
    /// Substrings shorter than this never count as dictionary matches.
    pub min_word_length: usize,
    /// Penalize every non-overlapping match (`true`, the default) or only
    /// the first one found.
    pub every_dictionary_word: bool,
    /// Extra words merged into this instance's dictionary. Callers resolve
    /// computed or looked-up word sources into a plain list before
    /// constructing the config.
    pub extra_dictionary_words: Vec<String>,
    /// Threshold, in bits, separating weak from strong.
    pub min_entropy: f64,
}

impl Default for AdjusterConfig {
    fn default() -> Self {
        Self {
            min_word_length: 4,
            every_dictionary_word: true,
            extra_dictionary_words: Vec::new(),
            min_entropy: 18.0,
        }
    }
}

impl AdjusterConfig {
    /// Validates option values; called by the constructors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_length == 0 {
            return Err(ConfigError::ZeroMinWordLength);
        }
        if !self.min_entropy.is_finite() || self.min_entropy < 0.0 {
            return Err(ConfigError::InvalidMinEntropy(self.min_entropy));
        }
        for (index, word) in self.extra_dictionary_words.iter().enumerate() {
            if word.trim().is_empty() {
                return Err(ConfigError::BlankExtraWord(index));
            }
        }
        Ok(())
    }
}
