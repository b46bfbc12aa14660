//! Dictionary adjuster - the entropy-adjustment engine.
//!
//! Scans a password (and its normalized variants) for embedded dictionary
//! words, collapses each accepted match to a single placeholder character,
//! and scores what is left. A matched word costs an attacker one dictionary
//! lookup, not one guess per character, so the placeholder contributes the
//! weight of one character regardless of the word's length.

use crate::bonus::{BonusPolicy, nist_bonus_bits};
use crate::config::{AdjusterConfig, ConfigError};
use crate::dictionary::Dictionary;
use crate::entropy::weakened_entropy;
use crate::variants::all_variants;

/// Placeholder a matched word collapses to. Repeated placeholders are
/// discounted like any repeated character, so each additional matched word
/// contributes less than the one before it.
const MATCH_PLACEHOLDER: char = '*';

/// One accepted dictionary match inside a normalized candidate string.
/// Never outlives a single `adjusted_entropy` call.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Match {
    start: usize,
    len: usize,
    word: String,
}

impl Match {
    fn end(&self) -> usize {
        self.start + self.len
    }

    fn overlaps(&self, other: &Match) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// Scans passwords for embedded dictionary words and produces the adjusted
/// entropy estimate.
///
/// Dictionary and configuration are fixed at construction; instances are
/// `Send + Sync` and safe to share across threads.
#[derive(Debug, Clone)]
pub struct DictionaryAdjuster {
    dictionary: Dictionary,
    min_word_length: usize,
    every_dictionary_word: bool,
    min_entropy: f64,
    bonus: BonusPolicy,
}

impl DictionaryAdjuster {
    /// Builds an adjuster from `config`, merging any extra words into this
    /// instance's dictionary.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for invalid option values; scoring itself
    /// never fails.
    pub fn new(config: AdjusterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let dictionary = Dictionary::with_extra_words(&config.extra_dictionary_words);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            words = dictionary.len(),
            min_word_length = config.min_word_length,
            every_dictionary_word = config.every_dictionary_word,
            "dictionary adjuster constructed"
        );

        Ok(Self {
            dictionary,
            min_word_length: config.min_word_length,
            every_dictionary_word: config.every_dictionary_word,
            min_entropy: config.min_entropy,
            bonus: nist_bonus_bits,
        })
    }

    /// Replaces the bonus-bit policy. Tests pin it to
    /// [`zero_bonus`](crate::bonus::zero_bonus) to isolate the dictionary
    /// logic.
    pub fn with_bonus_policy(mut self, bonus: BonusPolicy) -> Self {
        self.bonus = bonus;
        self
    }

    /// The configured strong/weak threshold, in bits.
    pub fn min_entropy(&self) -> f64 {
        self.min_entropy
    }

    /// Entropy estimate in bits, adjusted for embedded dictionary words.
    ///
    /// Total over any input: empty strings, punctuation-only strings and
    /// strings with no letters all score without error.
    pub fn adjusted_entropy(&self, password: &str) -> f64 {
        let folded = password.to_lowercase();

        // The plain weakened sum is the floor: masking can only lower it.
        let mut minimum = weakened_entropy(&folded);

        for variant in all_variants(password) {
            let masked = self.mask_dictionary_words(&variant);
            let bits = weakened_entropy(&masked);
            if bits < minimum {
                #[cfg(feature = "tracing")]
                tracing::debug!(bits, "variant lowered the entropy estimate");
                minimum = bits;
            }
        }

        minimum + (self.bonus)(password)
    }

    /// `true` when the adjusted entropy meets the configured minimum.
    pub fn is_strong(&self, password: &str) -> bool {
        self.adjusted_entropy(password) >= self.min_entropy
    }

    /// Strict complement of [`is_strong`](Self::is_strong).
    pub fn is_weak(&self, password: &str) -> bool {
        !self.is_strong(password)
    }

    /// Collapses every accepted dictionary match in `text` to a single
    /// placeholder character.
    fn mask_dictionary_words(&self, text: &str) -> String {
        let chars: Vec<char> = text.chars().collect();
        let accepted = self.accepted_matches(&chars);
        if accepted.is_empty() {
            return text.to_owned();
        }

        let mut masked = String::with_capacity(text.len());
        let mut next = accepted.iter().peekable();
        let mut index = 0;
        while index < chars.len() {
            match next.peek() {
                Some(m) if m.start == index => {
                    debug_assert_eq!(m.word.chars().count(), m.len);
                    masked.push(MATCH_PLACEHOLDER);
                    index = m.end();
                    next.next();
                }
                _ => {
                    masked.push(chars[index]);
                    index += 1;
                }
            }
        }
        masked
    }

    /// Interval selection over all candidate matches: earliest start wins,
    /// longest wins at the same start, overlapping candidates are
    /// discarded. In first-match-only mode, selection stops after the
    /// first accepted match.
    fn accepted_matches(&self, chars: &[char]) -> Vec<Match> {
        let mut candidates = self.candidate_matches(chars);
        candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.len.cmp(&a.len)));

        let mut accepted: Vec<Match> = Vec::new();
        for candidate in candidates {
            if accepted.iter().any(|kept| kept.overlaps(&candidate)) {
                continue;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(
                word = %candidate.word,
                start = candidate.start,
                "dictionary match accepted"
            );
            accepted.push(candidate);
            if !self.every_dictionary_word {
                break;
            }
        }
        accepted
    }

    /// Every substring of qualifying length equal to a dictionary entry,
    /// regardless of what surrounds it.
    fn candidate_matches(&self, chars: &[char]) -> Vec<Match> {
        let window = self.dictionary.max_word_chars();
        let mut candidates = Vec::new();
        for start in 0..chars.len() {
            let longest = window.min(chars.len() - start);
            for len in self.min_word_length..=longest {
                let substring: String = chars[start..start + len].iter().collect();
                if self.dictionary.contains(&substring) {
                    candidates.push(Match {
                        start,
                        len,
                        word: substring,
                    });
                }
            }
        }
        candidates
    }
}
