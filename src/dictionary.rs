//! Dictionary of known-weak words.
//!
//! The baseline list is compiled in: common passwords, keyboard rows and
//! short digit runs, all lowercase. Each adjuster instance builds its own
//! immutable snapshot (baseline plus caller-supplied extra words), so
//! concurrent scans never share mutable dictionary state.

use std::collections::HashSet;

/// Compiled-in baseline of common passwords and weak fillers.
pub(crate) const BASE_WORDS: &[&str] = &[
    // most common passwords
    "password", "password1", "passw0rd", "letmein", "welcome", "monkey", "dragon", "master",
    "shadow", "sunshine", "princess", "football", "baseball", "soccer", "hockey", "superman",
    "batman", "trustno1", "iloveyou", "iloveu", "loveme", "starwars", "whatever", "freedom",
    "secret", "internet", "computer", "samsung", "google", "pokemon", "mustang", "maverick",
    "matrix", "corvette", "mercedes", "ferrari", "yankees", "cowboys", "liverpool", "arsenal",
    "admin", "login", "root", "hello123", "abc123", "abcd1234", "abcdef",
    // names
    "michael", "jennifer", "jessica", "michelle", "daniel", "ashley", "bailey", "harley",
    "hunter", "ranger", "thomas", "robert", "george", "andrew", "charlie", "jordan", "austin",
    "dallas", "amanda", "nicole", "hannah", "chelsea", "summer", "ginger", "pepper", "tigger",
    "snoopy", "peanut", "cookie", "chicken", "babygirl", "lovely", "angel", "angels", "prince",
    "diamond", "buster", "killer", "hottie", "orange", "banana", "cheese", "monster", "flower",
    "silver", "purple", "yellow",
    // keyboard rows and mashes
    "qwerty", "qwertyuiop", "qwer", "asdf", "asdfgh", "asdfghjkl", "asdfasdf", "zxcv",
    "zxcvbnm", "qazwsx", "1qaz2wsx", "zaq12wsx", "1q2w3e4r", "q1w2e3r4",
    // digit passwords and runs
    "123456", "123456789", "12345678", "1234567", "1234567890", "12345", "1234", "4321",
    "654321", "987654321", "0123", "2345", "3456", "4567", "5678", "6789", "111111", "1111",
    "000000", "121212", "123123", "123321", "112233", "666666", "777777", "696969", "6969",
    "2000",
];

/// An immutable set of lowercase weak words, fixed for the lifetime of one
/// adjuster instance.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    max_word_chars: usize,
}

impl Dictionary {
    /// Builds the baseline dictionary merged with `extra` words.
    ///
    /// Words are lowercased and deduplicated; merging happens once, at
    /// construction.
    pub fn with_extra_words(extra: &[String]) -> Self {
        let words: HashSet<String> = BASE_WORDS
            .iter()
            .copied()
            .map(str::to_lowercase)
            .chain(extra.iter().map(|w| w.to_lowercase()))
            .collect();
        let max_word_chars = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);
        Self {
            words,
            max_word_chars,
        }
    }

    /// Case-sensitive lookup; callers normalize to lowercase first.
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    /// Character length of the longest word, the scanner's window bound.
    pub fn max_word_chars(&self) -> usize {
        self.max_word_chars
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
