//! Positional base-entropy estimator.
//!
//! Implements the NIST 800-63 style banded weight table: the first
//! character of a password is worth 4 bits, characters 2-8 are worth 2
//! bits, 9-20 are worth 1.5 bits and everything past 20 is worth 1 bit.

use std::collections::HashMap;

/// Discount applied to every repeated occurrence of a character.
///
/// The k-th occurrence of the same character contributes
/// `position_bits(p) * 0.75^(k-1)`, so runs and recycled characters are
/// cheaper to guess than fresh ones.
const REPEAT_DISCOUNT: f64 = 0.75;

/// Returns the bit weight for a 1-based character position.
pub fn position_bits(position: usize) -> f64 {
    match position {
        0 => 0.0,
        1 => 4.0,
        2..=8 => 2.0,
        9..=20 => 1.5,
        _ => 1.0,
    }
}

/// Naive brute-force entropy of `text`: the sum of the positional weights
/// for every character. Pure function of the character count; empty text
/// yields 0.
pub fn base_entropy(text: &str) -> f64 {
    (1..=text.chars().count()).map(position_bits).sum()
}

/// Positional entropy with repeated characters weakened.
///
/// Each character contributes its positional weight scaled by
/// [`REPEAT_DISCOUNT`] for every earlier occurrence of the same character.
pub(crate) fn weakened_entropy(text: &str) -> f64 {
    let mut seen: HashMap<char, u32> = HashMap::new();
    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let prior = seen.entry(c).or_insert(0);
            let bits = position_bits(i + 1) * REPEAT_DISCOUNT.powi(*prior as i32);
            *prior += 1;
            bits
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bands() {
        assert_eq!(position_bits(1), 4.0);
        assert_eq!(position_bits(2), 2.0);
        assert_eq!(position_bits(8), 2.0);
        assert_eq!(position_bits(9), 1.5);
        assert_eq!(position_bits(20), 1.5);
        assert_eq!(position_bits(21), 1.0);
        assert_eq!(position_bits(100), 1.0);
    }

    #[test]
    fn test_base_entropy_empty() {
        assert_eq!(base_entropy(""), 0.0);
    }

    #[test]
    fn test_base_entropy_single_char() {
        assert_eq!(base_entropy("a"), 4.0);
    }

    #[test]
    fn test_base_entropy_eight_chars() {
        // 4 + 7 * 2
        assert_eq!(base_entropy("abcdefgh"), 18.0);
    }

    #[test]
    fn test_base_entropy_crosses_bands() {
        // 4 + 7 * 2 + 1.5
        assert_eq!(base_entropy("abcdefghi"), 19.5);
        // 4 + 7 * 2 + 12 * 1.5 + 2 * 1
        assert_eq!(base_entropy("abcdefghijklmnopqrstuv"), 38.0);
    }

    #[test]
    fn test_base_entropy_counts_characters_not_bytes() {
        assert_eq!(base_entropy("ab"), base_entropy("éü"));
    }

    #[test]
    fn test_weakened_entropy_distinct_equals_base() {
        assert_eq!(weakened_entropy("bnm,./"), base_entropy("bnm,./"));
    }

    #[test]
    fn test_weakened_entropy_discounts_repeats() {
        // 4 + 2 * 0.75
        assert_eq!(weakened_entropy("aa"), 5.5);
        // 4 + 2 * 0.75 + 2 * 0.5625
        assert_eq!(weakened_entropy("aaa"), 6.625);
    }

    #[test]
    fn test_weakened_entropy_discount_is_per_character() {
        // Second 'a' discounted, 'b' at full weight.
        assert_eq!(weakened_entropy("aba"), 4.0 + 2.0 + 1.5);
    }
}
