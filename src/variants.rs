//! Variant generator - normalized rewritings used for dictionary comparison.
//!
//! Dictionary words rarely appear verbatim: `p@ssw0rd` hides `password`
//! behind leetspeak substitutions, and some users reverse a weak word and
//! call it a day. The generator produces the normalized forms the adjuster
//! compares against the dictionary. Variants are never returned to callers
//! of the public scoring API.

/// Decodes one leetspeak character to the letter it stands in for.
///
/// `1` is ambiguous (`i` or `l`); this is the primary reading. Characters
/// without a mapping (letters, punctuation, brackets, whitespace) pass
/// through untouched.
fn decode_leet(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '2' => 'z',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '6' => 'g',
        '7' => 't',
        '8' => 'b',
        '9' => 'g',
        '@' => 'a',
        '$' => 's',
        '!' => 'i',
        '+' => 't',
        _ => c,
    }
}

/// Alternate reading of `1` as `l`.
fn decode_leet_alt(c: char) -> char {
    match c {
        '1' => 'l',
        _ => decode_leet(c),
    }
}

fn push_unique(variants: &mut Vec<String>, candidate: String) {
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}

/// Returns the finite, order-stable set of normalized variants of `text`.
///
/// The case-folded text itself comes first, followed by its leet
/// decodings, its reversal, and the decodings of the reversal. Input
/// containing two or more whitespace-separated words additionally
/// contributes the same forms with the word order reversed (each word
/// still read forwards), so a weak word at the end of a passphrase is
/// compared from the front as well. Duplicates are dropped, keeping the
/// first occurrence. Deterministic for a given input; defined for any
/// string, including empty.
pub fn all_variants(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();

    let mut variants = Vec::with_capacity(6);
    push_decoded_forms(&mut variants, &folded);

    let words: Vec<&str> = folded.split_whitespace().collect();
    if words.len() > 1 {
        let reordered = words.into_iter().rev().collect::<Vec<_>>().join(" ");
        push_decoded_forms(&mut variants, &reordered);
    }
    variants
}

/// The six decoded forms of one base string: itself, its two leet
/// decodings, its reversal and the decodings of the reversal.
fn push_decoded_forms(variants: &mut Vec<String>, base: &str) {
    let reversed: String = base.chars().rev().collect();
    for form in [base, reversed.as_str()] {
        push_unique(variants, form.to_owned());
        push_unique(variants, form.chars().map(decode_leet).collect());
        push_unique(variants, form.chars().map(decode_leet_alt).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fold_comes_first() {
        let variants = all_variants("PassWord");
        assert_eq!(variants[0], "password");
    }

    #[test]
    fn test_leet_decoding() {
        let variants = all_variants("p@ssw0rd");
        assert!(variants.contains(&"password".to_string()));
    }

    #[test]
    fn test_ambiguous_one_gets_both_readings() {
        let variants = all_variants("he11o");
        assert!(variants.contains(&"heiio".to_string()));
        assert!(variants.contains(&"hello".to_string()));
    }

    #[test]
    fn test_reversal_included() {
        let variants = all_variants("drowssap");
        assert!(variants.contains(&"password".to_string()));
    }

    #[test]
    fn test_punctuation_passes_through() {
        let variants = all_variants("asdf)asdf");
        assert_eq!(variants[0], "asdf)asdf");
        let variants = all_variants("a[b]c(d)");
        assert!(variants.iter().all(|v| v.chars().count() == 8));
    }

    #[test]
    fn test_deterministic_and_deduplicated() {
        let first = all_variants("abc123");
        let second = all_variants("abc123");
        assert_eq!(first, second);

        // No mappable characters and a palindrome: collapses to one form.
        assert_eq!(all_variants("aba"), vec!["aba".to_string()]);
    }

    #[test]
    fn test_multi_word_input_gets_word_order_reversal() {
        let variants = all_variants("h#e0zbPas 32e2i81 password");
        assert!(variants.contains(&"password 32e2i81 h#e0zbpas".to_string()));
        // The reordered form is leet-decoded like any other base form.
        assert!(variants.contains(&"password ezezibi h#eozbpas".to_string()));
    }

    #[test]
    fn test_single_word_input_gets_no_word_order_forms() {
        assert_eq!(all_variants("password").len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(all_variants(""), vec![String::new()]);
    }
}
