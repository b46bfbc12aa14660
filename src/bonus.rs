//! Bonus-bit calculator - NIST-style composition credit.

/// A bonus-bit policy: additive credit, in bits, for a whole password.
///
/// Policies must never return a negative value. The adjuster holds one of
/// these as plain data so tests can swap in [`zero_bonus`] and exercise
/// the dictionary logic in isolation.
pub type BonusPolicy = fn(&str) -> f64;

/// Full composition credit, in bits.
const COMPOSITION_BITS: f64 = 6.0;

/// Length at which composition credit starts to fade.
const FALLOFF_START: usize = 10;

/// Length at which composition credit reaches zero.
const FALLOFF_END: usize = 20;

/// Default policy: composition credit with a length falloff.
///
/// A password mixing uppercase, lowercase and at least one non-alphabetic
/// character earns up to [`COMPOSITION_BITS`] bits. The credit is full up
/// to 10 characters and fades linearly to zero at 20 - long passwords do
/// not need composition rules to be strong.
pub fn nist_bonus_bits(password: &str) -> f64 {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_other = password.chars().any(|c| !c.is_alphabetic());

    if !(has_upper && has_lower && has_other) {
        return 0.0;
    }

    let len = password.chars().count();
    let falloff = ((FALLOFF_END as f64 - len as f64) / (FALLOFF_END - FALLOFF_START) as f64)
        .clamp(0.0, 1.0);
    COMPOSITION_BITS * falloff
}

/// Fixed-zero policy for isolation tests.
pub fn zero_bonus(_password: &str) -> f64 {
    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credit_without_mixed_composition() {
        assert_eq!(nist_bonus_bits("password"), 0.0);
        assert_eq!(nist_bonus_bits("PASSWORD1"), 0.0);
        assert_eq!(nist_bonus_bits("12345678"), 0.0);
        assert_eq!(nist_bonus_bits(""), 0.0);
    }

    #[test]
    fn test_full_credit_for_short_mixed_password() {
        assert_eq!(nist_bonus_bits("Ab1"), 6.0);
        assert_eq!(nist_bonus_bits("MyP@ssw0rd"), 6.0);
    }

    #[test]
    fn test_credit_fades_with_length() {
        // 15 chars: halfway through the falloff window.
        assert_eq!(nist_bonus_bits("Abcdefghijklm1!"), 3.0);
        // 20 chars: fully faded.
        assert_eq!(nist_bonus_bits("administratorWEQ@123"), 0.0);
        assert_eq!(nist_bonus_bits("Abcdefghijklmnopqr1!aaaa"), 0.0);
    }

    #[test]
    fn test_never_negative() {
        for pwd in ["", "a", "A1a", "Abcdefghijklmnopqrstuvwxyz0!"] {
            assert!(nist_bonus_bits(pwd) >= 0.0);
        }
    }

    #[test]
    fn test_zero_bonus_stub() {
        assert_eq!(zero_bonus("MyP@ssw0rd"), 0.0);
    }
}
