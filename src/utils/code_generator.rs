//! Random short code generation.

use rand::{Rng, distr::Alphanumeric};

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 7;

/// Codes that would be shadowed by fixed routes and so can never be stored.
pub const RESERVED_CODES: &[&str] = &["healthz"];

/// Generates a random short code.
///
/// Draws [`GENERATED_CODE_LENGTH`] characters uniformly from the 62-character
/// alphabet `[A-Za-z0-9]` using the thread-local CSPRNG, giving a space of
/// 62^7 (about 3.5 * 10^12) codes. Uniqueness is not guaranteed here; the
/// caller retries on collision.
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` is reserved for a system route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::is_valid_code;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        assert_eq!(generate_code().len(), GENERATED_CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_is_valid_code() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_valid_code(&code), "generated invalid code {code:?}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..100).map(|_| generate_code()).collect();

        assert!(codes.len() > 95);
    }

    #[test]
    fn test_generate_code_uses_whole_alphabet() {
        let mut seen_upper = false;
        let mut seen_lower = false;
        let mut seen_digit = false;

        for _ in 0..200 {
            for c in generate_code().chars() {
                seen_upper |= c.is_ascii_uppercase();
                seen_lower |= c.is_ascii_lowercase();
                seen_digit |= c.is_ascii_digit();
            }
        }

        assert!(seen_upper && seen_lower && seen_digit);
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("healthz"));
        assert!(!is_reserved("GITHUB"));
    }
}
