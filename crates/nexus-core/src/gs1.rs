//! # GS1 Identifier Validation
//!
//! Stateless Mod-10 check-digit validation for the GS1 identifiers used
//! across the Nexus trade platform.
//!
//! ## Identifier Formats
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      GS1 Identifier Lengths                             │
//! │                                                                         │
//! │  GTIN-14  trade item          14 digits   e.g. 00012345678905          │
//! │  GLN-13   location            13 digits   e.g. 0614141000005           │
//! │  SSCC-18  logistic unit       18 digits                                │
//! │                                                                         │
//! │  The last digit of each is a Mod-10 check digit over the preceding    │
//! │  digits with alternating 3/1 weights.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check-Digit Worked Example (GTIN-14 `00012345678905`)
//! ```text
//! digits   0 0 0 1 2 3 4 5 6 7 8 9 0 | 5
//! weights  3 1 3 1 3 1 3 1 3 1 3 1 3 | (check)
//! sum      0+0+0+1+6+3+12+5+18+7+24+9+0 = 85
//! check    (10 - 85 % 10) % 10 = 5  ✓
//! ```
//!
//! All functions here are pure: no state, no I/O, safe for unbounded
//! concurrent callers.

// GS1 assigns weight 3 counting positions from the RIGHT end of the body
// (the digit next to the check digit always carries weight 3). For 14- and
// 18-digit codes that is the even 0-indexed positions from the left; for
// 13-digit codes it is the odd ones. Iterating the body in reverse makes
// the same helper correct for every length.
fn mod10_check_digit(body: &[u8]) -> u8 {
    let sum: u32 = body
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                u32::from(d) * 3
            } else {
                u32::from(d)
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Parses a code into digit values, or None if any byte is not a decimal digit.
fn digits(code: &str) -> Option<Vec<u8>> {
    if code.bytes().all(|b| b.is_ascii_digit()) && !code.is_empty() {
        Some(code.bytes().map(|b| b - b'0').collect())
    } else {
        None
    }
}

fn validate_with_length(code: &str, expected_len: usize) -> bool {
    match digits(code) {
        Some(ds) if ds.len() == expected_len => {
            mod10_check_digit(&ds[..expected_len - 1]) == ds[expected_len - 1]
        }
        _ => false,
    }
}

// =============================================================================
// Public Validators
// =============================================================================

/// Validates a GTIN-14 (Global Trade Item Number).
///
/// Returns `false` unless the code is exactly 14 decimal digits and the
/// final digit matches the Mod-10 check digit of the first 13.
///
/// ## Example
/// ```rust
/// use nexus_core::gs1::validate_gtin;
///
/// assert!(validate_gtin("00012345678905"));
/// assert!(!validate_gtin("00012345678904")); // wrong check digit
/// assert!(!validate_gtin("0001234567890"));  // wrong length
/// ```
pub fn validate_gtin(code: &str) -> bool {
    validate_with_length(code, 14)
}

/// Validates a GLN-13 (Global Location Number).
pub fn validate_gln(code: &str) -> bool {
    validate_with_length(code, 13)
}

/// Validates an SSCC-18 (Serial Shipping Container Code).
pub fn validate_sscc(code: &str) -> bool {
    validate_with_length(code, 18)
}

/// Computes the Mod-10 check digit for an identifier body (the code without
/// its final digit).
///
/// Returns `None` if the body contains non-digit characters or is empty.
/// Used when minting identifiers and when constructing test vectors.
///
/// ## Example
/// ```rust
/// use nexus_core::gs1::compute_check_digit;
///
/// assert_eq!(compute_check_digit("0001234567890"), Some(5));
/// assert_eq!(compute_check_digit("00012x4567890"), None);
/// ```
pub fn compute_check_digit(body: &str) -> Option<u8> {
    digits(body).map(|ds| mod10_check_digit(&ds))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gtin_published_vector() {
        // GS1 check-digit calculator reference value
        assert!(validate_gtin("00012345678905"));
    }

    #[test]
    fn test_gtin_flipped_check_digit_fails() {
        assert!(!validate_gtin("00012345678904"));
        assert!(!validate_gtin("00012345678906"));
    }

    #[test]
    fn test_gtin_format_rejection() {
        assert!(!validate_gtin(""));
        assert!(!validate_gtin("0001234567890")); // 13 digits
        assert!(!validate_gtin("000123456789055")); // 15 digits
        assert!(!validate_gtin("0001234567890x"));
        assert!(!validate_gtin("　0012345678905")); // non-ASCII digit
    }

    #[test]
    fn test_gln_published_vector() {
        // GS1 demo company prefix 0614141
        assert!(validate_gln("0614141000005"));
        assert!(!validate_gln("0614141000004"));
    }

    #[test]
    fn test_sscc_round_trip() {
        let body = "00614141123456789";
        let check = compute_check_digit(body).unwrap();
        let sscc = format!("{}{}", body, check);
        assert!(validate_sscc(&sscc));

        let flipped = format!("{}{}", body, (check + 1) % 10);
        assert!(!validate_sscc(&flipped));
    }

    #[test]
    fn test_check_digit_all_lengths_agree_with_validators() {
        for code in ["00012345678905", "0614141000005"] {
            let (body, last) = code.split_at(code.len() - 1);
            assert_eq!(
                compute_check_digit(body),
                Some(last.as_bytes()[0] - b'0')
            );
        }
    }

    #[test]
    fn test_compute_check_digit_rejects_non_digits() {
        assert_eq!(compute_check_digit(""), None);
        assert_eq!(compute_check_digit("12a4"), None);
    }

    #[test]
    fn test_validation_is_pure() {
        // Same input, same output, across repeated calls
        for _ in 0..3 {
            assert!(validate_gtin("00012345678905"));
            assert!(!validate_gtin("99999999999999"));
        }
    }

    #[test]
    fn test_all_zero_body_has_zero_check() {
        // Degenerate but format-valid: sum = 0 -> check digit 0
        assert!(validate_gtin("00000000000000"));
    }
}
