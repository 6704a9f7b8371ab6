//! Modulo-10 check digits for UPC-A and EAN-13
//!
//! Both schemes weight the payload digits alternately by 3 and 1 and pick
//! the check digit that brings the weighted sum to a multiple of 10. They
//! differ only in which positions carry the weight of 3: UPC-A weights the
//! even (0-based) indices, EAN-13 the odd ones. A UPC-A code is an EAN-13
//! code with an implied leading zero, so both agree on the check digit.

use crate::kind::IdentifierKind;

/// Weights for (even, odd) payload indices, or `None` without a checksum rule.
fn weights(kind: IdentifierKind) -> Option<(u32, u32)> {
    match kind {
        IdentifierKind::UpcA => Some((3, 1)),
        IdentifierKind::Ean13 => Some((1, 3)),
        IdentifierKind::UpcE | IdentifierKind::Isni | IdentifierKind::Ipi => None,
    }
}

/// Compute the check digit for a payload (every digit but the last).
///
/// Returns `None` for kinds without a checksum rule, for payloads of the
/// wrong length, and for payloads containing non-digits.
///
/// # Examples
/// ```
/// use ddex_identifiers::{compute_check_digit, IdentifierKind};
/// assert_eq!(compute_check_digit(IdentifierKind::UpcA, "03600029145"), Some(2));
/// assert_eq!(compute_check_digit(IdentifierKind::UpcE, "0123456"), None);
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn compute_check_digit(kind: IdentifierKind, payload: &str) -> Option<u8> {
    let (even, odd) = weights(kind)?;
    if payload.len() != kind.target_len() - 1 {
        return None;
    }

    let mut sum: u32 = 0;
    for (i, byte) in payload.bytes().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let weight = if i % 2 == 0 { even } else { odd };
        sum += u32::from(byte - b'0') * weight;
    }

    Some(((10 - sum % 10) % 10) as u8)
}

/// Check whether a complete identifier carries a correct check digit.
///
/// Only meaningful at the kind's full length; any other length, or a
/// non-digit character, is `false`. Kinds without a checksum rule (UPC-E,
/// ISNI, IPI) are valid whenever they are well-formed.
///
/// # Examples
/// ```
/// use ddex_identifiers::{validate_checksum, IdentifierKind};
/// assert!(validate_checksum(IdentifierKind::UpcA, "036000291452"));
/// assert!(!validate_checksum(IdentifierKind::UpcA, "036000291451"));
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn validate_checksum(kind: IdentifierKind, digits: &str) -> bool {
    if digits.len() != kind.target_len() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if !kind.has_checksum() {
        return true;
    }

    let (payload, check) = digits.split_at(digits.len() - 1);
    let actual = check.as_bytes()[0] - b'0';
    compute_check_digit(kind, payload) == Some(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upc_a_known_codes() {
        assert!(validate_checksum(IdentifierKind::UpcA, "036000291452"));
        assert!(validate_checksum(IdentifierKind::UpcA, "012345678905"));
        assert!(!validate_checksum(IdentifierKind::UpcA, "036000291451"));
    }

    #[test]
    fn ean13_known_codes() {
        assert!(validate_checksum(IdentifierKind::Ean13, "4006381333931"));
        assert!(validate_checksum(IdentifierKind::Ean13, "9780306406157"));
        assert!(!validate_checksum(IdentifierKind::Ean13, "4006381333932"));
    }

    #[test]
    fn upc_a_is_ean13_with_leading_zero() {
        let upc = "036000291452";
        let ean = format!("0{}", upc);
        assert!(validate_checksum(IdentifierKind::UpcA, upc));
        assert!(validate_checksum(IdentifierKind::Ean13, &ean));
    }

    #[test]
    fn check_digit_zero() {
        // weighted sum is a multiple of 10
        assert_eq!(compute_check_digit(IdentifierKind::UpcA, "00000000000"), Some(0));
        assert_eq!(compute_check_digit(IdentifierKind::Ean13, "000000000000"), Some(0));
    }

    #[test]
    fn wrong_length_is_invalid() {
        assert!(!validate_checksum(IdentifierKind::UpcA, "03600029145"));
        assert!(!validate_checksum(IdentifierKind::Ean13, "036000291452"));
        assert_eq!(compute_check_digit(IdentifierKind::UpcA, "0360002914"), None);
    }

    #[test]
    fn non_digit_is_invalid() {
        assert!(!validate_checksum(IdentifierKind::UpcA, "03600029145x"));
        assert_eq!(compute_check_digit(IdentifierKind::Ean13, "40063813339a"), None);
    }

    #[test]
    fn kinds_without_rule() {
        assert!(validate_checksum(IdentifierKind::UpcE, "01234567"));
        assert!(validate_checksum(IdentifierKind::Isni, "0000000121032683"));
        assert!(validate_checksum(IdentifierKind::Ipi, "00014107338"));
        assert!(!validate_checksum(IdentifierKind::Isni, "000000012103268"));
        assert_eq!(compute_check_digit(IdentifierKind::Isni, "000000012103268"), None);
    }
}
