//! Digit normalization and barcode format detection

use crate::kind::{IdentifierFamily, IdentifierKind};

/// Reduce raw input to the digits of record for a field.
///
/// Keeps ASCII digits only and truncates to the family's maximum length.
/// Excess trailing digits are dropped without error.
///
/// # Examples
/// ```
/// use ddex_identifiers::{normalize, IdentifierFamily};
/// assert_eq!(normalize(IdentifierFamily::Barcode, "0 36000-29145 2"), "036000291452");
/// assert_eq!(normalize(IdentifierFamily::Ipi, "IPI 00014107338 99"), "00014107338");
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn normalize(family: IdentifierFamily, raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(family.max_len())
        .collect()
}

/// Detect the barcode kind from a normalized digit string.
///
/// Matches on exact length only: 8 is UPC-E, 12 is UPC-A, 13 is EAN-13.
/// Any other length (including a prefix of a longer code) yields `None`.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn detect_barcode_kind(digits: &str) -> Option<IdentifierKind> {
    IdentifierFamily::Barcode.kind_for_len(digits.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_digits() {
        assert_eq!(normalize(IdentifierFamily::Barcode, "a1b2-c3 "), "123");
        assert_eq!(normalize(IdentifierFamily::Isni, "0000 0001 2345 6789"), "0000000123456789");
    }

    #[test]
    fn caps_length_per_family() {
        let long = "12345678901234567890";
        assert_eq!(normalize(IdentifierFamily::Barcode, long).len(), 13);
        assert_eq!(normalize(IdentifierFamily::Isni, long).len(), 16);
        assert_eq!(normalize(IdentifierFamily::Ipi, long).len(), 11);
        assert_eq!(normalize(IdentifierFamily::Ipi, long), "12345678901");
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not digits of record
        assert_eq!(normalize(IdentifierFamily::Barcode, "١٢٣１２３123"), "123");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(IdentifierFamily::Barcode, ""), "");
        assert_eq!(normalize(IdentifierFamily::Isni, "ISNI"), "");
    }

    #[test]
    fn detects_by_exact_length() {
        assert_eq!(detect_barcode_kind("01234565"), Some(IdentifierKind::UpcE));
        assert_eq!(detect_barcode_kind("036000291452"), Some(IdentifierKind::UpcA));
        assert_eq!(detect_barcode_kind("4006381333931"), Some(IdentifierKind::Ean13));
        assert_eq!(detect_barcode_kind("03600029145"), None);
        assert_eq!(detect_barcode_kind("0360002"), None);
        assert_eq!(detect_barcode_kind(""), None);
    }
}
