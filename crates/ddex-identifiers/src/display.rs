//! Progressive display masks
//!
//! Each family has a small ordered table of masks keyed by how many digits
//! are present. The first mask whose `max_len` covers the current length is
//! applied, so the grouping follows the user while typing instead of
//! snapping into place once a target length is reached.
//!
//! Separators are only ever placed between two digits that exist.

use crate::config::DisplayConfig;
use crate::kind::IdentifierFamily;

/// Digit grouping applied to inputs of up to `max_len` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mask {
    pub max_len: usize,
    pub groups: &'static [usize],
}

const BARCODE_MASKS: &[Mask] = &[
    // UPC-E: number system, 6 digits, check digit
    Mask { max_len: 8, groups: &[1, 6, 1] },
    // UPC-A: number system, manufacturer, product, check digit
    Mask { max_len: 12, groups: &[1, 5, 5, 1] },
    // EAN-13: first digit, two halves of 6
    Mask { max_len: 13, groups: &[1, 6, 6] },
];

const ISNI_MASKS: &[Mask] = &[Mask { max_len: 16, groups: &[4, 4, 4, 4] }];

// Ungrouped
const IPI_MASKS: &[Mask] = &[Mask { max_len: 11, groups: &[11] }];

/// The mask table for a family, ordered by `max_len`.
pub fn masks(family: IdentifierFamily) -> &'static [Mask] {
    match family {
        IdentifierFamily::Barcode => BARCODE_MASKS,
        IdentifierFamily::Isni => ISNI_MASKS,
        IdentifierFamily::Ipi => IPI_MASKS,
    }
}

/// The mask applied to `len` digits, if the family has one that long.
pub fn mask_for(family: IdentifierFamily, len: usize) -> Option<Mask> {
    masks(family).iter().copied().find(|mask| len <= mask.max_len)
}

/// Render digits with the family's progressive grouping, using `-`.
///
/// The display string is for presentation only; the digits remain the value
/// of record.
///
/// # Examples
/// ```
/// use ddex_identifiers::{format, IdentifierFamily};
/// assert_eq!(format(IdentifierFamily::Barcode, "036000291452"), "0-36000-29145-2");
/// assert_eq!(format(IdentifierFamily::Isni, "0000000012345"), "0000-0000-1234-5");
/// assert_eq!(format(IdentifierFamily::Ipi, "00014107338"), "00014107338");
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn format(family: IdentifierFamily, digits: &str) -> String {
    format_with(family, digits, &DisplayConfig::default())
}

/// Render digits with the family's progressive grouping and a custom separator.
pub fn format_with(family: IdentifierFamily, digits: &str, config: &DisplayConfig) -> String {
    let len = digits.chars().count();
    let Some(mask) = mask_for(family, len) else {
        return digits.to_string();
    };

    let mut boundaries = mask
        .groups
        .iter()
        .scan(0, |offset, &size| {
            *offset += size;
            Some(*offset)
        })
        .peekable();

    let mut out = String::with_capacity(digits.len() + mask.groups.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && boundaries.peek() == Some(&i) {
            out.push(config.separator);
            boundaries.next();
        }
        out.push(c);
    }
    out
}
