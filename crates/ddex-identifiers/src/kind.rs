//! Identifier kinds and the families they are entered under.
//!
//! A field in the release form accepts a *family* of identifiers. The barcode
//! family covers three concrete kinds (UPC-E, UPC-A, EAN-13) that are told
//! apart only by digit count, so the concrete kind is known once the user has
//! typed a matching number of digits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Family of identifiers accepted by a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum IdentifierFamily {
    /// Product barcodes: UPC-E, UPC-A, EAN-13
    Barcode,
    /// International Standard Name Identifier
    Isni,
    /// Interested Party Information number
    Ipi,
}

impl IdentifierFamily {
    /// Get all identifier families
    pub fn all() -> &'static [IdentifierFamily] {
        &[
            IdentifierFamily::Barcode,
            IdentifierFamily::Isni,
            IdentifierFamily::Ipi,
        ]
    }

    /// Concrete kinds in this family, ordered by target length.
    pub fn kinds(self) -> &'static [IdentifierKind] {
        match self {
            IdentifierFamily::Barcode => &[
                IdentifierKind::UpcE,
                IdentifierKind::UpcA,
                IdentifierKind::Ean13,
            ],
            IdentifierFamily::Isni => &[IdentifierKind::Isni],
            IdentifierFamily::Ipi => &[IdentifierKind::Ipi],
        }
    }

    /// Digit counts that form a complete identifier, ascending.
    pub fn target_lengths(self) -> &'static [usize] {
        match self {
            IdentifierFamily::Barcode => &[8, 12, 13],
            IdentifierFamily::Isni => &[16],
            IdentifierFamily::Ipi => &[11],
        }
    }

    /// Smallest complete digit count.
    pub fn min_len(self) -> usize {
        self.target_lengths()[0]
    }

    /// Largest complete digit count; input is capped here.
    pub fn max_len(self) -> usize {
        match self {
            IdentifierFamily::Barcode => 13,
            IdentifierFamily::Isni => 16,
            IdentifierFamily::Ipi => 11,
        }
    }

    /// The kind whose target length is exactly `len`, if any.
    pub fn kind_for_len(self, len: usize) -> Option<IdentifierKind> {
        self.kinds()
            .iter()
            .copied()
            .find(|kind| kind.target_len() == len)
    }

    /// Name used in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            IdentifierFamily::Barcode => "barcode",
            IdentifierFamily::Isni => "ISNI",
            IdentifierFamily::Ipi => "IPI",
        }
    }
}

impl fmt::Display for IdentifierFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Concrete identifier kind with a fixed digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum IdentifierKind {
    /// 12-digit Universal Product Code
    UpcA,
    /// 13-digit European Article Number
    Ean13,
    /// 8-digit zero-suppressed UPC
    UpcE,
    /// 16-digit ISNI
    Isni,
    /// 11-digit IPI name number
    Ipi,
}

impl IdentifierKind {
    /// Get all identifier kinds
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::UpcA,
            IdentifierKind::Ean13,
            IdentifierKind::UpcE,
            IdentifierKind::Isni,
            IdentifierKind::Ipi,
        ]
    }

    pub fn target_len(self) -> usize {
        match self {
            IdentifierKind::UpcA => 12,
            IdentifierKind::Ean13 => 13,
            IdentifierKind::UpcE => 8,
            IdentifierKind::Isni => 16,
            IdentifierKind::Ipi => 11,
        }
    }

    pub fn family(self) -> IdentifierFamily {
        match self {
            IdentifierKind::UpcA | IdentifierKind::Ean13 | IdentifierKind::UpcE => {
                IdentifierFamily::Barcode
            }
            IdentifierKind::Isni => IdentifierFamily::Isni,
            IdentifierKind::Ipi => IdentifierFamily::Ipi,
        }
    }

    /// Whether the last digit is a modulo-10 check digit we verify.
    ///
    /// ISNI and IPI carry check characters of their own, but they are
    /// accepted at full length without verification.
    pub fn has_checksum(self) -> bool {
        matches!(self, IdentifierKind::UpcA | IdentifierKind::Ean13)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            IdentifierKind::UpcA => "UPC-A",
            IdentifierKind::Ean13 => "EAN-13",
            IdentifierKind::UpcE => "UPC-E",
            IdentifierKind::Isni => "ISNI",
            IdentifierKind::Ipi => "IPI",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a kind name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identifier kind '{0}' (expected upc-a, ean-13, upc-e, isni or ipi)")]
pub struct ParseKindError(pub String);

/// Error returned when a family name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown identifier family '{0}' (expected barcode, isni or ipi)")]
pub struct ParseFamilyError(pub String);

/// Lowercase and drop separators so "UPC-A", "upc_a" and "upca" compare equal.
fn fold_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for IdentifierKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_name(s).as_str() {
            "upca" | "upc" => Ok(IdentifierKind::UpcA),
            "ean13" | "ean" => Ok(IdentifierKind::Ean13),
            "upce" => Ok(IdentifierKind::UpcE),
            "isni" => Ok(IdentifierKind::Isni),
            "ipi" => Ok(IdentifierKind::Ipi),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

impl FromStr for IdentifierFamily {
    type Err = ParseFamilyError;

    /// Accepts family names as well as any kind name, which maps to its family.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_name(s).as_str() {
            "barcode" | "gtin" => Ok(IdentifierFamily::Barcode),
            _ => s
                .parse::<IdentifierKind>()
                .map(IdentifierKind::family)
                .map_err(|_| ParseFamilyError(s.to_string())),
        }
    }
}
