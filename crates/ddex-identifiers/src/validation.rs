//! Classification of partially typed identifiers
//!
//! One state machine serves every family. Length decides between empty,
//! incomplete, ambiguous and complete; complete barcodes of a checksummed
//! kind then go through the check digit test.
//!
//! Problems are returned as data. `TooShort` and `AmbiguousLength` describe
//! input that may still be in progress and are only surfaced once the field
//! has been touched (left at least once since the last digit was added).
//! `InvalidChecksum` is definitive and always surfaced.

use crate::checksum::validate_checksum;
use crate::kind::{IdentifierFamily, IdentifierKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where a digit string stands relative to its family's target lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum Classification {
    Empty,
    /// Fewer digits than the smallest target length
    Incomplete,
    /// At least the smallest target length, but matching none
    AmbiguousLength,
    CompleteValid,
    /// Target length reached, check digit wrong
    CompleteInvalidChecksum,
}

impl Classification {
    pub fn is_complete(self) -> bool {
        matches!(
            self,
            Classification::CompleteValid | Classification::CompleteInvalidChecksum
        )
    }
}

/// A problem with the current input; `Display` is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum IdentifierIssue {
    #[error("Too short: {len} of minimum {min} digits")]
    TooShort { len: u32, min: u32 },

    #[error("{len} digits matches no known {family} format")]
    AmbiguousLength { len: u32, family: IdentifierFamily },

    #[error("Invalid {kind} check digit")]
    InvalidChecksum { kind: IdentifierKind },

    #[error("Too long: {len} digits exceeds maximum of {max}")]
    TooLong { len: u32, max: u32 },

    #[error("Unexpected character '{character}' in {family}")]
    InvalidCharacter {
        character: String,
        family: IdentifierFamily,
    },
}

/// Classification plus the issue to show, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Verdict {
    pub classification: Classification,
    pub issue: Option<IdentifierIssue>,
}

impl Verdict {
    fn clean(classification: Classification) -> Self {
        Self {
            classification,
            issue: None,
        }
    }

    /// An in-progress state whose issue only shows once touched.
    fn gated(classification: Classification, issue: IdentifierIssue, touched: bool) -> Self {
        Self {
            classification,
            issue: touched.then_some(issue),
        }
    }

    /// Whether an error should be shown.
    pub fn is_error(&self) -> bool {
        self.issue.is_some()
    }

    /// The message to show, if any.
    pub fn message(&self) -> Option<String> {
        self.issue.as_ref().map(ToString::to_string)
    }
}

/// Classify a normalized digit string.
///
/// Rules, in order:
/// 1. Empty input is `Empty` with no issue.
/// 2. Below the smallest target length is `Incomplete`; gated on `touched`.
/// 3. No target length matches is `AmbiguousLength`; gated on `touched`.
/// 4. A target length matches: `CompleteValid`, or `CompleteInvalidChecksum`
///    with an ungated issue when the check digit is wrong.
///
/// Input containing a non-digit, or longer than the family maximum, cannot
/// come out of [`normalize`]; it is logged as an error and reported as
/// `InvalidCharacter` or `TooLong`, never as a checksum failure.
///
/// [`normalize`]: crate::normalize::normalize
///
/// # Examples
/// ```
/// use ddex_identifiers::{classify, Classification, IdentifierFamily};
/// let verdict = classify(IdentifierFamily::Barcode, "036000291452", false);
/// assert_eq!(verdict.classification, Classification::CompleteValid);
///
/// let verdict = classify(IdentifierFamily::Barcode, "03600029145", false);
/// assert_eq!(verdict.classification, Classification::AmbiguousLength);
/// assert!(!verdict.is_error());
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn classify(family: IdentifierFamily, digits: &str, touched: bool) -> Verdict {
    let verdict = classify_digits(family, digits, touched);
    tracing::debug!(
        %family,
        len = digits.len(),
        classification = ?verdict.classification,
        shown = verdict.is_error(),
        "classified"
    );
    verdict
}

fn classify_digits(family: IdentifierFamily, digits: &str, touched: bool) -> Verdict {
    let len = digits.chars().count();
    if len == 0 {
        return Verdict::clean(Classification::Empty);
    }

    if let Some(character) = digits.chars().find(|c| !c.is_ascii_digit()) {
        tracing::error!(%family, %character, "classify called with un-normalized input");
        return Verdict {
            classification: Classification::AmbiguousLength,
            issue: Some(IdentifierIssue::InvalidCharacter {
                character: character.to_string(),
                family,
            }),
        };
    }

    let min = family.min_len();
    if len < min {
        return Verdict::gated(
            Classification::Incomplete,
            IdentifierIssue::TooShort {
                len: len as u32,
                min: min as u32,
            },
            touched,
        );
    }

    if let Some(kind) = family.kind_for_len(len) {
        if validate_checksum(kind, digits) {
            return Verdict::clean(Classification::CompleteValid);
        }
        tracing::debug!(%kind, "check digit mismatch");
        return Verdict {
            classification: Classification::CompleteInvalidChecksum,
            issue: Some(IdentifierIssue::InvalidChecksum { kind }),
        };
    }

    let max = family.max_len();
    if len > max {
        tracing::error!(%family, len, max, "classify called with un-normalized input");
        return Verdict {
            classification: Classification::AmbiguousLength,
            issue: Some(IdentifierIssue::TooLong {
                len: len as u32,
                max: max as u32,
            }),
        };
    }

    Verdict::gated(
        Classification::AmbiguousLength,
        IdentifierIssue::AmbiguousLength {
            len: len as u32,
            family,
        },
        touched,
    )
}
