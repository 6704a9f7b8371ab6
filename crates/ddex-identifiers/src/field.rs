//! Per-field interaction state and reports
//!
//! UI collaborators call the engine on every keystroke and on focus loss.
//! [`FieldState`] keeps the digits of record and the touched flag for one
//! input and returns a [`FieldReport`] with everything to render.
//!
//! The touched flag is set on blur and cleared only when the digit count
//! grows. Deleting digits while touched keeps feedback visible; typing more
//! digits hides in-progress errors again until the next blur.

use crate::config::{DisplayConfig, EngineConfig};
use crate::display::format_with;
use crate::kind::{IdentifierFamily, IdentifierKind};
use crate::normalize::normalize;
use crate::validation::{classify, Classification};
use serde::{Deserialize, Serialize};

/// Whether the user has left the field since last adding digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum InteractionState {
    #[default]
    Untouched,
    Touched,
}

impl InteractionState {
    pub fn is_touched(self) -> bool {
        self == InteractionState::Touched
    }
}

impl From<bool> for InteractionState {
    fn from(touched: bool) -> Self {
        if touched {
            InteractionState::Touched
        } else {
            InteractionState::Untouched
        }
    }
}

/// Everything a field needs to render after an input event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct FieldReport {
    /// Digits of record, to be stored verbatim
    pub digits: String,
    /// Grouped presentation of `digits`
    pub display: String,
    /// Concrete kind, once the input is complete
    pub kind: Option<IdentifierKind>,
    pub classification: Classification,
    /// Error to show, if any
    pub message: Option<String>,
    pub touched: bool,
}

fn build_report(
    family: IdentifierFamily,
    digits: String,
    touched: bool,
    display: &DisplayConfig,
) -> FieldReport {
    let verdict = classify(family, &digits, touched);
    let kind = if verdict.classification.is_complete() {
        family.kind_for_len(digits.len())
    } else {
        None
    };
    FieldReport {
        display: format_with(family, &digits, display),
        kind,
        classification: verdict.classification,
        message: verdict.message(),
        digits,
        touched,
    }
}

/// Normalize, format and classify raw input in one call.
///
/// # Examples
/// ```
/// use ddex_identifiers::{evaluate, Classification, IdentifierFamily, IdentifierKind};
/// let report = evaluate(IdentifierFamily::Barcode, "0-36000-29145-2", false);
/// assert_eq!(report.digits, "036000291452");
/// assert_eq!(report.kind, Some(IdentifierKind::UpcA));
/// assert_eq!(report.classification, Classification::CompleteValid);
/// ```
#[cfg_attr(feature = "native", uniffi::export)]
pub fn evaluate(family: IdentifierFamily, raw: &str, touched: bool) -> FieldReport {
    evaluate_with(family, raw, touched, &DisplayConfig::default())
}

/// [`evaluate`] with custom display settings.
pub fn evaluate_with(
    family: IdentifierFamily,
    raw: &str,
    touched: bool,
    display: &DisplayConfig,
) -> FieldReport {
    build_report(family, normalize(family, raw), touched, display)
}

/// State of a single identifier input field.
#[derive(Debug, Clone)]
pub struct FieldState {
    family: IdentifierFamily,
    digits: String,
    interaction: InteractionState,
    display: DisplayConfig,
}

impl FieldState {
    /// Create an empty, untouched field.
    pub fn new(family: IdentifierFamily) -> Self {
        Self::with_config(family, &EngineConfig::default())
    }

    pub fn with_config(family: IdentifierFamily, config: &EngineConfig) -> Self {
        Self {
            family,
            digits: String::new(),
            interaction: InteractionState::Untouched,
            display: config.display.clone(),
        }
    }

    pub fn family(&self) -> IdentifierFamily {
        self.family
    }

    /// Digits of record.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn is_touched(&self) -> bool {
        self.interaction.is_touched()
    }

    /// Handle the field's new raw text after a keystroke or paste.
    pub fn input(&mut self, raw: &str) -> FieldReport {
        let digits = normalize(self.family, raw);
        if self.interaction.is_touched() && digits.len() > self.digits.len() {
            self.interaction = InteractionState::Untouched;
        }
        self.digits = digits;
        self.report()
    }

    /// Handle focus loss.
    pub fn blur(&mut self) -> FieldReport {
        self.interaction = InteractionState::Touched;
        self.report()
    }

    /// Clear the field back to its initial state.
    pub fn reset(&mut self) {
        self.digits.clear();
        self.interaction = InteractionState::Untouched;
    }

    /// Report for the current state, without changing it.
    pub fn report(&self) -> FieldReport {
        build_report(
            self.family,
            self.digits.clone(),
            self.interaction.is_touched(),
            &self.display,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_hides_length_errors() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        let report = field.input("0360");
        assert_eq!(report.classification, Classification::Incomplete);
        assert_eq!(report.message, None);
        assert!(!report.touched);
    }

    #[test]
    fn blur_surfaces_length_errors() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        field.input("0360002914");
        let report = field.blur();
        assert!(report.touched);
        assert_eq!(
            report.message.as_deref(),
            Some("10 digits matches no known barcode format")
        );
    }

    #[test]
    fn adding_digits_resets_touched() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        field.input("0360002914");
        field.blur();
        let report = field.input("03600029145");
        assert!(!report.touched);
        assert_eq!(report.message, None);
        assert_eq!(field.interaction(), InteractionState::Untouched);
    }

    #[test]
    fn deleting_digits_keeps_touched() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        field.input("0360002914");
        field.blur();
        let report = field.input("036000291");
        assert!(report.touched);
        assert!(report.message.is_some());
    }

    #[test]
    fn same_digit_count_keeps_touched() {
        // A stray non-digit keystroke does not change the digits
        let mut field = FieldState::new(IdentifierFamily::Isni);
        field.input("0000 0001");
        field.blur();
        let report = field.input("0000 0001 ");
        assert!(report.touched);
        assert_eq!(report.message.as_deref(), Some("Too short: 8 of minimum 16 digits"));
    }

    #[test]
    fn checksum_error_while_typing() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        let report = field.input("036000291451");
        assert!(!report.touched);
        assert_eq!(report.classification, Classification::CompleteInvalidChecksum);
        assert_eq!(report.kind, Some(IdentifierKind::UpcA));
        assert_eq!(report.message.as_deref(), Some("Invalid UPC-A check digit"));
    }

    #[test]
    fn report_uses_configured_separator() {
        let mut config = EngineConfig::default();
        config.display.separator = ' ';
        let mut field = FieldState::with_config(IdentifierFamily::Isni, &config);
        let report = field.input("0000000121032683");
        assert_eq!(report.display, "0000 0001 2103 2683");
        assert_eq!(report.digits, "0000000121032683");
        assert_eq!(report.kind, Some(IdentifierKind::Isni));
    }

    #[test]
    fn reset_clears() {
        let mut field = FieldState::new(IdentifierFamily::Ipi);
        field.input("123");
        field.blur();
        field.reset();
        assert_eq!(field.digits(), "");
        assert!(!field.is_touched());
        assert_eq!(field.report().classification, Classification::Empty);
    }

    #[test]
    fn truncates_pasted_input() {
        let mut field = FieldState::new(IdentifierFamily::Ipi);
        let report = field.input("00014107338-0001");
        assert_eq!(report.digits, "00014107338");
        assert_eq!(report.classification, Classification::CompleteValid);
    }

    #[test]
    fn kind_only_when_complete() {
        let mut field = FieldState::new(IdentifierFamily::Barcode);
        assert_eq!(field.input("0360002914").kind, None);
        assert_eq!(field.input("03600029").kind, Some(IdentifierKind::UpcE));
        assert_eq!(field.input("036000291451").kind, Some(IdentifierKind::UpcA));
    }

    #[test]
    fn interaction_from_bool() {
        assert_eq!(InteractionState::from(true), InteractionState::Touched);
        assert!(!InteractionState::from(false).is_touched());
    }
}
