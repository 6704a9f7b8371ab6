// Allow manual modulo checks since .is_multiple_of() is nightly-only
#![allow(clippy::manual_is_multiple_of)]

//! Incremental validation and formatting for release identifiers
//!
//! This crate backs the identifier inputs of the release metadata forms:
//! - Digit normalization with per-family length caps
//! - Barcode kind detection (UPC-E, UPC-A, EAN-13) by digit count
//! - Modulo-10 check digits for UPC-A and EAN-13
//! - Progressive hyphen grouping for display
//! - Touched-gated classification of partial input
//! - Per-field interaction state
//! - Random fixtures with valid check digits
//!
//! Every operation is a pure function of its inputs. The digit string is the
//! value of record; display strings are for presentation only.

pub mod checksum;
pub mod config;
pub mod display;
pub mod field;
pub mod fixture;
pub mod kind;
pub mod normalize;
pub mod validation;

pub use checksum::*;
pub use config::{ConfigError, DisplayConfig, EngineConfig, DEFAULT_SEPARATOR};
pub use display::{format, format_with, mask_for, masks, Mask};
pub use field::*;
pub use fixture::*;
pub use kind::*;
pub use normalize::*;
pub use validation::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "native")]
uniffi::setup_scaffolding!();
