//! Random identifiers for tests and demos
//!
//! Not suitable for issuing real codes: the digits are only random enough to
//! exercise the engine, and the check digit is filled in where a rule exists.

use crate::checksum::compute_check_digit;
use crate::kind::IdentifierKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a full-length identifier with a correct check digit.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn generate_fixture(kind: IdentifierKind) -> String {
    generate_fixture_with(kind, &mut rand::rng())
}

/// Generate `count` identifiers from a seeded generator.
///
/// The same seed always yields the same sequence.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn generate_fixtures_seeded(kind: IdentifierKind, seed: u64, count: u32) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| generate_fixture_with(kind, &mut rng))
        .collect()
}

/// Generate a full-length identifier using the given random source.
pub fn generate_fixture_with<R: Rng>(kind: IdentifierKind, rng: &mut R) -> String {
    let payload_len = if kind.has_checksum() {
        kind.target_len() - 1
    } else {
        kind.target_len()
    };

    let mut digits: String = (0..payload_len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect();

    if let Some(check) = compute_check_digit(kind, &digits) {
        digits.push(char::from(b'0' + check));
    }
    digits
}
