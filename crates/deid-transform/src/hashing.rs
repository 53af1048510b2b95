//! Identifier hashing: stable pseudonymous digit strings.

use sha2::Digest;

const MODULUS: u64 = 1_000_000_000_000;

/// Maps an identifier to a deterministic 12-digit string.
///
/// The SHA-256 digest is interpreted as a big-endian integer and reduced
/// modulo 10^12, then zero-padded to exactly 12 digits. Equal inputs always
/// map to equal outputs; distinct inputs may collide and no collision
/// handling is attempted.
pub fn hash_identifier(value: &str) -> String {
    let digest = sha2::Sha256::digest(value.as_bytes());
    let mut acc: u64 = 0;
    for byte in digest {
        // Horner evaluation of the digest as a base-256 integer; the modulus
        // keeps the accumulator below 10^12 so the fold cannot overflow.
        acc = (acc * 256 + u64::from(byte)) % MODULUS;
    }
    format!("{acc:012}")
}
