//! Fingerprint hash function
//!
//! A deterministic, non-cryptographic reduction of an arbitrary string to a
//! fixed 32-character lowercase hex identifier. Two independent 32-bit rolling
//! accumulators walk the input; each is rendered as a zero-left-padded
//! 16-hex-digit value of its absolute magnitude and the halves are
//! concatenated. The zero padding of each half is the continuation rule that
//! keeps short inputs at full length. Not collision-resistant in any
//! adversarial sense; it only needs to separate near-duplicate signal strings.

/// Length of a fingerprint ID in hex characters
pub const FINGERPRINT_LEN: usize = 32;

/// Fingerprint of the empty input
pub const EMPTY_FINGERPRINT: &str = "00000000000000000000000000000000";

/// Reduce `input` to a 32-character lowercase hex fingerprint.
///
/// Deterministic: identical input always yields identical output. Defined on
/// empty input, returning [`EMPTY_FINGERPRINT`]. Always returns exactly
/// [`FINGERPRINT_LEN`] characters regardless of input length.
pub fn hash(input: &str) -> String {
    if input.is_empty() {
        return EMPTY_FINGERPRINT.to_string();
    }

    let mut h1: i32 = 0;
    let mut h2: i32 = 0;

    for ch in input.chars() {
        let code = ch as i32;
        // h * 31 + c and h * 127 + c, expressed as shift-subtract
        h1 = h1.wrapping_shl(5).wrapping_sub(h1).wrapping_add(code);
        h2 = h2.wrapping_shl(7).wrapping_sub(h2).wrapping_add(code);
    }

    format!("{:016x}{:016x}", h1.unsigned_abs(), h2.unsigned_abs())
}
