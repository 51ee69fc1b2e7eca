//! RFC 7748 scalar clamping (§5).
//!
//! Clamping forces every private scalar into the subgroup the ladder
//! expects and fixes its bit length, independent of whatever randomness
//! produced the raw bytes. Both functions operate on an owned copy; the
//! caller's original bytes are never mutated.

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Clamp a 32-byte X25519 scalar in place on a local copy of `bytes`.
///
/// `s[0] &= 248; s[31] &= 127; s[31] |= 64`.
pub fn clamp_x25519(bytes: &[u8; 32]) -> [u8; 32] {
    let mut s = *bytes;
    s[0] &= 248;
    s[31] &= 127;
    s[31] |= 64;
    s
}

/// Clamp a 56-byte X448 scalar in place on a local copy of `bytes`.
///
/// `s[0] &= 252; s[55] |= 128`.
pub fn clamp_x448(bytes: &[u8; 56]) -> [u8; 56] {
    let mut s = *bytes;
    s[0] &= 252;
    s[55] |= 128;
    s
}

/// A clamped scalar that zeroizes its backing bytes on drop.
///
/// [`crate::curve`] wraps raw caller-supplied scalar bytes in this type
/// immediately after clamping, so that intermediate copies made during key
/// generation and shared-secret computation don't linger in memory.
pub struct Scalar<const N: usize>(pub(crate) [u8; N]);

#[cfg(feature = "zeroize")]
impl<const N: usize> Drop for Scalar<N> {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl<const N: usize> Scalar<N> {
    pub(crate) fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x25519_clamp_masks_expected_bits() {
        let input = [0xffu8; 32];
        let clamped = clamp_x25519(&input);
        assert_eq!(clamped[0], 0xf8);
        assert_eq!(clamped[31], 0x7f);
        assert_eq!(clamped[1..31], input[1..31]);
    }

    #[test]
    fn x25519_clamp_sets_expected_bits_on_zero() {
        let input = [0x00u8; 32];
        let clamped = clamp_x25519(&input);
        assert_eq!(clamped[0], 0x00);
        assert_eq!(clamped[31], 0x40);
    }

    #[test]
    fn x25519_clamp_does_not_mutate_input() {
        let input = [0xffu8; 32];
        let _ = clamp_x25519(&input);
        assert_eq!(input, [0xffu8; 32]);
    }

    #[test]
    fn x25519_clamp_is_idempotent() {
        let input = [0x3cu8; 32];
        let once = clamp_x25519(&input);
        let twice = clamp_x25519(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn x448_clamp_masks_expected_bits() {
        let input = [0xffu8; 56];
        let clamped = clamp_x448(&input);
        assert_eq!(clamped[0], 0xfc);
        assert_eq!(clamped[55], 0xff);
        assert_eq!(clamped[1..55], input[1..55]);
    }

    #[test]
    fn x448_clamp_sets_high_bit_on_zero() {
        let input = [0x00u8; 56];
        let clamped = clamp_x448(&input);
        assert_eq!(clamped[0], 0x00);
        assert_eq!(clamped[55], 0x80);
    }

    #[test]
    fn x448_clamp_is_idempotent() {
        let input = [0x7eu8; 56];
        let once = clamp_x448(&input);
        let twice = clamp_x448(&once);
        assert_eq!(once, twice);
    }
}
