//! The constant-time field-element capability set shared by both curves.
//!
//! The Montgomery ladder in [`crate::ladder`] is written once against this
//! trait; [`crate::field25::Fe25519`] and [`crate::field448::Fe448`] each
//! implement it for their own prime. No implementation of this trait may
//! branch, or index a table, on the *contents* of a field element; every
//! caller may be operating on secret data derived from a scalar.

use subtle::{Choice, ConditionallySelectable};

/// Operations a prime-field element must support to be usable by the
/// generic ladder.
pub trait Field: Copy + ConditionallySelectable {
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// `self + rhs`. Limbs are not required to be fully reduced.
    fn add(&self, rhs: &Self) -> Self;
    /// `self - rhs`. Limbs are not required to be fully reduced.
    fn sub(&self, rhs: &Self) -> Self;
    /// `self * rhs`, fully reduced to the "clean" per-limb bound.
    fn mul(&self, rhs: &Self) -> Self;
    /// `self * self`, cheaper than `mul(self, self)`.
    fn square(&self) -> Self;
    /// Multiply by a small, public curve constant (e.g. A24).
    fn mul_small(&self, rhs: u32) -> Self;
    /// `self^(p-2)`, the multiplicative inverse for `self != 0`. By
    /// convention the inverse of zero is zero, which keeps the ladder total
    /// and matches its documented behaviour on small-order inputs.
    fn invert(&self) -> Self;
    /// Decode a little-endian byte string. `bytes.len()` must equal the
    /// field's canonical encoding length.
    fn from_bytes(bytes: &[u8]) -> Self;
    /// Normalise to the unique representative in `[0, p)` and encode it
    /// little-endian into `out`. `out.len()` must equal the field's
    /// canonical encoding length.
    fn to_bytes(&self, out: &mut [u8]);
}

/// `mask = 0 - flag` conditional-swap helper shared by both field
/// implementations, matching RFC 7748's reference `swap` (§4.4 / §4.1 of
/// the design): `t = mask & (a ^ b); a ^= t; b ^= t`.
#[inline]
pub(crate) fn cswap_limbs(swap: Choice, a: &mut [u64], b: &mut [u64]) {
    let mask = 0u64.wrapping_sub(swap.unwrap_u8() as u64);
    for (ai, bi) in a.iter_mut().zip(b.iter_mut()) {
        let t = mask & (*ai ^ *bi);
        *ai ^= t;
        *bi ^= t;
    }
}
