//! Field arithmetic modulo p25 = 2^255 - 19.
//!
//! Elements are represented as five 64-bit limbs, radix 2^51 (following
//! `curve25519-dalek`'s `FieldElement51`). Limbs are not required to be
//! fully reduced between operations; `mul`/`square` accept inputs bounded
//! by whatever `add`/`sub` may have produced and always return output
//! bounded for at least one further `add`/`mul` without overflow.

use crate::field::{cswap_limbs, Field};
use subtle::{Choice, ConditionallySelectable};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

const MASK51: u64 = (1 << 51) - 1;

/// `16 * p25`, limbwise, used by `sub` to keep every limb non-negative
/// regardless of the (bounded) magnitude of the subtrahend.
const SIXTEEN_P: [u64; 5] = [
    36_028_797_018_963_664,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
    36_028_797_018_963_952,
];

/// A field element of F25 = Z/(2^255 - 19)Z.
#[derive(Copy, Clone, Debug)]
pub struct Fe25519(pub(crate) [u64; 5]);

impl ConditionallySelectable for Fe25519 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; 5];
        for i in 0..5 {
            out[i] = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Fe25519(out)
    }

    fn conditional_swap(a: &mut Self, b: &mut Self, choice: Choice) {
        cswap_limbs(choice, &mut a.0, &mut b.0);
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Fe25519 {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

#[inline]
fn load8(bytes: &[u8]) -> u64 {
    (bytes[0] as u64)
        | ((bytes[1] as u64) << 8)
        | ((bytes[2] as u64) << 16)
        | ((bytes[3] as u64) << 24)
        | ((bytes[4] as u64) << 32)
        | ((bytes[5] as u64) << 40)
        | ((bytes[6] as u64) << 48)
        | ((bytes[7] as u64) << 56)
}

/// Two passes of carry propagation, folding any carry out of the top limb
/// back into the bottom limb multiplied by 19 (since 2^255 ≡ 19 mod p25).
/// The first pass produces that carry; the second absorbs it. A second
/// carry out of the top limb cannot occur because the folded-in quantity
/// is tiny relative to a limb.
#[inline]
fn carry_reduce(mut c: [u128; 5]) -> [u64; 5] {
    let mask = MASK51 as u128;
    c[1] += c[0] >> 51;
    c[0] &= mask;
    c[2] += c[1] >> 51;
    c[1] &= mask;
    c[3] += c[2] >> 51;
    c[2] &= mask;
    c[4] += c[3] >> 51;
    c[3] &= mask;
    let carry = c[4] >> 51;
    c[4] &= mask;
    c[0] += carry * 19;

    c[1] += c[0] >> 51;
    c[0] &= mask;
    c[2] += c[1] >> 51;
    c[1] &= mask;
    c[3] += c[2] >> 51;
    c[2] &= mask;
    c[4] += c[3] >> 51;
    c[3] &= mask;

    [c[0] as u64, c[1] as u64, c[2] as u64, c[3] as u64, c[4] as u64]
}

impl Fe25519 {
    /// Repeated squaring, `k` times, used by the inversion addition chain
    /// below.
    fn pow2k(&self, mut k: u32) -> Fe25519 {
        let mut r = *self;
        loop {
            r = r.square();
            k -= 1;
            if k == 0 {
                return r;
            }
        }
    }
}

impl Field for Fe25519 {
    const ZERO: Fe25519 = Fe25519([0, 0, 0, 0, 0]);
    const ONE: Fe25519 = Fe25519([1, 0, 0, 0, 0]);

    fn add(&self, rhs: &Self) -> Self {
        let mut out = [0u64; 5];
        for i in 0..5 {
            out[i] = self.0[i] + rhs.0[i];
        }
        Fe25519(out)
    }

    fn sub(&self, rhs: &Self) -> Self {
        let mut out = [0u64; 5];
        for i in 0..5 {
            out[i] = self.0[i] + SIXTEEN_P[i] - rhs.0[i];
        }
        Fe25519(out)
    }

    fn mul(&self, rhs: &Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;

        let b1_19 = (b[1] as u128) * 19;
        let b2_19 = (b[2] as u128) * 19;
        let b3_19 = (b[3] as u128) * 19;
        let b4_19 = (b[4] as u128) * 19;

        let a0 = a[0] as u128;
        let a1 = a[1] as u128;
        let a2 = a[2] as u128;
        let a3 = a[3] as u128;
        let a4 = a[4] as u128;
        let b0 = b[0] as u128;
        let b1 = b[1] as u128;
        let b2 = b[2] as u128;
        let b3 = b[3] as u128;
        let b4 = b[4] as u128;

        let c0 = a0 * b0 + a1 * b4_19 + a2 * b3_19 + a3 * b2_19 + a4 * b1_19;
        let c1 = a0 * b1 + a1 * b0 + a2 * b4_19 + a3 * b3_19 + a4 * b2_19;
        let c2 = a0 * b2 + a1 * b1 + a2 * b0 + a3 * b4_19 + a4 * b3_19;
        let c3 = a0 * b3 + a1 * b2 + a2 * b1 + a3 * b0 + a4 * b4_19;
        let c4 = a0 * b4 + a1 * b3 + a2 * b2 + a3 * b1 + a4 * b0;

        Fe25519(carry_reduce([c0, c1, c2, c3, c4]))
    }

    fn square(&self) -> Self {
        let a = &self.0;
        let a0 = a[0] as u128;
        let a1 = a[1] as u128;
        let a2 = a[2] as u128;
        let a3 = a[3] as u128;
        let a4 = a[4] as u128;

        let d0 = a0 * 2;
        let d1 = a1 * 2;
        let d2 = a2 * 2;
        let d3 = a3 * 2;

        let a2_19 = a2 * 19;
        let a3_19 = a3 * 19;
        let a4_19 = a4 * 19;

        let c0 = a0 * a0 + d1 * a4_19 + d2 * a3_19;
        let c1 = d0 * a1 + d2 * a4_19 + a3 * a3_19;
        let c2 = d0 * a2 + a1 * a1 + d3 * a4_19;
        let c3 = d0 * a3 + d1 * a2 + a4 * a4_19;
        let c4 = d0 * a4 + d1 * a3 + a2 * a2;

        Fe25519(carry_reduce([c0, c1, c2, c3, c4]))
    }

    fn mul_small(&self, rhs: u32) -> Self {
        let k = rhs as u128;
        let a = &self.0;
        Fe25519(carry_reduce([
            a[0] as u128 * k,
            a[1] as u128 * k,
            a[2] as u128 * k,
            a[3] as u128 * k,
            a[4] as u128 * k,
        ]))
    }

    /// Fermat inversion via the standard Curve25519 addition chain for
    /// `p25 - 2 = 2^255 - 21`.
    fn invert(&self) -> Self {
        let z1 = *self;
        let z2 = z1.square();
        let z8 = z2.square().square();
        let z9 = z8.mul(&z1);
        let z11 = z9.mul(&z2);
        let z22 = z11.square();
        let z_5_0 = z22.mul(&z9);

        let z_10_0 = z_5_0.pow2k(5).mul(&z_5_0);
        let z_20_0 = z_10_0.pow2k(10).mul(&z_10_0);
        let z_40_0 = z_20_0.pow2k(20).mul(&z_20_0);
        let z_50_0 = z_40_0.pow2k(10).mul(&z_10_0);
        let z_100_0 = z_50_0.pow2k(50).mul(&z_50_0);
        let z_200_0 = z_100_0.pow2k(100).mul(&z_100_0);
        let z_250_0 = z_200_0.pow2k(50).mul(&z_50_0);

        z_250_0.pow2k(5).mul(&z11)
    }

    fn from_bytes(bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), 32);
        Fe25519([
            load8(&bytes[0..8]) & MASK51,
            (load8(&bytes[6..14]) >> 3) & MASK51,
            (load8(&bytes[12..20]) >> 6) & MASK51,
            (load8(&bytes[19..27]) >> 1) & MASK51,
            (load8(&bytes[24..32]) >> 12) & MASK51,
        ])
    }

    fn to_bytes(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), 32);
        let mut limbs = self.0;

        // Carry-propagate fully, folding 2^255 -> 19 as usual.
        limbs = carry_reduce([
            limbs[0] as u128,
            limbs[1] as u128,
            limbs[2] as u128,
            limbs[3] as u128,
            limbs[4] as u128,
        ]);

        // Conditionally subtract p25 = 2^255 - 19 to land in [0, p). `q` is
        // computed as a constant-time 0/1 flag by adding 19 and propagating
        // the resulting carry all the way through; it is 1 exactly when the
        // current (already < 2^255) value is >= p25.
        let mut q = (limbs[0] + 19) >> 51;
        q = (limbs[1] + q) >> 51;
        q = (limbs[2] + q) >> 51;
        q = (limbs[3] + q) >> 51;
        q = (limbs[4] + q) >> 51;

        limbs[0] += 19 * q;
        limbs[1] += limbs[0] >> 51;
        limbs[0] &= MASK51;
        limbs[2] += limbs[1] >> 51;
        limbs[1] &= MASK51;
        limbs[3] += limbs[2] >> 51;
        limbs[2] &= MASK51;
        limbs[4] += limbs[3] >> 51;
        limbs[3] &= MASK51;
        limbs[4] &= MASK51;

        let h0 = limbs[0] | (limbs[1] << 51);
        let h1 = (limbs[1] >> 13) | (limbs[2] << 38);
        let h2 = (limbs[2] >> 26) | (limbs[3] << 25);
        let h3 = (limbs[3] >> 39) | (limbs[4] << 12);

        out[0..8].copy_from_slice(&h0.to_le_bytes());
        out[8..16].copy_from_slice(&h1.to_le_bytes());
        out[16..24].copy_from_slice(&h2.to_le_bytes());
        out[24..32].copy_from_slice(&h3.to_le_bytes());
    }
}
