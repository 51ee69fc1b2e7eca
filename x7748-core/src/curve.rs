//! The four RFC 7748 raw operations, each a thin instantiation of
//! [`crate::ladder::x_ladder`] over one curve's field, bit length, `a24`
//! constant, and base point.
//!
//! This module has no notion of keys, randomness, or error handling; it
//! is pure byte-in/byte-out math, matching the RFC's `X25519`/`X448`
//! functions exactly. The ergonomic wrapper types in the `x7748` crate are
//! built on top of it.

use crate::field::Field;
use crate::field25::Fe25519;
use crate::field448::Fe448;
use crate::ladder::x_ladder;
use crate::scalar::{clamp_x25519, clamp_x448, Scalar};

/// `(A + 2) / 4` for Curve25519 (A = 486662).
const X25519_A24: u32 = 121_665;
/// `(A + 2) / 4` for Curve448 (A = 156326).
const X448_A24: u32 = 39_081;

/// X25519 base point u-coordinate, RFC 7748 §4.1.
const X25519_BASE_U: u8 = 9;
/// X448 base point u-coordinate, RFC 7748 §4.2.
const X448_BASE_U: u8 = 5;

/// `X25519(scalar, u_coordinate)`: the raw Diffie-Hellman function.
///
/// `scalar` is clamped internally; the caller's bytes are never mutated
/// (RFC 7748 §5 decodeScalar25519).
pub fn x25519(scalar: &[u8; 32], u_coordinate: &[u8; 32]) -> [u8; 32] {
    let clamped = Scalar(clamp_x25519(scalar));
    let u = Fe25519::from_bytes(u_coordinate);
    let result = x_ladder(clamped.as_bytes(), u, X25519_A24, 255);
    let mut out = [0u8; 32];
    result.to_bytes(&mut out);
    out
}

/// `X25519(scalar, 9)`: derive the public key for a clamped private scalar.
pub fn x25519_keygen(scalar: &[u8; 32]) -> [u8; 32] {
    let clamped = Scalar(clamp_x25519(scalar));
    let mut u_bytes = [0u8; 32];
    u_bytes[0] = X25519_BASE_U;
    let u = Fe25519::from_bytes(&u_bytes);
    let result = x_ladder(clamped.as_bytes(), u, X25519_A24, 255);
    let mut out = [0u8; 32];
    result.to_bytes(&mut out);
    out
}

/// `X448(scalar, u_coordinate)`: the raw Diffie-Hellman function.
pub fn x448(scalar: &[u8; 56], u_coordinate: &[u8; 56]) -> [u8; 56] {
    let clamped = Scalar(clamp_x448(scalar));
    let u = Fe448::from_bytes(u_coordinate);
    let result = x_ladder(clamped.as_bytes(), u, X448_A24, 448);
    let mut out = [0u8; 56];
    result.to_bytes(&mut out);
    out
}

/// `X448(scalar, 5)`: derive the public key for a clamped private scalar.
pub fn x448_keygen(scalar: &[u8; 56]) -> [u8; 56] {
    let clamped = Scalar(clamp_x448(scalar));
    let mut u_bytes = [0u8; 56];
    u_bytes[0] = X448_BASE_U;
    let u = Fe448::from_bytes(&u_bytes);
    let result = x_ladder(clamped.as_bytes(), u, X448_A24, 448);
    let mut out = [0u8; 56];
    result.to_bytes(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex32(s: &str) -> [u8; 32] {
        let v = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out.copy_from_slice(&v);
        out
    }

    fn hex56(s: &str) -> [u8; 56] {
        let v = hex::decode(s).unwrap();
        let mut out = [0u8; 56];
        out.copy_from_slice(&v);
        out
    }

    // RFC 7748 §5.2 X25519 Diffie-Hellman known-answer test.
    #[test]
    fn x25519_kat_shared_secret() {
        let alice_sk = hex32("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a");
        let alice_pk = hex32("8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a");
        let bob_sk = hex32("5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb");
        let bob_pk = hex32("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f");
        let shared = hex32("4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742");

        assert_eq!(x25519_keygen(&alice_sk), alice_pk);
        assert_eq!(x25519_keygen(&bob_sk), bob_pk);
        assert_eq!(x25519(&alice_sk, &bob_pk), shared);
        assert_eq!(x25519(&bob_sk, &alice_pk), shared);
    }

    // RFC 7748 §5.2 X25519 raw scalarmult known-answer tests.
    #[test]
    fn x25519_kat_raw() {
        let k0 = hex32("a546e36bf0527c9d3b16154b82465edd62144c0ac1fc5a18506a2244ba449ac4");
        let u0 = hex32("e6db6867583030db3594c1a424b15f7c726624ec26b3353b10a903a6d0ab1c4c");
        let r0 = hex32("c3da55379de9c6908e94ea4df28d084f32eccf03491c71f754b4075577a28552");
        assert_eq!(x25519(&k0, &u0), r0);

        let k1 = hex32("4b66e9d4d1b4673c5ad22691957d6af5c11b6421e0ea01d42ca4169e7918ba0d");
        let u1 = hex32("e5210f12786811d3f4b7959d0538ae2c31dbe7106fc03c3efc4cd549c715a493");
        let r1 = hex32("95cbde9476e8907d7aade45cb4b873f88b595a68799fa152e6f8f7647aac7957");
        assert_eq!(x25519(&k1, &u1), r1);
    }

    // RFC 7748 §5.2 X25519 iterated-ladder known-answer tests.
    #[test]
    fn x25519_iterated_one() {
        let mut k = [0u8; 32];
        let mut u = [0u8; 32];
        k[0] = 9;
        u[0] = 9;
        let r = x25519(&k, &u);
        assert_eq!(
            r,
            hex32("422c8e7a6227d7bca1350b3e2bb7279f7897b87bb6854b783c60e80311ae3079")
        );
    }

    #[test]
    fn x25519_iterated_1000() {
        let mut k = [0u8; 32];
        let mut u = [0u8; 32];
        k[0] = 9;
        u[0] = 9;
        for _ in 0..1000 {
            let r = x25519(&k, &u);
            u = k;
            k = r;
        }
        assert_eq!(
            k,
            hex32("684cf59ba83309552800ef566f2f4d3c1c3887c49360e3875f2eb94d99532c51")
        );
    }

    #[test]
    #[ignore = "takes several seconds; matches RFC 7748 1,000,000-iteration KAT"]
    fn x25519_iterated_1000000() {
        let mut k = [0u8; 32];
        let mut u = [0u8; 32];
        k[0] = 9;
        u[0] = 9;
        for _ in 0..1_000_000 {
            let r = x25519(&k, &u);
            u = k;
            k = r;
        }
        assert_eq!(
            k,
            hex32("7c3911e0ab2586fd864497297e575e6f3bc601c0883c30df5f4dd2d24f665424")
        );
    }

    // RFC 7748 §5.2 X448 Diffie-Hellman known-answer test.
    #[test]
    fn x448_kat_shared_secret() {
        let alice_sk = hex56(
            "9a8f4925d1519f5775cf46b04b5800d4ee9ee8bae8bc5565d498c28dd9c9baf574a941974489739\
             1006382a6f127ab1d9ac2d8c0a598726b",
        );
        let alice_pk = hex56(
            "9b08f7cc31b7e3e67d22d5aea121074a273bd2b83de09c63faa73d2c22c5d9bbc83664724\
             1d953d40c5b12da88120d53177f80e532c41fa0",
        );
        let bob_sk = hex56(
            "1c306a7ac2a0e2e0990b294470cba339e6453772b075811d8fad0d1d6927c120bb5ee897\
             2b0d3e21374c9c921b09d1b0366f10b65173992d",
        );
        let bob_pk = hex56(
            "3eb7a829b0cd20f5bcfc0b599b6feccf6da4627107bdb0d4f345b43027d8b972fc3e34f\
             b4232a13ca706dcb57aec3dae07bdc1c67bf33609",
        );
        let shared = hex56(
            "07fff4181ac6cc95ec1c16a94a0f74d12da232ce40a775522\
             81d282bb60c0b56fd2464c335543936521c24403085d59a449a5037514a879d",
        );

        assert_eq!(x448_keygen(&alice_sk), alice_pk);
        assert_eq!(x448_keygen(&bob_sk), bob_pk);
        assert_eq!(x448(&alice_sk, &bob_pk), shared);
        assert_eq!(x448(&bob_sk, &alice_pk), shared);
    }

    // RFC 7748 §5.2 X448 iterated-ladder known-answer tests.
    #[test]
    fn x448_iterated_one() {
        let mut k = [0u8; 56];
        let mut u = [0u8; 56];
        k[0] = 5;
        u[0] = 5;
        let r = x448(&k, &u);
        assert_eq!(
            r,
            hex56(
                "3f482c8a9f19b01e6c46ee9711d9dc14fd4bf67af30765c2ae2b846a4d23a8cd0db897086239\
                 492caf350b51f833868b9bc2b3bca9cf4113"
            )
        );
    }

    #[test]
    fn x448_iterated_1000() {
        let mut k = [0u8; 56];
        let mut u = [0u8; 56];
        k[0] = 5;
        u[0] = 5;
        for _ in 0..1000 {
            let r = x448(&k, &u);
            u = k;
            k = r;
        }
        assert_eq!(
            k,
            hex56(
                "aa3b4749d55b9daf1e5b00288826c467274ce3ebbdd5c17b975e09d4af6c67cf10d087202\
                 db88286e2b79fceea3ec353ef54faa26e219f38"
            )
        );
    }

    #[test]
    #[ignore = "takes several minutes; matches RFC 7748 1,000,000-iteration KAT"]
    fn x448_iterated_1000000() {
        let mut k = [0u8; 56];
        let mut u = [0u8; 56];
        k[0] = 5;
        u[0] = 5;
        for _ in 0..1_000_000 {
            let r = x448(&k, &u);
            u = k;
            k = r;
        }
        assert_eq!(
            k,
            hex56(
                "077f453681caca3693198420bbe515cae0002472\
                 519b3e67661a7e89cab94695c8f4bcd66e61b9b9c946da8d524de3d69bd9d9d66b997e37"
            )
        );
    }
}
