//! Ergonomic X25519 key types, built on `x7748_core::curve::{x25519, x25519_keygen}`.
//!
//! Mirrors `x25519-dalek`'s `EphemeralSecret` / `StaticSecret` / `PublicKey`
//! / `SharedSecret` split: this module owns buffers, scrubs them on drop,
//! and turns slice-length mismatches into `Err`. All of the field
//! arithmetic and ladder stepping happens in `x7748_core`.

use crate::error::InvalidLength;
use x7748_core::curve;
use zeroize::Zeroize;

#[cfg(feature = "os_rng")]
use rand_core::OsRng;
use rand_core::{CryptoRng, RngCore};

/// An X25519 public key: the encoded u-coordinate of a point derived from
/// a secret scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    /// View the public key as its raw 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for PublicKey {
    fn from(bytes: [u8; 32]) -> Self {
        PublicKey(bytes)
    }
}

impl From<&EphemeralSecret> for PublicKey {
    fn from(secret: &EphemeralSecret) -> Self {
        PublicKey(curve::x25519_keygen(&secret.0))
    }
}

#[cfg(feature = "static_secrets")]
impl From<&StaticSecret> for PublicKey {
    fn from(secret: &StaticSecret) -> Self {
        PublicKey(curve::x25519_keygen(&secret.0))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| InvalidLength::new(32, bytes.len()))?;
        Ok(PublicKey(arr))
    }
}

/// The output of an X25519 Diffie-Hellman exchange: a 32-byte value, not
/// yet passed through a KDF (key derivation is explicitly out of scope;
/// callers feed `as_bytes()` into whatever KDF their protocol specifies).
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret([u8; 32]);

impl SharedSecret {
    /// View the shared secret as its raw 32-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// `false` only if every byte is zero, which RFC 7748 produces for a
    /// peer public key in the curve's low-order subgroup (or zero itself).
    /// Protocols requiring contributory behaviour should reject a
    /// non-contributory exchange; the ladder itself does not.
    pub fn was_contributory(&self) -> bool {
        // OR-accumulate every byte instead of short-circuiting on the
        // first nonzero one: `self.0` is the secret shared value, and an
        // early exit would leak the position of its first nonzero byte
        // through timing.
        self.0.iter().fold(0u8, |acc, &b| acc | b) != 0
    }
}

/// A freshly-generated, single-use X25519 secret scalar.
///
/// `diffie_hellman` consumes `self` by value, so the type system prevents
/// reusing an ephemeral secret across more than one exchange.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct EphemeralSecret([u8; 32]);

impl EphemeralSecret {
    /// Generate a new secret using the supplied CSPRNG. Clamping (RFC 7748
    /// §5) is applied inside every ladder call, not here; the stored bytes
    /// are the raw random output.
    pub fn random_from_rng<R: RngCore + CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        csprng.fill_bytes(&mut bytes);
        EphemeralSecret(bytes)
    }

    /// Generate a new secret from the OS CSPRNG.
    #[cfg(feature = "os_rng")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut OsRng)
    }

    /// Perform a Diffie-Hellman exchange, consuming this secret.
    pub fn diffie_hellman(self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(curve::x25519(&self.0, &their_public.0))
    }
}

/// A long-lived X25519 secret scalar that may be reused across multiple
/// exchanges.
///
/// Prefer [`EphemeralSecret`] unless the protocol explicitly calls for key
/// reuse (e.g. a static Noise key); that type enforces single use at
/// compile time.
#[cfg(feature = "static_secrets")]
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct StaticSecret([u8; 32]);

#[cfg(feature = "static_secrets")]
impl StaticSecret {
    /// Generate a new secret using the supplied CSPRNG.
    pub fn random_from_rng<R: RngCore + CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        csprng.fill_bytes(&mut bytes);
        StaticSecret(bytes)
    }

    /// Generate a new secret from the OS CSPRNG.
    #[cfg(feature = "os_rng")]
    pub fn random() -> Self {
        Self::random_from_rng(&mut OsRng)
    }

    /// Perform a Diffie-Hellman exchange without consuming `self`.
    pub fn diffie_hellman(&self, their_public: &PublicKey) -> SharedSecret {
        SharedSecret(curve::x25519(&self.0, &their_public.0))
    }

    /// View the raw, unclamped secret bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

#[cfg(feature = "static_secrets")]
impl From<[u8; 32]> for StaticSecret {
    fn from(bytes: [u8; 32]) -> Self {
        StaticSecret(bytes)
    }
}

#[cfg(feature = "static_secrets")]
impl TryFrom<&[u8]> for StaticSecret {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| InvalidLength::new(32, bytes.len()))?;
        Ok(StaticSecret(arr))
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    // [u8; 32] has a direct serde impl, unlike X448's 56-byte arrays, so no
    // manual Visitor is needed here (contrast `x7748::x448::serde_support`).
    impl Serialize for PublicKey {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(s)
        }
    }

    impl<'de> Deserialize<'de> for PublicKey {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            <[u8; 32]>::deserialize(d).map(PublicKey)
        }
    }

    impl Serialize for SharedSecret {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            self.0.serialize(s)
        }
    }

    impl<'de> Deserialize<'de> for SharedSecret {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            <[u8; 32]>::deserialize(d).map(SharedSecret)
        }
    }
}
