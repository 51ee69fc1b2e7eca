//! Ergonomic X448 key types, built on `x7748_core::curve::{x448, x448_keygen}`.
//!
//! Identical shape to [`crate::x25519`], scaled to Curve448's 56-byte
//! scalars and u-coordinates.

use crate::error::InvalidLength;
use x7748_core::curve;
use zeroize::Zeroize;

#[cfg(feature = "os_rng")]
use rand_core::OsRng;
use rand_core::{CryptoRng, RngCore};

/// An X448 public key: the encoded u-coordinate of a point derived from a
/// secret scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 56]);

impl PublicKey {
    /// View the public key as its raw 56-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }
}

impl From<[u8; 56]> for PublicKey {
    fn from(bytes: [u8; 56]) -> Self {
        PublicKey(bytes)
    }
}

impl From<&EphemeralSecret> for PublicKey {
    fn from(secret: &EphemeralSecret) -> Self {
        PublicKey(curve::x448_keygen(&secret.0))
    }
}

#[cfg(feature = "static_secrets")]
impl From<&StaticSecret> for PublicKey {
    fn from(secret: &StaticSecret) -> Self {
        PublicKey(curve::x448_keygen(&secret.0))
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 56] = bytes
            .try_into()
            .map_err(|_| InvalidLength::new(56, bytes.len()))?;
        Ok(PublicKey(arr))
    }
}

/// The output of an X448 Diffie-Hellman exchange: a 56-byte value, not yet
/// passed through a KDF.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SharedSecret([u8; 56]);

impl SharedSecret {
    /// View the shared secret as its raw 56-byte encoding.
    pub fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }

    /// `false` only if every byte is zero (a non-contributory peer public
    /// key); see [`crate::x25519::SharedSecret::was_contributory`].
    pub fn was_contributory(&self) -> bool {
        // See `x7748::x25519::SharedSecret::was_contributory` for why this
        // avoids a short-circuiting `.any()`.
        self.0.iter().fold(0u8, |acc, &b| acc | b) != 0
    }
}

/// A freshly-generated, single-use X448 secret scalar.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct EphemeralSecret([u8; 56]);

impl EphemeralSecret {
    /// Generate a new secret using the supplied CSPRNG.
    pub fn random_from_rng<R: RngCore + CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 56];
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
        SharedSecret(curve::x448(&self.0, &their_public.0))
    }
}

/// A long-lived X448 secret scalar that may be reused across multiple
/// exchanges. Prefer [`EphemeralSecret`] unless the protocol requires reuse.
#[cfg(feature = "static_secrets")]
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct StaticSecret([u8; 56]);

#[cfg(feature = "static_secrets")]
impl StaticSecret {
    /// Generate a new secret using the supplied CSPRNG.
    pub fn random_from_rng<R: RngCore + CryptoRng + ?Sized>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; 56];
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
        SharedSecret(curve::x448(&self.0, &their_public.0))
    }

    /// View the raw, unclamped secret bytes.
    pub fn as_bytes(&self) -> &[u8; 56] {
        &self.0
    }
}

#[cfg(feature = "static_secrets")]
impl From<[u8; 56]> for StaticSecret {
    fn from(bytes: [u8; 56]) -> Self {
        StaticSecret(bytes)
    }
}

#[cfg(feature = "static_secrets")]
impl TryFrom<&[u8]> for StaticSecret {
    type Error = InvalidLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; 56] = bytes
            .try_into()
            .map_err(|_| InvalidLength::new(56, bytes.len()))?;
        Ok(StaticSecret(arr))
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::*;
    use core::fmt;
    use serde::de::{Error as DeError, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for PublicKey {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_bytes(&self.0)
        }
    }

    struct FixedBytesVisitor;

    impl<'de> Visitor<'de> for FixedBytesVisitor {
        type Value = [u8; 56];

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "56 bytes")
        }

        fn visit_bytes<E: DeError>(self, v: &[u8]) -> Result<Self::Value, E> {
            v.try_into()
                .map_err(|_| E::invalid_length(v.len(), &self))
        }
    }

    impl<'de> Deserialize<'de> for PublicKey {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_bytes(FixedBytesVisitor).map(PublicKey)
        }
    }

    impl Serialize for SharedSecret {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_bytes(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for SharedSecret {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_bytes(FixedBytesVisitor).map(SharedSecret)
        }
    }
}
