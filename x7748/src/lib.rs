//! Ergonomic, zeroizing key types for RFC 7748 Diffie-Hellman key exchange.
//!
//! [`x25519`] and [`x448`] each expose `EphemeralSecret`, `StaticSecret`
//! (feature `static_secrets`), `PublicKey`, and `SharedSecret`, wrapping the
//! raw byte-in/byte-out primitives in `x7748_core`. That crate holds the
//! field arithmetic and the Montgomery ladder; this one only owns buffers,
//! scrubs them on drop, and turns length mismatches into `Err` instead of
//! a panic.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod error;
pub mod x25519;
pub mod x448;

pub use error::InvalidLength;
