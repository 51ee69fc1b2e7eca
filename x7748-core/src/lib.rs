//! Constant-time prime-field arithmetic and the x-only Montgomery ladder
//! underlying RFC 7748 (X25519 over Curve25519, X448 over Curve448).
//!
//! This crate is the "hard part": bit-exact, constant-time scalar
//! multiplication and the two prime fields it runs on. It has no notion of
//! keys, randomness, or serialization; see the `x7748` crate for the
//! ergonomic wrapper types built on top of this one.
//!
//! The ladder ([`ladder::x_ladder`]) is written once, generically, against
//! the [`field::Field`] capability trait; [`field25::Fe25519`] and
//! [`field448::Fe448`] are its two instantiations. [`curve`] wires each
//! field to its curve's bit length, `a24` constant, and base point,
//! producing the four RFC 7748 operations.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod curve;
pub mod field;
pub mod field25;
pub mod field448;
pub mod ladder;
pub mod scalar;

pub use curve::{x25519, x25519_keygen, x448, x448_keygen};
