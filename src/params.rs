//! Sizes shared by key generation, signing and verification.
//!
//! All three must agree for a given key pair; mixing them breaks every
//! signature made under that key.

/// Number of bits in a message digest, and so the number of key pairs.
pub const N: usize = 256;

/// Length in bytes of each private key value.
pub const VALUE_LEN: usize = 32;

/// Length in bytes of a digest produced by a [`crate::hash::OneWayHash`].
pub const DIGEST_LEN: usize = N / 8;

/// A single private key value, as revealed in a signature.
pub type Value = [u8; VALUE_LEN];

/// The output of the one-way hash function.
pub type Digest = [u8; DIGEST_LEN];
