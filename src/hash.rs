//! The one-way hash functions a key pair can be built over, and the
//! mapping from a message digest to per-position bit selectors.

use sha2::Digest as _;

use crate::params::{Digest, N};

/// A 256-bit one-way hash function.
///
/// Keys, signatures and verification are all parameterised by the hash,
/// so a [`crate::lamport::Signature`] made with one cannot be checked
/// against a [`crate::lamport::PublicKey`] made with another.
pub trait OneWayHash {
    /// Human readable name, used in log output.
    const NAME: &'static str;

    fn digest(data: &[u8]) -> Digest;
}

/// SHA-256, the reference configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sha256;

impl OneWayHash for Sha256 {
    const NAME: &'static str = "SHA-256";

    fn digest(data: &[u8]) -> Digest {
        sha2::Sha256::digest(data).into()
    }
}

/// BLAKE3 with its default 256-bit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Blake3;

impl OneWayHash for Blake3 {
    const NAME: &'static str = "BLAKE3";

    fn digest(data: &[u8]) -> Digest {
        *blake3::hash(data).as_bytes()
    }
}

/// Iterates the bits of `digest`, most significant bit of the first byte
/// first, as indices (0 or 1) into a key pair.
pub fn selectors(digest: &Digest) -> impl Iterator<Item = usize> + '_ {
    (0..N).map(move |i| bit_of_digest(i, digest) as usize)
}

/// Bit `index` of `digest`, counting from the most significant bit of byte 0.
pub fn bit_of_digest(index: usize, digest: &[u8]) -> bool {
    let byte = digest[index.div_euclid(8)];
    bit_of_byte(index.rem_euclid(8), byte)
}

fn bitmask_for(index: usize) -> u8 {
    match index {
        0 => 0b10000000,
        1 => 0b01000000,
        2 => 0b00100000,
        3 => 0b00010000,
        4 => 0b00001000,
        5 => 0b00000100,
        6 => 0b00000010,
        7 => 0b00000001,
        _ => bitmask_for(index.rem_euclid(8)),
    }
}

fn bit_of_byte(index: usize, byte: u8) -> bool {
    let mask = bitmask_for(index);
    byte & mask == mask
}
