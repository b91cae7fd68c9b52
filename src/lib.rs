//! Lamport one-time signatures.
//!
//! A [`lamport::PrivateKey`] holds 256 pairs of random values and signs a
//! single message by revealing one value of each pair, chosen by the bits
//! of the message digest. The [`lamport::PublicKey`] holds the hash of
//! every private value, so a verifier can hash what was revealed and
//! compare.
//!
//! ```
//! use lamport_ots::lamport::keypair;
//! use lamport_ots::hash::Sha256;
//!
//! let (private_key, public_key) = keypair::<Sha256>()?;
//! let signature = private_key.sign("hello");
//! assert!(public_key.verify("hello", &signature));
//! assert!(!public_key.verify("hello!", &signature));
//! # Ok::<(), lamport_ots::Error>(())
//! ```
//!
//! Signing moves the private key, so a second signature under the same key
//! does not compile:
//!
//! ```compile_fail
//! use lamport_ots::lamport::PrivateKey;
//!
//! let private_key: PrivateKey = PrivateKey::generate().unwrap();
//! let _first = private_key.sign("one");
//! let _second = private_key.sign("two");
//! ```

pub mod error;
pub mod hash;
pub mod lamport;
pub mod params;

pub use error::{Error, Result};
