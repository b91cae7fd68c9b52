use std::fmt;
use std::marker::PhantomData;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::hash::{selectors, OneWayHash, Sha256};
use crate::params::{Digest, Value, N, VALUE_LEN};

/// A private key is what you generate and keep in order to sign exactly
/// one message. From it, you can generate a [`PublicKey`] and send that
/// to others, allowing them to verify your signature down the line.
///
/// Signing consumes the key, so it cannot be used for a second message.
/// The key is deliberately not `Clone`, and its values are wiped when it
/// is dropped.
pub struct PrivateKey<H: OneWayHash = Sha256> {
    pairs: [[Value; 2]; N],
    hash: PhantomData<H>,
}

impl<H: OneWayHash> PrivateKey<H> {
    /// Generates a new private key using the operating system random
    /// number generator.
    pub fn generate() -> Result<PrivateKey<H>> {
        Self::generate_with(&mut OsRng)
    }

    /// Generates a new private key from the given cryptographically
    /// secure random number generator.
    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<PrivateKey<H>> {
        let mut pairs = [[[0u8; VALUE_LEN]; 2]; N];
        for [left, right] in pairs.iter_mut() {
            rng.try_fill_bytes(left)?;
            rng.try_fill_bytes(right)?;
        }
        debug!(hash = H::NAME, positions = N, "generated lamport private key");
        Ok(PrivateKey {
            pairs,
            hash: PhantomData,
        })
    }

    /// Creates the [`PublicKey`] associated with this [`PrivateKey`] by
    /// hashing every value, keeping the pairing and order intact.
    pub fn public_key(&self) -> PublicKey<H> {
        let mut hashes = [[[0u8; VALUE_LEN]; 2]; N];
        for (public, private) in hashes.iter_mut().zip(self.pairs.iter()) {
            public[0] = H::digest(&private[0]);
            public[1] = H::digest(&private[1]);
        }
        PublicKey {
            hashes,
            hash: PhantomData,
        }
    }

    /// Signs the message, producing a [`Signature`] which another party would
    /// be able to [`PublicKey::verify`] with access to the [`PublicKey`] generated
    /// from this [`PrivateKey`] with [`PrivateKey::public_key`].
    ///
    /// Text messages are signed over their UTF-8 bytes.
    pub fn sign<A: AsRef<[u8]>>(self, message: A) -> Signature<H> {
        let digest = H::digest(message.as_ref());
        let mut exposed = [[0u8; VALUE_LEN]; N];
        for (value, (pair, bit)) in exposed
            .iter_mut()
            .zip(self.pairs.iter().zip(selectors(&digest)))
        {
            *value = pair[bit];
        }
        debug!(hash = H::NAME, "signed message, private key retired");
        Signature {
            exposed,
            hash: PhantomData,
        }
    }
}

impl<H: OneWayHash> Drop for PrivateKey<H> {
    fn drop(&mut self) {
        self.pairs.zeroize();
    }
}

impl<H: OneWayHash> ZeroizeOnDrop for PrivateKey<H> {}

impl<H: OneWayHash> fmt::Debug for PrivateKey<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("hash", &H::NAME)
            .finish_non_exhaustive()
    }
}

/// The public key associated with a given [`PrivateKey`], allowing any
/// owner to [`PublicKey::verify`] a [`Signature`] produced by that
/// [`PrivateKey`].
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct PublicKey<H: OneWayHash = Sha256> {
    hashes: [[Digest; 2]; N],
    hash: PhantomData<H>,
}

impl<H: OneWayHash> PublicKey<H> {
    /// The `(left, right)` digests at each position.
    pub fn pairs(&self) -> &[[Digest; 2]; N] {
        &self.hashes
    }

    /// Checks that every revealed value in `signature` hashes to the
    /// public digest selected by the corresponding bit of the message
    /// digest.
    ///
    /// Stops at the first mismatching position, so the running time
    /// depends on where a forgery goes wrong.
    pub fn verify<A: AsRef<[u8]>>(&self, message: A, signature: &Signature<H>) -> bool {
        let digest = H::digest(message.as_ref());
        let mismatch = self
            .hashes
            .iter()
            .zip(signature.exposed.iter())
            .zip(selectors(&digest))
            .position(|((expected, revealed), bit)| H::digest(revealed) != expected[bit]);
        match mismatch {
            Some(index) => {
                trace!(index, "revealed value does not hash to public digest");
                debug!(hash = H::NAME, valid = false, "verified signature");
                false
            }
            None => {
                debug!(hash = H::NAME, valid = true, "verified signature");
                true
            }
        }
    }
}

impl<H: OneWayHash> TryFrom<Vec<[Digest; 2]>> for PublicKey<H> {
    type Error = Error;

    fn try_from(pairs: Vec<[Digest; 2]>) -> Result<Self> {
        let hashes = <[[Digest; 2]; N]>::try_from(pairs).map_err(|pairs| Error::LengthMismatch {
            what: "public key",
            expected: N,
            found: pairs.len(),
        })?;
        Ok(PublicKey {
            hashes,
            hash: PhantomData,
        })
    }
}

/// The result of [`PrivateKey::sign`]ing a message. Can be verified
/// to be from the [`PrivateKey`] associated with a [`PublicKey`]
/// if you have that public key, the message, along with the signature.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct Signature<H: OneWayHash = Sha256> {
    exposed: [Value; N],
    hash: PhantomData<H>,
}

impl<H: OneWayHash> Signature<H> {
    /// The revealed private values, one per digest bit.
    pub fn values(&self) -> &[Value; N] {
        &self.exposed
    }
}

impl<H: OneWayHash> TryFrom<Vec<Value>> for Signature<H> {
    type Error = Error;

    fn try_from(values: Vec<Value>) -> Result<Self> {
        let exposed = <[Value; N]>::try_from(values).map_err(|values| Error::LengthMismatch {
            what: "signature",
            expected: N,
            found: values.len(),
        })?;
        Ok(Signature {
            exposed,
            hash: PhantomData,
        })
    }
}

/// Generates a fresh private key and derives its public key.
pub fn keypair<H: OneWayHash>() -> Result<(PrivateKey<H>, PublicKey<H>)> {
    let private_key = PrivateKey::generate()?;
    let public_key = private_key.public_key();
    Ok((private_key, public_key))
}

/// See [`PrivateKey::generate`].
pub fn generate_private_key<H: OneWayHash>() -> Result<PrivateKey<H>> {
    PrivateKey::generate()
}

/// See [`PrivateKey::public_key`].
pub fn generate_public_key<H: OneWayHash>(private_key: &PrivateKey<H>) -> PublicKey<H> {
    private_key.public_key()
}

/// See [`PrivateKey::sign`].
pub fn sign<H: OneWayHash, A: AsRef<[u8]>>(message: A, private_key: PrivateKey<H>) -> Signature<H> {
    private_key.sign(message)
}

/// See [`PublicKey::verify`].
pub fn verify<H: OneWayHash, A: AsRef<[u8]>>(
    message: A,
    public_key: &PublicKey<H>,
    signature: &Signature<H>,
) -> bool {
    public_key.verify(message, signature)
}
