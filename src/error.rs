use thiserror::Error;

/// Errors raised while building keys or signatures.
///
/// A signature that fails to verify is not an error; see
/// [`crate::lamport::PublicKey::verify`].
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system random number generator failed. Key
    /// generation cannot continue without it.
    #[error("secure random source unavailable")]
    Entropy(#[from] rand::Error),

    /// Key material or a signature did not have one entry per digest bit.
    #[error("{what} has {found} positions, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
