//! Password hashing utilities
//!
//! bcrypt only reads the first 72 bytes of its input, so passwords are
//! reduced to a hex SHA-256 digest first and every byte takes part.

use bcrypt::{hash, verify};
use sha2::{Digest, Sha256};

pub use bcrypt::DEFAULT_COST;

/// Lowest and highest work factors bcrypt accepts.
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

fn prehash(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hash a password using bcrypt with the given work factor
pub fn hash_password(password: &str, cost: u32) -> Result<String, bcrypt::BcryptError> {
    hash(prehash(password), cost.clamp(MIN_COST, MAX_COST))
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(prehash(password), hash)
}
