use sha2::{Digest, Sha256};

/// Hash a string into a stable content identifier.
///
/// Identifiers double as filenames in the on-disk stores and as
/// cross-reference keys between records, so the function must yield the
/// same output for the same input across process runs.
pub fn content_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
