use sha2::{Digest, Sha256};

/// Stable identifier for a pool: sha256 over the length-prefixed member
/// strings, first 8 bytes as lowercase hex.
pub fn pool_id<S: AsRef<str>>(members: &[S]) -> String {
    let mut hasher = Sha256::new();
    for member in members {
        let bytes = member.as_ref().as_bytes();
        hasher.update((bytes.len() as u64).to_be_bytes());
        hasher.update(bytes);
    }
    let hash: [u8; 32] = hasher.finalize().into();
    hash[..8].iter().map(|b| format!("{:02x}", b)).collect()
}
