use sha2::{Digest, Sha256};

use crate::types::InputSet;

/// SHA-256 of a polled input log. Two runs with the same seed and the same
/// digest played the same match.
pub fn hash_inputs(log: &[InputSet]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for input in log {
        hasher.update(input.0.to_le_bytes());
    }
    hasher.finalize().into()
}

/// SHA-256 commitment of the seed.
pub fn hash_seed(seed: u32) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(seed.to_le_bytes());
    hasher.finalize().into()
}
