//! ID generation for taskflow tasks.

use chrono::{DateTime, Utc};
use rand::Rng;
use sha2::{Digest, Sha256};

/// Generates task IDs that are unique for the lifetime of one store.
///
/// Format: "tf-" + sequence + "-" + 6 hex chars of SHA256(title + timestamp + random).
/// The sequence alone guarantees uniqueness; the hash keeps IDs opaque.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next_seq: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next ID. Sequence numbers are never handed out twice.
    pub fn next_id(&mut self, title: &str, created_at: DateTime<Utc>) -> String {
        self.next_seq += 1;
        format!("tf-{}-{}", self.next_seq, content_hash(title, created_at))
    }
}

fn content_hash(title: &str, created_at: DateTime<Utc>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(created_at.timestamp_nanos_opt().unwrap_or(0).to_le_bytes());
    hasher.update(rand::rng().random::<[u8; 8]>());
    let hash = hasher.finalize();
    format!("{:02x}{:02x}{:02x}", hash[0], hash[1], hash[2])
}
