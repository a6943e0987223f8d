//! Block metadata value types.
//!
//! Agreement between endpoints is decided by comparing these values, so
//! both types derive full structural equality (`PartialEq`/`Eq`/`Hash`).
//! Two explorers that serialize the same block differently still agree as
//! long as the extracted values match; serialized-text comparison is never
//! used.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hash of a block, as reported by an explorer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockHash(pub String);

impl BlockHash {
    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockHash {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlockHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Merkle root and timestamp for one block.
///
/// Everything else an explorer reports about the block is ignored; these
/// two fields are what the downstream proof-verification pipeline consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockInfo {
    /// Merkle root of the block's transactions, hex-encoded.
    pub merkle_root: String,
    /// Block timestamp in seconds since the Unix epoch.
    pub time: i64,
}
