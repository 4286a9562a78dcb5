//! Content digests for paths and grids.
//!
//! Exactly one place defines digesting: every digest is SHA-256 over a
//! null-terminated domain prefix followed by the payload bytes, rendered as
//! `"sha256:<hex>"`.

use sha2::{Digest, Sha256};

use crate::grid::{Cell, Grid};

/// Domain prefix for coordinate-sequence digests.
pub const DOMAIN_PATH: &[u8] = b"FOGPATH::PATH::V1\0";

/// Domain prefix for ground-truth grid digests.
pub const DOMAIN_GRID: &[u8] = b"FOGPATH::GRID::V1\0";

/// A content-addressed digest with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"`. The inner string always contains one
/// `:` with non-empty text on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// SHA-256 of `domain || data`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex_digest = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex_digest}"),
    }
}

fn le_u64(n: usize) -> [u8; 8] {
    u64::try_from(n).unwrap_or(u64::MAX).to_le_bytes()
}

/// Digest of a coordinate sequence: count, then `(row, col)` pairs, all as
/// little-endian `u64`.
#[must_use]
pub fn path_digest(path: &[Cell]) -> ContentHash {
    let mut data = Vec::with_capacity(8 + path.len() * 16);
    data.extend_from_slice(&le_u64(path.len()));
    for cell in path {
        data.extend_from_slice(&le_u64(cell.row));
        data.extend_from_slice(&le_u64(cell.col));
    }
    canonical_hash(DOMAIN_PATH, &data)
}

/// Digest of a grid: dimensions, then one byte per cell (1 = blocked).
#[must_use]
pub fn grid_digest(grid: &Grid) -> ContentHash {
    let mut data = Vec::with_capacity(16 + grid.len());
    data.extend_from_slice(&le_u64(grid.rows()));
    data.extend_from_slice(&le_u64(grid.cols()));
    data.extend(grid.iter().map(|(_, s)| u8::from(!s.is_open())));
    canonical_hash(DOMAIN_GRID, &data)
}
