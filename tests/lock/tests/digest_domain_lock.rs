//! Digest format lock tests.
//!
//! Proves:
//! 1. Domain prefixes are unique, null-terminated and follow `FOGPATH::*::V1\0`
//! 2. Path and grid digests are SHA-256 over `domain || payload`, recomputed
//!    here independently with `sha2` + `hex`
//! 3. Digest strings parse back into `algorithm:hex`

use std::collections::BTreeSet;

use sha2::{Digest, Sha256};

use fogpath_harness::report::DOMAIN_REPORT;
use fogpath_kernel::digest::{grid_digest, path_digest, ContentHash, DOMAIN_GRID, DOMAIN_PATH};
use fogpath_kernel::grid::{Cell, Grid};

const ALL_DOMAINS: [&[u8]; 3] = [DOMAIN_PATH, DOMAIN_GRID, DOMAIN_REPORT];

fn sha256_hex(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

#[test]
fn domains_unique_terminated_and_named() {
    let mut seen = BTreeSet::new();
    for domain in ALL_DOMAINS {
        assert!(seen.insert(domain), "duplicate domain");
        assert!(domain.ends_with(&[0]), "domain not null-terminated");
        let text = std::str::from_utf8(&domain[..domain.len() - 1]).unwrap();
        assert!(text.starts_with("FOGPATH::"), "{text}");
        assert!(text.ends_with("::V1"), "{text}");
    }
}

#[test]
fn path_digest_wire_format() {
    let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)];
    let mut payload = Vec::new();
    payload.extend_from_slice(&3u64.to_le_bytes());
    for (r, c) in [(0u64, 0u64), (0, 1), (1, 1)] {
        payload.extend_from_slice(&r.to_le_bytes());
        payload.extend_from_slice(&c.to_le_bytes());
    }
    assert_eq!(
        path_digest(&path).as_str(),
        sha256_hex(&[DOMAIN_PATH, &payload])
    );
}

#[test]
fn grid_digest_wire_format() {
    let grid = Grid::from_picture(".#\n..\n#.").unwrap();
    let mut payload = Vec::new();
    payload.extend_from_slice(&3u64.to_le_bytes());
    payload.extend_from_slice(&2u64.to_le_bytes());
    payload.extend_from_slice(&[0, 1, 0, 0, 1, 0]);
    assert_eq!(
        grid_digest(&grid).as_str(),
        sha256_hex(&[DOMAIN_GRID, &payload])
    );
}

#[test]
fn empty_path_digest_is_stable_and_distinct() {
    let empty = path_digest(&[]);
    assert_eq!(empty, path_digest(&[]));
    assert_ne!(empty, path_digest(&[Cell::new(0, 0)]));
}

#[test]
fn digest_strings_parse() {
    let digest = path_digest(&[Cell::new(2, 3)]);
    let parsed = ContentHash::parse(digest.as_str()).unwrap();
    assert_eq!(parsed.algorithm(), "sha256");
    assert_eq!(parsed.hex_digest().len(), 64);
    assert_eq!(parsed, digest);
}
