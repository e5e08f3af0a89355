//! # e2e-tests - End-to-end tests for the workspace CLI tools
//!
//! This crate holds the e2e tests for `converter`, the JSON ↔ markup
//! conversion tool.
//!
//! ## Fixtures
//!
//! Test files live in `fixtures/`:
//! - `request.json` — a gateway request tree as JSON
//! - `request.xml` — the same request in wire form, declaration included
//! - `banks_response.xml` — a captured-shape bank listing response

use std::path::PathBuf;

/// Path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Path to a fixture by file name.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
