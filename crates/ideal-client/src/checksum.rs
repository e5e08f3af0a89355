//! SHA-1 checksums over request parameters and callback fields.
//!
//! Outgoing requests are signed by hashing the parameter values in
//! lexicographic key order with the merchant secret appended; inbound
//! callbacks carry a digest over fixed fields plus a salt. Both sides
//! use plain hex SHA-1 — the gateway's scheme, not ours to improve.

use markup::Node;
use sha1::{Digest, Sha1};

use crate::error::{Error, Result};

/// Signs request parameters with the merchant secret.
///
/// Sorts the object's keys lexicographically, concatenates the leaf
/// values in that order, appends `secret`, and returns the lowercase hex
/// SHA-1 digest. An empty object signs just the secret.
///
/// # Errors
///
/// [`Error::ChecksumInput`] when `data` is not an object, or one of its
/// values is not a leaf.
pub fn sign(data: &Node, secret: &str) -> Result<String> {
    let Node::Object(data) = data else {
        return Err(Error::ChecksumInput);
    };

    let mut keys: Vec<&str> = data.iter().map(|(key, _)| key).collect();
    keys.sort_unstable();

    let mut message = String::new();
    for key in keys {
        match data.get(key) {
            Some(Node::Leaf(value)) => message.push_str(value),
            _ => return Err(Error::ChecksumInput),
        }
    }
    message.push_str(secret);

    Ok(hex::encode(Sha1::digest(message.as_bytes())))
}

/// Verifies the checksum of an inbound status callback.
///
/// Recomputes `sha1(id + transaction_code + status + salt)` and compares
/// it against the digest the callback carried. Hex case is ignored; a
/// mismatch is always an error, never a silent pass.
pub fn verify(
    id: &str,
    transaction_code: &str,
    status: &str,
    salt: &str,
    provided: &str,
) -> Result<()> {
    let message = format!("{id}{transaction_code}{status}{salt}");
    let expected = hex::encode(Sha1::digest(message.as_bytes()));

    if expected.eq_ignore_ascii_case(provided) {
        Ok(())
    } else {
        Err(Error::ChecksumMismatch { expected, provided: provided.to_string() })
    }
}
