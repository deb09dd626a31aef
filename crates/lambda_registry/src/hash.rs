//! Content-addressed hashing.
//!
//! The hash is SHA-256 over the UTF-8 bytes of the pretty-printed,
//! α-normalized definition, hex-encoded. Two definitions hash identically
//! iff they are α-equivalent, modulo the cryptographic no-collision
//! assumption.

use sha2::{Digest, Sha256};

use lambda_kernel::Term;

/// Hashes the canonical string directly, for callers that already have one
/// (the rewrite search canonicalizes intermediate terms itself).
pub fn hash_canonical(canonical: &str) -> String {
    let digest = Sha256::digest(canonical.as_bytes());
    hex_encode(&digest)
}

/// Hashes a term's canonical (α-normalized, pretty-printed) form.
pub fn hash_definition(term: &Term) -> String {
    hash_canonical(&lambda_kernel::canonical_string(term))
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_kernel::parse;

    #[test]
    fn alpha_equivalent_terms_hash_identically() {
        let a = parse(r"\x. x").unwrap();
        let b = parse(r"\y. y").unwrap();
        assert_eq!(hash_definition(&a), hash_definition(&b));
    }

    #[test]
    fn distinct_terms_hash_differently() {
        let a = parse(r"\x. x").unwrap();
        let b = parse(r"\x. \y. x").unwrap();
        assert_ne!(hash_definition(&a), hash_definition(&b));
    }

    #[test]
    fn hash_is_sixty_four_hex_characters() {
        let a = parse("x").unwrap();
        let digest = hash_definition(&a);
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
