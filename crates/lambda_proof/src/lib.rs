//! Proof trail construction and serialization.
//!
//! A trail is the reproducible evidence `lambda-pipeline` returns alongside
//! a canonical match: an ordered ledger of rewrites from the user's
//! expression down to the form that was recognized, plus the digest of the
//! morphism it was recognized as.

mod trail;

pub use trail::{ProofStep, ProofTrail};
