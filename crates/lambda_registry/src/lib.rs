//! Canonical morphism registry.
//!
//! Stores named λ-terms behind a read/write lock, content-addressed by
//! SHA-256 digest of their α-normalized pretty-print. Implements
//! [`lambda_kernel::expand::Definitions`] so the kernel's expander can
//! resolve registry identifiers, and [`lambda_rewrite::Registry`] so the
//! rewrite search can recognize a term it has reached.

mod error;
mod format;
mod hash;
mod morphism;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use format::{parse_morph, write_morph};
pub use hash::{hash_canonical, hash_definition};
pub use morphism::{CanonicalMorphism, Category};
pub use registry::Registry;
