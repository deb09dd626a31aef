//! Equivalence pipeline.
//!
//! Ties the kernel, rewriter, proof trail, and registry crates together
//! into the one operation the rest of the system actually calls:
//! `find_canonical`.

mod pipeline;

pub use pipeline::{find_canonical, Outcome, PipelineConfig};
