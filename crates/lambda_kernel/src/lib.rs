#![cfg_attr(docsrs, feature(doc_cfg))]

//! The Kernel: a small untyped λ-calculus
//!
//! Everything downstream — the registry, the rewriter, the pipeline — is
//! built on five operations this crate provides:
//!
//! - parse source text into a [`Term`] ([`parser`])
//! - capture-avoiding substitution and α-renaming ([`subst`])
//! - leftmost-outermost β-reduction to normal form under a step budget
//!   ([`reduce`])
//! - structural α-equivalence ([`alpha`])
//! - registry-identifier expansion, cycle- and depth-bounded ([`expand`])
//!
//! plus two supporting concerns: routing candidates away from
//! β-normalization when they look non-terminating ([`detect`]), and
//! producing the α-normalized canonical string that `lambda-registry` hashes
//! ([`canon`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     lexer / parser                          │
//! │              source text -> Term                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!               ┌──────────────┴──────────────┐
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │          subst          │   │            detect           │
//! │  free_vars, substitute  │   │  recursion / non-termination │
//! └─────────────────────────┘   └─────────────────────────────┘
//!               │                             │
//!               ▼                             ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │         reduce          │   │            alpha             │
//! │  leftmost-outermost β   │   │     structural α-equivalence  │
//! └─────────────────────────┘   └─────────────────────────────┘
//!               │
//!               ▼
//! ┌─────────────────────────┐   ┌─────────────────────────────┐
//! │         expand          │   │            canon             │
//! │  registry identifiers   │   │   α-normalized hash input    │
//! └─────────────────────────┘   └─────────────────────────────┘
//! ```
//!
//! This crate has no path to `lambda-registry` or `lambda-rewrite`: the
//! [`expand::Definitions`] trait lets it expand registry identifiers without
//! depending on whatever stores them.

pub mod alpha;
pub mod canon;
pub mod detect;
pub mod error;
pub mod expand;
mod lexer;
pub mod parser;
pub mod printer;
pub mod reduce;
pub mod span;
pub mod subst;
pub mod term;

pub use alpha::alpha_eq;
pub use canon::{alpha_normalize, canonical_string};
pub use detect::{default_recursive_names, is_non_terminating_candidate};
pub use error::{ParseError, ParseResult};
pub use expand::{expand, Definitions, ExpansionResult, DEFAULT_MAX_DEPTH};
pub use parser::parse;
pub use printer::pretty;
pub use reduce::{normalize, NormalForm, DEFAULT_BUDGET};
pub use span::Span;
pub use subst::{free_vars, fresh_name, rename, substitute};
pub use term::{Binding, Literal, Term};
