//! `lambda-equiv`: a CLI driver for the λ-calculus equivalence engine.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lambda-equiv verify <expr>` | Find a registered canonical morphism equivalent to `<expr>` |
//! | `lambda-equiv register <file.morph>` | Load a `.morph` file into a registry directory |
//!
//! # Module Structure
//!
//! - [`cli`] - Command-line argument parsing and dispatch

pub mod cli;

/// Entry point for the CLI. Parses command-line arguments and executes the
/// appropriate command. See [`cli::run_cli`] for details.
pub use cli::run_cli;
