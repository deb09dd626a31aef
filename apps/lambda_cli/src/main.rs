//! `lambda-equiv` - standalone binary
//!
//! Thin wrapper around [`lambda_cli::run_cli`]; all command logic lives in
//! the library crate for testability.
//!
//! # Exit Codes
//!
//! - `0` - match found / register succeeded
//! - `1` - no match
//! - `2` - parse error
//! - `3` - an internal budget was exhausted before a verdict could be reached

fn main() {
    env_logger::init();
    std::process::exit(lambda_cli::run_cli());
}
