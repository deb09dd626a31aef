//! Command-line argument parsing and dispatch for `lambda-equiv`.
//!
//! The CLI is a reference driver over the library crates, not part of the
//! core correctness contract. It exists so the documented exit codes have
//! somewhere to live.
//!
//! # Examples
//!
//! ```bash
//! lambda-equiv verify "\\n. ADD ONE n" --registry ./registry
//! lambda-equiv register ./registry/new.morph --registry ./registry
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use lambda_kernel::{expand, normalize, parse};
use lambda_pipeline::{find_canonical, PipelineConfig};
use lambda_registry::{parse_morph, write_morph, CanonicalMorphism, Registry};

/// Command-line interface for the `lambda-equiv` tool.
#[derive(Parser)]
#[command(name = "lambda-equiv")]
#[command(about = "Semantic equivalence engine for a small untyped lambda calculus", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Find a registered canonical morphism equivalent to an expression.
    ///
    /// Exit codes: `0` match found, `1` no match, `2` parse error, `3` an
    /// internal budget (reduction steps or expansion depth) was exhausted
    /// before a verdict could be reached.
    Verify {
        /// The source expression, e.g. `"\n. ADD ONE n"`.
        expr: String,

        /// Directory of `.morph` files to seed the registry from.
        #[arg(long, default_value = "registry")]
        registry: PathBuf,

        /// β-reduction step budget.
        #[arg(long, default_value_t = lambda_kernel::DEFAULT_BUDGET)]
        budget: usize,

        /// Definition-expansion depth cap.
        #[arg(long, default_value_t = lambda_kernel::DEFAULT_MAX_DEPTH)]
        max_depth: usize,

        /// Algebraic rewrite-search depth cap.
        #[arg(long, default_value_t = lambda_rewrite::DEFAULT_MAX_DEPTH)]
        rewrite_depth: usize,

        /// Print the proof trail as JSON instead of the human-readable form.
        #[arg(long)]
        json: bool,
    },

    /// Load a `.morph` file into a registry directory, printing its hash.
    Register {
        /// Path to the `.morph` file to load.
        file: PathBuf,

        /// Directory the computed `<hash>.morph` is written into.
        #[arg(long, default_value = "registry")]
        registry: PathBuf,
    },
}

/// Reads every `*.morph` file in `dir` into a fresh [`Registry`]. A missing
/// directory is treated as an empty registry, not an error — `verify` should
/// work with no seed data at all.
fn load_registry(dir: &Path) -> Result<Registry, String> {
    let registry = Registry::new();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(registry),
    };
    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("morph") {
            continue;
        }
        let text = fs::read_to_string(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
        let morphism = parse_morph(&text).map_err(|e| format!("{}: {}", path.display(), e))?;
        registry.register(morphism).map_err(|e| format!("{}: {}", path.display(), e))?;
    }
    Ok(registry)
}

/// Runs the CLI and returns the process exit code.
pub fn run_cli() -> i32 {
    let cli = Cli::parse();
    match cli.command {
        Commands::Verify { expr, registry, budget, max_depth, rewrite_depth, json } => {
            verify(&expr, &registry, budget, max_depth, rewrite_depth, json)
        }
        Commands::Register { file, registry } => register(&file, &registry),
    }
}

fn verify(expr: &str, registry_dir: &Path, budget: usize, max_depth: usize, rewrite_depth: usize, json: bool) -> i32 {
    log::debug!("verify '{}' against registry at {}", expr, registry_dir.display());
    let registry = match load_registry(registry_dir) {
        Ok(registry) => registry,
        Err(message) => {
            eprintln!("error: could not load registry: {}", message);
            return 1;
        }
    };
    let config = PipelineConfig { beta_budget: budget, expand_depth: max_depth, rewrite_depth };

    let parsed = match parse(expr) {
        Ok(term) => term,
        Err(err) => {
            eprintln!("parse error: {}", err);
            return 2;
        }
    };

    match find_canonical(expr, &registry, &config) {
        Ok(Some(outcome)) => {
            if json {
                match outcome.proof.to_json() {
                    Ok(text) => println!("{}", text),
                    Err(err) => {
                        eprintln!("error: could not serialize proof: {}", err);
                        return 1;
                    }
                }
            } else {
                println!("match: {} ({})", outcome.canonical.name, outcome.canonical.hash);
                println!("reasoning: {}", outcome.proof.reasoning);
                for step in &outcome.proof.steps {
                    println!("  [{}] {} -> {}", step.rule, step.from, step.to);
                }
            }
            0
        }
        Ok(None) => {
            // Distinguish "no match" from "gave up because a budget ran
            // out" by re-running expansion and reduction on their own and
            // checking whether either was still making progress when cut
            // off.
            let expanded = expand(&parsed, &registry, max_depth);
            let normal = normalize(&expanded.term, budget);
            if normal.reached_budget {
                eprintln!("no match: reduction budget of {} steps exhausted", budget);
                3
            } else {
                println!("no match");
                1
            }
        }
        Err(err) => {
            eprintln!("parse error: {}", err);
            2
        }
    }
}

fn register(file: &Path, registry_dir: &Path) -> i32 {
    log::debug!("register {} into {}", file.display(), registry_dir.display());
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: could not read {}: {}", file.display(), err);
            return 1;
        }
    };
    let morphism = match parse_morph(&text) {
        Ok(morphism) => morphism,
        Err(err) => {
            eprintln!("error: {}", err);
            return 1;
        }
    };
    if let Err(err) = fs::create_dir_all(registry_dir) {
        eprintln!("error: could not create registry directory: {}", err);
        return 1;
    }
    let registry = match load_registry(registry_dir) {
        Ok(registry) => registry,
        Err(message) => {
            eprintln!("error: could not load registry: {}", message);
            return 1;
        }
    };
    let hash = match registry.register(morphism) {
        Ok(hash) => hash,
        Err(err) => {
            eprintln!("error: {}", err);
            return 1;
        }
    };
    let stored: CanonicalMorphism = registry.lookup_by_hash(&hash).expect("just registered");
    let out_path = registry_dir.join(format!("{}.morph", hash));
    if let Err(err) = fs::write(&out_path, write_morph(&stored)) {
        eprintln!("error: could not write {}: {}", out_path.display(), err);
        return 1;
    }
    println!("{}", hash);
    0
}
