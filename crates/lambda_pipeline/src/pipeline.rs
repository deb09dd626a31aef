//! `findCanonical` orchestration: ties expansion, reduction, and rewrite
//! search together into the one call the rest of the system makes.
//!
//! A staged try-this-then-that delegation: attempt a structural match,
//! fall back to a rewrite search, return `None` on exhaustion rather than
//! erroring.

use lambda_kernel::{alpha_eq, expand, is_non_terminating_candidate, normalize, parse, pretty, ParseError, Term};
use lambda_proof::{ProofStep, ProofTrail};
use lambda_registry::{CanonicalMorphism, Registry};
use lambda_rewrite::{rewrite_and_match, RewriteStep};

/// Budgets the pipeline applies at each stage. Defaults mirror the kernel
/// and rewriter's own documented defaults.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub beta_budget: usize,
    pub expand_depth: usize,
    pub rewrite_depth: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            beta_budget: lambda_kernel::DEFAULT_BUDGET,
            expand_depth: lambda_kernel::DEFAULT_MAX_DEPTH,
            rewrite_depth: lambda_rewrite::DEFAULT_MAX_DEPTH,
        }
    }
}

/// A successful equivalence verdict: which registered morphism `expr`
/// matched, and the trail justifying it.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub canonical: CanonicalMorphism,
    pub proof: ProofTrail,
}

/// Decides whether `expr` is equivalent to a registered canonical morphism.
///
/// Returns `Ok(None)` when no match is found — that is not an error.
/// Returns `Err` only on a parse failure.
pub fn find_canonical(expr: &str, registry: &Registry, config: &PipelineConfig) -> Result<Option<Outcome>, ParseError> {
    let parsed = parse(expr)?;
    let known_recursive = registry.known_recursive_names();

    let outcome = if is_non_terminating_candidate(&parsed, &known_recursive) {
        log::debug!("routing '{}' to the non-terminating branch", expr);
        non_terminating_branch(&parsed, registry, config)
    } else {
        log::debug!("routing '{}' to the terminating branch", expr);
        terminating_branch(&parsed, registry, config)
    };

    Ok(outcome)
}

fn non_terminating_branch(expr: &Term, registry: &Registry, config: &PipelineConfig) -> Option<Outcome> {
    // 3a: alpha-equivalence after a one-level shallow expansion of both sides.
    let shallow_expr = expand(expr, registry, 1).term;
    for candidate in registry.iterate() {
        let shallow_candidate = expand(&candidate.definition, registry, 1).term;
        if alpha_eq(&shallow_expr, &shallow_candidate) {
            let step = ProofStep::structural_equivalence(pretty(expr), pretty(&candidate.definition));
            let proof = ProofTrail::new(
                pretty(&candidate.definition),
                candidate.hash.clone(),
                "alpha-equivalent to a registered morphism after shallow expansion",
                vec![step],
            );
            return Some(Outcome { canonical: candidate, proof });
        }
    }

    // 3b: algebraic rewriting against the registry.
    let found = rewrite_and_match(expr, registry, config.rewrite_depth)?;
    let canonical = registry.lookup_by_hash(&found.registry_hash)?;
    let proof = ProofTrail::new(
        pretty(&found.result),
        found.registry_hash.clone(),
        "reached a registered morphism via algebraic rewriting",
        rewrite_steps_to_proof_steps(&found.trail),
    );
    Some(Outcome { canonical, proof })
}

fn rewrite_steps_to_proof_steps(steps: &[RewriteStep]) -> Vec<ProofStep> {
    steps
        .iter()
        .map(|step| ProofStep::algebraic_law(step.rule, step.from.clone(), step.to.clone(), step.description))
        .collect()
}

fn terminating_branch(expr: &Term, registry: &Registry, config: &PipelineConfig) -> Option<Outcome> {
    let mut steps = Vec::new();

    let expanded = expand(expr, registry, config.expand_depth);
    if expanded.term != *expr {
        steps.push(ProofStep::definition_expansion(
            pretty(expr),
            pretty(&expanded.term),
            expanded.notes.join("; "),
        ));
    }

    let normal = normalize(&expanded.term, config.beta_budget);
    if normal.steps > 0 {
        steps.push(ProofStep::beta_reduction(pretty(&expanded.term), pretty(&normal.term), normal.steps));
    }

    for candidate in registry.iterate() {
        let candidate_expanded = expand(&candidate.definition, registry, config.expand_depth).term;
        let candidate_normal = normalize(&candidate_expanded, config.beta_budget);
        if alpha_eq(&normal.term, &candidate_normal.term) {
            let mut trail = steps.clone();
            if pretty(&normal.term) != pretty(&candidate_normal.term) {
                trail.push(ProofStep::structural_equivalence(pretty(&normal.term), pretty(&candidate_normal.term)));
            }
            let proof = ProofTrail::new(
                pretty(&normal.term),
                candidate.hash.clone(),
                "beta-normal forms are alpha-equivalent",
                trail,
            );
            return Some(Outcome { canonical: candidate, proof });
        }
    }

    // 4d: fall back to algebraic rewriting on the original expression.
    let found = rewrite_and_match(expr, registry, config.rewrite_depth)?;
    let canonical = registry.lookup_by_hash(&found.registry_hash)?;
    let mut trail = steps;
    trail.extend(rewrite_steps_to_proof_steps(&found.trail));
    let proof = ProofTrail::new(
        pretty(&found.result),
        found.registry_hash.clone(),
        "no beta-normal match; reached a registered morphism via algebraic rewriting",
        trail,
    );
    Some(Outcome { canonical, proof })
}
