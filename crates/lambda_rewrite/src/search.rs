//! `rewrite_and_match` search.
//!
//! At every node visited, the registry is checked first (a term may already
//! be a known morphism); only then are laws tried, in list order, at the
//! first site a pre-order traversal finds applicable.

use lambda_kernel::{canonical_string, pretty, Binding, Term};

use crate::laws;
use crate::law::RewriteRule;

/// A registered morphism the search can compare a canonicalized term
/// against, without this crate depending on `lambda-registry` directly.
pub trait Registry {
    fn find_by_canonical(&self, canonical: &str) -> Option<RegistryMatch>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryMatch {
    pub hash: String,
    pub name: Option<String>,
}

/// One applied rewrite, folded into a proof trail by `lambda-pipeline`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteStep {
    pub rule: &'static str,
    pub description: &'static str,
    pub from: String,
    pub to: String,
}

/// A successful search outcome: the term matched a registered morphism,
/// possibly after a chain of law applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub result: Term,
    pub registry_hash: String,
    pub registry_name: Option<String>,
    pub trail: Vec<RewriteStep>,
}

/// Default rewrite search depth cap.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Searches for a chain of law applications turning `term` into something
/// already present in `registry`, bounded by `max_depth` applications.
pub fn rewrite_and_match(term: &Term, registry: &dyn Registry, max_depth: usize) -> Option<Match> {
    let mut trail = Vec::new();
    search(term, registry, max_depth, &mut trail)
}

fn search(term: &Term, registry: &dyn Registry, depth_remaining: usize, trail: &mut Vec<RewriteStep>) -> Option<Match> {
    let canonical = canonical_string(term);
    if let Some(found) = registry.find_by_canonical(&canonical) {
        return Some(Match {
            result: term.clone(),
            registry_hash: found.hash,
            registry_name: found.name,
            trail: trail.clone(),
        });
    }
    if depth_remaining == 0 {
        return None;
    }
    for rule in laws::all() {
        let Some(rewritten) = apply_at_first_site(&rule, term) else { continue };
        trail.push(RewriteStep {
            rule: rule.name,
            description: rule.description,
            from: pretty(term),
            to: pretty(&rewritten),
        });
        if let Some(found) = search(&rewritten, registry, depth_remaining - 1, trail) {
            return Some(found);
        }
        trail.pop();
    }
    None
}

/// Pre-order site search: root, then `Lam.body`, `App.func`, `App.arg`,
/// each `Let` binding value in order, then `Let.body`.
fn apply_at_first_site(rule: &RewriteRule, term: &Term) -> Option<Term> {
    if let Some(rewritten) = rule.apply_at_root(term) {
        return Some(rewritten);
    }
    match term {
        Term::Lam { param, body } => apply_at_first_site(rule, body)
            .map(|new_body| Term::Lam { param: param.clone(), body: Box::new(new_body) }),
        Term::App(func, arg) => {
            if let Some(new_func) = apply_at_first_site(rule, func) {
                return Some(Term::App(Box::new(new_func), arg.clone()));
            }
            apply_at_first_site(rule, arg).map(|new_arg| Term::App(func.clone(), Box::new(new_arg)))
        }
        Term::Let { bindings, body } => {
            for (index, binding) in bindings.iter().enumerate() {
                if let Some(new_value) = apply_at_first_site(rule, &binding.value) {
                    let mut new_bindings = bindings.clone();
                    new_bindings[index] = Binding { name: binding.name.clone(), value: new_value };
                    return Some(Term::Let { bindings: new_bindings, body: body.clone() });
                }
            }
            apply_at_first_site(rule, body)
                .map(|new_body| Term::Let { bindings: bindings.clone(), body: Box::new(new_body) })
        }
        _ => None,
    }
}
