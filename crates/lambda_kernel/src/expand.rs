//! Definition expander.
//!
//! Replaces every `Var(NAME)` where `NAME` is a registry identifier
//! (uppercase leading letter) with its registry definition.
//! Expansion is scope-safe (a `Lam`/`Let` binder sharing `NAME` shadows the
//! registry reference), cycle-detected, and depth-capped.
//!
//! The AST transformation needs no explicit re-parenthesization: structural
//! substitution of an `App`'s subterm already preserves application
//! structure; parentheses are a concern only for [`crate::printer::pretty`].

use std::collections::HashSet;
use std::rc::Rc;

use crate::term::{Binding, Term};

/// Abstraction over "a registry that can answer definition lookups", so this
/// crate never depends on the registry crate. `lambda-registry`'s `Registry`
/// implements this trait.
pub trait Definitions {
    fn lookup(&self, name: &str) -> Option<Term>;
}

/// Default depth cap.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Outcome of an expansion pass: the rewritten term plus any non-fatal
/// notes (cyclic or unknown identifiers) to fold into a proof trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpansionResult {
    pub term: Term,
    pub notes: Vec<String>,
}

/// Expands registry identifiers in `term`, bounded by `max_depth`.
pub fn expand(term: &Term, defs: &dyn Definitions, max_depth: usize) -> ExpansionResult {
    let mut notes = Vec::new();
    let mut in_progress: HashSet<Rc<str>> = HashSet::new();
    let mut shadow: Vec<Rc<str>> = Vec::new();
    let expanded = expand_rec(term, defs, max_depth, &mut in_progress, &mut shadow, &mut notes);
    ExpansionResult { term: expanded, notes }
}

fn is_shadowed(shadow: &[Rc<str>], name: &str) -> bool {
    shadow.iter().any(|n| n.as_ref() == name)
}

fn expand_rec(
    term: &Term,
    defs: &dyn Definitions,
    depth_remaining: usize,
    in_progress: &mut HashSet<Rc<str>>,
    shadow: &mut Vec<Rc<str>>,
    notes: &mut Vec<String>,
) -> Term {
    match term {
        Term::Lit(_) => term.clone(),
        Term::Var(name) => {
            if is_shadowed(shadow, name) || !Term::is_registry_name(name) {
                return term.clone();
            }
            if depth_remaining == 0 {
                return term.clone();
            }
            if in_progress.contains(name) {
                notes.push(format!("cyclic identifier {} not expanded", name));
                return term.clone();
            }
            match defs.lookup(name) {
                Some(definition) => {
                    in_progress.insert(name.clone());
                    let expanded = expand_rec(
                        &definition,
                        defs,
                        depth_remaining - 1,
                        in_progress,
                        shadow,
                        notes,
                    );
                    in_progress.remove(name);
                    expanded
                }
                None => {
                    notes.push(format!("unknown identifier {} left unexpanded", name));
                    term.clone()
                }
            }
        }
        Term::App(func, arg) => Term::App(
            Box::new(expand_rec(func, defs, depth_remaining, in_progress, shadow, notes)),
            Box::new(expand_rec(arg, defs, depth_remaining, in_progress, shadow, notes)),
        ),
        Term::Lam { param, body } => {
            shadow.push(param.clone());
            let new_body = expand_rec(body, defs, depth_remaining, in_progress, shadow, notes);
            shadow.pop();
            Term::Lam { param: param.clone(), body: Box::new(new_body) }
        }
        Term::Let { bindings, body } => {
            let mut new_bindings = Vec::with_capacity(bindings.len());
            for binding in bindings {
                let new_value =
                    expand_rec(&binding.value, defs, depth_remaining, in_progress, shadow, notes);
                new_bindings.push(Binding { name: binding.name.clone(), value: new_value });
                shadow.push(binding.name.clone());
            }
            let new_body = expand_rec(body, defs, depth_remaining, in_progress, shadow, notes);
            for _ in 0..bindings.len() {
                shadow.pop();
            }
            Term::Let { bindings: new_bindings, body: Box::new(new_body) }
        }
    }
}
