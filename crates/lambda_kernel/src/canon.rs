//! α-normalization for content-addressed hashing.
//!
//! Renames every bound variable to `v0, v1, …` in pre-order of binder
//! introduction. Free variables and registry identifiers are left
//! untouched — they are part of a term's identity, not artifacts of binder
//! naming. [`crate::printer::pretty`] of the result is the canonical string
//! `lambda-registry` hashes.

use std::rc::Rc;

use crate::printer::pretty;
use crate::term::{Binding, Term};

type Env = Vec<(Rc<str>, Rc<str>)>;

fn lookup(env: &Env, name: &str) -> Option<Rc<str>> {
    env.iter().rev().find(|(old, _)| old.as_ref() == name).map(|(_, new)| new.clone())
}

fn fresh_canonical_name(counter: &mut u32) -> Rc<str> {
    let name = format!("v{}", *counter);
    *counter += 1;
    Rc::from(name.as_str())
}

fn normalize_rec(term: &Term, env: &mut Env, counter: &mut u32) -> Term {
    match term {
        Term::Var(name) => match lookup(env, name) {
            Some(renamed) => Term::Var(renamed),
            None => term.clone(),
        },
        Term::Lit(_) => term.clone(),
        Term::App(func, arg) => Term::App(
            Box::new(normalize_rec(func, env, counter)),
            Box::new(normalize_rec(arg, env, counter)),
        ),
        Term::Lam { param, body } => {
            let fresh = fresh_canonical_name(counter);
            env.push((param.clone(), fresh.clone()));
            let new_body = normalize_rec(body, env, counter);
            env.pop();
            Term::Lam { param: fresh, body: Box::new(new_body) }
        }
        Term::Let { bindings, body } => {
            let mut new_bindings = Vec::with_capacity(bindings.len());
            for binding in bindings {
                let new_value = normalize_rec(&binding.value, env, counter);
                let fresh = fresh_canonical_name(counter);
                new_bindings.push(Binding { name: fresh.clone(), value: new_value });
                env.push((binding.name.clone(), fresh));
            }
            let new_body = normalize_rec(body, env, counter);
            for _ in 0..bindings.len() {
                env.pop();
            }
            Term::Let { bindings: new_bindings, body: Box::new(new_body) }
        }
    }
}

/// Renames bound variables to a canonical `v0, v1, …` scheme in pre-order.
pub fn alpha_normalize(term: &Term) -> Term {
    let mut env = Env::new();
    let mut counter = 0u32;
    normalize_rec(term, &mut env, &mut counter)
}

/// The canonical string used for content-addressed hashing: the
/// pretty-printed, α-normalized form of `term`.
pub fn canonical_string(term: &Term) -> String {
    pretty(&alpha_normalize(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha::alpha_eq;
    use crate::parser::parse;

    #[test]
    fn alpha_equivalent_terms_share_a_canonical_string() {
        let a = parse(r"\x. \y. x y").unwrap();
        let b = parse(r"\p. \q. p q").unwrap();
        assert!(alpha_eq(&a, &b));
        assert_eq!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn free_variables_survive_normalization() {
        let t = parse(r"\x. x ADD").unwrap();
        let normalized = alpha_normalize(&t);
        assert_eq!(normalized, Term::lam("v0", Term::app(Term::var("v0"), Term::var("ADD"))));
    }

    #[test]
    fn distinct_terms_get_distinct_canonical_strings() {
        let a = parse(r"\x. x").unwrap();
        let b = parse(r"\x. \y. x").unwrap();
        assert_ne!(canonical_string(&a), canonical_string(&b));
    }
}
