//! Leftmost-outermost β-reduction to normal form.
//!
//! A redex is `App(Lam(x, B), A)` anywhere in the term. The leftmost-outermost
//! strategy inspects the root first: if it is a redex, reduce it there;
//! otherwise descend into the function position, then the argument, then
//! lambda bodies and `let` binding values/body, in that order. Full β is
//! performed — reduction proceeds under binders, not just at the top level.

use crate::subst::substitute;
use crate::term::{Binding, Term};

/// The default step budget used when the caller does not override it.
pub const DEFAULT_BUDGET: usize = 1000;

/// Result of normalizing a term under a step budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalForm {
    pub term: Term,
    pub steps: usize,
    pub reached_budget: bool,
}

/// One leftmost-outermost β-reduction step, or `None` if `term` has no redex
/// anywhere (i.e. it is already in normal form).
fn step(term: &Term) -> Option<Term> {
    match term {
        Term::Var(_) | Term::Lit(_) => None,
        Term::App(func, arg) => {
            if let Term::Lam { param, body } = func.as_ref() {
                return Some(substitute(body, param, arg));
            }
            if let Some(new_func) = step(func) {
                return Some(Term::App(Box::new(new_func), arg.clone()));
            }
            if let Some(new_arg) = step(arg) {
                return Some(Term::App(func.clone(), Box::new(new_arg)));
            }
            None
        }
        Term::Lam { param, body } => {
            step(body).map(|new_body| Term::Lam { param: param.clone(), body: Box::new(new_body) })
        }
        Term::Let { bindings, body } => {
            for (i, binding) in bindings.iter().enumerate() {
                if let Some(new_value) = step(&binding.value) {
                    let mut new_bindings = bindings.clone();
                    new_bindings[i] = Binding { name: binding.name.clone(), value: new_value };
                    return Some(Term::Let { bindings: new_bindings, body: body.clone() });
                }
            }
            step(body).map(|new_body| Term::Let { bindings: bindings.clone(), body: Box::new(new_body) })
        }
    }
}

/// Reduces `term` to its normal form, or until `budget` reduction steps have
/// been consumed. Exceeding the budget is not an error; it is reflected in
/// [`NormalForm::reached_budget`].
pub fn normalize(term: &Term, budget: usize) -> NormalForm {
    let mut current = term.clone();
    let mut steps = 0usize;

    loop {
        if steps >= budget {
            return NormalForm { term: current, steps, reached_budget: true };
        }
        match step(&current) {
            Some(next) => {
                log::trace!("beta-reduction step {}: {} -> {}", steps, current, next);
                current = next;
                steps += 1;
            }
            None => return NormalForm { term: current, steps, reached_budget: false },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn literals_and_variables_are_already_normal() {
        assert_eq!(normalize(&Term::int(5), DEFAULT_BUDGET).steps, 0);
        assert_eq!(normalize(&Term::var("x"), DEFAULT_BUDGET).steps, 0);
    }

    #[test]
    fn reduces_simple_redex() {
        let t = parse(r"(\x. x) y").unwrap();
        let result = normalize(&t, DEFAULT_BUDGET);
        assert_eq!(result.term, Term::var("y"));
        assert_eq!(result.steps, 1);
        assert!(!result.reached_budget);
    }

    #[test]
    fn reduces_nested_redexes_two_steps() {
        let t = parse(r"(\x. x) ((\y. y) z)").unwrap();
        let result = normalize(&t, DEFAULT_BUDGET);
        assert_eq!(result.term, Term::var("z"));
        assert_eq!(result.steps, 2);
    }

    #[test]
    fn reduces_under_binders() {
        let t = parse(r"\x. (\y. y) x").unwrap();
        let result = normalize(&t, DEFAULT_BUDGET);
        assert_eq!(result.term, Term::lam("x", Term::var("x")));
    }

    #[test]
    fn zero_budget_returns_input_unchanged() {
        let t = parse(r"(\x. x) y").unwrap();
        let result = normalize(&t, 0);
        assert_eq!(result.term, t);
        assert!(result.reached_budget);
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn determinism_same_term_and_budget_yield_same_result() {
        let t = parse(r"\f. \x. f (f x)").unwrap();
        let a = normalize(&t, DEFAULT_BUDGET);
        let b = normalize(&t, DEFAULT_BUDGET);
        assert_eq!(a, b);
    }

    #[test]
    fn let_reduces_inside_binding_values_and_body_without_inlining() {
        let t = parse("let x = (\\y. y) 1 in x").unwrap();
        let result = normalize(&t, DEFAULT_BUDGET);
        // `let` itself is not inlined by the reducer; only the
        // binding value's redex reduces.
        match result.term {
            Term::Let { ref bindings, ref body } => {
                assert_eq!(bindings[0].value, Term::int(1));
                assert_eq!(**body, Term::var("x"));
            }
            other => panic!("expected Let, got {:?}", other),
        }
    }
}
