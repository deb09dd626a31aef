//! Structural α-equivalence.
//!
//! Two terms are α-equivalent iff they coincide structurally after
//! consistently renaming bound variables to a shared scheme. An environment
//! maps each side's bound names to a shared fresh token; a `Var` compares by
//! looked-up token if bound, else by textual name. This treats free
//! variables and registry identifiers as opaque atoms, which is exactly
//! what the non-terminating path needs.

use std::rc::Rc;

use crate::term::Term;

type Env = Vec<(Rc<str>, u32)>;

fn lookup(env: &Env, name: &str) -> Option<u32> {
    env.iter().rev().find(|(n, _)| n.as_ref() == name).map(|(_, tok)| *tok)
}

/// Checks whether `a` and `b` are α-equivalent.
///
/// Total, deterministic, reflexive, symmetric, and transitive; `O(size)` in
/// the smaller input.
pub fn alpha_eq(a: &Term, b: &Term) -> bool {
    let mut env_a = Env::new();
    let mut env_b = Env::new();
    let mut next_token = 0u32;
    alpha_eq_rec(a, b, &mut env_a, &mut env_b, &mut next_token)
}

fn alpha_eq_rec(a: &Term, b: &Term, env_a: &mut Env, env_b: &mut Env, next_token: &mut u32) -> bool {
    match (a, b) {
        (Term::Var(na), Term::Var(nb)) => match (lookup(env_a, na), lookup(env_b, nb)) {
            (Some(ta), Some(tb)) => ta == tb,
            (None, None) => na == nb,
            _ => false,
        },
        (Term::Lit(la), Term::Lit(lb)) => la == lb,
        (Term::App(fa, aa), Term::App(fb, ab)) => {
            alpha_eq_rec(fa, fb, env_a, env_b, next_token) && alpha_eq_rec(aa, ab, env_a, env_b, next_token)
        }
        (Term::Lam { param: pa, body: ba }, Term::Lam { param: pb, body: bb }) => {
            let token = *next_token;
            *next_token += 1;
            env_a.push((pa.clone(), token));
            env_b.push((pb.clone(), token));
            let equal = alpha_eq_rec(ba, bb, env_a, env_b, next_token);
            env_a.pop();
            env_b.pop();
            equal
        }
        (Term::Let { bindings: bas, body: body_a }, Term::Let { bindings: bbs, body: body_b }) => {
            if bas.len() != bbs.len() {
                return false;
            }
            let mut pushed = 0;
            let mut equal = true;
            for (ba, bb) in bas.iter().zip(bbs.iter()) {
                // Each value is compared under the environment extended by
                // earlier bindings only, mirroring §4.2 sequential shadowing.
                if !alpha_eq_rec(&ba.value, &bb.value, env_a, env_b, next_token) {
                    equal = false;
                    break;
                }
                let token = *next_token;
                *next_token += 1;
                env_a.push((ba.name.clone(), token));
                env_b.push((bb.name.clone(), token));
                pushed += 1;
            }
            if equal {
                equal = alpha_eq_rec(body_a, body_b, env_a, env_b, next_token);
            }
            for _ in 0..pushed {
                env_a.pop();
                env_b.pop();
            }
            equal
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn identity_functions_are_alpha_equivalent_regardless_of_parameter_name() {
        let a = parse(r"\x. x").unwrap();
        let b = parse(r"\y. y").unwrap();
        assert!(alpha_eq(&a, &b));
    }

    #[test]
    fn free_variables_must_match_by_name() {
        let a = parse("x").unwrap();
        let b = parse("y").unwrap();
        assert!(!alpha_eq(&a, &b));
    }

    #[test]
    fn registry_identifiers_compare_as_opaque_atoms() {
        let a = parse("MAP f xs").unwrap();
        let b = parse("MAP g xs").unwrap();
        assert!(!alpha_eq(&a, &b));
        let c = parse("MAP f xs").unwrap();
        assert!(alpha_eq(&a, &c));
    }

    #[test]
    fn is_reflexive_symmetric_transitive() {
        let a = parse(r"\x. \y. x y").unwrap();
        let b = parse(r"\p. \q. p q").unwrap();
        let c = parse(r"\m. \n. m n").unwrap();
        assert!(alpha_eq(&a, &a));
        assert!(alpha_eq(&a, &b) == alpha_eq(&b, &a));
        assert!(alpha_eq(&a, &b) && alpha_eq(&b, &c) && alpha_eq(&a, &c));
    }

    #[test]
    fn nested_binders_with_shadowing_are_handled() {
        let a = parse(r"\x. \x. x").unwrap();
        let b = parse(r"\p. \q. q").unwrap();
        assert!(alpha_eq(&a, &b));
    }

    #[test]
    fn let_bindings_compare_structurally_with_sequential_scope() {
        let a = parse("let x = 1 in x").unwrap();
        let b = parse("let y = 1 in y").unwrap();
        assert!(alpha_eq(&a, &b));

        let c = parse("let x = 1, y = x in y").unwrap();
        let d = parse("let p = 1, q = p in q").unwrap();
        assert!(alpha_eq(&c, &d));
    }

    #[test]
    fn y_combinator_alpha_variants_match() {
        let y1 = parse(r"\g. (\x. g (x x)) (\x. g (x x))").unwrap();
        let y2 = parse(r"\f. (\y. f (y y)) (\y. f (y y))").unwrap();
        assert!(alpha_eq(&y1, &y2));
    }
}
