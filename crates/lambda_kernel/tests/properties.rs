//! Property-based tests over the core term operations.
//!
//! Terms are generated over a small closed pool of identifiers so that
//! structural equality checks stay meaningful (an open-ended identifier
//! alphabet would mostly generate terms with no shared free variables,
//! which defeats the capture and alpha-equivalence properties below).

use std::rc::Rc;

use lambda_kernel::{alpha_eq, canonical_string, normalize, parse, pretty, rename, substitute, Term};
use proptest::prelude::*;

const IDENTS: [&str; 4] = ["x", "y", "z", "w"];

fn arbitrary_term() -> impl Strategy<Value = Term> {
    let leaf = prop_oneof![
        (0..IDENTS.len()).prop_map(|i| Term::var(IDENTS[i])),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (0..IDENTS.len(), inner.clone()).prop_map(|(i, body)| Term::lam(IDENTS[i], body)),
            (inner.clone(), inner).prop_map(|(f, a)| Term::app(f, a)),
        ]
    })
}

proptest! {
    /// 1. Parsing `pretty(t)` reproduces `t`, for every generated term.
    #[test]
    fn parser_round_trips_through_the_printer(t in arbitrary_term()) {
        let text = pretty(&t);
        let reparsed = parse(&text).expect("pretty-printed output always reparses");
        prop_assert_eq!(reparsed, t);
    }

    /// 2a. alpha_eq is reflexive.
    #[test]
    fn alpha_eq_is_reflexive(t in arbitrary_term()) {
        prop_assert!(alpha_eq(&t, &t));
    }

    /// 2b. alpha_eq is symmetric.
    #[test]
    fn alpha_eq_is_symmetric(a in arbitrary_term(), b in arbitrary_term()) {
        prop_assert_eq!(alpha_eq(&a, &b), alpha_eq(&b, &a));
    }

    /// 2c. Renaming a lambda's bound parameter to a fresh name never
    /// changes what it is alpha-equivalent to.
    #[test]
    fn renaming_a_bound_parameter_preserves_alpha_equivalence(t in arbitrary_term(), fresh_index in 0..IDENTS.len()) {
        if let Term::Lam { param, body } = &t {
            let fresh: Rc<str> = Rc::from(format!("fresh_{}", IDENTS[fresh_index]));
            let renamed_body = rename(body, param, &fresh);
            let renamed = Term::Lam { param: fresh, body: Box::new(renamed_body) };
            prop_assert!(alpha_eq(&t, &renamed));
        }
    }

    /// 3. Substituting a free variable for another never captures it under
    /// a binder the substitution itself introduces: every occurrence that
    /// was free in the substituted position stays free in the result.
    #[test]
    fn substitution_does_not_capture_the_arguments_free_variables(
        body in arbitrary_term(),
        param_index in 0..IDENTS.len(),
        arg_index in 0..IDENTS.len(),
    ) {
        prop_assume!(param_index != arg_index);
        let param = IDENTS[param_index];
        let arg_name = IDENTS[arg_index];
        let arg = Term::var(arg_name);

        let body_free_before = lambda_kernel::free_vars(&body);
        let result = substitute(&body, param, &arg);
        let result_free = lambda_kernel::free_vars(&result);

        if body_free_before.contains(param) {
            prop_assert!(result_free.contains(arg_name));
        }
    }

    /// 4. Normalizing twice gives the same term and the same step count
    /// (the reducer has no hidden nondeterminism or global state).
    #[test]
    fn normalization_is_deterministic(t in arbitrary_term()) {
        let first = normalize(&t, 200);
        let second = normalize(&t, 200);
        prop_assert_eq!(first, second);
    }

    /// 4b. A term already in normal form stays put under a second pass.
    #[test]
    fn renormalizing_a_normal_form_is_a_no_op(t in arbitrary_term()) {
        let once = normalize(&t, 200);
        if !once.reached_budget {
            let twice = normalize(&once.term, 200);
            prop_assert_eq!(twice.term, once.term);
            prop_assert_eq!(twice.steps, 0);
        }
    }

    /// 5. The canonical hash input (the alpha-normalized pretty-print)
    /// agrees for alpha-equivalent terms.
    #[test]
    fn canonical_string_respects_alpha_equivalence(t in arbitrary_term(), fresh_index in 0..IDENTS.len()) {
        if let Term::Lam { param, body } = &t {
            let fresh: Rc<str> = Rc::from(format!("fresh_{}", IDENTS[fresh_index]));
            let renamed_body = rename(body, param, &fresh);
            let renamed = Term::Lam { param: fresh, body: Box::new(renamed_body) };
            prop_assert_eq!(canonical_string(&t), canonical_string(&renamed));
        }
    }
}
