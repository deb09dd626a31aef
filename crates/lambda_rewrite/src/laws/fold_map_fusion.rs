//! `FOLD (λh. λacc. g (f h) acc) z xs  ≡  FOLD g z (MAP f xs)`.

use lambda_kernel::{free_vars, fresh_name, Term};

use crate::law::{Bindings, RewriteRule};

fn is_named_var(term: &Term, name: &str) -> bool {
    matches!(term, Term::Var(n) if n.as_ref() == name)
}

fn match_forward(term: &Term) -> Option<Bindings> {
    let Term::App(outer_func, xs) = term else { return None };
    let Term::App(inner_func, z) = outer_func.as_ref() else { return None };
    let Term::App(fold_var, combinator) = inner_func.as_ref() else { return None };
    if !is_named_var(fold_var, "FOLD") {
        return None;
    }
    let Term::Lam { param: h, body: body1 } = combinator.as_ref() else { return None };
    let Term::Lam { param: acc, body: body2 } = body1.as_ref() else { return None };
    let Term::App(left, acc_arg) = body2.as_ref() else { return None };
    if !is_named_var(acc_arg, acc.as_ref()) {
        return None;
    }
    let Term::App(g, f_applied) = left.as_ref() else { return None };
    let Term::App(f, h_arg) = f_applied.as_ref() else { return None };
    if !is_named_var(h_arg, h.as_ref()) {
        return None;
    }
    // f and g must be closed with respect to h and acc: they are being
    // pulled out from underneath those binders into standalone functions.
    for closed in [f.as_ref(), g.as_ref()] {
        let fv = free_vars(closed);
        if fv.contains(h.as_ref()) || fv.contains(acc.as_ref()) {
            return None;
        }
    }
    let mut bindings = Bindings::new();
    bindings.insert("f", (**f).clone());
    bindings.insert("g", (**g).clone());
    bindings.insert("z", (**z).clone());
    bindings.insert("xs", (**xs).clone());
    Some(bindings)
}

fn build_forward(bindings: &Bindings) -> Term {
    let f = bindings["f"].clone();
    let g = bindings["g"].clone();
    let z = bindings["z"].clone();
    let xs = bindings["xs"].clone();
    let mapped = Term::app(Term::app(Term::var("MAP"), f), xs);
    Term::app(Term::app(Term::app(Term::var("FOLD"), g), z), mapped)
}

fn match_backward(term: &Term) -> Option<Bindings> {
    let Term::App(outer_func, map_term) = term else { return None };
    let Term::App(inner_func, z) = outer_func.as_ref() else { return None };
    let Term::App(fold_var, g) = inner_func.as_ref() else { return None };
    if !is_named_var(fold_var, "FOLD") {
        return None;
    }
    let Term::App(map_func, xs) = map_term.as_ref() else { return None };
    let Term::App(map_var, f) = map_func.as_ref() else { return None };
    if !is_named_var(map_var, "MAP") {
        return None;
    }
    let mut bindings = Bindings::new();
    bindings.insert("f", (**f).clone());
    bindings.insert("g", (**g).clone());
    bindings.insert("z", (**z).clone());
    bindings.insert("xs", (**xs).clone());
    Some(bindings)
}

fn build_backward(bindings: &Bindings) -> Term {
    let f = &bindings["f"];
    let g = &bindings["g"];
    let z = bindings["z"].clone();
    let xs = bindings["xs"].clone();

    let mut avoid = free_vars(f);
    avoid.extend(free_vars(g));
    let h = fresh_name("h", &avoid);
    avoid.insert(h.clone());
    let acc = fresh_name("acc", &avoid);

    let inner = Term::app(
        Term::app(g.clone(), Term::app(f.clone(), Term::Var(h.clone()))),
        Term::Var(acc.clone()),
    );
    let combinator = Term::Lam {
        param: h,
        body: Box::new(Term::Lam { param: acc, body: Box::new(inner) }),
    };
    Term::app(Term::app(Term::app(Term::var("FOLD"), combinator), z), xs)
}

pub fn forward() -> RewriteRule {
    RewriteRule::new(
        "fold-map-fusion (forward)",
        "FOLD (\\h. \\acc. g (f h) acc) z xs  =>  FOLD g z (MAP f xs)",
        match_forward,
        build_forward,
    )
}

pub fn backward() -> RewriteRule {
    RewriteRule::new(
        "fold-map-fusion (backward)",
        "FOLD g z (MAP f xs)  =>  FOLD (\\h. \\acc. g (f h) acc) z xs",
        match_backward,
        build_backward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_kernel::{alpha_eq, parse};

    #[test]
    fn forward_fuses_fold_over_a_map() {
        let lhs = parse(r"FOLD (\h. \acc. ADD (SQUARE h) acc) ZERO xs").unwrap();
        let rule = forward();
        let rewritten = rule.apply_at_root(&lhs).expect("pattern should match");
        let expected = parse(r"FOLD ADD ZERO (MAP SQUARE xs)").unwrap();
        assert!(alpha_eq(&rewritten, &expected));
    }

    #[test]
    fn forward_rejects_when_g_captures_the_accumulator() {
        let lhs = parse(r"FOLD (\h. \acc. acc (SQUARE h) acc) ZERO xs").unwrap();
        assert!(forward().apply_at_root(&lhs).is_none());
    }

    #[test]
    fn backward_is_the_inverse_of_forward() {
        let rhs = parse(r"FOLD ADD ZERO (MAP SQUARE xs)").unwrap();
        let rewritten = backward().apply_at_root(&rhs).expect("pattern should match");
        match &rewritten {
            Term::App(outer_func, xs) => {
                assert!(matches!(xs.as_ref(), Term::Var(n) if n.as_ref() == "xs"));
                let _ = outer_func;
            }
            other => panic!("expected App, got {:?}", other),
        }
        let forward_again = forward().apply_at_root(&rewritten).expect("should re-fuse");
        assert!(alpha_eq(&forward_again, &rhs));
    }
}
