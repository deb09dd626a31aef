//! `MAP f (MAP g xs)  ≡  MAP (λx. f (g x)) xs`.

use lambda_kernel::{free_vars, fresh_name, Term};

use crate::law::{Bindings, RewriteRule};

fn is_named_var(term: &Term, name: &str) -> bool {
    matches!(term, Term::Var(n) if n.as_ref() == name)
}

fn match_forward(term: &Term) -> Option<Bindings> {
    let Term::App(outer_func, inner_map) = term else { return None };
    let Term::App(outer_map_var, f) = outer_func.as_ref() else { return None };
    if !is_named_var(outer_map_var, "MAP") {
        return None;
    }
    let Term::App(inner_func, xs) = inner_map.as_ref() else { return None };
    let Term::App(inner_map_var, g) = inner_func.as_ref() else { return None };
    if !is_named_var(inner_map_var, "MAP") {
        return None;
    }
    let mut bindings = Bindings::new();
    bindings.insert("f", (**f).clone());
    bindings.insert("g", (**g).clone());
    bindings.insert("xs", (**xs).clone());
    Some(bindings)
}

fn build_forward(bindings: &Bindings) -> Term {
    let f = &bindings["f"];
    let g = &bindings["g"];
    let xs = bindings["xs"].clone();

    let mut avoid = free_vars(f);
    avoid.extend(free_vars(g));
    let x = fresh_name("x", &avoid);

    let composed = Term::app(f.clone(), Term::app(g.clone(), Term::Var(x.clone())));
    let composed_fn = Term::Lam { param: x, body: Box::new(composed) };
    Term::app(Term::app(Term::var("MAP"), composed_fn), xs)
}

fn match_backward(term: &Term) -> Option<Bindings> {
    let Term::App(map_func, xs) = term else { return None };
    let Term::App(map_var, composed_fn) = map_func.as_ref() else { return None };
    if !is_named_var(map_var, "MAP") {
        return None;
    }
    let Term::Lam { param: x, body } = composed_fn.as_ref() else { return None };
    let Term::App(f, g_applied) = body.as_ref() else { return None };
    let Term::App(g, x_arg) = g_applied.as_ref() else { return None };
    if !is_named_var(x_arg, x.as_ref()) {
        return None;
    }
    for closed in [f.as_ref(), g.as_ref()] {
        if free_vars(closed).contains(x.as_ref()) {
            return None;
        }
    }
    let mut bindings = Bindings::new();
    bindings.insert("f", (**f).clone());
    bindings.insert("g", (**g).clone());
    bindings.insert("xs", (**xs).clone());
    Some(bindings)
}

fn build_backward(bindings: &Bindings) -> Term {
    let f = bindings["f"].clone();
    let g = bindings["g"].clone();
    let xs = bindings["xs"].clone();
    let inner = Term::app(Term::app(Term::var("MAP"), g), xs);
    Term::app(Term::app(Term::var("MAP"), f), inner)
}

pub fn forward() -> RewriteRule {
    RewriteRule::new(
        "map-fusion (forward)",
        "MAP f (MAP g xs)  =>  MAP (\\x. f (g x)) xs",
        match_forward,
        build_forward,
    )
}

pub fn backward() -> RewriteRule {
    RewriteRule::new(
        "map-fusion (backward)",
        "MAP (\\x. f (g x)) xs  =>  MAP f (MAP g xs)",
        match_backward,
        build_backward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_kernel::{alpha_eq, parse};

    #[test]
    fn forward_fuses_two_maps() {
        let lhs = parse("MAP f (MAP g xs)").unwrap();
        let rewritten = forward().apply_at_root(&lhs).expect("pattern should match");
        let expected = parse(r"MAP (\x. f (g x)) xs").unwrap();
        assert!(alpha_eq(&rewritten, &expected));
    }

    #[test]
    fn backward_is_the_inverse_of_forward() {
        let rhs = parse(r"MAP (\x. f (g x)) xs").unwrap();
        let rewritten = backward().apply_at_root(&rhs).expect("pattern should match");
        let expected = parse("MAP f (MAP g xs)").unwrap();
        assert!(alpha_eq(&rewritten, &expected));
    }

    #[test]
    fn rejects_a_lambda_that_is_not_a_composition_shape() {
        let not_composed = parse(r"MAP (\x. x) xs").unwrap();
        assert!(forward().apply_at_root(&not_composed).is_none());
        assert!(backward().apply_at_root(&not_composed).is_none());
    }
}
