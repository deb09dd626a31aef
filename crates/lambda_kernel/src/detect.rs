//! Recursion detector.
//!
//! Decides cheaply whether an expression should be routed to the
//! terminating path (β-normalization) or the non-terminating path
//! (α-equivalence, then algebraic rewriting). The detector never rejects
//! an expression — it only routes.

use std::collections::HashSet;

use crate::subst::free_vars;
use crate::term::Term;

/// The known-recursive identifier set shipped by default.
/// Registries may extend this set; membership is by name equality.
pub fn default_recursive_names() -> HashSet<String> {
    ["FOLD", "MAP", "FILTER", "FLATMAP", "CONCAT"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Returns `true` if `term` is a non-terminating candidate: it contains a
/// Y-combinator shape, or mentions a known-recursive identifier.
pub fn is_non_terminating_candidate(term: &Term, known_recursive: &HashSet<String>) -> bool {
    mentions_known_recursive_name(term, known_recursive) || contains_y_combinator_shape(term)
}

fn mentions_known_recursive_name(term: &Term, known: &HashSet<String>) -> bool {
    match term {
        Term::Var(name) => known.contains(name.as_ref()),
        Term::Lit(_) => false,
        Term::Lam { body, .. } => mentions_known_recursive_name(body, known),
        Term::App(func, arg) => {
            mentions_known_recursive_name(func, known) || mentions_known_recursive_name(arg, known)
        }
        Term::Let { bindings, body } => {
            bindings.iter().any(|b| mentions_known_recursive_name(&b.value, known))
                || mentions_known_recursive_name(body, known)
        }
    }
}

/// `App(Var(z), Var(z))` anywhere within `term`: a self-application.
fn contains_self_application(term: &Term) -> bool {
    match term {
        Term::App(func, arg) => {
            if let (Term::Var(nf), Term::Var(na)) = (func.as_ref(), arg.as_ref()) {
                if nf == na {
                    return true;
                }
            }
            contains_self_application(func) || contains_self_application(arg)
        }
        Term::Lam { body, .. } => contains_self_application(body),
        Term::Let { bindings, body } => {
            bindings.iter().any(|b| contains_self_application(&b.value)) || contains_self_application(body)
        }
        _ => false,
    }
}

/// Tests whether `term` is itself a Y-combinator shape (not whether it
/// contains one nested inside): `Lam(g, App(Lam(x, Bx), Lam(y, By)))` where
/// both `Bx` and `By` contain a self-application and `g` occurs free in
/// both. Structurally α-renamed variants qualify equally since the test
/// only inspects shape and free-variable membership, never literal names.
fn is_y_shape_at_root(term: &Term) -> bool {
    let Term::Lam { param: g, body } = term else {
        return false;
    };
    let Term::App(left, right) = body.as_ref() else {
        return false;
    };
    let (Term::Lam { body: bx, .. }, Term::Lam { body: by, .. }) = (left.as_ref(), right.as_ref()) else {
        return false;
    };
    free_vars(bx).contains(g.as_ref())
        && free_vars(by).contains(g.as_ref())
        && contains_self_application(bx)
        && contains_self_application(by)
}

fn contains_y_combinator_shape(term: &Term) -> bool {
    if is_y_shape_at_root(term) {
        return true;
    }
    match term {
        Term::Lam { body, .. } => contains_y_combinator_shape(body),
        Term::App(func, arg) => contains_y_combinator_shape(func) || contains_y_combinator_shape(arg),
        Term::Let { bindings, body } => {
            bindings.iter().any(|b| contains_y_combinator_shape(&b.value))
                || contains_y_combinator_shape(body)
        }
        _ => false,
    }
}

/// Last-resort structural fallback for text that failed to parse: a crude
/// `(x x)`-shaped substring scan, usable only when no AST is available; the
/// pipeline never reaches this path since it returns early on a parse
/// failure.
pub fn text_suggests_self_application(text: &str) -> bool {
    let collapsed: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    // crude: "(x x)" with identical identifiers on both sides of a space
    // inside parens, ignoring exact tokenization.
    collapsed.contains(')') && {
        let mut found = false;
        let chars: Vec<char> = text.chars().collect();
        for i in 0..chars.len() {
            if chars[i] == '(' {
                let rest: String = chars[i..].iter().collect();
                if let Some(close) = rest.find(')') {
                    let inner = &rest[1..close];
                    let parts: Vec<&str> = inner.split_whitespace().collect();
                    if parts.len() == 2 && parts[0] == parts[1] {
                        found = true;
                        break;
                    }
                }
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn detects_known_recursive_names() {
        let known = default_recursive_names();
        let term = parse("MAP f xs").unwrap();
        assert!(is_non_terminating_candidate(&term, &known));
    }

    #[test]
    fn terminating_terms_are_not_flagged() {
        let known = default_recursive_names();
        let term = parse(r"\x. x").unwrap();
        assert!(!is_non_terminating_candidate(&term, &known));
    }

    #[test]
    fn detects_the_y_combinator() {
        let known = default_recursive_names();
        let term = parse(r"\g. (\x. g (x x)) (\x. g (x x))").unwrap();
        assert!(is_non_terminating_candidate(&term, &known));
    }

    #[test]
    fn detects_alpha_renamed_y_combinator_variants() {
        let known = default_recursive_names();
        let term = parse(r"\f. (\y. f (y y)) (\y. f (y y))").unwrap();
        assert!(is_non_terminating_candidate(&term, &known));
    }

    #[test]
    fn unrelated_self_application_without_outer_binder_usage_is_not_flagged() {
        let known = default_recursive_names();
        // `g` does not occur free in either inner body here.
        let term = parse(r"\g. (\x. x x) (\x. x x)").unwrap();
        assert!(!is_non_terminating_candidate(&term, &known));
    }

    #[test]
    fn text_fallback_detects_self_application_pattern() {
        assert!(text_suggests_self_application("(x x)"));
        assert!(!text_suggests_self_application("(x y)"));
    }
}
