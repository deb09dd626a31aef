//! Canonical pretty-printer.
//!
//! `pretty` produces a re-parsable form with minimal parenthesization: an
//! `App` argument that is itself an `App`, `Lam`, or `Let` is parenthesized;
//! `Lam` and `Let` bodies extend as far right as possible (no parentheses
//! are ever needed around them since the grammar makes that their lowest
//! precedence position); `Let` bindings are comma-separated.

use crate::term::Term;

/// Renders `term` to its canonical textual form.
pub fn pretty(term: &Term) -> String {
    let mut out = String::new();
    write_term(term, &mut out);
    out
}

fn write_term(term: &Term, out: &mut String) {
    match term {
        Term::Var(name) => out.push_str(name),
        Term::Lit(lit) => out.push_str(&lit.to_string()),
        Term::Lam { param, body } => {
            out.push('λ');
            out.push_str(param);
            out.push_str(". ");
            write_term(body, out);
        }
        Term::Let { bindings, body } => {
            out.push_str("let ");
            for (i, binding) in bindings.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&binding.name);
                out.push_str(" = ");
                write_term(&binding.value, out);
            }
            out.push_str(" in ");
            write_term(body, out);
        }
        Term::App(func, arg) => {
            write_app_func(func, out);
            out.push(' ');
            write_app_arg(arg, out);
        }
    }
}

fn write_app_func(term: &Term, out: &mut String) {
    match term {
        // A Lam or Let in function position would otherwise swallow the
        // following argument into its own body when re-parsed.
        Term::Lam { .. } | Term::Let { .. } => {
            out.push('(');
            write_term(term, out);
            out.push(')');
        }
        _ => write_term(term, out),
    }
}

fn write_app_arg(term: &Term, out: &mut String) {
    match term {
        Term::App(_, _) | Term::Lam { .. } | Term::Let { .. } => {
            out.push('(');
            write_term(term, out);
            out.push(')');
        }
        _ => write_term(term, out),
    }
}
