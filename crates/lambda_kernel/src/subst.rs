//! Free variables, capture-avoiding substitution, and α-renaming
//!.

use std::collections::HashSet;
use std::rc::Rc;

use crate::term::{Binding, Term};

/// Free identifier names of `term`. Both lowercase variables and uppercase
/// registry names are returned; callers decide how to treat each.
pub fn free_vars(term: &Term) -> HashSet<Rc<str>> {
    match term {
        Term::Var(name) => {
            let mut set = HashSet::new();
            set.insert(name.clone());
            set
        }
        Term::Lit(_) => HashSet::new(),
        Term::Lam { param, body } => {
            let mut fv = free_vars(body);
            fv.remove(param.as_ref());
            fv
        }
        Term::App(func, arg) => {
            let mut fv = free_vars(func);
            fv.extend(free_vars(arg));
            fv
        }
        Term::Let { bindings, body } => {
            // FV(let x1=e1,...,xn=en in b)
            //   = FV(e1) ∪ (FV(e2) \ {x1}) ∪ ... ∪ (FV(b) \ {x1,...,xn})
            let mut bound: HashSet<Rc<str>> = HashSet::new();
            let mut result = HashSet::new();
            for binding in bindings {
                for v in free_vars(&binding.value) {
                    if !bound.contains(&v) {
                        result.insert(v);
                    }
                }
                bound.insert(binding.name.clone());
            }
            for v in free_vars(body) {
                if !bound.contains(&v) {
                    result.insert(v);
                }
            }
            result
        }
    }
}

/// Generates a name not present in `avoid`, starting from `base` and
/// appending increasing integer suffixes until unused.
pub fn fresh_name(base: &str, avoid: &HashSet<Rc<str>>) -> Rc<str> {
    if !avoid.contains(base) {
        return Rc::from(base);
    }
    let mut n = 0u64;
    loop {
        let candidate = format!("{}{}", base, n);
        if !avoid.contains(candidate.as_str()) {
            return Rc::from(candidate.as_str());
        }
        n += 1;
    }
}

/// Substitutes `new_name` for every free occurrence of `old` in `term`,
/// respecting binder shadowing.
pub fn rename(term: &Term, old: &str, new_name: &Rc<str>) -> Term {
    match term {
        Term::Var(name) => {
            if name.as_ref() == old {
                Term::Var(new_name.clone())
            } else {
                term.clone()
            }
        }
        Term::Lit(_) => term.clone(),
        Term::Lam { param, body } => {
            if param.as_ref() == old {
                // `old` is shadowed inside this binder; no free occurrences to rename.
                term.clone()
            } else {
                Term::Lam {
                    param: param.clone(),
                    body: Box::new(rename(body, old, new_name)),
                }
            }
        }
        Term::App(func, arg) => Term::App(
            Box::new(rename(func, old, new_name)),
            Box::new(rename(arg, old, new_name)),
        ),
        Term::Let { bindings, body } => {
            let mut new_bindings = Vec::with_capacity(bindings.len());
            let mut shadowed = false;
            for binding in bindings {
                if shadowed {
                    new_bindings.push(binding.clone());
                } else {
                    let value = rename(&binding.value, old, new_name);
                    if binding.name.as_ref() == old {
                        shadowed = true;
                    }
                    new_bindings.push(Binding { name: binding.name.clone(), value });
                }
            }
            let new_body = if shadowed { (**body).clone() } else { rename(body, old, new_name) };
            Term::Let { bindings: new_bindings, body: Box::new(new_body) }
        }
    }
}

/// Implements `body[x := arg]` with capture avoidance: whenever a `Lam y. …`
/// is entered and `y ∈ freeVars(arg)`, `y` is first α-converted to a fresh
/// name not in `freeVars(body) ∪ freeVars(arg) ∪ {x}`.
///
/// `Let` bindings are not α-converted on substitution — only `Lam` triggers
/// renaming; `Let` only stops descending once a binder shadowing `x` is
/// reached.
pub fn substitute(term: &Term, x: &str, arg: &Term) -> Term {
    match term {
        Term::Var(name) => {
            if name.as_ref() == x {
                arg.clone()
            } else {
                term.clone()
            }
        }
        Term::Lit(_) => term.clone(),
        Term::App(func, body_arg) => Term::App(
            Box::new(substitute(func, x, arg)),
            Box::new(substitute(body_arg, x, arg)),
        ),
        Term::Lam { param, body } => {
            if param.as_ref() == x {
                term.clone()
            } else if free_vars(arg).contains(param.as_ref()) {
                let mut avoid = free_vars(body);
                avoid.extend(free_vars(arg));
                avoid.insert(Rc::from(x));
                let fresh = fresh_name(param, &avoid);
                let renamed_body = rename(body, param, &fresh);
                Term::Lam {
                    param: fresh,
                    body: Box::new(substitute(&renamed_body, x, arg)),
                }
            } else {
                Term::Lam {
                    param: param.clone(),
                    body: Box::new(substitute(body, x, arg)),
                }
            }
        }
        Term::Let { bindings, body } => {
            let mut new_bindings = Vec::with_capacity(bindings.len());
            let mut shadowed = false;
            for binding in bindings {
                if shadowed {
                    new_bindings.push(binding.clone());
                } else {
                    let value = substitute(&binding.value, x, arg);
                    if binding.name.as_ref() == x {
                        shadowed = true;
                    }
                    new_bindings.push(Binding { name: binding.name.clone(), value });
                }
            }
            let new_body = if shadowed { (**body).clone() } else { substitute(body, x, arg) };
            Term::Let { bindings: new_bindings, body: Box::new(new_body) }
        }
    }
}
