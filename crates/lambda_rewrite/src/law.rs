//! Law representation: a matcher/builder pair plus metavariable bindings.
//!
//! Mirrors a congruence-closure matcher: decide whether a shape applies,
//! extract a binding environment, then build the other side from it.

use std::collections::HashMap;

use lambda_kernel::Term;

/// Metavariable bindings extracted by a successful match, keyed by the
/// pattern names used in each law's documentation (`f`, `g`, `z`, `xs`, ...).
pub type Bindings = HashMap<&'static str, Term>;

/// One direction of one algebraic law: an LHS pattern that matches anywhere
/// in a term, and a builder that reconstructs the other side from the
/// bindings the match produced.
pub struct RewriteRule {
    pub name: &'static str,
    pub description: &'static str,
    matcher: fn(&Term) -> Option<Bindings>,
    builder: fn(&Bindings) -> Term,
}

impl RewriteRule {
    pub fn new(
        name: &'static str,
        description: &'static str,
        matcher: fn(&Term) -> Option<Bindings>,
        builder: fn(&Bindings) -> Term,
    ) -> Self {
        RewriteRule { name, description, matcher, builder }
    }

    /// Attempts to apply this rule at the root of `term`. Returns the
    /// rewritten term on success.
    pub fn apply_at_root(&self, term: &Term) -> Option<Term> {
        let bindings = (self.matcher)(term)?;
        Some((self.builder)(&bindings))
    }
}
