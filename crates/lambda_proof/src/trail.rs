//! Proof trail: the record that justifies an equivalence verdict.
//!
//! A trail is an ordered ledger, not a tree: each step rewrites the previous
//! form into the next, and the last step's `to` is the `normal_form` the
//! engine considers equal to the registered morphism.

use serde::{Deserialize, Serialize};

/// A single justified rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub rule: String,
    pub from: String,
    pub to: String,
    pub explanation: String,
}

impl ProofStep {
    pub fn definition_expansion(from: impl Into<String>, to: impl Into<String>, explanation: impl Into<String>) -> Self {
        ProofStep { rule: "definition-expansion".to_string(), from: from.into(), to: to.into(), explanation: explanation.into() }
    }

    pub fn beta_reduction(from: impl Into<String>, to: impl Into<String>, steps: usize) -> Self {
        ProofStep {
            rule: "beta-reduction".to_string(),
            from: from.into(),
            to: to.into(),
            explanation: format!("{} leftmost-outermost reduction step(s)", steps),
        }
    }

    pub fn structural_equivalence(from: impl Into<String>, to: impl Into<String>) -> Self {
        ProofStep {
            rule: "structural-equivalence".to_string(),
            from: from.into(),
            to: to.into(),
            explanation: "alpha-equivalent by structural comparison".to_string(),
        }
    }

    pub fn algebraic_law(law_name: &str, from: impl Into<String>, to: impl Into<String>, explanation: impl Into<String>) -> Self {
        ProofStep {
            rule: format!("algebraic-law:{}", law_name),
            from: from.into(),
            to: to.into(),
            explanation: explanation.into(),
        }
    }
}

/// Field order here is the wire contract: `normalForm`,
/// `canonicalHash`, `reasoning`, `steps`. Producers emit compact JSON;
/// consumers must accept either compact or pretty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofTrail {
    pub normal_form: String,
    pub canonical_hash: String,
    pub reasoning: String,
    pub steps: Vec<ProofStep>,
}

impl ProofTrail {
    pub fn new(normal_form: impl Into<String>, canonical_hash: impl Into<String>, reasoning: impl Into<String>, steps: Vec<ProofStep>) -> Self {
        ProofTrail { normal_form: normal_form.into(), canonical_hash: canonical_hash.into(), reasoning: reasoning.into(), steps }
    }

    /// Serializes to the compact JSON form the wire contract requires.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a trail previously produced by [`ProofTrail::to_json`] (or any
    /// compatible pretty-printed equivalent).
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
