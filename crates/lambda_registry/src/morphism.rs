//! `CanonicalMorphism`: a named, hashed registry entry.

use std::fmt;

use lambda_kernel::Term;

use crate::error::RegistryError;

/// The role a morphism plays in a composed pipeline, carried for
/// documentation purposes only — the engine does not dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Source,
    Transform,
    Sink,
    Compose,
}

impl Category {
    pub fn parse(text: &str) -> Result<Category, RegistryError> {
        match text {
            "source" => Ok(Category::Source),
            "transform" => Ok(Category::Transform),
            "sink" => Ok(Category::Sink),
            "compose" => Ok(Category::Compose),
            other => Err(RegistryError::InvalidMorphism {
                reason: format!("unknown category '{}'", other),
            }),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Category::Source => "source",
            Category::Transform => "transform",
            Category::Sink => "sink",
            Category::Compose => "compose",
        };
        write!(f, "{}", text)
    }
}

/// A registered canonical morphism: a named λ-term the pipeline can match
/// user expressions against.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalMorphism {
    /// Content-addressed digest of the α-normalized definition. Left empty
    /// by constructors that expect the registry to compute it on insert.
    pub hash: String,
    pub name: String,
    pub definition: Term,
    pub category: Category,
    pub purity: f64,
    pub references: Vec<String>,
}

impl CanonicalMorphism {
    pub fn new(name: impl Into<String>, definition: Term, category: Category, purity: f64) -> Self {
        CanonicalMorphism {
            hash: String::new(),
            name: name.into(),
            definition,
            category,
            purity,
            references: Vec::new(),
        }
    }
}
