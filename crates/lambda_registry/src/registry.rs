//! The canonical morphism registry.
//!
//! A value behind a read/write lock: reads (lookup, iterate) run
//! concurrently; `register` takes exclusive access. Clone is cheap — it
//! shares the same inner store via `Arc`.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use lambda_kernel::{default_recursive_names, expand::Definitions, Term};
use lambda_rewrite::{Registry as RewriteRegistry, RegistryMatch};

use crate::error::{RegistryError, RegistryResult};
use crate::hash::{hash_canonical, hash_definition};
use crate::morphism::CanonicalMorphism;

struct Inner {
    morphisms: Vec<CanonicalMorphism>,
    by_hash: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    recursive_names: HashSet<String>,
}

/// The canonical morphism store.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RwLock<Inner>>,
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            inner: Arc::new(RwLock::new(Inner {
                morphisms: Vec::new(),
                by_hash: HashMap::new(),
                by_name: HashMap::new(),
                recursive_names: default_recursive_names(),
            })),
        }
    }

    /// Inserts or replaces a morphism by hash. Computes the hash from the
    /// definition if the caller left it blank; rejects a caller-supplied
    /// hash that does not match the recomputed digest.
    pub fn register(&self, mut morphism: CanonicalMorphism) -> RegistryResult<String> {
        let actual_hash = hash_definition(&morphism.definition);
        if !morphism.hash.is_empty() && morphism.hash != actual_hash {
            return Err(RegistryError::InvalidMorphism {
                reason: format!(
                    "declared hash {} does not match computed hash {}",
                    morphism.hash, actual_hash
                ),
            });
        }
        morphism.hash = actual_hash.clone();

        let mut inner = self.inner.write().expect("registry lock poisoned");
        if let Some(&index) = inner.by_hash.get(&actual_hash) {
            if inner.morphisms[index].definition != morphism.definition {
                return Err(RegistryError::RegistryConflict { hash: actual_hash });
            }
            let previous_name = inner.morphisms[index].name.clone();
            inner.by_name.remove(&previous_name);
            inner.by_name.insert(morphism.name.clone(), index);
            inner.morphisms[index] = morphism;
            log::debug!("replaced morphism at hash {}", actual_hash);
            return Ok(actual_hash);
        }

        let index = inner.morphisms.len();
        inner.by_hash.insert(actual_hash.clone(), index);
        inner.by_name.insert(morphism.name.clone(), index);
        inner.morphisms.push(morphism);
        log::debug!("registered new morphism at hash {}", actual_hash);
        Ok(actual_hash)
    }

    pub fn lookup_by_hash(&self, hash: &str) -> Option<CanonicalMorphism> {
        let inner = self.inner.read().expect("registry lock poisoned");
        inner.by_hash.get(hash).map(|&index| inner.morphisms[index].clone())
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<CanonicalMorphism> {
        let inner = self.inner.read().expect("registry lock poisoned");
        inner.by_name.get(name).map(|&index| inner.morphisms[index].clone())
    }

    /// Snapshots the registry in insertion order.
    pub fn iterate(&self) -> Vec<CanonicalMorphism> {
        let inner = self.inner.read().expect("registry lock poisoned");
        inner.morphisms.clone()
    }

    /// The configured recursive-identifier set used to route §4.5's
    /// non-terminating branch.
    pub fn known_recursive_names(&self) -> HashSet<String> {
        self.inner.read().expect("registry lock poisoned").recursive_names.clone()
    }

    /// Extends the recursive-identifier set beyond the default §4.5 names.
    pub fn add_recursive_name(&self, name: impl Into<String>) {
        self.inner.write().expect("registry lock poisoned").recursive_names.insert(name.into());
    }
}

impl Definitions for Registry {
    fn lookup(&self, name: &str) -> Option<Term> {
        self.lookup_by_name(name).map(|morphism| morphism.definition)
    }
}

impl RewriteRegistry for Registry {
    fn find_by_canonical(&self, canonical: &str) -> Option<RegistryMatch> {
        let hash = hash_canonical(canonical);
        self.lookup_by_hash(&hash).map(|morphism| RegistryMatch { hash: morphism.hash, name: Some(morphism.name) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphism::Category;
    use lambda_kernel::parse;

    fn morphism(name: &str, source: &str) -> CanonicalMorphism {
        CanonicalMorphism::new(name, parse(source).unwrap(), Category::Source, 1.0)
    }

    #[test]
    fn registering_computes_the_hash() {
        let registry = Registry::new();
        let hash = registry.register(morphism("ZERO", r"\f. \x. x")).unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(registry.lookup_by_name("ZERO").unwrap().hash, hash);
    }

    #[test]
    fn replacing_by_hash_preserves_insertion_order() {
        let registry = Registry::new();
        registry.register(morphism("A", "x")).unwrap();
        registry.register(morphism("B", "y")).unwrap();
        // Re-registering "x" under a new name replaces the same slot.
        registry.register(morphism("A-renamed", "x")).unwrap();
        let names: Vec<String> = registry.iterate().iter().map(|m| m.name.clone()).collect();
        assert_eq!(names, vec!["A-renamed".to_string(), "B".to_string()]);
    }

    #[test]
    fn lookup_by_hash_and_by_name_agree() {
        let registry = Registry::new();
        let hash = registry.register(morphism("ID", r"\x. x")).unwrap();
        assert_eq!(registry.lookup_by_hash(&hash).unwrap().name, "ID");
        assert_eq!(registry.lookup_by_name("ID").unwrap().hash, hash);
    }

    #[test]
    fn unknown_lookups_return_none() {
        let registry = Registry::new();
        assert!(registry.lookup_by_name("MISSING").is_none());
        assert!(registry.lookup_by_hash("deadbeef").is_none());
    }

    #[test]
    fn default_recursive_names_are_present_and_extensible() {
        let registry = Registry::new();
        assert!(registry.known_recursive_names().contains("MAP"));
        registry.add_recursive_name("ZIP");
        assert!(registry.known_recursive_names().contains("ZIP"));
    }

    #[test]
    fn rejects_a_mismatched_declared_hash() {
        let registry = Registry::new();
        let mut bad = morphism("X", "x");
        bad.hash = "0000000000000000000000000000000000000000000000000000000000000000".to_string();
        assert!(registry.register(bad).is_err());
    }
}
