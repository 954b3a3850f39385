//! Name-keyed generator registry.
//!
//! The process-wide registry is built once, on first access, from
//! [`crate::catalog::register_all`] and is read-only afterwards. Separate
//! [`Registry`] values can be built for tests or embedding.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::geom::Rect;
use crate::node::Node;

/// Builds a texture covering the given rectangle.
pub type GeneratorFn = fn(Rect) -> Node;

/// Builds the named intermediate layers of a generator, in display order.
pub type ReferencesFn = fn(Rect) -> Vec<(&'static str, Node)>;

/// Generators and their reference layers, keyed by exact (case-sensitive)
/// name.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    generators: BTreeMap<String, GeneratorFn>,
    references: BTreeMap<String, ReferencesFn>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, returning the one it replaced.
    pub fn register_generator(
        &mut self,
        name: impl Into<String>,
        generator: GeneratorFn,
    ) -> Option<GeneratorFn> {
        self.generators.insert(name.into(), generator)
    }

    /// Register reference layers, returning the entry it replaced.
    pub fn register_references(
        &mut self,
        name: impl Into<String>,
        references: ReferencesFn,
    ) -> Option<ReferencesFn> {
        self.references.insert(name.into(), references)
    }

    pub fn get_generator(&self, name: &str) -> Option<GeneratorFn> {
        self.generators.get(name).copied()
    }

    pub fn get_references(&self, name: &str) -> Option<ReferencesFn> {
        self.references.get(name).copied()
    }

    /// Generator names in sorted order.
    pub fn list_names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    /// Names that have reference layers, sorted.
    pub fn reference_names(&self) -> Vec<&str> {
        self.references.keys().map(String::as_str).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Build the named generator over `rect`.
    pub fn generate(&self, name: &str, rect: Rect) -> Option<Node> {
        self.get_generator(name).map(|g| g(rect))
    }

    /// Registered names starting with `prefix`, or sharing its first
    /// character when nothing matches the whole prefix.
    pub fn similar_names(&self, prefix: &str) -> Vec<&str> {
        let matches: Vec<&str> = self
            .list_names()
            .into_iter()
            .filter(|n| n.starts_with(prefix))
            .collect();
        if !matches.is_empty() {
            return matches;
        }
        match prefix.chars().next() {
            Some(first) => self
                .list_names()
                .into_iter()
                .filter(|n| n.starts_with(first))
                .collect(),
            None => Vec::new(),
        }
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut registry = Registry::new();
    crate::catalog::register_all(&mut registry);
    debug!(
        generators = registry.len(),
        references = registry.references.len(),
        "texture registry initialized"
    );
    registry
});

/// The process-wide registry of catalog generators.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
