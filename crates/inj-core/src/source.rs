//! Scope lookup capability.
//!
//! The resolver never talks to the cluster: whoever loaded the namespace and
//! pod metadata hands the annotation maps over, and anything that can answer
//! "what is the value of this key" can act as a scope.

use std::collections::{BTreeMap, HashMap};

use inj_model::Annotations;

/// A single scope's annotations, looked up by key.
pub trait AnnotationSource {
    /// The value declared under `key` at this scope, if any.
    fn annotation(&self, key: &str) -> Option<&str>;
}

impl AnnotationSource for Annotations {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

impl AnnotationSource for BTreeMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}

impl AnnotationSource for HashMap<String, String> {
    fn annotation(&self, key: &str) -> Option<&str> {
        self.get(key).map(|s| s.as_str())
    }
}
