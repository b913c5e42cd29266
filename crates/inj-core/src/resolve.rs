//! Effective annotation resolution across the namespace and pod scopes.
//!
//! A setting may be declared at both scopes. The pod wins whenever it says
//! something specific (an opt-out or an instance name), while a bare `"true"`
//! defers to whatever refinement the namespace carries. [`resolve_value`] is
//! the whole policy; [`EffectiveAnnotations`] pairs the two scopes and adds
//! the typed surface over the well-known keys.

use inj_model::{InjectDirective, Runtime, Setting};
use tracing::{instrument, trace};

use crate::source::AnnotationSource;

/// Effective value for a single setting, given the raw values found at
/// namespace and pod scope (empty string when absent).
///
/// Total over any pair of strings and always returns one of its inputs.
/// Only the `"true"`/`"false"` literals are compared case-insensitively;
/// every other value passes through byte-for-byte.
pub fn resolve_value<'a>(ns_value: &'a str, pod_value: &'a str) -> &'a str {
    // the namespace has no opinion, the pod decides (even if it is also empty)
    if ns_value.is_empty() {
        return pod_value;
    }

    // the pod has no opinion, the namespace default stands (true, false, instance)
    if pod_value.is_empty() {
        return ns_value;
    }

    // a pod value other than "true" is an opt-out or an instance selection; it wins
    if !pod_value.eq_ignore_ascii_case("true") {
        return pod_value;
    }

    // the pod asked for injection; a namespace opt-out does not veto it
    if ns_value.eq_ignore_ascii_case("false") {
        return pod_value;
    }

    // pod said "true" and the namespace holds "true" or an instance name,
    // so the namespace value may refine the generic opt-in
    ns_value
}

/// Two-scope view over a pod's annotations and its namespace's annotations.
///
/// Borrows both sources for the duration of one admission review; holds no
/// state of its own and retains nothing across calls.
#[derive(Clone, Copy)]
pub struct EffectiveAnnotations<'a> {
    namespace: &'a dyn AnnotationSource,
    pod: &'a dyn AnnotationSource,
}

impl<'a> EffectiveAnnotations<'a> {
    /// Pair a namespace scope with a pod scope.
    pub fn new(namespace: &'a dyn AnnotationSource, pod: &'a dyn AnnotationSource) -> Self {
        Self { namespace, pod }
    }

    /// Effective value for an arbitrary annotation key.
    ///
    /// An absent key counts as an empty value at either scope; the result is
    /// empty when neither scope declared anything.
    pub fn value(&self, key: &str) -> &'a str {
        let ns_value = self.namespace.annotation(key).unwrap_or("");
        let pod_value = self.pod.annotation(key).unwrap_or("");

        let resolved = resolve_value(ns_value, pod_value);
        trace!(key, ns = ns_value, pod = pod_value, resolved, "annotation resolved");
        resolved
    }

    /// Effective value for a typed setting.
    pub fn setting(&self, setting: &Setting) -> &'a str {
        self.value(setting.key())
    }

    /// Resolve and interpret a runtime's inject flag.
    #[instrument(level = "debug", skip(self), fields(runtime = %runtime))]
    pub fn inject_directive(&self, runtime: Runtime) -> InjectDirective {
        InjectDirective::from_value(self.value(runtime.inject_annotation()))
    }

    /// Containers targeted by a runtime's agent.
    ///
    /// The effective list value is comma-separated; segments are trimmed and
    /// empty segments dropped. What the names refer to is the caller's
    /// business.
    pub fn container_names(&self, runtime: Runtime) -> Vec<&'a str> {
        self.value(runtime.container_names_annotation())
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// The shared target-container designation, when set at either scope.
    pub fn target_container(&self) -> Option<&'a str> {
        match self.setting(&Setting::TargetContainer) {
            "" => None,
            name => Some(name),
        }
    }
}
