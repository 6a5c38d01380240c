//! The build environment: every namespace of a build.

use indexmap::IndexMap;

use super::namespace::Namespace;
use crate::error::{ModelError, ModelResult};

/// All namespaces of one build, in registration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaEdEnvironment {
    namespaces: IndexMap<String, Namespace>,
}

impl MetaEdEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a namespace, or return the existing one with that name.
    ///
    /// The first registration wins; a later call with a different project
    /// extension does not change the namespace.
    pub fn register_namespace(&mut self, name: &str, project_extension: &str) -> &mut Namespace {
        if !self.namespaces.contains_key(name) {
            let namespace = Namespace::new(name, project_extension);
            tracing::debug!(
                "[NAMESPACE] registered '{}' (extension: {})",
                name,
                namespace.is_extension
            );
            self.namespaces.insert(name.to_string(), namespace);
        }
        &mut self.namespaces[name]
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    pub fn namespace_mut(&mut self, name: &str) -> Option<&mut Namespace> {
        self.namespaces.get_mut(name)
    }

    /// Like [`namespace`](Self::namespace), but an unknown name is an error.
    pub fn require_namespace(&self, name: &str) -> ModelResult<&Namespace> {
        self.namespaces
            .get(name)
            .ok_or_else(|| ModelError::unknown_namespace(name))
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.values()
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_idempotent() {
        let mut environment = MetaEdEnvironment::new();
        environment.register_namespace("EdFi", "core");
        environment.register_namespace("EdFi", "Other");
        assert_eq!(environment.namespace_count(), 1);
        let namespace = environment.namespace("EdFi").unwrap();
        assert!(!namespace.is_extension);
    }

    #[test]
    fn test_registration_order() {
        let mut environment = MetaEdEnvironment::new();
        environment.register_namespace("Sample", "SampleExtension");
        environment.register_namespace("EdFi", "core");
        let names: Vec<_> = environment.namespaces().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Sample", "EdFi"]);
    }

    #[test]
    fn test_require_unknown_namespace() {
        let environment = MetaEdEnvironment::new();
        assert_eq!(
            environment.require_namespace("Nope"),
            Err(ModelError::UnknownNamespace("Nope".to_string()))
        );
    }
}
