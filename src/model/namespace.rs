//! Namespaces: the unit of declaration scope.

use super::repository::EntityRepository;

/// The namespace type token that marks a core (non-extension) namespace.
pub const CORE_NAMESPACE_TYPE: &str = "core";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Namespace {
    pub name: String,
    /// Empty for core namespaces.
    pub project_extension: String,
    pub is_extension: bool,
    pub repository: EntityRepository,
}

impl Namespace {
    /// `project_extension` is the namespace type token; `core` (any case)
    /// yields a core namespace.
    pub fn new(name: impl Into<String>, project_extension: impl Into<String>) -> Self {
        let mut project_extension = project_extension.into();
        if project_extension.eq_ignore_ascii_case(CORE_NAMESPACE_TYPE) {
            project_extension.clear();
        }
        Self {
            name: name.into(),
            is_extension: !project_extension.is_empty(),
            project_extension,
            repository: EntityRepository::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_namespace() {
        let namespace = Namespace::new("EdFi", "core");
        assert_eq!(namespace.project_extension, "");
        assert!(!namespace.is_extension);
        assert!(namespace.repository.is_empty());
    }

    #[test]
    fn test_extension_namespace() {
        let namespace = Namespace::new("Sample", "SampleExtension");
        assert_eq!(namespace.project_extension, "SampleExtension");
        assert!(namespace.is_extension);
    }
}
