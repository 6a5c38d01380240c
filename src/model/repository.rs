//! Per-namespace entity storage.

use indexmap::IndexMap;

use super::domain::{Domain, Subdomain};
use super::entity::TopLevelEntity;
use super::interchange::Interchange;
use super::kinds::EntityKind;
use super::shared_simple::SharedSimple;
use crate::base::SourceMap;

/// Anything that is declared once per (namespace, kind) and named.
pub trait Declaration {
    fn entity_kind(&self) -> EntityKind;

    fn meta_ed_name(&self) -> &str;

    /// Where the declared name appeared.
    fn name_source_map(&self) -> Option<&SourceMap>;

    fn humanized_name(&self) -> &'static str {
        self.entity_kind().humanized_name()
    }
}

impl Declaration for TopLevelEntity {
    fn entity_kind(&self) -> EntityKind {
        self.kind()
    }

    fn meta_ed_name(&self) -> &str {
        &self.meta_ed_name
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.source_map.meta_ed_name.as_ref()
    }

    fn humanized_name(&self) -> &'static str {
        TopLevelEntity::humanized_name(self)
    }
}

impl Declaration for Domain {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::Domain
    }

    fn meta_ed_name(&self) -> &str {
        &self.meta_ed_name
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.source_map.meta_ed_name.as_ref()
    }
}

impl Declaration for Subdomain {
    fn entity_kind(&self) -> EntityKind {
        EntityKind::Subdomain
    }

    fn meta_ed_name(&self) -> &str {
        &self.meta_ed_name
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.source_map.meta_ed_name.as_ref()
    }
}

impl Declaration for Interchange {
    fn entity_kind(&self) -> EntityKind {
        self.kind()
    }

    fn meta_ed_name(&self) -> &str {
        &self.meta_ed_name
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.source_map.meta_ed_name.as_ref()
    }
}

impl Declaration for SharedSimple {
    fn entity_kind(&self) -> EntityKind {
        SharedSimple::entity_kind(self)
    }

    fn meta_ed_name(&self) -> &str {
        &self.meta_ed_name
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.source_map.meta_ed_name.as_ref()
    }
}

/// Any object the repository stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelEntity {
    TopLevel(TopLevelEntity),
    Domain(Domain),
    Subdomain(Subdomain),
    Interchange(Interchange),
    SharedSimple(SharedSimple),
}

impl ModelEntity {
    fn declaration(&self) -> &dyn Declaration {
        match self {
            Self::TopLevel(e) => e,
            Self::Domain(e) => e,
            Self::Subdomain(e) => e,
            Self::Interchange(e) => e,
            Self::SharedSimple(e) => e,
        }
    }

    pub fn as_top_level(&self) -> Option<&TopLevelEntity> {
        match self {
            Self::TopLevel(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_domain(&self) -> Option<&Domain> {
        match self {
            Self::Domain(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_subdomain(&self) -> Option<&Subdomain> {
        match self {
            Self::Subdomain(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_interchange(&self) -> Option<&Interchange> {
        match self {
            Self::Interchange(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_shared_simple(&self) -> Option<&SharedSimple> {
        match self {
            Self::SharedSimple(e) => Some(e),
            _ => None,
        }
    }
}

impl Declaration for ModelEntity {
    fn entity_kind(&self) -> EntityKind {
        self.declaration().entity_kind()
    }

    fn meta_ed_name(&self) -> &str {
        self.declaration().meta_ed_name()
    }

    fn name_source_map(&self) -> Option<&SourceMap> {
        self.declaration().name_source_map()
    }

    fn humanized_name(&self) -> &'static str {
        self.declaration().humanized_name()
    }
}

impl From<TopLevelEntity> for ModelEntity {
    fn from(entity: TopLevelEntity) -> Self {
        Self::TopLevel(entity)
    }
}

impl From<Domain> for ModelEntity {
    fn from(entity: Domain) -> Self {
        Self::Domain(entity)
    }
}

impl From<Subdomain> for ModelEntity {
    fn from(entity: Subdomain) -> Self {
        Self::Subdomain(entity)
    }
}

impl From<Interchange> for ModelEntity {
    fn from(entity: Interchange) -> Self {
        Self::Interchange(entity)
    }
}

impl From<SharedSimple> for ModelEntity {
    fn from(entity: SharedSimple) -> Self {
        Self::SharedSimple(entity)
    }
}

/// Entities of one namespace, keyed by kind then name. Insertion order is
/// preserved within each kind. Entries are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntityRepository {
    entities: IndexMap<EntityKind, IndexMap<String, ModelEntity>>,
}

impl EntityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entity` under (`kind`, `name`).
    ///
    /// Returns `false`, leaving the repository unchanged, if the name is
    /// already taken for that kind.
    pub fn insert(
        &mut self,
        kind: EntityKind,
        name: impl Into<String>,
        entity: impl Into<ModelEntity>,
    ) -> bool {
        let by_name = self.entities.entry(kind).or_default();
        match by_name.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(entity.into());
                true
            }
        }
    }

    pub fn get(&self, kind: EntityKind, name: &str) -> Option<&ModelEntity> {
        self.entities.get(&kind)?.get(name)
    }

    pub fn contains(&self, kind: EntityKind, name: &str) -> bool {
        self.get(kind, name).is_some()
    }

    /// All entities of `kind`, in insertion order.
    pub fn entities_of(&self, kind: EntityKind) -> impl Iterator<Item = &ModelEntity> {
        self.entities
            .get(&kind)
            .into_iter()
            .flat_map(|by_name| by_name.values())
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.get(&kind).map_or(0, |by_name| by_name.len())
    }

    /// Total number of stored entities.
    pub fn len(&self) -> usize {
        self.entities.values().map(|by_name| by_name.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn top_level_entity(&self, kind: EntityKind, name: &str) -> Option<&TopLevelEntity> {
        self.get(kind, name)?.as_top_level()
    }

    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.get(EntityKind::Domain, name)?.as_domain()
    }

    pub fn subdomain(&self, name: &str) -> Option<&Subdomain> {
        self.get(EntityKind::Subdomain, name)?.as_subdomain()
    }

    pub fn interchange(&self, kind: EntityKind, name: &str) -> Option<&Interchange> {
        self.get(kind, name)?.as_interchange()
    }

    pub fn shared_simple(&self, kind: EntityKind, name: &str) -> Option<&SharedSimple> {
        self.get(kind, name)?.as_shared_simple()
    }
}
