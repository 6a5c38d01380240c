//! Builds entities that declare properties: domain entities, associations,
//! commons, choices, descriptors, enumerations and their subclass and
//! extension forms.
//!
//! The builder keeps a cursor of open objects. A field rule always lands on
//! the innermost open object:
//!
//! ```text
//! entity ─┬─ property ── merge directive
//!         ├─ map type enumeration ── enumeration item
//!         └─ enumeration item
//! ```

use rustc_hash::FxHashMap;

use super::base::{
    NamespaceTracker, finish_declaration, meta_ed_id_value, restriction_value, set_flag,
    set_literal, set_text, set_value, split_qualified_name,
};
use crate::listener::{BuildContext, MetaEdListener, RuleContext};
use crate::model::{
    EntityDetails, EntityKind, EntityProperty, EnumerationItem, MapTypeEnumeration,
    MergeDirective, PropertyDetails, PropertyKind, TopLevelEntity, ValidationFailures,
};
use crate::parser::SyntaxKind;

pub const TOP_LEVEL_ENTITY_BUILDER: &str = "TopLevelEntityBuilder";

/// Entity kind declared by a rule; `true` marks `Abstract Entity`.
fn entity_kind_for(kind: SyntaxKind) -> Option<(EntityKind, bool)> {
    let entity_kind = match kind {
        SyntaxKind::ABSTRACT_ENTITY => return Some((EntityKind::DomainEntity, true)),
        SyntaxKind::ASSOCIATION => EntityKind::Association,
        SyntaxKind::ASSOCIATION_EXTENSION => EntityKind::AssociationExtension,
        SyntaxKind::ASSOCIATION_SUBCLASS => EntityKind::AssociationSubclass,
        SyntaxKind::CHOICE => EntityKind::Choice,
        SyntaxKind::COMMON => EntityKind::Common,
        SyntaxKind::COMMON_EXTENSION => EntityKind::CommonExtension,
        SyntaxKind::COMMON_SUBCLASS => EntityKind::CommonSubclass,
        SyntaxKind::DESCRIPTOR => EntityKind::Descriptor,
        SyntaxKind::DOMAIN_ENTITY => EntityKind::DomainEntity,
        SyntaxKind::DOMAIN_ENTITY_EXTENSION => EntityKind::DomainEntityExtension,
        SyntaxKind::DOMAIN_ENTITY_SUBCLASS => EntityKind::DomainEntitySubclass,
        SyntaxKind::ENUMERATION => EntityKind::Enumeration,
        SyntaxKind::INLINE_COMMON => EntityKind::InlineCommon,
        _ => return None,
    };
    Some((entity_kind, false))
}

fn is_extension(kind: EntityKind) -> bool {
    matches!(
        kind,
        EntityKind::AssociationExtension
            | EntityKind::CommonExtension
            | EntityKind::DomainEntityExtension
    )
}

/// The property dispatch table.
pub fn property_kind_for(kind: SyntaxKind) -> Option<PropertyKind> {
    let property_kind = match kind {
        SyntaxKind::ASSOCIATION_PROPERTY => PropertyKind::Association,
        SyntaxKind::BOOLEAN_PROPERTY => PropertyKind::Boolean,
        SyntaxKind::CHOICE_PROPERTY => PropertyKind::Choice,
        SyntaxKind::COMMON_PROPERTY => PropertyKind::Common,
        SyntaxKind::CURRENCY_PROPERTY => PropertyKind::Currency,
        SyntaxKind::DATE_PROPERTY => PropertyKind::Date,
        SyntaxKind::DATETIME_PROPERTY => PropertyKind::Datetime,
        SyntaxKind::DECIMAL_PROPERTY => PropertyKind::Decimal,
        SyntaxKind::DESCRIPTOR_PROPERTY => PropertyKind::Descriptor,
        SyntaxKind::DOMAIN_ENTITY_PROPERTY
        | SyntaxKind::FIRST_DOMAIN_ENTITY
        | SyntaxKind::SECOND_DOMAIN_ENTITY => PropertyKind::DomainEntity,
        SyntaxKind::DURATION_PROPERTY => PropertyKind::Duration,
        SyntaxKind::ENUMERATION_PROPERTY => PropertyKind::Enumeration,
        SyntaxKind::INLINE_COMMON_PROPERTY => PropertyKind::InlineCommon,
        SyntaxKind::INTEGER_PROPERTY => PropertyKind::Integer,
        SyntaxKind::PERCENT_PROPERTY => PropertyKind::Percent,
        SyntaxKind::SCHOOL_YEAR_ENUMERATION_PROPERTY => PropertyKind::SchoolYearEnumeration,
        SyntaxKind::SHARED_DECIMAL_PROPERTY => PropertyKind::SharedDecimal,
        SyntaxKind::SHARED_INTEGER_PROPERTY => PropertyKind::SharedInteger,
        SyntaxKind::SHARED_SHORT_PROPERTY => PropertyKind::SharedShort,
        SyntaxKind::SHARED_STRING_PROPERTY => PropertyKind::SharedString,
        SyntaxKind::SHORT_PROPERTY => PropertyKind::Short,
        SyntaxKind::STRING_PROPERTY => PropertyKind::String,
        SyntaxKind::TIME_PROPERTY => PropertyKind::Time,
        SyntaxKind::YEAR_PROPERTY => PropertyKind::Year,
        _ => return None,
    };
    Some(property_kind)
}

#[derive(Debug, Default)]
pub struct TopLevelEntityBuilder {
    namespace: NamespaceTracker,
    entity: Option<TopLevelEntity>,
    property: Option<EntityProperty>,
    map_type: Option<MapTypeEnumeration>,
    enumeration_item: Option<EnumerationItem>,
    merge_directive: Option<MergeDirective>,
}

impl TopLevelEntityBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // OPENING RULES
    // ========================================================================

    fn start_entity(&mut self, ctx: &RuleContext<'_>, kind: EntityKind, is_abstract: bool) {
        let Some(details) = EntityDetails::new(kind) else {
            return;
        };
        let mut entity = TopLevelEntity::new(details, self.namespace.current());
        entity.source_map.entity_type = Some(ctx.keyword_source_map());
        if is_abstract {
            set_flag(
                &mut entity.is_abstract,
                &mut entity.source_map.is_abstract,
                ctx.keyword_source_map(),
            );
        }
        self.entity = Some(entity);
        self.property = None;
        self.map_type = None;
        self.enumeration_item = None;
        self.merge_directive = None;
    }

    fn start_property(&mut self, ctx: &RuleContext<'_>, kind: PropertyKind) {
        let Some(entity) = &self.entity else {
            return;
        };
        let mut property = EntityProperty::new(kind, &entity.namespace, &entity.meta_ed_name);
        property.source_map.property_type = Some(ctx.keyword_source_map());
        // Both ends of an association identify it
        if matches!(
            ctx.kind(),
            SyntaxKind::FIRST_DOMAIN_ENTITY | SyntaxKind::SECOND_DOMAIN_ENTITY
        ) {
            set_flag(
                &mut property.is_part_of_identity,
                &mut property.source_map.is_part_of_identity,
                ctx.keyword_source_map(),
            );
        }
        self.property = Some(property);
    }

    // ========================================================================
    // CLOSING RULES
    // ========================================================================

    fn finish_property(&mut self) {
        let (Some(entity), Some(mut property)) = (self.entity.as_mut(), self.property.take())
        else {
            return;
        };
        property.update_full_property_name();
        entity.properties.push(property);
    }

    fn finish_enumeration_item(&mut self) {
        let Some(item) = self.enumeration_item.take() else {
            return;
        };
        if let Some(map_type) = self.map_type.as_mut() {
            map_type.enumeration_items.push(item);
        } else if let Some(TopLevelEntity {
            details: EntityDetails::Enumeration { enumeration_items },
            ..
        }) = self.entity.as_mut()
        {
            enumeration_items.push(item);
        }
    }

    fn finish_map_type(&mut self) {
        let Some(map_type) = self.map_type.take() else {
            return;
        };
        if let Some(TopLevelEntity {
            details: EntityDetails::Descriptor {
                map_type_enumeration,
            },
            ..
        }) = self.entity.as_mut()
        {
            *map_type_enumeration = Some(map_type);
        }
    }

    fn finish_entity(&mut self, cx: &mut BuildContext<'_>) {
        let Some(entity) = self.entity.take() else {
            return;
        };
        report_duplicate_properties(&entity, cx.failures);
        let namespace = entity.namespace.clone();
        finish_declaration(TOP_LEVEL_ENTITY_BUILDER, &namespace, entity, cx);
    }

    // ========================================================================
    // FIELD RULES
    // ========================================================================

    fn set_entity_name(&mut self, ctx: &RuleContext<'_>) {
        let current_namespace = self.namespace.current();
        let Some(entity) = self.entity.as_mut() else {
            return;
        };
        let text = ctx.text();
        let location = ctx.source_map();
        if is_extension(entity.kind()) {
            let (namespace, name) = split_qualified_name(&text, current_namespace);
            let source_map = &mut entity.source_map;
            set_text(
                &mut entity.base_entity_namespace_name,
                &mut source_map.base_entity_namespace_name,
                namespace,
                location.clone(),
            );
            set_text(
                &mut entity.base_entity_name,
                &mut source_map.base_entity_name,
                name,
                location.clone(),
            );
            set_text(
                &mut entity.meta_ed_name,
                &mut source_map.meta_ed_name,
                name,
                location,
            );
        } else {
            set_text(
                &mut entity.meta_ed_name,
                &mut entity.source_map.meta_ed_name,
                text,
                location,
            );
        }
    }

    fn set_base_name(&mut self, ctx: &RuleContext<'_>) {
        let current_namespace = self.namespace.current();
        let Some(entity) = self.entity.as_mut() else {
            return;
        };
        let text = ctx.text();
        let (namespace, name) = split_qualified_name(&text, current_namespace);
        let location = ctx.source_map();
        set_text(
            &mut entity.base_entity_namespace_name,
            &mut entity.source_map.base_entity_namespace_name,
            namespace,
            location.clone(),
        );
        set_text(
            &mut entity.base_entity_name,
            &mut entity.source_map.base_entity_name,
            name,
            location,
        );
    }

    fn set_meta_ed_id(&mut self, ctx: &RuleContext<'_>) {
        let text = ctx.text();
        let value = meta_ed_id_value(&text);
        let location = ctx.source_map();
        if let Some(property) = self.property.as_mut() {
            set_text(
                &mut property.meta_ed_id,
                &mut property.source_map.meta_ed_id,
                value,
                location,
            );
        } else if let Some(item) = self.enumeration_item.as_mut() {
            set_text(
                &mut item.meta_ed_id,
                &mut item.source_map.meta_ed_id,
                value,
                location,
            );
        } else if let Some(entity) = self.entity.as_mut() {
            set_text(
                &mut entity.meta_ed_id,
                &mut entity.source_map.meta_ed_id,
                value,
                location,
            );
        }
    }

    fn set_deprecated(&mut self, ctx: &RuleContext<'_>) {
        let location = ctx.source_map();
        let reason = ctx.string_value();
        let reason_location = ctx.string_source_map().unwrap_or_else(|| location.clone());
        if let Some(property) = self.property.as_mut() {
            let source_map = &mut property.source_map;
            set_flag(&mut property.is_deprecated, &mut source_map.is_deprecated, location);
            set_literal(
                &mut property.deprecation_reason,
                &mut source_map.deprecation_reason,
                reason,
                reason_location,
            );
        } else if let Some(entity) = self.entity.as_mut() {
            let source_map = &mut entity.source_map;
            set_flag(&mut entity.is_deprecated, &mut source_map.is_deprecated, location);
            set_literal(
                &mut entity.deprecation_reason,
                &mut source_map.deprecation_reason,
                reason,
                reason_location,
            );
        }
    }

    fn set_documentation(&mut self, ctx: &RuleContext<'_>) {
        let Some(documentation) = ctx.string_value() else {
            return;
        };
        let location = ctx.source_map();
        if let Some(property) = self.property.as_mut() {
            set_text(
                &mut property.documentation,
                &mut property.source_map.documentation,
                documentation,
                location,
            );
        } else if let Some(item) = self.enumeration_item.as_mut() {
            set_text(
                &mut item.documentation,
                &mut item.source_map.documentation,
                documentation,
                location,
            );
        } else if let Some(map_type) = self.map_type.as_mut() {
            set_text(
                &mut map_type.documentation,
                &mut map_type.source_map.documentation,
                documentation,
                location,
            );
        } else if let Some(entity) = self.entity.as_mut() {
            set_text(
                &mut entity.documentation,
                &mut entity.source_map.documentation,
                documentation,
                location,
            );
        }
    }

    /// Rules that only apply to an open property.
    fn set_property_field(&mut self, ctx: &RuleContext<'_>) {
        let current_namespace = self.namespace.current();
        let Some(property) = self.property.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut property.source_map;

        match ctx.kind() {
            SyntaxKind::PROPERTY_NAME => {
                let text = ctx.text();
                if property.details.kind().is_reference() {
                    let (namespace, name) = split_qualified_name(&text, current_namespace);
                    set_text(
                        &mut property.referenced_namespace_name,
                        &mut source_map.referenced_namespace_name,
                        namespace,
                        location.clone(),
                    );
                    set_text(
                        &mut property.meta_ed_name,
                        &mut source_map.meta_ed_name,
                        name,
                        location,
                    );
                } else {
                    set_text(
                        &mut property.meta_ed_name,
                        &mut source_map.meta_ed_name,
                        text,
                        location,
                    );
                }
            }
            SyntaxKind::SHARED_PROPERTY_TYPE => {
                let text = ctx.text();
                let (namespace, name) = split_qualified_name(&text, current_namespace);
                set_text(
                    &mut property.referenced_namespace_name,
                    &mut source_map.referenced_namespace_name,
                    namespace,
                    location.clone(),
                );
                if let Some(shared) = property.details.shared_mut() {
                    shared.referenced_type = name.to_string();
                    source_map.referenced_type = Some(location.clone());
                }
                // Without `named`, the property takes the type's name
                if property.meta_ed_name.is_empty() {
                    set_text(
                        &mut property.meta_ed_name,
                        &mut source_map.meta_ed_name,
                        name,
                        location,
                    );
                }
            }
            SyntaxKind::SHARED_PROPERTY_NAME => {
                if let Some(name) = ctx.first_token_text(SyntaxKind::IDENT) {
                    set_text(
                        &mut property.meta_ed_name,
                        &mut source_map.meta_ed_name,
                        name,
                        location,
                    );
                }
            }
            SyntaxKind::INHERITED_DOCUMENTATION => set_flag(
                &mut property.documentation_inherited,
                &mut source_map.documentation_inherited,
                location,
            ),
            SyntaxKind::COMMON_EXTENSION_OVERRIDE => {
                if let PropertyDetails::Common {
                    is_extension_override,
                    ..
                } = &mut property.details
                {
                    set_flag(
                        is_extension_override,
                        &mut source_map.is_extension_override,
                        location,
                    );
                }
            }
            SyntaxKind::IS_PART_OF_IDENTITY => set_flag(
                &mut property.is_part_of_identity,
                &mut source_map.is_part_of_identity,
                location,
            ),
            SyntaxKind::IDENTITY_RENAME => set_flag(
                &mut property.is_identity_rename,
                &mut source_map.is_identity_rename,
                location,
            ),
            SyntaxKind::BASE_KEY_NAME => set_text(
                &mut property.base_key_name,
                &mut source_map.base_key_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::REQUIRED => {
                set_flag(&mut property.is_required, &mut source_map.is_required, location)
            }
            SyntaxKind::OPTIONAL => {
                set_flag(&mut property.is_optional, &mut source_map.is_optional, location)
            }
            SyntaxKind::REQUIRED_COLLECTION => {
                set_flag(
                    &mut property.is_required_collection,
                    &mut source_map.is_required_collection,
                    location.clone(),
                );
                set_flag(
                    &mut property.is_collection,
                    &mut source_map.is_collection,
                    location,
                );
            }
            SyntaxKind::OPTIONAL_COLLECTION => {
                set_flag(
                    &mut property.is_optional_collection,
                    &mut source_map.is_optional_collection,
                    location.clone(),
                );
                set_flag(
                    &mut property.is_collection,
                    &mut source_map.is_collection,
                    location,
                );
            }
            SyntaxKind::IS_QUERYABLE_ONLY => set_flag(
                &mut property.is_queryable_only,
                &mut source_map.is_queryable_only,
                location,
            ),
            SyntaxKind::IS_QUERYABLE_FIELD => set_flag(
                &mut property.is_queryable_field,
                &mut source_map.is_queryable_field,
                location,
            ),
            SyntaxKind::ROLE_NAME_NAME => set_text(
                &mut property.role_name,
                &mut source_map.role_name,
                ctx.text(),
                location,
            ),
            SyntaxKind::SHORTEN_TO => {
                if let Some(shorten_to) = ctx.first_token_text(SyntaxKind::IDENT) {
                    set_text(
                        &mut property.shorten_to,
                        &mut source_map.shorten_to,
                        shorten_to,
                        location,
                    );
                }
            }
            SyntaxKind::IS_WEAK_REFERENCE => {
                if let Some(reference) = property.details.reference_mut() {
                    set_flag(&mut reference.is_weak, &mut source_map.is_weak, location);
                }
            }
            SyntaxKind::POTENTIALLY_LOGICAL => {
                if let Some(reference) = property.details.reference_mut() {
                    set_flag(
                        &mut reference.potentially_logical,
                        &mut source_map.potentially_logical,
                        location,
                    );
                }
            }
            _ => {}
        }
    }

    fn set_restriction(&mut self, ctx: &RuleContext<'_>) {
        let Some(property) = self.property.as_mut() else {
            return;
        };
        let Some(value) = restriction_value(ctx) else {
            return;
        };
        let location = ctx.source_map();
        let source_map = &mut property.source_map;

        let restricted = match ctx.kind() {
            SyntaxKind::MIN_LENGTH | SyntaxKind::MAX_LENGTH => {
                let Some(lengths) = property.details.length_mut() else {
                    return;
                };
                if ctx.kind() == SyntaxKind::MIN_LENGTH {
                    set_value(
                        &mut lengths.min_length,
                        &mut source_map.min_length,
                        value,
                        location.clone(),
                    );
                } else {
                    set_value(
                        &mut lengths.max_length,
                        &mut source_map.max_length,
                        value,
                        location.clone(),
                    );
                }
                true
            }
            SyntaxKind::MIN_VALUE | SyntaxKind::MAX_VALUE => {
                let Some((min_value, max_value)) = property.details.value_bounds_mut() else {
                    return;
                };
                if ctx.kind() == SyntaxKind::MIN_VALUE {
                    set_value(min_value, &mut source_map.min_value, value, location.clone());
                } else {
                    set_value(max_value, &mut source_map.max_value, value, location.clone());
                }
                true
            }
            SyntaxKind::TOTAL_DIGITS => {
                if let Some(decimal) = property.details.decimal_mut() {
                    set_value(
                        &mut decimal.total_digits,
                        &mut source_map.total_digits,
                        value,
                        location.clone(),
                    );
                }
                false
            }
            SyntaxKind::DECIMAL_PLACES => {
                if let Some(decimal) = property.details.decimal_mut() {
                    set_value(
                        &mut decimal.decimal_places,
                        &mut source_map.decimal_places,
                        value,
                        location.clone(),
                    );
                }
                false
            }
            _ => false,
        };

        if restricted && !property.has_restriction {
            set_flag(&mut property.has_restriction, &mut source_map.has_restriction, location);
        }
    }

    fn set_merge_path(&mut self, ctx: &RuleContext<'_>) {
        let Some(directive) = self.merge_directive.as_mut() else {
            return;
        };
        let location = ctx.source_map();
        if ctx.kind() == SyntaxKind::SOURCE_PROPERTY_PATH {
            set_text(
                &mut directive.source_property_path,
                &mut directive.source_map.source_property_path,
                ctx.text(),
                location,
            );
        } else {
            set_text(
                &mut directive.target_property_path,
                &mut directive.source_map.target_property_path,
                ctx.text(),
                location,
            );
        }
    }
}

/// Report every property whose full name is shared with another property of
/// the same entity. All of them stay on the entity.
fn report_duplicate_properties(entity: &TopLevelEntity, failures: &mut ValidationFailures) {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for property in &entity.properties {
        *counts.entry(property.full_property_name.as_str()).or_default() += 1;
    }

    for property in &entity.properties {
        if counts
            .get(property.full_property_name.as_str())
            .is_some_and(|count| *count > 1)
        {
            failures.error(
                TOP_LEVEL_ENTITY_BUILDER,
                format!(
                    "{} {} has duplicate properties named {}. Use a role name to disambiguate.",
                    entity.humanized_name(),
                    entity.meta_ed_name,
                    property.full_property_name
                ),
                property.source_map.meta_ed_name.clone(),
            );
        }
    }
}

impl MetaEdListener for TopLevelEntityBuilder {
    fn enter_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.enter_rule(ctx, cx) {
            return;
        }
        let kind = ctx.kind();
        if let Some((entity_kind, is_abstract)) = entity_kind_for(kind) {
            self.start_entity(ctx, entity_kind, is_abstract);
            return;
        }
        if self.entity.is_none() {
            return;
        }
        if let Some(property_kind) = property_kind_for(kind) {
            self.start_property(ctx, property_kind);
            return;
        }
        match kind {
            SyntaxKind::ENUMERATION_ITEM => {
                self.enumeration_item = Some(EnumerationItem::default());
            }
            SyntaxKind::MAP_TYPE_ENUMERATION => {
                let mut map_type = MapTypeEnumeration::default();
                if ctx.token(SyntaxKind::OPTIONAL_KW).is_none() {
                    set_flag(
                        &mut map_type.is_required,
                        &mut map_type.source_map.is_required,
                        ctx.keyword_source_map(),
                    );
                }
                self.map_type = Some(map_type);
            }
            SyntaxKind::MERGE_DIRECTIVE if self.property.is_some() => {
                let mut directive = MergeDirective::default();
                directive.source_map.directive = Some(ctx.keyword_source_map());
                self.merge_directive = Some(directive);
            }
            _ => {}
        }
    }

    fn exit_rule(&mut self, ctx: &RuleContext<'_>, cx: &mut BuildContext<'_>) {
        if self.namespace.exit_rule(ctx) {
            return;
        }
        if self.entity.is_none() {
            return;
        }
        let kind = ctx.kind();
        if entity_kind_for(kind).is_some() {
            self.finish_entity(cx);
            return;
        }
        if property_kind_for(kind).is_some() {
            self.finish_property();
            return;
        }
        match kind {
            SyntaxKind::ENTITY_NAME => self.set_entity_name(ctx),
            SyntaxKind::BASE_NAME => self.set_base_name(ctx),
            SyntaxKind::META_ED_ID => self.set_meta_ed_id(ctx),
            SyntaxKind::DEPRECATED => self.set_deprecated(ctx),
            SyntaxKind::DOCUMENTATION => self.set_documentation(ctx),
            SyntaxKind::ALLOW_PRIMARY_KEY_UPDATES => {
                if let Some(entity) = self.entity.as_mut() {
                    set_flag(
                        &mut entity.allow_primary_key_updates,
                        &mut entity.source_map.allow_primary_key_updates,
                        ctx.source_map(),
                    );
                }
            }
            SyntaxKind::SHORT_DESCRIPTION => {
                if let (Some(item), Some(description)) =
                    (self.enumeration_item.as_mut(), ctx.string_value())
                {
                    set_text(
                        &mut item.short_description,
                        &mut item.source_map.short_description,
                        description,
                        ctx.source_map(),
                    );
                }
            }
            SyntaxKind::ENUMERATION_ITEM => self.finish_enumeration_item(),
            SyntaxKind::MAP_TYPE_ENUMERATION => self.finish_map_type(),
            SyntaxKind::MIN_LENGTH
            | SyntaxKind::MAX_LENGTH
            | SyntaxKind::MIN_VALUE
            | SyntaxKind::MAX_VALUE
            | SyntaxKind::TOTAL_DIGITS
            | SyntaxKind::DECIMAL_PLACES => self.set_restriction(ctx),
            SyntaxKind::SOURCE_PROPERTY_PATH | SyntaxKind::TARGET_PROPERTY_PATH => {
                self.set_merge_path(ctx)
            }
            SyntaxKind::MERGE_DIRECTIVE => {
                if let (Some(property), Some(directive)) =
                    (self.property.as_mut(), self.merge_directive.take())
                {
                    property.merge_directives.push(directive);
                }
            }
            _ => self.set_property_field(ctx),
        }
    }
}
