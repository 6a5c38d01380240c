//! Build options and the parse → namespace pass → entity builders pipeline.

use indexmap::IndexSet;

use super::domain::{DomainBuilder, SubdomainBuilder};
use super::interchange::InterchangeBuilder;
use super::namespace::NamespaceBuilder;
use super::shared_simple::SharedSimpleBuilder;
use super::top_level_entity::TopLevelEntityBuilder;
use crate::base::LineIndex;
use crate::listener::{BuildContext, MetaEdListener, ParseTreeWalker};
use crate::model::{MetaEdEnvironment, ValidationFailures};
use crate::parser::{Parse, SyntaxError, parse};

/// The entity builders a build can attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuilderKind {
    TopLevelEntity,
    Domain,
    Subdomain,
    Interchange,
    SharedSimple,
}

impl BuilderKind {
    pub const ALL: [BuilderKind; 5] = [
        Self::TopLevelEntity,
        Self::Domain,
        Self::Subdomain,
        Self::Interchange,
        Self::SharedSimple,
    ];

    /// Validator name used by the builder's failures.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TopLevelEntity => super::top_level_entity::TOP_LEVEL_ENTITY_BUILDER,
            Self::Domain => super::domain::DOMAIN_BUILDER,
            Self::Subdomain => super::domain::SUBDOMAIN_BUILDER,
            Self::Interchange => super::interchange::INTERCHANGE_BUILDER,
            Self::SharedSimple => super::shared_simple::SHARED_SIMPLE_BUILDER,
        }
    }

    fn listener(&self) -> Box<dyn MetaEdListener> {
        match self {
            Self::TopLevelEntity => Box::new(TopLevelEntityBuilder::new()),
            Self::Domain => Box::new(DomainBuilder::new()),
            Self::Subdomain => Box::new(SubdomainBuilder::new()),
            Self::Interchange => Box::new(InterchangeBuilder::new()),
            Self::SharedSimple => Box::new(SharedSimpleBuilder::new()),
        }
    }
}

/// Ordered set of entity builders. Listeners receive events in this order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderSet {
    kinds: IndexSet<BuilderKind>,
}

impl Default for BuilderSet {
    fn default() -> Self {
        Self::all()
    }
}

impl BuilderSet {
    pub fn all() -> Self {
        Self::only(BuilderKind::ALL)
    }

    pub fn only(kinds: impl IntoIterator<Item = BuilderKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn contains(&self, kind: BuilderKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = BuilderKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// How entity builders are driven over each tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WalkStrategy {
    /// Every builder listens to one traversal.
    #[default]
    SinglePass,
    /// One traversal per builder, in set order.
    PerBuilder,
}

/// Build configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Entity builders to attach after the namespace pass
    pub builders: BuilderSet,
    /// Traversal strategy for the entity builders
    pub walk: WalkStrategy,
}

impl BuildOptions {
    pub fn with_builders(mut self, builders: BuilderSet) -> Self {
        self.builders = builders;
        self
    }

    pub fn with_walk(mut self, walk: WalkStrategy) -> Self {
        self.walk = walk;
        self
    }
}

/// A syntax error together with the index of the source it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSyntaxError {
    pub source_index: usize,
    /// 1-based
    pub line: u32,
    /// 0-based
    pub column: u32,
    pub error: SyntaxError,
}

/// Everything a build produces.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    pub environment: MetaEdEnvironment,
    pub failures: ValidationFailures,
    pub syntax_errors: Vec<SourceSyntaxError>,
}

impl BuildResult {
    pub fn has_syntax_errors(&self) -> bool {
        !self.syntax_errors.is_empty()
    }
}

struct ParsedSource {
    parse: Parse,
    line_index: LineIndex,
}

/// Builds one environment from any number of MetaEd sources.
///
/// All sources are parsed first. The namespace pass then runs over every
/// tree before any entity builder. A namespace opened in more than one source
/// is registered once, and all of its declarations share one repository.
#[derive(Debug, Clone, Default)]
pub struct MetaEdBuild {
    options: BuildOptions,
    sources: Vec<String>,
}

impl MetaEdBuild {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            sources: Vec::new(),
        }
    }

    pub fn add_source(&mut self, text: impl Into<String>) -> &mut Self {
        self.sources.push(text.into());
        self
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn run(&self) -> BuildResult {
        let mut result = BuildResult::default();

        let parsed: Vec<ParsedSource> = self
            .sources
            .iter()
            .map(|text| ParsedSource {
                parse: parse(text),
                line_index: LineIndex::new(text),
            })
            .collect();

        for (source_index, source) in parsed.iter().enumerate() {
            for error in &source.parse.errors {
                let position = error.line_col(&source.line_index);
                result.syntax_errors.push(SourceSyntaxError {
                    source_index,
                    line: position.line + 1,
                    column: position.col,
                    error: error.clone(),
                });
            }
        }

        {
            let mut cx = BuildContext::new(&mut result.environment, &mut result.failures);

            let mut namespace_builder = NamespaceBuilder::new();
            for source in &parsed {
                ParseTreeWalker::walk(
                    &mut [&mut namespace_builder],
                    &source.parse.syntax(),
                    &source.line_index,
                    &mut cx,
                );
            }

            for source in &parsed {
                let root = source.parse.syntax();
                match self.options.walk {
                    WalkStrategy::SinglePass => {
                        let mut owned: Vec<Box<dyn MetaEdListener>> =
                            self.options.builders.iter().map(|kind| kind.listener()).collect();
                        let mut listeners: Vec<&mut dyn MetaEdListener> = Vec::new();
                        for listener in owned.iter_mut() {
                            listeners.push(listener.as_mut());
                        }
                        ParseTreeWalker::walk(&mut listeners, &root, &source.line_index, &mut cx);
                    }
                    WalkStrategy::PerBuilder => {
                        for kind in self.options.builders.iter() {
                            let mut owned = kind.listener();
                            let listener: &mut dyn MetaEdListener = owned.as_mut();
                            ParseTreeWalker::walk(
                                &mut [listener],
                                &root,
                                &source.line_index,
                                &mut cx,
                            );
                        }
                    }
                }
            }
        }

        tracing::debug!(
            "[BUILD] {} source(s): {} namespace(s), {} failure(s), {} syntax error(s)",
            self.sources.len(),
            result.environment.namespace_count(),
            result.failures.len(),
            result.syntax_errors.len()
        );
        result
    }
}

/// Build a single source with default options.
pub fn build_from_source(source: &str) -> BuildResult {
    let mut build = MetaEdBuild::new(BuildOptions::default());
    build.add_source(source);
    build.run()
}
