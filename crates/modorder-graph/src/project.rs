//! Orchestration of a full scan: load → scan → register → resolve → sequence.
//!
//! A [`Project`] owns every table the pipeline produces. Phases run strictly
//! in order inside [`Project::load`]: every file is scanned and every
//! definition registered before a single reference is resolved, so a `use`
//! of a module defined in a file discovered later still resolves.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::external_dep::ExternalReference;
use super::graph::DependencyGraph;
use super::limits::{LimitKind, Limits};
use super::loader::{MemoryLoader, SourceLoader};
use super::registry::ModuleRegistry;
use super::scanner::scan;
use super::sequence::sequence;
use super::source_file::{FileId, SourceFile};
use super::statistics::GraphStatistics;
use super::{GraphError, Result};

/// Two different files defined the same module name. The later one won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateDefinition {
    pub module: String,
    pub previous: FileId,
    pub current: FileId,
}

#[derive(Debug)]
pub struct Project {
    files: Vec<SourceFile>,
    registry: ModuleRegistry,
    graph: DependencyGraph,
    duplicates: Vec<DuplicateDefinition>,
    externals: Vec<ExternalReference>,
}

impl Project {
    /// Scan `paths` (in discovery order) through `loader` and build the graph.
    pub fn load<I, P>(paths: I, loader: &dyn SourceLoader, limits: &Limits) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut files = Vec::new();
        for path in paths {
            limits
                .ensure(LimitKind::Files, files.len() + 1)
                .map_err(|source| GraphError::LimitExceeded { path: None, source })?;
            files.push(SourceFile::new(FileId::new(files.len()), path));
        }

        let mut definitions = Vec::with_capacity(files.len());
        for file in &mut files {
            let text = loader.load(&file.path).map_err(|source| GraphError::Io {
                path: file.path.clone(),
                source,
            })?;
            let declarations =
                scan(&text, limits).map_err(|source| GraphError::LimitExceeded {
                    path: Some(file.path.clone()),
                    source,
                })?;
            file.record(&declarations);
            definitions.push(declarations.definitions);
        }

        let mut registry = ModuleRegistry::new();
        let mut duplicates = Vec::new();
        for (file, names) in files.iter().zip(definitions) {
            for name in names {
                match registry.insert(name.clone(), file.id) {
                    Some(previous) if previous != file.id => {
                        warn!(
                            module = %name,
                            previous = %files[previous.index()].path.display(),
                            current = %file.path.display(),
                            "module defined more than once; using the later definition"
                        );
                        duplicates.push(DuplicateDefinition {
                            module: name,
                            previous,
                            current: file.id,
                        });
                    }
                    _ => {}
                }
            }
        }

        let graph = DependencyGraph::build(&files, &registry, limits)
            .map_err(|source| GraphError::LimitExceeded { path: None, source })?;

        let mut externals: IndexMap<String, ExternalReference> = IndexMap::new();
        for reference in graph.unresolved() {
            externals
                .entry(reference.module.clone())
                .or_insert_with(|| ExternalReference::new(reference.module.clone()))
                .push_importer(reference.importer);
        }
        for external in externals.values() {
            debug!(
                module = %external.module,
                importers = external.importers.len(),
                "module not defined by any scanned file; treating as external"
            );
        }

        let project = Self {
            files,
            registry,
            graph,
            duplicates,
            externals: externals.into_values().collect(),
        };
        debug!(stats = ?project.statistics(), "dependency graph built");
        Ok(project)
    }

    /// Build a project from in-memory `(path, source)` pairs.
    pub fn from_sources<I, P, S>(sources: I, limits: &Limits) -> Result<Self>
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let mut loader = MemoryLoader::new();
        let mut paths = Vec::new();
        for (path, source) in sources {
            let path = path.into();
            loader.insert(path.clone(), source);
            paths.push(path);
        }
        Self::load(paths, &loader, limits)
    }

    /// Compute the build order.
    ///
    /// Fails with [`GraphError::CyclicDependency`] if any file cannot be
    /// placed; no partial order is ever returned.
    pub fn plan(&self) -> Result<BuildPlan<'_>> {
        let order = sequence(&self.graph).map_err(|cycle| GraphError::CyclicDependency {
            unsorted: cycle
                .unsorted
                .iter()
                .map(|id| self.file(*id).path.clone())
                .collect(),
        })?;
        Ok(BuildPlan {
            project: self,
            order,
        })
    }

    /// # Panics
    ///
    /// Panics if `id` did not come from this project.
    pub fn file(&self, id: FileId) -> &SourceFile {
        &self.files[id.index()]
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// File that defines `module`, if any.
    pub fn definer(&self, module: &str) -> Option<&SourceFile> {
        self.registry.lookup(module).map(|id| self.file(id))
    }

    /// Files `id` directly depends on, in the order its `use` lines name them.
    pub fn dependencies_of(&self, id: FileId) -> impl Iterator<Item = &SourceFile> {
        self.graph.dependencies(id).iter().map(|dep| self.file(*dep))
    }

    pub fn duplicate_definitions(&self) -> &[DuplicateDefinition] {
        &self.duplicates
    }

    pub fn external_references(&self) -> &[ExternalReference] {
        &self.externals
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::new(
            self.files.len(),
            self.registry.len(),
            self.graph.edge_count(),
            self.externals.len(),
            self.duplicates.len(),
        )
    }
}

/// A successful build order over a [`Project`].
#[derive(Debug, Clone)]
pub struct BuildPlan<'p> {
    project: &'p Project,
    order: Vec<FileId>,
}

/// One file in build order together with its direct dependencies.
#[derive(Debug, Clone)]
pub struct PlanEntry<'p> {
    pub file: &'p SourceFile,
    pub dependencies: Vec<&'p SourceFile>,
}

impl<'p> BuildPlan<'p> {
    pub fn order(&self) -> &[FileId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Files in build order.
    pub fn files(&self) -> impl Iterator<Item = &'p SourceFile> + '_ {
        self.order.iter().map(|id| self.project.file(*id))
    }

    /// Paths in build order.
    pub fn paths(&self) -> impl Iterator<Item = &'p Path> + '_ {
        self.files().map(SourceFile::path)
    }

    /// Files in build order, each with the files it depends on.
    pub fn entries(&self) -> impl Iterator<Item = PlanEntry<'p>> + '_ {
        let project = self.project;
        self.order.iter().map(move |id| PlanEntry {
            file: project.file(*id),
            dependencies: project.dependencies_of(*id).collect(),
        })
    }

    /// Position of `id` in the order.
    pub fn position(&self, id: FileId) -> Option<usize> {
        self.order.iter().position(|entry| *entry == id)
    }
}
