//! Dependency graph over source files.
//!
//! Nodes are [`FileId`]s. An edge `D -> F` means file `F` uses a module that
//! file `D` defines, so `D` has to be compiled first. Alongside the out-edge
//! lists the graph keeps, per node, the in-degree consumed by the sequencer
//! and the list of files it depends on (in the order its `use` lines first
//! named them) consumed by manifest rendering.

use rustc_hash::FxHashSet as HashSet;
use tracing::trace;

use super::limits::{LimitKind, LimitExceeded, Limits};
use super::registry::ModuleRegistry;
use super::source_file::{FileId, SourceFile};

/// A `use` that no scanned file defines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub importer: FileId,
    pub module: String,
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    dependents: Vec<Vec<FileId>>,
    dependencies: Vec<Vec<FileId>>,
    in_degree: Vec<usize>,
    edges: HashSet<(FileId, FileId)>,
    unresolved: Vec<UnresolvedReference>,
}

impl DependencyGraph {
    /// Graph with `node_count` nodes and no edges.
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            dependents: vec![Vec::new(); node_count],
            dependencies: vec![Vec::new(); node_count],
            in_degree: vec![0; node_count],
            edges: HashSet::default(),
            unresolved: Vec::new(),
        }
    }

    /// Resolve every file's `used_modules` through `registry` into edges.
    ///
    /// Names nobody defines are assumed to be prebuilt and are recorded in
    /// [`unresolved`](Self::unresolved) instead of failing the build. A file
    /// that uses its own module gets a self-loop, which the sequencer reports
    /// as a cycle.
    pub fn build(
        files: &[SourceFile],
        registry: &ModuleRegistry,
        limits: &Limits,
    ) -> Result<Self, LimitExceeded> {
        let mut graph = Self::with_nodes(files.len());

        for file in files {
            for module in &file.used_modules {
                match registry.lookup(module) {
                    Some(definer) => {
                        graph.add_edge(definer, file.id, limits)?;
                    }
                    None => graph.unresolved.push(UnresolvedReference {
                        importer: file.id,
                        module: module.clone(),
                    }),
                }
            }
        }

        Ok(graph)
    }

    /// Add `from -> to`. Returns `false` if the edge already existed.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside the graph.
    pub fn add_edge(
        &mut self,
        from: FileId,
        to: FileId,
        limits: &Limits,
    ) -> Result<bool, LimitExceeded> {
        if self.edges.contains(&(from, to)) {
            return Ok(false);
        }

        let out = &mut self.dependents[from.index()];
        limits.ensure(LimitKind::EdgesPerNode, out.len() + 1)?;
        out.push(to);
        self.edges.insert((from, to));
        self.dependencies[to.index()].push(from);
        self.in_degree[to.index()] += 1;

        trace!(from = %from, to = %to, "added dependency edge");
        Ok(true)
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_edge(&self, from: FileId, to: FileId) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Files that must be built after `id` because they use its module.
    pub fn dependents(&self, id: FileId) -> &[FileId] {
        &self.dependents[id.index()]
    }

    /// Files `id` depends on directly, in discovery order.
    pub fn dependencies(&self, id: FileId) -> &[FileId] {
        &self.dependencies[id.index()]
    }

    pub fn in_degree(&self, id: FileId) -> usize {
        self.in_degree[id.index()]
    }

    /// Per-node in-degrees indexed by [`FileId::index`].
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    pub fn unresolved(&self) -> &[UnresolvedReference] {
        &self.unresolved
    }

    pub fn nodes(&self) -> impl Iterator<Item = FileId> + '_ {
        (0..self.node_count()).map(FileId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(index: usize, defined: Option<&str>, uses: &[&str]) -> SourceFile {
        let mut file = SourceFile::new(FileId::new(index), format!("{index}.f90"));
        file.defined_module = defined.map(str::to_owned);
        file.used_modules = uses.iter().map(|s| s.to_string()).collect();
        file
    }

    fn registry_for(files: &[SourceFile]) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        for f in files {
            if let Some(name) = &f.defined_module {
                registry.insert(name.clone(), f.id);
            }
        }
        registry
    }

    #[test]
    fn test_edges_point_from_definer_to_user() {
        let files = vec![
            file(0, Some("a"), &[]),
            file(1, Some("b"), &["a"]),
            file(2, Some("c"), &["a", "b"]),
        ];
        let graph = DependencyGraph::build(&files, &registry_for(&files), &Limits::default())
            .unwrap();

        let (a, b, c) = (FileId::new(0), FileId::new(1), FileId::new(2));
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.dependents(a), &[b, c]);
        assert_eq!(graph.dependencies(c), &[a, b]);
        assert_eq!(graph.in_degrees(), &[0, 1, 2]);
    }

    #[test]
    fn test_unresolved_references_are_dropped() {
        let files = vec![file(0, Some("a"), &["mpi", "iso_c_binding"])];
        let graph = DependencyGraph::build(&files, &registry_for(&files), &Limits::default())
            .unwrap();

        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.in_degree(FileId::new(0)), 0);
        let names: Vec<_> = graph.unresolved().iter().map(|r| r.module.as_str()).collect();
        assert_eq!(names, vec!["mpi", "iso_c_binding"]);
    }

    #[test]
    fn test_self_reference_creates_self_loop() {
        let files = vec![file(0, Some("a"), &["a"])];
        let graph = DependencyGraph::build(&files, &registry_for(&files), &Limits::default())
            .unwrap();

        assert!(graph.contains_edge(FileId::new(0), FileId::new(0)));
        assert_eq!(graph.in_degree(FileId::new(0)), 1);
    }

    #[test]
    fn test_edge_insertion_is_idempotent() {
        let mut graph = DependencyGraph::with_nodes(2);
        let limits = Limits::default();
        assert!(graph.add_edge(FileId::new(0), FileId::new(1), &limits).unwrap());
        assert!(!graph.add_edge(FileId::new(0), FileId::new(1), &limits).unwrap());

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree(FileId::new(1)), 1);
        assert_eq!(graph.dependencies(FileId::new(1)), &[FileId::new(0)]);
    }

    #[test]
    fn test_two_names_resolving_to_one_file_make_one_edge() {
        let files = vec![file(0, Some("second"), &[]), file(1, None, &["first", "second"])];
        let mut registry = ModuleRegistry::new();
        registry.insert("first", FileId::new(0));
        registry.insert("second", FileId::new(0));

        let graph = DependencyGraph::build(&files, &registry, &Limits::default()).unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_degree(FileId::new(1)), 1);
    }

    #[test]
    fn test_edge_ceiling() {
        let limits = Limits {
            max_edges_per_node: 1,
            ..Limits::default()
        };
        let mut graph = DependencyGraph::with_nodes(3);
        graph.add_edge(FileId::new(0), FileId::new(1), &limits).unwrap();

        let err = graph
            .add_edge(FileId::new(0), FileId::new(2), &limits)
            .unwrap_err();
        assert_eq!(err.kind, LimitKind::EdgesPerNode);
    }
}
