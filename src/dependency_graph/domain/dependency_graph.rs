use super::PackageName;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::HashMap;

/// Directed "depends-on" graph over package names
///
/// Nodes and edges keep insertion order. Self-loops are allowed (a package
/// that lists itself) and parallel edges are not.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<PackageName, ()>,
    node_map: HashMap<PackageName, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node if it is not present yet (idempotent)
    pub fn add_node(&mut self, name: &PackageName) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(name.clone());
        self.node_map.insert(name.clone(), idx);
        idx
    }

    /// Adds the edge `from -> to`, creating missing endpoints.
    ///
    /// Adding an edge that already exists is a no-op.
    pub fn add_dependency(&mut self, from: &PackageName, to: &PackageName) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
        }
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &PackageName> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Edges `(package, dependency)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&PackageName, &PackageName)> {
        self.graph
            .edge_references()
            .map(move |edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }

    /// Direct dependencies of `name`, in the order the edges were added
    pub fn successors(&self, name: &str) -> Vec<&PackageName> {
        let Some(&idx) = self.node_map.get(name) else {
            return Vec::new();
        };

        // petgraph walks adjacency lists newest-first
        let mut successors: Vec<&PackageName> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| &self.graph[n])
            .collect();
        successors.reverse();
        successors
    }

    /// Nodes that no package lists as a dependency, in insertion order
    pub fn roots(&self) -> Vec<&PackageName> {
        self.graph
            .node_indices()
            .filter(|&idx| {
                self.graph
                    .neighbors_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|idx| &self.graph[idx])
            .collect()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
