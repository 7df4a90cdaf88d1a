use crate::dependency_graph::domain::{DependencyGraph, DependencyMap};

/// GraphBuilder service converting resolver output into a graph
///
/// Pure and total: no I/O, no failure modes.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the "depends-on" graph for a dependency map
    ///
    /// Every key becomes a node, every listed dependency becomes a node and
    /// the edge `key -> dependency`. Repeated pairs collapse into one edge.
    pub fn build(dependencies: &DependencyMap) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for (package, deps) in dependencies.iter() {
            graph.add_node(package);
            for dep in deps {
                graph.add_dependency(package, dep);
            }
        }

        graph
    }
}
