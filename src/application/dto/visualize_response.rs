use crate::application::use_cases::FetchFailure;
use crate::dependency_graph::domain::{DependencyGraph, DependencyMap, LevelMap};
use crate::ports::outbound::RenderedDiagram;

/// VisualizeResponse - result of one visualize run
#[derive(Debug, Clone)]
pub struct VisualizeResponse {
    /// Resolver output
    pub dependencies: DependencyMap,
    /// Graph built from `dependencies`
    pub graph: DependencyGraph,
    /// Level sets of every node (empty when the graph is empty)
    pub levels: LevelMap,
    /// Packages whose fetch failed and contributed no dependencies
    pub failures: Vec<FetchFailure>,
    /// Written files; None when the graph was empty and rendering was skipped
    pub rendered: Option<RenderedDiagram>,
}

impl VisualizeResponse {
    pub fn new(
        dependencies: DependencyMap,
        graph: DependencyGraph,
        levels: LevelMap,
        failures: Vec<FetchFailure>,
        rendered: Option<RenderedDiagram>,
    ) -> Self {
        Self {
            dependencies,
            graph,
            levels,
            failures,
            rendered,
        }
    }
}
