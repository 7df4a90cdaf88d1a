use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::application::use_cases::{DependencyResolution, ResolveDependenciesUseCase};
use crate::dependency_graph::domain::{DependencyGraph, LevelMap};
use crate::dependency_graph::services::{GraphBuilder, LevelClassifier};
use crate::ports::outbound::{GraphRenderer, ProgressReporter, RegistryClient, RenderedDiagram};
use crate::shared::Result;

/// VisualizeDependenciesUseCase - end-to-end visualization workflow
///
/// Resolves the dependency map of the requested root package, turns it into
/// a graph, classifies every node by reachability depth and hands the result
/// to the renderer.
///
/// # Type Parameters
/// * `RC` - RegistryClient implementation
/// * `GR` - GraphRenderer implementation
/// * `PR` - ProgressReporter implementation
pub struct VisualizeDependenciesUseCase<RC, GR, PR> {
    registry_client: RC,
    graph_renderer: GR,
    progress_reporter: PR,
}

impl<RC, GR, PR> VisualizeDependenciesUseCase<RC, GR, PR>
where
    RC: RegistryClient,
    GR: GraphRenderer,
    PR: ProgressReporter,
{
    /// Creates a new VisualizeDependenciesUseCase with injected dependencies
    pub fn new(registry_client: RC, graph_renderer: GR, progress_reporter: PR) -> Self {
        Self {
            registry_client,
            graph_renderer,
            progress_reporter,
        }
    }

    /// Executes the visualization use case
    ///
    /// An empty dependency map is not an error: nothing is rendered and the
    /// response carries `rendered: None`.
    ///
    /// # Errors
    /// Returns an error if the renderer fails to produce its output.
    pub fn execute(&self, request: VisualizeRequest) -> Result<VisualizeResponse> {
        // Step 1: Resolve dependencies from the registry
        let resolution = self.resolve_and_report(&request);

        // Step 2: Build the graph
        let graph = GraphBuilder::build(&resolution.dependencies);
        if graph.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "No dependencies found for {}, skipping visualization",
                request.root_package
            ));
            return Ok(Self::build_response(resolution, graph, LevelMap::default(), None));
        }

        // Step 3: Classify nodes by depth
        let levels = self.classify_and_report(&graph, request.depth_cap);

        // Step 4: Render
        let rendered = self.render_and_report(&graph, &levels, &request)?;

        Ok(Self::build_response(resolution, graph, levels, Some(rendered)))
    }

    fn resolve_and_report(&self, request: &VisualizeRequest) -> DependencyResolution {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} (max depth {})",
            request.root_package, request.max_depth
        ));

        let resolver =
            ResolveDependenciesUseCase::new(&self.registry_client, &self.progress_reporter);
        let resolution = resolver.execute(&request.root_package, request.max_depth);

        self.progress_reporter.report(&format!(
            "✅ Fetched {} package(s), found {} dependency edge(s)",
            resolution.fetched.len(),
            resolution.dependencies.dependency_count()
        ));
        if !resolution.failures.is_empty() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} package(s) could not be fetched and are drawn without dependencies",
                resolution.failures.len()
            ));
        }

        resolution
    }

    fn classify_and_report(&self, graph: &DependencyGraph, depth_cap: usize) -> LevelMap {
        let levels = LevelClassifier::classify(graph, depth_cap);

        let summary = levels
            .attribute_counts()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(attribute, count)| format!("{}: {}", attribute, count))
            .collect::<Vec<_>>()
            .join(", ");
        self.progress_reporter.report(&format!(
            "📊 Classified {} node(s) ({})",
            graph.node_count(),
            summary
        ));

        levels
    }

    fn render_and_report(
        &self,
        graph: &DependencyGraph,
        levels: &LevelMap,
        request: &VisualizeRequest,
    ) -> Result<RenderedDiagram> {
        let rendered = self.graph_renderer.render(
            graph,
            &levels.display_attributes(),
            &request.render_target,
        )?;

        self.progress_reporter.report_completion(&format!(
            "Diagram written to {} (source: {})",
            rendered.diagram_path.display(),
            rendered.source_path.display()
        ));

        Ok(rendered)
    }

    fn build_response(
        resolution: DependencyResolution,
        graph: DependencyGraph,
        levels: LevelMap,
        rendered: Option<RenderedDiagram>,
    ) -> VisualizeResponse {
        VisualizeResponse::new(
            resolution.dependencies,
            graph,
            levels,
            resolution.failures,
            rendered,
        )
    }
}
