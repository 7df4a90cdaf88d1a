use super::DotFormatter;
use crate::adapters::outbound::filesystem::FileSystemWriter;
use crate::dependency_graph::domain::DependencyGraph;
use crate::ports::outbound::{
    GraphRenderer, NodeAttributes, OutputPresenter, RenderTarget, RenderedDiagram,
};
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Graphviz layout executable looked up on `PATH`
pub const DEFAULT_GRAPHVIZ_EXECUTABLE: &str = "dot";

/// GraphvizRenderer adapter
///
/// Writes `<file_name>.dot` and then runs the Graphviz `dot` executable to
/// produce `<file_name>.<format>` next to it. The `.dot` file is kept even
/// when rendering fails.
pub struct GraphvizRenderer {
    executable: PathBuf,
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_GRAPHVIZ_EXECUTABLE),
        }
    }

    /// Uses an explicit Graphviz location: either the `dot` executable
    /// itself or a directory containing it
    pub fn with_graphviz_path(path: &Path) -> Self {
        let executable = if path.is_dir() {
            path.join(DEFAULT_GRAPHVIZ_EXECUTABLE)
        } else {
            path.to_path_buf()
        };
        Self { executable }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    fn run_graphviz(&self, target: &RenderTarget) -> Result<PathBuf> {
        let source_path = target.source_path();
        let diagram_path = target.diagram_path();

        let output = Command::new(&self.executable)
            .arg(format!("-T{}", target.format.extension()))
            .arg(&source_path)
            .arg("-o")
            .arg(&diagram_path)
            .output()
            .map_err(|e| VisualizerError::RendererUnavailable {
                executable: self.executable.clone(),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(VisualizerError::RenderFailed {
                path: source_path,
                details: format!(
                    "{} ({})",
                    String::from_utf8_lossy(&output.stderr).trim(),
                    output.status
                ),
            }
            .into());
        }

        Ok(diagram_path)
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(
        &self,
        graph: &DependencyGraph,
        attributes: &NodeAttributes,
        target: &RenderTarget,
    ) -> Result<RenderedDiagram> {
        let source = DotFormatter::format(graph, attributes);

        let source_path = target.source_path();
        FileSystemWriter::new(source_path.clone()).present(&source)?;

        let diagram_path = self.run_graphviz(target)?;

        Ok(RenderedDiagram {
            source_path,
            diagram_path,
        })
    }
}
