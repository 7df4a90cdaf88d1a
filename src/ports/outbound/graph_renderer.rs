use crate::dependency_graph::domain::{DependencyGraph, DisplayAttribute, PackageName};
use crate::shared::Result;
use std::collections::HashMap;
use std::path::PathBuf;

/// Node -> display attribute mapping handed to a renderer
pub type NodeAttributes = HashMap<PackageName, DisplayAttribute>;

/// Diagram formats supported by the Graphviz renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramFormat {
    Png,
    Svg,
    Pdf,
    Jpg,
    Gif,
}

impl DiagramFormat {
    /// File extension and Graphviz `-T` argument
    pub fn extension(self) -> &'static str {
        match self {
            DiagramFormat::Png => "png",
            DiagramFormat::Svg => "svg",
            DiagramFormat::Pdf => "pdf",
            DiagramFormat::Jpg => "jpg",
            DiagramFormat::Gif => "gif",
        }
    }
}

impl std::str::FromStr for DiagramFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(DiagramFormat::Png),
            "svg" => Ok(DiagramFormat::Svg),
            "pdf" => Ok(DiagramFormat::Pdf),
            "jpg" | "jpeg" => Ok(DiagramFormat::Jpg),
            "gif" => Ok(DiagramFormat::Gif),
            _ => Err(format!(
                "Invalid format: {}. Please specify one of 'png', 'svg', 'pdf', 'jpg' or 'gif'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DiagramFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Where and how a diagram is persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTarget {
    pub output_dir: PathBuf,
    /// Bare file name without extension
    pub file_name: String,
    pub format: DiagramFormat,
}

impl RenderTarget {
    pub fn new(output_dir: PathBuf, file_name: impl Into<String>, format: DiagramFormat) -> Self {
        Self {
            output_dir,
            file_name: file_name.into(),
            format,
        }
    }

    /// `<output_dir>/<file_name>.dot`
    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.dot", self.file_name))
    }

    /// `<output_dir>/<file_name>.<format>`
    pub fn diagram_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.file_name, self.format.extension()))
    }
}

/// Files produced by a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub source_path: PathBuf,
    pub diagram_path: PathBuf,
}

/// GraphRenderer port for persisting a classified graph as a diagram
pub trait GraphRenderer {
    /// Renders `graph` with per-node `attributes` into `target`
    ///
    /// Nodes missing from `attributes` are drawn as unreached.
    ///
    /// # Errors
    /// Returns an error if the graph description cannot be written or the
    /// diagram cannot be produced.
    fn render(
        &self,
        graph: &DependencyGraph,
        attributes: &NodeAttributes,
        target: &RenderTarget,
    ) -> Result<RenderedDiagram>;
}

impl<T: GraphRenderer + ?Sized> GraphRenderer for &T {
    fn render(
        &self,
        graph: &DependencyGraph,
        attributes: &NodeAttributes,
        target: &RenderTarget,
    ) -> Result<RenderedDiagram> {
        (**self).render(graph, attributes, target)
    }
}
