use super::DotBuilder;
use crate::dependency_graph::domain::{DependencyGraph, DisplayAttribute};
use crate::ports::outbound::NodeAttributes;

const GRAPH_NAME: &str = "dependencies";

/// DotFormatter producing the Graphviz description of a classified graph
pub struct DotFormatter;

impl DotFormatter {
    /// Formats nodes (filled with their attribute's color) and edges, both
    /// in graph insertion order
    pub fn format(graph: &DependencyGraph, attributes: &NodeAttributes) -> String {
        let mut builder = DotBuilder::new(GRAPH_NAME);
        builder.node_style(&[("style", "filled")]);

        for node in graph.nodes() {
            let attribute = attributes
                .get(node)
                .copied()
                .unwrap_or(DisplayAttribute::Unreached);
            builder.node(node.as_str(), &[("fillcolor", attribute.fill_color())]);
        }

        for (from, to) in graph.edges() {
            builder.edge(from.as_str(), to.as_str());
        }

        builder.finish()
    }
}
