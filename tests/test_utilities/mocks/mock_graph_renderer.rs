use depgraph_viz::ports::outbound::NodeAttributes;
use depgraph_viz::prelude::*;
use std::sync::{Arc, Mutex};

/// What a MockGraphRenderer received in one call
#[derive(Debug, Clone)]
pub struct RenderCall {
    pub nodes: Vec<String>,
    pub edges: Vec<(String, String)>,
    pub attributes: NodeAttributes,
    pub target: RenderTarget,
}

/// Mock GraphRenderer recording its input instead of invoking Graphviz
#[derive(Default, Clone)]
pub struct MockGraphRenderer {
    pub calls: Arc<Mutex<Vec<RenderCall>>>,
    pub should_fail: bool,
}

impl MockGraphRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl GraphRenderer for MockGraphRenderer {
    fn render(
        &self,
        graph: &DependencyGraph,
        attributes: &NodeAttributes,
        target: &RenderTarget,
    ) -> Result<RenderedDiagram> {
        self.calls.lock().unwrap().push(RenderCall {
            nodes: graph.nodes().map(|n| n.to_string()).collect(),
            edges: graph
                .edges()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            attributes: attributes.clone(),
            target: target.clone(),
        });

        if self.should_fail {
            anyhow::bail!("Mock renderer failure");
        }

        Ok(RenderedDiagram {
            source_path: target.source_path(),
            diagram_path: target.diagram_path(),
        })
    }
}
