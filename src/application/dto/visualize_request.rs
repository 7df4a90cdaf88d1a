use crate::dependency_graph::domain::PackageName;
use crate::dependency_graph::services::DEFAULT_DEPTH_CAP;
use crate::ports::outbound::RenderTarget;

/// VisualizeRequest - request DTO for the visualize use case
#[derive(Debug, Clone)]
pub struct VisualizeRequest {
    /// Package whose dependency graph is resolved
    pub root_package: PackageName,
    /// 0-based resolver depth bound (the root is depth 0)
    pub max_depth: usize,
    /// Level classifier cap
    pub depth_cap: usize,
    /// Output location and diagram format
    pub render_target: RenderTarget,
}

impl VisualizeRequest {
    pub fn new(root_package: PackageName, max_depth: usize, render_target: RenderTarget) -> Self {
        Self {
            root_package,
            max_depth,
            depth_cap: DEFAULT_DEPTH_CAP,
            render_target,
        }
    }

    pub fn with_depth_cap(mut self, depth_cap: usize) -> Self {
        self.depth_cap = depth_cap;
        self
    }
}
