/// Mock implementations for testing
mod mock_graph_renderer;
mod mock_progress_reporter;
mod mock_registry_client;

pub use mock_graph_renderer::MockGraphRenderer;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_registry_client::MockRegistryClient;
