/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console, renderer).
pub mod graph_renderer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod registry_client;

pub use graph_renderer::{DiagramFormat, GraphRenderer, NodeAttributes, RenderTarget, RenderedDiagram};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use registry_client::{PackageMetadata, RegistryClient, VersionMetadata};
