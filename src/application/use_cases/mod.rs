/// Use cases module containing application business logic orchestration
mod resolve_dependencies;
mod visualize_dependencies;

pub use resolve_dependencies::{DependencyResolution, FetchFailure, ResolveDependenciesUseCase};
pub use visualize_dependencies::VisualizeDependenciesUseCase;
