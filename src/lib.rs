//! depgraph-viz - npm dependency graph visualizer
//!
//! This library resolves the dependency graph of an npm package from the
//! registry, classifies every package by the depth at which it is reachable
//! and renders the result with Graphviz, following hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Graph model and pure algorithms
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depgraph_viz::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let registry_client = NpmRegistryClient::new()?;
//! let graph_renderer = GraphvizRenderer::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case =
//!     VisualizeDependenciesUseCase::new(registry_client, graph_renderer, progress_reporter);
//!
//! // Execute
//! let target = RenderTarget::new(PathBuf::from("."), "express", DiagramFormat::Svg);
//! let request = VisualizeRequest::new(PackageName::new("express")?, 2, target);
//! let response = use_case.execute(request)?;
//!
//! if let Some(rendered) = response.rendered {
//!     println!("{}", rendered.diagram_path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::network::NpmRegistryClient;
    pub use crate::adapters::outbound::rendering::{DotFormatter, GraphvizRenderer};
    pub use crate::application::dto::{VisualizeRequest, VisualizeResponse};
    pub use crate::application::use_cases::{
        DependencyResolution, ResolveDependenciesUseCase, VisualizeDependenciesUseCase,
    };
    pub use crate::dependency_graph::domain::{
        DependencyGraph, DependencyMap, DisplayAttribute, LevelMap, LevelSet, PackageName,
    };
    pub use crate::dependency_graph::services::{GraphBuilder, LevelClassifier};
    pub use crate::ports::outbound::{
        DiagramFormat, GraphRenderer, OutputPresenter, ProgressReporter, RegistryClient,
        RenderTarget, RenderedDiagram,
    };
    pub use crate::shared::Result;
}
