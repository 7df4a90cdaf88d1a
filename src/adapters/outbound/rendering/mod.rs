/// Rendering adapters producing Graphviz descriptions and diagrams
mod dot_builder;
mod dot_formatter;
mod graphviz_renderer;

pub use dot_builder::DotBuilder;
pub use dot_formatter::DotFormatter;
pub use graphviz_renderer::{GraphvizRenderer, DEFAULT_GRAPHVIZ_EXECUTABLE};
