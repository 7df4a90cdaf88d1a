pub mod dependency_graph;
pub mod dependency_map;
pub mod display_attribute;
pub mod level_map;
pub mod package_name;

pub use dependency_graph::DependencyGraph;
pub use dependency_map::DependencyMap;
pub use display_attribute::DisplayAttribute;
pub use level_map::{LevelMap, LevelSet};
pub use package_name::PackageName;
