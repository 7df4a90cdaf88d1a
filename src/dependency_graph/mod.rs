/// Dependency graph layer - pure domain model and algorithms
///
/// Nothing in this module performs I/O; registry access and rendering
/// happen behind the ports.
pub mod domain;
pub mod services;
