/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) describe what the application core needs
/// from the outside world: registry access, rendering, logging and output.
pub mod outbound;
