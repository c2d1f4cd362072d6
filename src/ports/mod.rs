/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports) through which
/// the application core talks to the catalog server, configuration,
/// console and file system.
pub mod outbound;
