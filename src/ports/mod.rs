/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains both inbound ports (driving ports - what the CLI
/// calls) and outbound ports (driven ports - the host platform and the
/// user-facing status sink).
pub mod inbound;
pub mod outbound;
