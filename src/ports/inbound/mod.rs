/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interface the CLI (or any other front end)
/// uses to drive the mock location lifecycle.
pub mod mock_location_port;

pub use mock_location_port::{MockLocationPort, StopOutcome};
