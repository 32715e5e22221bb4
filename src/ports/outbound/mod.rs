/// Outbound ports (Driven ports) - Host platform interfaces
///
/// These ports define the interfaces that the application core uses to
/// query device preconditions, drive the location service's test
/// provider registry, and report status to the user.
pub mod precondition_gate;
pub mod status_reporter;
pub mod test_provider_registry;

pub use precondition_gate::PreconditionGate;
pub use status_reporter::StatusReporter;
pub use test_provider_registry::TestProviderRegistry;
