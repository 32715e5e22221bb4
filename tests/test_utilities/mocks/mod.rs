/// Mock implementations for testing
mod mock_precondition_gate;
mod mock_status_reporter;

pub use mock_precondition_gate::MockPreconditionGate;
pub use mock_status_reporter::MockStatusReporter;
