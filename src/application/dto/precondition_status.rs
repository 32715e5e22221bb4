use crate::ports::outbound::PreconditionGate;
use serde::Serialize;

/// Snapshot of the two facts that gate mock-location injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreconditionStatus {
    pub mock_location_allowed: bool,
    pub location_permission_granted: bool,
}

impl PreconditionStatus {
    /// Reads both facts from the gate; never requests anything
    pub fn query<G: PreconditionGate + ?Sized>(gate: &G) -> Self {
        Self {
            mock_location_allowed: gate.is_mock_location_allowed(),
            location_permission_granted: gate.has_location_permission(),
        }
    }

    /// Whether `start` would get past its precondition checks
    pub fn is_ready(&self) -> bool {
        self.mock_location_allowed && self.location_permission_granted
    }
}
