/// PreconditionGate port answering whether mock-location injection is legal
///
/// Implementations surface host platform state only. They hold no state
/// of their own and never fail: a fact that cannot be read is `false`.
pub trait PreconditionGate {
    /// Whether the host's developer mock-location allowance is enabled
    fn is_mock_location_allowed(&self) -> bool;

    /// Whether the process currently holds the fine-location permission
    fn has_location_permission(&self) -> bool;

    /// Starts the host's permission-request flow and returns immediately
    ///
    /// The outcome is delivered later, out-of-band, to whoever the
    /// implementation was wired to (see `PermissionResponse`).
    fn request_location_permission(&self);
}
