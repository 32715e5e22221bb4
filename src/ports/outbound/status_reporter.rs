/// StatusReporter port for user-facing status output
///
/// This port abstracts where status lines go (stderr, a test recorder)
/// so the controller can narrate provider setup without owning a terminal.
pub trait StatusReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports one step of a multi-step operation
    ///
    /// # Arguments
    /// * `current` - 1-based index of the step being started
    /// * `total` - Number of steps in the operation
    /// * `message` - Description of the step
    fn report_step(&self, current: usize, total: usize, message: &str);

    /// Reports a warning that does not fail the operation
    fn report_warning(&self, message: &str);

    /// Reports successful completion of an operation
    fn report_success(&self, message: &str);
}
