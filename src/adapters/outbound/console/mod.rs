/// Console adapters for user-facing status output
mod status_reporter;

pub use status_reporter::StderrStatusReporter;
