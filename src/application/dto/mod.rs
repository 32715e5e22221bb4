/// Data Transfer Objects for application layer
///
/// DTOs carry results from the application layer out to the CLI,
/// keeping the domain layer isolated from presentation.
mod output_format;
mod precondition_status;

pub use output_format::OutputFormat;
pub use precondition_status::PreconditionStatus;
