/// Shared kernel - error taxonomy, exit codes and the common Result alias
pub mod error;
pub mod result;

pub use result::Result;
