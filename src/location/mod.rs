/// Location domain - coordinates, fixes and the mock provider model
///
/// Pure value types with no knowledge of how the host platform is reached.
pub mod domain;
