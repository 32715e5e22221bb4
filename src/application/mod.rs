/// Application layer - Use cases and DTOs
///
/// This layer contains the mock provider lifecycle and coordinates with
/// the host platform through ports.
pub mod dto;
pub mod use_cases;
