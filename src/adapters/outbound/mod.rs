/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod adb;
pub mod console;
pub mod memory;
