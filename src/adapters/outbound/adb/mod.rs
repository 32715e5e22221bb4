/// adb adapters driving an Android device's location service over `adb shell`
mod bridge;
mod precondition_gate;
mod provider_registry;

pub use bridge::{AdbBridge, ShellOutput};
pub use precondition_gate::AdbPreconditionGate;
pub use provider_registry::AdbProviderRegistry;
