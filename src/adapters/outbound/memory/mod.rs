/// In-memory host adapters, used by tests and `--simulate`
mod precondition_gate;
mod provider_registry;

pub use precondition_gate::InMemoryPreconditionGate;
pub use provider_registry::{InMemoryProviderRegistry, RegistryOperation};
