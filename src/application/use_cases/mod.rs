/// Use cases module containing application business logic orchestration
mod mock_provider_controller;

pub use mock_provider_controller::MockProviderController;
