//! Application layer for medley
//!
//! Contains the use case that orchestrates one conversation turn across
//! all configured model providers, and the port those providers
//! implement. Concrete adapters live in the infrastructure layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export the public surface
pub use config::{OrchestratorConfig, SelectionMode};
pub use ports::model_provider::{ModelProvider, ProviderError, ProviderResult};
pub use use_cases::handle_turn::{HandleTurnInput, HandleTurnUseCase};
