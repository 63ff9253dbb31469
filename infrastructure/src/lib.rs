//! Infrastructure layer for medley
//!
//! Concrete [`ModelProvider`](medley_application::ModelProvider)
//! adapters and the configuration loader that assembles them.

pub mod config;
pub mod providers;

pub use config::{ConfigLoader, FileConfig, build_providers};
pub use providers::{GeminiProvider, OpenAiProvider, SimulatedProvider};
