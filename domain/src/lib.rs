//! Domain layer for medley
//!
//! This crate contains the core types and policy for multi-model response
//! orchestration. It has no dependencies on infrastructure or I/O concerns.
//!
//! # Core Concepts
//!
//! ## Fan-out
//!
//! One user turn is dispatched to every configured model provider. Each
//! provider either produces a candidate response or fails; failures are
//! tolerated and only the surviving candidates compete for selection.
//!
//! ## Selection
//!
//! - **Priority ordering**: a fixed ranked list of provider ids; the
//!   highest-ranked provider with a successful response wins.
//! - **Judge verdict**: a designated provider ranks the candidates and
//!   names the best one with a one-line rationale.

pub mod conversation;
pub mod orchestration;
pub mod prompt;
pub mod selection;

// Re-export commonly used types
pub use conversation::{Role, Turn, turn_from_record};
pub use orchestration::{OrchestrationResult, ProviderId};
pub use prompt::PromptTemplate;
pub use selection::{JudgeVerdict, parse_judge_verdict, select_by_priority};
