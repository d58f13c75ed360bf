//! # Maljut Core
//!
//! Core library for the Maljut Pizzas virtual assistant.
//!
//! This crate provides the assistant gateway to the external generation
//! capability, the content-policy validator, the user-facing error
//! taxonomy, and the static business information served by the API.

pub mod assistant;
pub mod errors;
pub mod info;
pub mod llm_client;
pub mod validation;

// Re-export commonly used types
pub use assistant::Assistant;
pub use errors::{AssistantError, LlmError};

// Re-export traits
pub use llm_client::GenerativeClient;

// Re-export concrete types
pub use info::BusinessInfo;
pub use llm_client::{config::LlmConfig, gemini_client::GeminiClient};
