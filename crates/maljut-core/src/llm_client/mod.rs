pub mod client;
pub mod config;
pub mod gemini_client;

pub use client::GenerativeClient;
pub use config::LlmConfig;
pub use gemini_client::GeminiClient;
