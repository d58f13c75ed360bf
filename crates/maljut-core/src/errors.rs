use thiserror::Error;

/// Errors produced by the generative-language client layer
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid model configuration: {message}")]
    InvalidConfig { message: String },

    #[error("LLM returned an empty response: {message}")]
    EmptyResponse { message: String },

    #[error("{message}")]
    Upstream { message: String },
}

impl LlmError {
    /// The raw provider-side detail used for failure classification.
    ///
    /// For upstream failures this is the provider's own error text; for
    /// transport and parsing failures it is the formatted error message.
    pub fn detail(&self) -> String {
        match self {
            LlmError::Upstream { message } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// User-facing failure categories for the assistant gateway.
///
/// The display strings are the stable messages shown to clients, in
/// Spanish like the rest of the assistant's surface.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Error de configuración: API key de Google inválida o no configurada. Por favor, verifica la configuración.")]
    Config,

    #[error("Error de configuración: Cuota de API excedida. Por favor, contacta al administrador.")]
    QuotaExceeded,

    #[error("Error de conexión con el servicio de IA. Por favor, intenta de nuevo más tarde.")]
    Network,

    #[error("Error de permisos: La API key no tiene permisos para acceder al servicio. Verifica la configuración.")]
    Permission,

    #[error("Error del servicio: {0}")]
    Service(String),
}

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Result type alias for assistant gateway operations
pub type AssistantResult<T> = Result<T, AssistantError>;
