use std::sync::Arc;

use tracing::error;

use crate::errors::{AssistantError, AssistantResult, LlmError};
use crate::llm_client::GenerativeClient;

/// Persona and behavior instructions for MaljutBot, prepended to every
/// customer message. Written in Spanish, the audience's language.
const SYSTEM_PROMPT: &str = "Eres MaljutBot, el asistente virtual oficial de Maljut Pizzas. Tu función es ayudar a los clientes con información sobre nuestros productos, servicios y resolver sus dudas.

INSTRUCCIONES GENERALES:
- Siempre responde en español de manera amigable y profesional
- Mantén un tono cálido y acogedor, como si fueras parte de la familia Maljut
- Si no tienes información específica sobre algo, indícalo claramente y ofrece contactar con el equipo humano
- Prioriza la satisfacción del cliente

FUNCIONES PRINCIPALES:
1. Información sobre menú y productos
2. Horarios de atención
3. Proceso de pedidos
4. Información de contacto
5. Resolver dudas generales sobre la empresa

TIPO DE RESPUESTA:
- Sé conciso pero completo
- Usa emojis ocasionalmente para hacer la conversación más amigable
- Si es necesario, sugiere contactar directamente con el restaurante para detalles específicos

IMPORTANTE: Si un cliente pregunta algo que no puedes responder con la información disponible, sugiere que se ponga en contacto directamente con Maljut Pizzas para obtener la información más actualizada.";

const FALLBACK_SERVICE_MESSAGE: &str =
    "No se pudo procesar tu consulta en este momento. Por favor, intenta de nuevo más tarde.";

/// Gateway to the external generation capability.
///
/// Holds the injected client handle; no other state. Every consultation
/// is independent, no conversation history is kept.
pub struct Assistant {
    client: Arc<dyn GenerativeClient>,
}

impl Assistant {
    pub fn new(client: Arc<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    /// Ask the assistant to answer a customer message.
    ///
    /// The caller is expected to have validated the message already. On
    /// success the generated text is returned verbatim. On failure the
    /// underlying error is logged and translated into a stable
    /// user-facing category.
    pub async fn consult(&self, message: &str) -> AssistantResult<String> {
        let prompt = format!("{}\n\nCliente: {}\n\nMaljutBot:", SYSTEM_PROMPT, message);

        match self.client.generate(&prompt).await {
            Ok(text) => Ok(text),
            Err(e) => {
                error!("Error al consultar el asistente virtual: {:?}", e);
                Err(classify_failure(&e))
            }
        }
    }
}

/// Translate a provider failure into a user-facing category.
///
/// Ordered substring checks over the provider's free-text error message.
/// This is a best-effort heuristic: the provider does not guarantee
/// stable error text, and anything unrecognized falls through to the
/// generic service category.
pub fn classify_failure(error: &LlmError) -> AssistantError {
    let detail = error.detail();

    if detail.contains("API key") {
        AssistantError::Config
    } else if detail.contains("quota") {
        AssistantError::QuotaExceeded
    } else if detail.contains("network") {
        AssistantError::Network
    } else if detail.contains("permission") {
        AssistantError::Permission
    } else if detail.is_empty() {
        AssistantError::Service(FALLBACK_SERVICE_MESSAGE.to_string())
    } else {
        AssistantError::Service(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::client::MockGenerativeClient;

    fn upstream(message: &str) -> LlmError {
        LlmError::Upstream {
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn consult_returns_generated_text_verbatim() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate()
            .withf(|prompt: &str| {
                prompt.starts_with("Eres MaljutBot")
                    && prompt.contains("Cliente: ¿cuál es el horario?")
                    && prompt.ends_with("MaljutBot:")
            })
            .returning(|_| Ok("Abrimos de 19 a 23 🍕".to_string()));

        let assistant = Assistant::new(Arc::new(client));
        let reply = assistant.consult("¿cuál es el horario?").await.unwrap();
        assert_eq!(reply, "Abrimos de 19 a 23 🍕");
    }

    #[tokio::test]
    async fn consult_translates_quota_failures() {
        let mut client = MockGenerativeClient::new();
        client
            .expect_generate()
            .returning(|_| Err(upstream("Resource has been exhausted (e.g. check quota).")));

        let assistant = Assistant::new(Arc::new(client));
        let err = assistant.consult("hola").await.err().unwrap();
        assert!(matches!(err, AssistantError::QuotaExceeded));
    }

    #[test]
    fn classification_follows_priority_order() {
        // "API key" wins over "quota" when both occur.
        let err = classify_failure(&upstream("API key quota problem"));
        assert!(matches!(err, AssistantError::Config));

        let err = classify_failure(&upstream("network unreachable"));
        assert!(matches!(err, AssistantError::Network));

        let err = classify_failure(&upstream("permission denied for key"));
        assert!(matches!(err, AssistantError::Permission));
    }

    #[test]
    fn unrecognized_failures_echo_the_detail() {
        let err = classify_failure(&upstream("model overloaded"));
        match err {
            AssistantError::Service(detail) => assert_eq!(detail, "model overloaded"),
            other => panic!("unexpected category: {:?}", other),
        }
    }

    #[test]
    fn empty_detail_uses_the_fallback_message() {
        let err = classify_failure(&upstream(""));
        match err {
            AssistantError::Service(detail) => assert_eq!(detail, FALLBACK_SERVICE_MESSAGE),
            other => panic!("unexpected category: {:?}", other),
        }
    }
}
