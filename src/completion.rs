//! # Serviço de Completions — A Fronteira com o Modelo
//!
//! O núcleo do jogo enxerga o modelo de linguagem como um serviço opaco
//! de completar texto: entra um system prompt mais a conversa, sai uma
//! resposta. O trait [`CompletionService`] é essa fronteira — o
//! [`Orchestrator`](crate::orchestrator::Orchestrator) e o
//! [`judge`](crate::judge) dependem só dele, o que deixa os dois
//! testáveis com serviços roteirizados.
//!
//! A implementação real é o [`OpenAiClient`]: chat completions da OpenAI
//! via `reqwest` bloqueante, com bearer auth. A chamada é **síncrona de
//! propósito** — os handlers web a embrulham em `spawn_blocking`, e a
//! política de timeout/retry fica toda do lado do cliente HTTP, nunca
//! no núcleo do jogo.
//!
//! ## Wire Format
//!
//! ```text
//! POST /v1/chat/completions
//! { "model": "gpt-4o-mini",
//!   "messages": [ {"role": "system", "content": ...},
//!                 {"role": "assistant"|"user", "content": ...}, ... ] }
//! ──► { "choices": [ { "message": { "content": ... } } ] }
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::Turn;
use crate::error::ServiceError;

/// Endpoint de chat completions da OpenAI.
const OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Modelo default — o mesmo para o assistente de jogo e para o juiz.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Serviço opaco de completar texto.
///
/// `conversation` é o transcript na ordem em que aconteceu; o system
/// prompt vai separado porque é reconstruído a cada chamada.
pub trait CompletionService: Send + Sync {
    /// Uma rodada de request/response síncrona com o modelo.
    ///
    /// # Erros
    ///
    /// [`ServiceError`] para falha de transporte, status HTTP de erro ou
    /// payload sem choices. O chamador decide o que fazer — o serviço
    /// não faz retry.
    fn complete(&self, system_prompt: &str, conversation: &[Turn]) -> Result<String, ServiceError>;
}

// ─── Wire types ──────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
}

#[derive(Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: WireMessage,
}

// ─── Cliente OpenAI ──────────────────────────────────────────────

/// Cliente de chat completions da OpenAI.
///
/// A credencial vem do chamador (em geral `OPENAI_API_KEY` lida no
/// startup) e vive só em memória — nunca é persistida pelo núcleo.
///
/// O `reqwest::blocking::Client` interno é criado sob demanda via
/// [`OnceLock`], na primeira chamada — que já acontece dentro de uma
/// thread de `spawn_blocking`, fora do executor async.
pub struct OpenAiClient {
    api_key: String,
    model: String,
    client: OnceLock<reqwest::blocking::Client>,
}

impl OpenAiClient {
    /// Cria o cliente com o modelo default.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            client: OnceLock::new(),
        }
    }

    fn http(&self) -> &reqwest::blocking::Client {
        self.client.get_or_init(reqwest::blocking::Client::new)
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, system_prompt: &str, conversation: &[Turn]) -> Result<String, ServiceError> {
        let mut messages = Vec::with_capacity(conversation.len() + 1);
        messages.push(WireMessage {
            role: "system".to_string(),
            content: system_prompt.to_string(),
        });
        messages.extend(conversation.iter().map(|turn| WireMessage {
            role: turn.speaker.wire_role().to_string(),
            content: turn.text.clone(),
        }));

        let body = ChatRequest {
            model: &self.model,
            messages,
        };

        tracing::debug!(model = %self.model, turns = conversation.len(), "chamando chat completions");

        let response: ChatCompletionResponse = self
            .http()
            .post(OPENAI_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ServiceError::EmptyResponse)
    }
}
