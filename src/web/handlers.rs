//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`]. Os handlers seguem o padrão
//! **HTMX fragment** — retornam fragmentos HTML (não páginas completas)
//! que o HTMX injeta no DOM via `hx-swap`.
//!
//! ## Padrão de Resposta
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Página do chat (Maud) |
//! | `stats` | GET | HTML completo | Página de estatísticas |
//! | `history_json` | GET | JSON | Histórico bruto (quatro arrays) |
//! | `chat` | POST | HTMX fragment | Turno user + assistant |
//! | `new_game` | POST | HTMX fragment | Chat zerado com saudação |
//!
//! ## Bloqueante Dentro de Async
//!
//! Processar um palpite inclui chamadas HTTP síncronas (assistente e,
//! no fim da rodada, juiz) e o persist em disco. Tudo isso roda dentro
//! de `tokio::task::spawn_blocking`, segurando o lock da sessão fora
//! do executor async.

use axum::extract::State;
use axum::response::Html;
use axum::Json;
use maud::html;

use super::state::AppState;
use super::templates;
use crate::core::{HistoryStore, Speaker};
use crate::error::GameError;

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

/// GET `/` — Página principal do chat.
///
/// Renderiza a página completa com o transcript corrente — um refresh
/// do browser não perde a conversa, que vive no servidor.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock();
    markup_to_html(templates::chat_page(session.transcript(), session.is_over()))
}

/// GET `/stats` — Página de estatísticas dos jogos concluídos.
pub async fn stats(State(state): State<AppState>) -> Html<String> {
    let history = state.history.read();
    markup_to_html(templates::stats_page(&history))
}

/// GET `/history` — Histórico bruto como JSON (os quatro arrays).
pub async fn history_json(State(state): State<AppState>) -> Json<HistoryStore> {
    Json(state.history.read().clone())
}

/// Dados do formulário de chat (campo `message` do form HTML).
#[derive(serde::Deserialize)]
pub struct ChatForm {
    /// Texto do palpite/pergunta do jogador.
    pub message: String,
}

/// POST `/chat` — Processa um palpite e retorna HTMX fragment.
///
/// ## Fluxo
///
/// ```text
/// 1. Lê o campo "message" do form
/// 2. spawn_blocking: lock da sessão → submit_guess()
///    (completions + classifier + juiz + persist, tudo síncrono)
/// 3. Renderiza fragmento: turno do user + resposta do assistente
///    (+ veredito e botão "Jogar de novo" quando a rodada encerra)
/// ```
///
/// Erros viram fragmentos também: rodada encerrada é uma instrução
/// para clicar em "Jogar de novo"; falha do serviço é um convite a
/// reenviar o mesmo palpite — a rodada ficou intacta.
pub async fn chat(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<ChatForm>,
) -> Html<String> {
    let user_text = form.message.trim().to_string();
    if user_text.is_empty() {
        return markup_to_html(html! {});
    }

    let session = state.session.clone();
    let text = user_text.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut game = session.lock();
        game.submit_guess(&text)
    })
    .await;

    markup_to_html(match result {
        Ok(Ok(guess)) => {
            html! {
                (templates::user_bubble(&user_text))
                (templates::assistant_bubble(&guess.reply))
                @if let Some(verdict) = &guess.verdict {
                    (templates::verdict_card(verdict))
                }
                @if guess.is_over {
                    (templates::play_again_button())
                }
            }
        }
        Ok(Err(GameError::RoundAlreadyOver)) => {
            html! {
                (templates::user_bubble(&user_text))
                (templates::notice_bubble("A rodada já terminou — clique em \"Jogar de novo\" para outra."))
                (templates::play_again_button())
            }
        }
        Ok(Err(GameError::Service(e))) => {
            tracing::error!(error = %e, "falha do serviço de completions durante palpite");
            html! {
                (templates::user_bubble(&user_text))
                (templates::error_bubble(
                    "O serviço de IA falhou e nada foi contabilizado. Envie o palpite de novo.",
                ))
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "task de palpite abortada");
            html! {
                (templates::error_bubble("Erro interno ao processar o palpite."))
            }
        }
    })
}

/// POST `/game/new` — Descarta a rodada atual e começa outra.
///
/// Retorna o conteúdo novo de `#chat-messages` (só a saudação); o HTMX
/// troca via `hx-swap="innerHTML"`.
pub async fn new_game(State(state): State<AppState>) -> Html<String> {
    let mut session = state.session.lock();
    session.start_round();
    tracing::info!("rodada nova iniciada pelo jogador");
    markup_to_html(templates::messages_fragment(session.transcript()))
}

// ─── Extensões de Speaker para HTML ──────────────────────────────

impl Speaker {
    /// Classe CSS para estilização da mensagem no frontend.
    pub fn css_class(&self) -> &'static str {
        match self {
            Speaker::Assistant => "assistant",
            Speaker::User => "user",
        }
    }

    /// Label textual do papel para exibição no chat.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::Assistant => "Assistente",
            Speaker::User => "Você",
        }
    }
}
