//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML renderizados em tempo de compilação usando o macro
//! [`maud`](https://maud.lambda.xyz/). Em vez de SPA, o padrão é
//! **Hypermedia-Driven**: o servidor retorna HTML (páginas ou
//! fragments) e o HTMX injeta os fragments no DOM.
//!
//! ## Templates Disponíveis
//!
//! | Função | Tipo | Descrição |
//! |--------|------|-----------|
//! | [`chat_page()`] | Página completa | Chat com transcript e input |
//! | [`stats_page()`] | Página completa | Métricas + barras por jogo |
//! | [`messages_fragment()`] | Fragment HTMX | Conteúdo de `#chat-messages` |
//! | [`user_bubble()`] / [`assistant_bubble()`] | Fragment | Uma mensagem |
//! | [`verdict_card()`] | Fragment | Veredito do juiz no fim da rodada |
//! | [`play_again_button()`] | Fragment | Botão de rodada nova |

use maud::{html, Markup, DOCTYPE};

use crate::core::{HistoryStore, JudgeVerdict, Turn};

/// Casca comum das páginas: head, nav e container.
fn page_shell(title: &str, active: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@1.9.12" {}
            }
            body {
                div class="app-shell" {
                    nav class="nav-bar" {
                        a href="/" class="nav-brand" {
                            span class="nav-brand-icon" { "?" }
                            span class="nav-brand-text" { "Quem é esse " em { "Pokémon?" } }
                        }
                        div class="nav-links" {
                            a href="/" class=(if active == "chat" { "nav-link active" } else { "nav-link" }) { "Chat" }
                            a href="/stats" class=(if active == "stats" { "nav-link active" } else { "nav-link" }) { "Estatísticas" }
                        }
                    }
                    (body)
                }
            }
        }
    }
}

/// Página principal do chat.
///
/// O transcript corrente é renderizado por inteiro — a conversa vive no
/// servidor, então um refresh não a perde. O form envia via HTMX para
/// `/chat` e o fragment retornado entra no fim de `#chat-messages`.
pub fn chat_page(transcript: &[Turn], is_over: bool) -> Markup {
    page_shell(
        "💬 Quem é esse Pokémon?",
        "chat",
        html! {
            main class="chat-panel" {
                div id="chat-messages" class="chat-messages" {
                    (messages_fragment(transcript))
                    @if is_over {
                        (play_again_button())
                    }
                }
                form class="chat-input"
                    hx-post="/chat"
                    hx-target="#chat-messages"
                    hx-swap="beforeend"
                    hx-on--after-request="this.reset()" {
                    input type="text" name="message" placeholder="Faça uma pergunta ou arrisque um palpite..." autocomplete="off" autofocus;
                    button type="submit" { "Enviar" }
                }
            }
            // Auto-scroll: novas mensagens sempre visíveis.
            script {
                (maud::PreEscaped(
                    "const chatMessages = document.getElementById('chat-messages');\n\
                     new MutationObserver(function () {\n\
                         chatMessages.scrollTop = chatMessages.scrollHeight;\n\
                     }).observe(chatMessages, { childList: true });"
                ))
            }
        },
    )
}

/// Conteúdo de `#chat-messages`: uma bolha por turno do transcript.
pub fn messages_fragment(transcript: &[Turn]) -> Markup {
    html! {
        @for turn in transcript {
            (bubble(turn.speaker.css_class(), turn.speaker.label(), &turn.text))
        }
    }
}

fn bubble(css_class: &str, role_label: &str, text: &str) -> Markup {
    html! {
        div class=(format!("message {}-message", css_class)) {
            div class="message-role" { (role_label) }
            div class="message-content" { (text) }
        }
    }
}

/// Bolha de mensagem do jogador.
pub fn user_bubble(text: &str) -> Markup {
    bubble("user", "Você", text)
}

/// Bolha de resposta do assistente.
pub fn assistant_bubble(text: &str) -> Markup {
    bubble("assistant", "Assistente", text)
}

/// Aviso neutro (ex: rodada já encerrada).
pub fn notice_bubble(text: &str) -> Markup {
    bubble("notice", "Sistema", text)
}

/// Erro exibido no chat sem derrubar a conversa.
pub fn error_bubble(text: &str) -> Markup {
    bubble("error", "Erro", text)
}

/// Cartão com o veredito do juiz, exibido quando a rodada encerra.
pub fn verdict_card(verdict: &JudgeVerdict) -> Markup {
    html! {
        div class="message verdict-card" {
            div class="message-role" { "Juiz" }
            div class="message-content" {
                span class="verdict-rating" { (verdict.rating) "/10" }
                " — "
                (verdict.explanation)
            }
        }
    }
}

/// Botão de rodada nova — troca o conteúdo de `#chat-messages` inteiro.
pub fn play_again_button() -> Markup {
    html! {
        div class="play-again" {
            button hx-post="/game/new"
                hx-target="#chat-messages"
                hx-swap="innerHTML" {
                "Jogar de novo"
            }
        }
    }
}

// ─── Estatísticas ────────────────────────────────────────────────

/// Página de estatísticas dos jogos concluídos.
///
/// Tiles com os totais e três gráficos de barras (palpites, dicas e
/// notas por jogo), tudo renderizado server-side — as barras são divs
/// com altura proporcional, sem JavaScript de charting.
pub fn stats_page(history: &HistoryStore) -> Markup {
    page_shell(
        "📊 Estatísticas do Jogo",
        "stats",
        html! {
            main class="stats-panel" {
                h1 { "📊 Estatísticas do Jogo" }
                @if history.is_empty() {
                    p class="stats-empty" { "Nenhum jogo concluído ainda. Volte ao chat e arrisque um palpite!" }
                } @else {
                    div class="metric-row" {
                        (metric_tile("Jogos", history.len().to_string()))
                        (metric_tile("Palpites", history.total_guesses().to_string()))
                        (metric_tile("Dicas", history.total_hints().to_string()))
                        @if let Some(avg) = history.average_rating() {
                            (metric_tile("Nota média", format!("{avg:.1}")))
                        }
                    }
                    (bar_chart("Palpites por jogo", &to_f64(&history.guesses_per_completed_game)))
                    (bar_chart("Dicas por jogo", &to_f64(&history.hints_per_completed_game)))
                    (bar_chart(
                        "Nota do juiz por jogo",
                        &history.judge_ratings_per_game.iter().map(|&r| f64::from(r)).collect::<Vec<_>>(),
                    ))
                    h2 { "Comentários do juiz" }
                    ol class="judge-comments" {
                        @for (i, explanation) in history.judge_explanations_per_game.iter().enumerate() {
                            li {
                                span class="judge-rating-chip" { (history.judge_ratings_per_game.get(i).copied().unwrap_or(0)) "/10" }
                                (explanation)
                            }
                        }
                    }
                }
            }
        },
    )
}

fn metric_tile(label: &str, value: String) -> Markup {
    html! {
        div class="metric-tile" {
            div class="metric-value" { (value) }
            div class="metric-label" { (label) }
        }
    }
}

fn to_f64(values: &[u32]) -> Vec<f64> {
    values.iter().map(|&v| f64::from(v)).collect()
}

/// Gráfico de barras em CSS puro — altura proporcional ao máximo da série.
fn bar_chart(title: &str, values: &[f64]) -> Markup {
    let max = values.iter().cloned().fold(0.0_f64, f64::max).max(1.0);
    html! {
        section class="chart" {
            h2 { (title) }
            div class="chart-bars" {
                @for (i, value) in values.iter().enumerate() {
                    div class="chart-bar-slot" title=(format!("Jogo {}: {}", i + 1, value)) {
                        div class="chart-bar" style=(format!("height:{:.0}%", value / max * 100.0)) {}
                        div class="chart-bar-label" { (i + 1) }
                    }
                }
            }
        }
    }
}
