//! # Módulo Web — A Interface do Jogo
//!
//! Este módulo organiza toda a camada web da aplicação, construída
//! com **Axum** + **HTMX** + **Maud**.
//!
//! ## Arquitetura Web
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX)                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /           → página do chat                  │
//! │  ├── GET  /stats      → página de estatísticas          │
//! │  ├── GET  /history    → JSON (histórico bruto)          │
//! │  ├── POST /chat       → HTMX fragment (palpite)         │
//! │  └── POST /game/new   → HTMX fragment (rodada nova)     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// O estado `AppState` é compartilhado entre todos os handlers via
/// extrator `State<AppState>` do Axum.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── Páginas HTML ──────────────────────────────────────
        .route("/", get(handlers::index))
        .route("/stats", get(handlers::stats))
        // ── API JSON ──────────────────────────────────────────
        .route("/history", get(handlers::history_json))
        // ── HTMX fragments ───────────────────────────────────
        .route("/chat", post(handlers::chat))
        .route("/game/new", post(handlers::new_game))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
