#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links)]
//! # Quem é esse Pokémon? — Chat de Adivinhação
//!
//! **Ponto de entrada principal** da aplicação.
//!
//! Um jogador conversa com um assistente de IA que sorteou um Pokémon
//! em segredo e precisa arrancar dicas até acertar o nome. Ao acertar,
//! um segundo passe de IA (o juiz) dá uma nota de 1 a 10 para a
//! qualidade dos palpites, e o resumo da rodada entra num histórico
//! persistido entre execuções.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Carrega .env + OPENAI_API_KEY (credencial nunca persistida)
//!   ├── Carrega catálogo de data/pokemon.json (vazio = erro fatal)
//!   ├── Carrega histórico de data/history.json (ausente = vazio;
//!   │     corrompido = warning e segue vazio)
//!   ├── Monta Orchestrator (primeira rodada já sorteada)
//!   ├── Monta AppState e Router
//!   └── Serve em http://localhost:3000
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! OPENAI_API_KEY=sk-... cargo run
//!
//! # Executar com logs detalhados (inclui o Pokémon sorteado!)
//! RUST_LOG=debug OPENAI_API_KEY=sk-... cargo run
//! ```

// Declaração dos módulos da aplicação.
// Cada módulo corresponde a uma camada da arquitetura:

/// Módulo `core` — tipos fundamentais: Entity, Round, JudgeVerdict, HistoryStore.
mod core;

/// Módulo `catalog` — o dataset de referência dos Pokémon sorteáveis.
mod catalog;

/// Módulo `classifier` — classificação das respostas do modelo por marcadores.
mod classifier;

/// Módulo `completion` — fronteira com o serviço de chat completions.
mod completion;

/// Módulo `error` — taxonomia de erros do núcleo do jogo.
mod error;

/// Módulo `judge` — avaliação pós-rodada com parse tolerante.
mod judge;

/// Módulo `orchestrator` — a máquina de estados da rodada.
mod orchestrator;

/// Módulo `persistence` — serialização/desserialização do histórico em JSON.
mod persistence;

/// Módulo `prompts` — builders dos prompts do assistente e do juiz.
mod prompts;

/// Módulo `web` — servidor web axum, handlers HTTP e templates.
mod web;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::completion::OpenAiClient;
use crate::core::HistoryStore;
use crate::orchestrator::Orchestrator;
use crate::web::state::AppState;

/// Função principal assíncrona do jogo.
///
/// # Erros
///
/// Retorna erro se:
/// - `OPENAI_API_KEY` não estiver definida (ambiente ou `.env`)
/// - O catálogo não puder ser carregado ou estiver vazio
/// - Não conseguir fazer bind na porta 3000
/// - O servidor axum falhar durante execução
#[tokio::main]
async fn main() -> Result<()> {
    // Configura o sistema de logging/tracing.
    // Aceita a variável de ambiente RUST_LOG para configurar o nível.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("💬 Quem é esse Pokémon? — Starting...");

    // Credencial do serviço de completions — vem do ambiente (ou .env),
    // vive só em memória e nunca é persistida.
    dotenvy::dotenv().ok();
    let api_key = std::env::var("OPENAI_API_KEY")
        .context("OPENAI_API_KEY não definida — exporte a variável ou use um arquivo .env")?;

    // Catálogo de Pokémon — precondição fatal: sem catálogo, sem jogo.
    let catalog = Arc::new(
        Catalog::load(catalog::CATALOG_PATH).context("Falha ao carregar o catálogo de Pokémon")?,
    );
    tracing::info!(entities = catalog.len(), "catálogo carregado");

    // Histórico de rodadas concluídas. Ausência é um primeiro run normal;
    // blob corrompido é reportado antes de seguir com histórico vazio.
    let history_path = Path::new(persistence::HISTORY_PATH);
    let history = match persistence::load_history(history_path) {
        Ok(store) => {
            if !store.is_empty() {
                tracing::info!(games = store.len(), "histórico carregado do disco");
            }
            Arc::new(RwLock::new(store))
        }
        Err(e) => {
            tracing::warn!(error = %e, "histórico persistido ilegível, seguindo com vazio");
            Arc::new(RwLock::new(HistoryStore::new()))
        }
    };

    // Sessão de jogo: orquestrador com a primeira rodada já sorteada.
    let service = Arc::new(OpenAiClient::new(api_key));
    let session = Arc::new(Mutex::new(Orchestrator::new(
        catalog,
        service,
        history.clone(),
        history_path.to_path_buf(),
    )));

    // Estado compartilhado da aplicação — passado aos handlers via axum State.
    let state = AppState { session, history };

    // Cria o router com todas as rotas da aplicação.
    let app = web::create_router(state);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running at http://localhost:3000");

    // Inicia o servidor axum — bloqueia até que o processo seja encerrado.
    axum::serve(listener, app).await?;

    Ok(())
}
