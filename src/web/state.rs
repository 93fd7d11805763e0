//! # Estado da Aplicação Web
//!
//! Define a struct de estado compartilhado entre todos os handlers Axum.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::core::HistoryStore;
use crate::orchestrator::Orchestrator;

/// Estado compartilhado da aplicação Axum.
///
/// O orquestrador vive atrás de um `Mutex` — um palpite é processado
/// inteiro (modelo, juiz, persist) antes do próximo entrar, exatamente
/// o modelo de execução de uma sessão única de jogo. O histórico é
/// compartilhado à parte para a página de estatísticas ler sem disputar
/// o lock da sessão.
#[derive(Clone)]
pub struct AppState {
    /// A sessão de jogo (acesso exclusivo).
    pub session: Arc<Mutex<Orchestrator>>,
    /// Histórico de rodadas concluídas (leitura concorrente).
    pub history: Arc<RwLock<HistoryStore>>,
}
