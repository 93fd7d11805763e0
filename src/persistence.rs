//! # Persistência — O Blob do Histórico em Disco
//!
//! Módulo responsável por serializar/desserializar o [`HistoryStore`]
//! como JSON em `data/history.json`.
//!
//! ## Formato de Armazenamento
//!
//! O histórico é salvo como JSON "pretty-printed" para facilitar
//! inspeção manual — quatro arrays paralelos indexados pelo número do
//! jogo (ver [`HistoryStore`]).
//!
//! ## Quando o Histórico é Salvo?
//!
//! Após cada rodada concluída, **snapshot completo**: a sequência
//! inteira é reserializada e o arquivo anterior sobrescrito. Sem writes
//! incrementais — custo de escrita trocado por simplicidade e
//! atomicidade-por-substituição.
//!
//! ## Ausente vs. Corrompido
//!
//! [`load_history()`] distingue os dois casos: arquivo ausente é o
//! primeiro run (histórico vazio, log `info`); arquivo ilegível ou
//! inválido é erro — o chamador loga o warning e decide seguir vazio,
//! mas a falha nunca passa em silêncio.
//!
//! ## ⚠️ Atomicidade
//!
//! A escrita **não é atômica** — crash durante escrita pode corromper
//! o arquivo. Risco aceito; produção usaria write-rename.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;

use crate::core::HistoryStore;

/// Caminho do blob de histórico (relativo à raiz do projeto).
pub const HISTORY_PATH: &str = "data/history.json";

/// Salva o histórico inteiro em disco como JSON pretty-printed.
///
/// Cria o diretório pai se não existir. Adquire um read lock no
/// histórico — múltiplas leituras simultâneas são permitidas.
///
/// # Erros
///
/// Retorna erro se não conseguir criar o diretório, serializar,
/// ou escrever no arquivo.
pub fn save_history(path: &Path, history: &Arc<RwLock<HistoryStore>>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Falha ao criar diretório {}", parent.display()))?;
    }
    let store = history.read();
    let json = serde_json::to_string_pretty(&*store)
        .context("Falha ao serializar HistoryStore")?;
    std::fs::write(path, json)
        .with_context(|| format!("Falha ao escrever {}", path.display()))?;
    Ok(())
}

/// Carrega o histórico do disco, ou devolve um vazio se nunca foi salvo.
///
/// # Erros
///
/// Retorna erro se o arquivo **existir** mas não puder ser lido ou
/// desserializado — ausência não é erro, corrupção é.
pub fn load_history(path: &Path) -> Result<HistoryStore> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "nenhum histórico persistido, iniciando vazio");
        return Ok(HistoryStore::new());
    }
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Falha ao ler {}", path.display()))?;
    let store: HistoryStore = serde_json::from_str(&json)
        .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::JudgeVerdict;
    use std::path::PathBuf;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("pokeguess-persist-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn save_then_load_round_trips_all_four_sequences() {
        let path = temp_path();
        let history = Arc::new(RwLock::new(HistoryStore::new()));
        history.write().record(
            3,
            6,
            JudgeVerdict {
                rating: 8,
                explanation: "close attributes".to_string(),
            },
        );
        history.write().record(5, 1, JudgeVerdict::fallback());

        save_history(&path, &history).expect("save");
        let reloaded = load_history(&path).expect("load");

        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries(), history.read().entries());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_blob_loads_as_empty_history() {
        let path = temp_path();
        let store = load_history(&path).expect("load");
        assert!(store.is_empty());
    }

    #[test]
    fn corrupt_blob_is_an_error_not_a_silent_reset() {
        let path = temp_path();
        std::fs::write(&path, "{ this is not json").expect("write");
        assert!(load_history(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
