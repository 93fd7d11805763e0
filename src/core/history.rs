//! # HistoryStore — O Histórico de Rodadas Concluídas
//!
//! O [`HistoryStore`] é o log append-only de estatísticas entre rodadas:
//! a cada rodada concluída ele recebe um snapshot (palpites, dicas,
//! veredito do juiz) e é persistido inteiro em disco (ver
//! [`persistence`](crate::persistence)).
//!
//! ## Layout Posicional
//!
//! O blob persistido são **quatro sequências paralelas de mesmo
//! comprimento**, indexadas pelo número do jogo:
//!
//! ```text
//! guesses_per_completed_game:    [3,  5,  2, ...]
//! hints_per_completed_game:      [6,  9,  4, ...]
//! judge_ratings_per_game:        [8,  4,  9, ...]
//! judge_explanations_per_game:   ["…", "…", "…", ...]
//!                                 ▲
//!                                 posição i = mesmo jogo nas quatro
//! ```
//!
//! Todo escritor passa por [`record()`](HistoryStore::record), que anexa
//! nas quatro de uma vez — é assim que a correspondência posicional se
//! mantém. Entradas nunca são editadas nem removidas.

use serde::{Deserialize, Serialize};

use super::JudgeVerdict;

/// Snapshot de uma rodada concluída, na forma em que a interface consome.
///
/// É uma *view* reconstruída a partir das quatro sequências — o formato
/// persistido continua sendo o posicional do [`HistoryStore`].
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    /// Palpites feitos na rodada.
    pub guesses: u32,
    /// Dicas recebidas na rodada.
    pub hints: u32,
    /// Veredito do juiz para a rodada.
    pub verdict: JudgeVerdict,
}

/// Log ordenado e append-only das rodadas concluídas do processo.
///
/// Carregado uma vez no startup e reescrito inteiro após cada rodada
/// concluída. Sem compactação, sem eviction — só cresce.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    /// Palpites por jogo concluído.
    #[serde(default)]
    pub guesses_per_completed_game: Vec<u32>,

    /// Dicas por jogo concluído.
    #[serde(default)]
    pub hints_per_completed_game: Vec<u32>,

    /// Nota do juiz por jogo concluído.
    #[serde(default)]
    pub judge_ratings_per_game: Vec<u8>,

    /// Justificativa do juiz por jogo concluído.
    #[serde(default)]
    pub judge_explanations_per_game: Vec<String>,
}

impl HistoryStore {
    /// Histórico vazio — estado inicial quando não há blob persistido.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anexa o snapshot de uma rodada concluída nas quatro sequências.
    ///
    /// Este é o único caminho de escrita — preserva a correspondência
    /// posicional entre os campos por construção.
    pub fn record(&mut self, guesses: u32, hints: u32, verdict: JudgeVerdict) {
        self.guesses_per_completed_game.push(guesses);
        self.hints_per_completed_game.push(hints);
        self.judge_ratings_per_game.push(verdict.rating);
        self.judge_explanations_per_game.push(verdict.explanation);
    }

    /// Número de jogos concluídos registrados.
    pub fn len(&self) -> usize {
        self.guesses_per_completed_game.len()
    }

    /// `true` quando nenhum jogo foi concluído ainda.
    pub fn is_empty(&self) -> bool {
        self.guesses_per_completed_game.is_empty()
    }

    /// Reconstrói as entradas jogo-a-jogo a partir das quatro sequências.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        self.guesses_per_completed_game
            .iter()
            .zip(&self.hints_per_completed_game)
            .zip(&self.judge_ratings_per_game)
            .zip(&self.judge_explanations_per_game)
            .map(|(((&guesses, &hints), &rating), explanation)| HistoryEntry {
                guesses,
                hints,
                verdict: JudgeVerdict {
                    rating,
                    explanation: explanation.clone(),
                },
            })
            .collect()
    }

    /// Soma de palpites de todos os jogos.
    pub fn total_guesses(&self) -> u32 {
        self.guesses_per_completed_game.iter().sum()
    }

    /// Soma de dicas de todos os jogos.
    pub fn total_hints(&self) -> u32 {
        self.hints_per_completed_game.iter().sum()
    }

    /// Média das notas do juiz, ou `None` sem jogos concluídos.
    pub fn average_rating(&self) -> Option<f64> {
        if self.judge_ratings_per_game.is_empty() {
            return None;
        }
        let sum: u32 = self.judge_ratings_per_game.iter().map(|&r| u32::from(r)).sum();
        Some(f64::from(sum) / self.judge_ratings_per_game.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(rating: u8, explanation: &str) -> JudgeVerdict {
        JudgeVerdict {
            rating,
            explanation: explanation.to_string(),
        }
    }

    #[test]
    fn record_keeps_the_four_sequences_in_lockstep() {
        let mut store = HistoryStore::new();
        store.record(3, 6, verdict(8, "good"));
        store.record(5, 9, verdict(4, "noisy"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.guesses_per_completed_game, vec![3, 5]);
        assert_eq!(store.hints_per_completed_game, vec![6, 9]);
        assert_eq!(store.judge_ratings_per_game, vec![8, 4]);
        assert_eq!(
            store.judge_explanations_per_game,
            vec!["good".to_string(), "noisy".to_string()]
        );
    }

    #[test]
    fn entries_reconstruct_positional_correspondence() {
        let mut store = HistoryStore::new();
        store.record(2, 4, verdict(9, "sharp"));
        store.record(7, 1, verdict(3, "wild"));

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].guesses, 2);
        assert_eq!(entries[0].hints, 4);
        assert_eq!(entries[0].verdict, verdict(9, "sharp"));
        assert_eq!(entries[1].guesses, 7);
        assert_eq!(entries[1].verdict, verdict(3, "wild"));
    }

    #[test]
    fn serde_round_trip_preserves_all_fields() {
        let mut store = HistoryStore::new();
        store.record(4, 7, verdict(6, "average run"));
        store.record(1, 0, verdict(10, "instant win"));
        store.record(9, 12, verdict(2, "long haul"));

        let blob = serde_json::to_string(&store).expect("serialize");
        let reloaded: HistoryStore = serde_json::from_str(&blob).expect("deserialize");

        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn missing_fields_in_blob_default_to_empty() {
        // Blob de uma versão antiga que não tinha os campos do juiz.
        let blob = r#"{"guesses_per_completed_game":[2],"hints_per_completed_game":[3]}"#;
        let store: HistoryStore = serde_json::from_str(blob).expect("deserialize");
        assert_eq!(store.guesses_per_completed_game, vec![2]);
        assert!(store.judge_ratings_per_game.is_empty());
    }

    #[test]
    fn aggregates() {
        let mut store = HistoryStore::new();
        assert!(store.average_rating().is_none());
        store.record(3, 6, verdict(8, "a"));
        store.record(5, 2, verdict(4, "b"));
        assert_eq!(store.total_guesses(), 8);
        assert_eq!(store.total_hints(), 8);
        assert_eq!(store.average_rating(), Some(6.0));
    }
}
