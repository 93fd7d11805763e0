//! # JudgeVerdict — A Avaliação de uma Rodada Concluída
//!
//! Produzido exatamente uma vez por rodada, no instante em que ela
//! termina, pelo [`judge`](crate::judge). Imutável depois de criado.

use serde::{Deserialize, Serialize};

/// Veredito do juiz: nota de 1 a 10 mais uma justificativa textual.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    /// Nota da qualidade dos palpites, sempre dentro de 1..=10.
    pub rating: u8,
    /// Justificativa em texto livre vinda do modelo.
    pub explanation: String,
}

impl JudgeVerdict {
    /// Veredito sentinela usado quando a resposta do juiz não pôde ser
    /// interpretada. Estatística degradada, jogo nunca bloqueado.
    pub fn fallback() -> Self {
        Self {
            rating: 5,
            explanation: "Invalid response from the judge.".to_string(),
        }
    }
}
