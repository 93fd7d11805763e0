//! # Round — O Estado Autoritativo de uma Rodada
//!
//! Um [`Round`] é o registro mutável de uma partida em andamento: o
//! Pokémon sorteado, o transcript da conversa e os contadores de palpites
//! e dicas. Existe **exatamente uma** instância viva por sessão — criada
//! por [`Orchestrator::start_round()`](crate::orchestrator::Orchestrator::start_round)
//! e substituída inteira quando o jogador pede "jogar de novo".
//!
//! ## Invariantes
//!
//! - `entity` é fixado no sorteio e nunca trocado dentro da rodada.
//! - `transcript` é append-only: turnos nunca são editados ou removidos.
//! - `guess_count` e `hint_count` só crescem.
//! - `is_over` transiciona `false → true` uma única vez ([`finish()`](Round::finish));
//!   depois disso nenhuma mutação é permitida — a única saída é uma
//!   rodada nova no lugar desta.
//!
//! Os `debug_assert!` nos métodos de mutação vigiam o congelamento em
//! builds de desenvolvimento; em release o [`Orchestrator`](crate::orchestrator::Orchestrator)
//! é o único chamador e já rejeita palpites contra rodadas encerradas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Entity;

/// Saudação que abre o transcript de toda rodada nova.
pub const GREETING: &str =
    "Please start with guessing the Pokémon! You can ask me anything, but try to ask clever questions!";

/// Papel de quem falou em um turno do chat.
///
/// Variante fechada de propósito — o transcript não é um dicionário
/// aberto de strings, e sim uma sequência de turnos tipados.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    /// O assistente (inclui a saudação inicial e toda resposta do modelo).
    Assistant,
    /// O jogador.
    User,
}

impl Speaker {
    /// Role no formato do wire protocol de chat completions.
    pub fn wire_role(&self) -> &'static str {
        match self {
            Speaker::Assistant => "assistant",
            Speaker::User => "user",
        }
    }
}

/// Um turno do chat: quem falou e o que foi dito.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Papel de quem falou.
    pub speaker: Speaker,
    /// Conteúdo textual do turno.
    pub text: String,
}

impl Turn {
    /// Turno do assistente.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    /// Turno do jogador.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }
}

/// O registro autoritativo de uma rodada do jogo.
///
/// Dono único: o [`Orchestrator`](crate::orchestrator::Orchestrator).
/// Os campos são públicos no estilo do resto do crate, mas toda mutação
/// passa pelos métodos abaixo para manter os invariantes do módulo.
#[derive(Clone, Debug)]
pub struct Round {
    /// Identificador da rodada (UUID v4) — útil nos logs.
    pub id: Uuid,

    /// O Pokémon sorteado — fixo pela duração da rodada.
    pub entity: Entity,

    /// Transcript ordenado da conversa, append-only.
    pub transcript: Vec<Turn>,

    /// Quantos palpites de nome o jogador fez (certos e errados).
    pub guess_count: u32,

    /// Quantas dicas o assistente entregou.
    pub hint_count: u32,

    /// `true` a partir do palpite correto — transição terminal.
    pub is_over: bool,

    /// Quando a rodada começou.
    pub started_at: DateTime<Utc>,
}

impl Round {
    /// Cria uma rodada nova com contadores zerados e o transcript já
    /// semeado com a saudação do assistente.
    pub fn new(entity: Entity) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity,
            transcript: vec![Turn::assistant(GREETING)],
            guess_count: 0,
            hint_count: 0,
            is_over: false,
            started_at: Utc::now(),
        }
    }

    /// Anexa um turno do jogador ao transcript.
    pub fn push_user(&mut self, text: &str) {
        debug_assert!(!self.is_over, "transcript congelado após is_over");
        self.transcript.push(Turn::user(text));
    }

    /// Anexa um turno do assistente ao transcript.
    pub fn push_assistant(&mut self, text: &str) {
        debug_assert!(!self.is_over, "transcript congelado após is_over");
        self.transcript.push(Turn::assistant(text));
    }

    /// Registra um palpite de nome (correto ou incorreto).
    pub fn count_guess(&mut self) {
        debug_assert!(!self.is_over, "contadores congelados após is_over");
        self.guess_count += 1;
    }

    /// Registra uma dica entregue pelo assistente.
    pub fn count_hint(&mut self) {
        debug_assert!(!self.is_over, "contadores congelados após is_over");
        self.hint_count += 1;
    }

    /// Transição terminal `false → true`. Chamada exatamente uma vez,
    /// depois do último turno do transcript ser anexado.
    pub fn finish(&mut self) {
        debug_assert!(!self.is_over, "finish() chamado duas vezes");
        self.is_over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> Entity {
        Entity {
            name: "Pikachu".to_string(),
            type1: "Electric".to_string(),
            type2: None,
            classification: "Mouse Pokémon".to_string(),
            height_m: Some(0.4),
            weight_kg: Some(6.0),
            abilities: vec!["Static".to_string()],
            hp: 35,
            attack: 55,
            defense: 40,
            sp_attack: 50,
            sp_defense: 50,
            speed: 90,
            generation: 1,
            is_legendary: false,
        }
    }

    #[test]
    fn new_round_starts_with_greeting_and_zeroed_counters() {
        let round = Round::new(entity());
        assert_eq!(round.guess_count, 0);
        assert_eq!(round.hint_count, 0);
        assert!(!round.is_over);
        assert_eq!(round.transcript.len(), 1);
        assert_eq!(round.transcript[0].speaker, Speaker::Assistant);
        assert_eq!(round.transcript[0].text, GREETING);
    }

    #[test]
    fn transcript_is_append_only_in_order() {
        let mut round = Round::new(entity());
        round.push_user("is it yellow?");
        round.push_assistant("Hint: it is yellow.");
        assert_eq!(round.transcript.len(), 3);
        assert_eq!(round.transcript[1].speaker, Speaker::User);
        assert_eq!(round.transcript[2].speaker, Speaker::Assistant);
    }

    #[test]
    fn counters_only_grow() {
        let mut round = Round::new(entity());
        round.count_guess();
        round.count_hint();
        round.count_guess();
        assert_eq!(round.guess_count, 2);
        assert_eq!(round.hint_count, 1);
    }

    #[test]
    fn finish_is_terminal() {
        let mut round = Round::new(entity());
        round.count_guess();
        round.finish();
        assert!(round.is_over);
    }
}
