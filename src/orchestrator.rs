//! # Orquestrador — A Máquina de Estados da Rodada
//!
//! O [`Orchestrator`] é o **coração do sistema** — dono da rodada viva,
//! ele arbitra cada palpite do jogador do começo ao fim:
//!
//! ```text
//! Palpite do Jogador
//!   │
//!   ├── rodada encerrada? ──► Err(RoundAlreadyOver)  (nenhuma mutação)
//!   │
//!   ├── 1. ⚡ CAMINHO RÁPIDO (nome exato, case-insensitive)
//!   │      └── resposta fixa "Correct! It's {name}!" — modelo não é chamado
//!   │
//!   ├── 2. 💬 CAMINHO DO MODELO
//!   │      └── system prompt + transcript + palpite ──► completions
//!   │          └── classifier: Correct | Incorrect | Hint | Unclassified
//!   │
//!   ├── 3. 📊 EFEITOS (só depois da troca inteira dar certo)
//!   │      └── transcript += (user, assistant); contadores; is_over
//!   │
//!   └── 4. 🏁 TRANSIÇÃO TERMINAL (palpite correto)
//!          └── juiz avalia ──► HistoryStore::record ──► persist em disco
//! ```
//!
//! ## Atomicidade da Troca
//!
//! A chamada ao serviço de completions acontece **antes** de qualquer
//! mutação: o turno do jogador entra numa cópia da conversa só para o
//! request. Se o serviço falhar, a rodada fica byte a byte como estava —
//! o mesmo palpite pode ser reenviado sem contador fantasma nem turno
//! órfão no transcript.
//!
//! ## Estados
//!
//! `Active → Over` na confirmação de acerto (exata ou do modelo). `Over`
//! é terminal: a única saída é [`start_round()`](Orchestrator::start_round)
//! criando uma rodada nova no lugar.
//!
//! ## Concorrência
//!
//! Uma sessão, um orquestrador, um dono — no servidor ele vive atrás de
//! `Arc<Mutex<…>>` e cada palpite é processado inteiro (incluindo juiz e
//! persist) antes do próximo entrar.

use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::Catalog;
use crate::classifier::{self, Outcome};
use crate::completion::CompletionService;
use crate::core::{HistoryStore, JudgeVerdict, Round, Turn};
use crate::error::GameError;
use crate::judge;
use crate::persistence;
use crate::prompts;

/// Resultado visível de um palpite processado.
#[derive(Clone, Debug)]
pub struct GuessReply {
    /// Texto do assistente a exibir para o jogador.
    pub reply: String,
    /// Desfecho classificado do turno.
    pub outcome: Outcome,
    /// `true` se este palpite encerrou a rodada.
    pub is_over: bool,
    /// Veredito do juiz — presente só no palpite que encerra.
    pub verdict: Option<JudgeVerdict>,
}

/// Máquina de estados de uma sessão de jogo.
///
/// Dono único da rodada viva; catálogo, serviço de completions e
/// histórico chegam via `Arc` porque outros componentes (stats, startup)
/// também os enxergam.
pub struct Orchestrator {
    /// Catálogo de Pokémon sorteáveis.
    catalog: Arc<Catalog>,
    /// Serviço opaco de completions (assistente e juiz).
    service: Arc<dyn CompletionService>,
    /// Histórico de rodadas concluídas, compartilhado com a página de stats.
    history: Arc<RwLock<HistoryStore>>,
    /// Onde persistir o blob do histórico após cada rodada concluída.
    history_path: PathBuf,
    /// A rodada viva.
    round: Round,
}

impl Orchestrator {
    /// Cria o orquestrador e já sorteia a primeira rodada.
    pub fn new(
        catalog: Arc<Catalog>,
        service: Arc<dyn CompletionService>,
        history: Arc<RwLock<HistoryStore>>,
        history_path: PathBuf,
    ) -> Self {
        let round = Round::new(catalog.sample().clone());
        tracing::debug!(round_id = %round.id, secret = %round.entity.name, "primeira rodada sorteada");
        Self {
            catalog,
            service,
            history,
            history_path,
            round,
        }
    }

    /// Descarta a rodada atual e sorteia uma nova.
    ///
    /// A rodada anterior é substituída inteira — contadores zerados,
    /// transcript novo com a saudação, `is_over = false`. Nada dela
    /// vaza para a rodada nova.
    pub fn start_round(&mut self) {
        self.round = Round::new(self.catalog.sample().clone());
        tracing::debug!(round_id = %self.round.id, secret = %self.round.entity.name, "nova rodada sorteada");
    }

    /// Transcript da rodada corrente, na ordem em que aconteceu.
    pub fn transcript(&self) -> &[Turn] {
        &self.round.transcript
    }

    /// `true` se a rodada corrente já terminou.
    pub fn is_over(&self) -> bool {
        self.round.is_over
    }

    /// Rodada corrente (leitura) — usada pelos testes e pela interface.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Processa um palpite do jogador do começo ao fim.
    ///
    /// Ver o diagrama do módulo. Em resumo: caminho rápido do nome
    /// exato, senão uma troca com o modelo classificada por marcadores;
    /// efeitos aplicados atomicamente; na transição terminal, juiz +
    /// histórico + persist.
    ///
    /// # Erros
    ///
    /// - [`GameError::RoundAlreadyOver`] — rodada encerrada; nenhuma mutação.
    /// - [`GameError::Service`] — o serviço de completions falhou; a
    ///   rodada fica no estado pré-chamada e o palpite pode ser reenviado.
    pub fn submit_guess(&mut self, user_text: &str) -> Result<GuessReply, GameError> {
        if self.round.is_over {
            return Err(GameError::RoundAlreadyOver);
        }

        let user_text = user_text.trim();

        // ─── Fase 1: obter resposta e desfecho, sem mutar a rodada ───
        let (reply, outcome) = if classifier::matches_entity_name(user_text, &self.round.entity.name)
        {
            // Caminho rápido: o modelo nem é consultado.
            (
                format!("Correct! It's {}!", self.round.entity.name),
                Outcome::ExactMatch,
            )
        } else {
            let system_prompt = prompts::system_prompt(&self.round.entity);
            // O turno pendente entra numa cópia da conversa, só para o
            // request — a rodada mesma ainda não foi tocada.
            let mut conversation = self.round.transcript.clone();
            conversation.push(Turn::user(user_text));
            let reply = self.service.complete(&system_prompt, &conversation)?;
            let outcome = classifier::classify_reply(&reply);
            (reply, outcome)
        };

        // ─── Fase 2: troca completa — aplicar efeitos de uma vez ─────
        self.round.push_user(user_text);
        match outcome {
            Outcome::ExactMatch | Outcome::ConfirmedCorrect | Outcome::ConfirmedIncorrect => {
                self.round.count_guess();
            }
            Outcome::HintDelivered => self.round.count_hint(),
            Outcome::Unclassified => {} // resposta exibida, contadores intactos
        }
        self.round.push_assistant(&reply);

        // ─── Fase 3: transição terminal ──────────────────────────────
        let mut verdict = None;
        if outcome.is_terminal() {
            self.round.finish();
            tracing::info!(
                round_id = %self.round.id,
                guesses = self.round.guess_count,
                hints = self.round.hint_count,
                "rodada concluída"
            );
            verdict = Some(self.conclude_round());
        }

        Ok(GuessReply {
            reply,
            outcome,
            is_over: self.round.is_over,
            verdict,
        })
    }

    /// Fecha a contabilidade de uma rodada recém-terminada: juiz,
    /// histórico e persist.
    ///
    /// Daqui para frente nada pode bloquear o fim do jogo: falha de
    /// transporte do juiz vira o veredito sentinela (com warning), e
    /// falha de persist vira log de erro — o jogador segue jogando.
    fn conclude_round(&mut self) -> JudgeVerdict {
        let verdict = match judge::evaluate(&self.round, self.service.as_ref()) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "juiz indisponível, usando veredito sentinela");
                JudgeVerdict::fallback()
            }
        };

        self.history.write().record(
            self.round.guess_count,
            self.round.hint_count,
            verdict.clone(),
        );

        if let Err(e) = persistence::save_history(&self.history_path, &self.history) {
            tracing::error!(error = %e, "falha ao persistir histórico após rodada");
        }

        verdict
    }
}
