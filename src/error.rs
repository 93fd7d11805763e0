//! # Erros do Núcleo do Jogo
//!
//! Taxonomia dos erros que atravessam a fronteira do núcleo:
//!
//! | Erro | Origem | Política |
//! |------|--------|----------|
//! | [`GameError::RoundAlreadyOver`] | palpite contra rodada encerrada | recuperado localmente — nenhuma mutação, sinal de operação rejeitada |
//! | [`ServiceError`] | serviço de completions (rede/auth/quota) | propagado ao chamador; a rodada fica intacta e o mesmo palpite pode ser reenviado |
//!
//! Dois erros conhecidos **não** aparecem aqui de propósito:
//! falha de parse do juiz nunca sai do [`judge`](crate::judge) (vira o
//! veredito sentinela), e falha de persistência nunca sai do
//! [`Orchestrator`](crate::orchestrator::Orchestrator) (vira log de erro).
//! Catálogo vazio é precondição fatal de startup, tratada com `anyhow`
//! no [`catalog`](crate::catalog).

use thiserror::Error;

/// Falha na chamada ao serviço de completions.
///
/// O núcleo não interpreta a causa além de transporte/payload — política
/// de timeout e retry pertence ao colaborador, não a nós.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Falha de transporte ou status HTTP de erro.
    #[error("falha na chamada ao serviço de completions: {0}")]
    Transport(#[from] reqwest::Error),

    /// A resposta veio sem nenhuma choice utilizável.
    #[error("resposta do serviço de completions sem choices")]
    EmptyResponse,
}

/// Erros visíveis de uma operação de jogo.
#[derive(Debug, Error)]
pub enum GameError {
    /// Palpite recebido com a rodada já encerrada — no-op sinalizado.
    #[error("a rodada já terminou; inicie uma nova para continuar")]
    RoundAlreadyOver,

    /// Erro do serviço de completions, repassado sem mutação da rodada.
    #[error(transparent)]
    Service(#[from] ServiceError),
}
