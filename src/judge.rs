//! # Juiz — A Avaliação Pós-Rodada
//!
//! Invocado exatamente uma vez por rodada, no instante em que ela
//! termina. Monta o prompt de avaliação a partir do transcript e dos
//! contadores, chama o serviço de completions e interpreta a resposta
//! semi-estruturada do modelo.
//!
//! ## Contrato de Parse
//!
//! O modelo é instruído a responder uma linha no formato
//! `"<nota 1-10>: <justificativa>"`. O parse divide na **primeira**
//! ocorrência de `": "`; a metade esquerda precisa ser um inteiro.
//! Qualquer desvio — sem `": "`, esquerda não-numérica — resolve no
//! veredito sentinela [`JudgeVerdict::fallback()`] (nota 5, texto fixo),
//! sem retry e sem propagar erro: o veredito é estatística consultiva,
//! não pode travar o fim da rodada.
//!
//! Falha de transporte na chamada em si é outra história — essa sobe
//! como [`ServiceError`] para o chamador decidir (ver
//! [`Orchestrator::submit_guess`](crate::orchestrator::Orchestrator::submit_guess)).

use crate::completion::CompletionService;
use crate::core::{JudgeVerdict, Round};
use crate::error::ServiceError;
use crate::prompts;

/// Avalia uma rodada concluída com uma única chamada ao modelo.
///
/// # Erros
///
/// Só falha por erro do próprio serviço de completions. Resposta
/// malformada **não** é erro — vira o veredito sentinela.
pub fn evaluate(round: &Round, service: &dyn CompletionService) -> Result<JudgeVerdict, ServiceError> {
    let prompt = prompts::judge_prompt(
        &round.entity,
        &round.transcript,
        round.guess_count,
        round.hint_count,
    );
    // O pedido do juiz vai inteiro no system prompt; conversa vazia.
    let raw = service.complete(&prompt, &[])?;
    Ok(parse_verdict(&raw))
}

/// Interpreta a linha de veredito do modelo.
///
/// Divide na primeira `": "`, exige inteiro à esquerda e normaliza a
/// nota para dentro de 1..=10. Qualquer falha → sentinela.
pub fn parse_verdict(raw: &str) -> JudgeVerdict {
    let Some((left, right)) = raw.trim().split_once(": ") else {
        return JudgeVerdict::fallback();
    };
    match left.trim().parse::<i64>() {
        Ok(rating) => JudgeVerdict {
            rating: rating.clamp(1, 10) as u8,
            explanation: right.to_string(),
        },
        Err(_) => JudgeVerdict::fallback(),
    }
}
