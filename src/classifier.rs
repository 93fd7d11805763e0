//! # Classificador de Diálogo — O Desfecho de Cada Resposta
//!
//! O classificador decide o que uma resposta do assistente **significou**
//! para o andamento da rodada, inspecionando o texto livre que o modelo
//! devolveu. O system prompt instrui o modelo a abrir as respostas com
//! marcadores fixos; aqui fazemos o caminho inverso:
//!
//! | Outcome | Gatilho | Efeito na rodada |
//! |---------|---------|------------------|
//! | [`ExactMatch`](Outcome::ExactMatch) | palpite literal igual ao nome (caminho rápido, sem modelo) | +1 palpite, encerra |
//! | [`ConfirmedCorrect`](Outcome::ConfirmedCorrect) | resposta começa com "Correct" | +1 palpite, encerra |
//! | [`ConfirmedIncorrect`](Outcome::ConfirmedIncorrect) | resposta começa com "Incorrect" | +1 palpite, continua |
//! | [`HintDelivered`](Outcome::HintDelivered) | resposta contém "hint:" | +1 dica, continua |
//! | [`Unclassified`](Outcome::Unclassified) | nenhum marcador | nada muda, continua |
//!
//! ## Ordem de Prioridade
//!
//! Os marcadores são verificados em ordem fixa — **Correct, Incorrect,
//! Hint** — e o primeiro que casar vence. Uma resposta que começa com
//! "Correct!" e ainda contém "Hint:" é `ConfirmedCorrect`: o prefixo
//! ganha do substring.
//!
//! ## Heurística Assumida
//!
//! Isto é best-effort sobre texto livre de um modelo: se o modelo
//! ignorar as instruções de marcador, a classificação erra. Por isso
//! `Unclassified` existe como default seguro e **não-terminal** — a
//! resposta ainda é mostrada ao jogador, só não mexe em contador algum.
//! Classificar nunca é um erro.

use unicode_normalization::UnicodeNormalization;

/// Desfecho de um turno de diálogo, do ponto de vista da rodada.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Palpite literal bateu com o nome — resolvido sem chamar o modelo.
    ExactMatch,
    /// O modelo confirmou o palpite como correto.
    ConfirmedCorrect,
    /// O modelo rejeitou o palpite como incorreto.
    ConfirmedIncorrect,
    /// O modelo entregou uma dica.
    HintDelivered,
    /// Nenhum marcador reconhecido — default seguro, rodada segue.
    Unclassified,
}

impl Outcome {
    /// `true` para os desfechos que encerram a rodada.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::ExactMatch | Outcome::ConfirmedCorrect)
    }
}

/// Normaliza um nome para comparação: trim, NFC e lowercase.
///
/// A normalização NFC importa para nomes acentuados ("Flabébé") que
/// podem chegar do formulário web em forma decomposta.
fn normalize_name(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_lowercase()
}

/// Caminho rápido do palpite literal: o texto do jogador é exatamente o
/// nome da entidade? Case-insensitive, NFC dos dois lados.
pub fn matches_entity_name(guess: &str, name: &str) -> bool {
    normalize_name(guess) == normalize_name(name)
}

/// Classifica uma resposta do assistente pelos marcadores fixos.
///
/// Verificação em ordem de prioridade sobre o texto trimado e em
/// lowercase: prefixo "correct", prefixo "incorrect", substring "hint:"
/// (em qualquer posição). Sem match → [`Outcome::Unclassified`].
pub fn classify_reply(reply: &str) -> Outcome {
    let text = reply.trim().to_lowercase();

    if text.starts_with("correct") {
        Outcome::ConfirmedCorrect
    } else if text.starts_with("incorrect") {
        Outcome::ConfirmedIncorrect
    } else if text.contains("hint:") {
        Outcome::HintDelivered
    } else {
        Outcome::Unclassified
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─── matches_entity_name ───────────────────────────────────

    #[test]
    fn exact_match_ignores_case() {
        assert!(matches_entity_name("pikachu", "Pikachu"));
        assert!(matches_entity_name("PIKACHU", "Pikachu"));
    }

    #[test]
    fn exact_match_trims_whitespace() {
        assert!(matches_entity_name("  pikachu  ", "Pikachu"));
    }

    #[test]
    fn exact_match_requires_the_whole_name() {
        assert!(!matches_entity_name("pika", "Pikachu"));
        assert!(!matches_entity_name("is it pikachu?", "Pikachu"));
    }

    #[test]
    fn exact_match_normalizes_composed_and_decomposed_accents() {
        // "é" precomposto (U+00E9) vs "e" + combining acute (U+0301)
        assert!(matches_entity_name("flabe\u{0301}be\u{0301}", "Flab\u{00e9}b\u{00e9}"));
    }

    // ─── classify_reply ────────────────────────────────────────

    #[test]
    fn correct_prefix_confirms() {
        assert_eq!(
            classify_reply("Correct! It's Pikachu!"),
            Outcome::ConfirmedCorrect
        );
        assert_eq!(classify_reply("  correct, well done"), Outcome::ConfirmedCorrect);
    }

    #[test]
    fn incorrect_prefix_rejects() {
        assert_eq!(
            classify_reply("Incorrect! Try again."),
            Outcome::ConfirmedIncorrect
        );
    }

    #[test]
    fn hint_marker_anywhere_counts_as_hint() {
        assert_eq!(classify_reply("Hint: it is yellow"), Outcome::HintDelivered);
        assert_eq!(
            classify_reply("Here you go. Hint: it evolves once."),
            Outcome::HintDelivered
        );
    }

    #[test]
    fn priority_correct_beats_hint_substring() {
        assert_eq!(
            classify_reply("Correct! Hint: you did not even need this."),
            Outcome::ConfirmedCorrect
        );
    }

    #[test]
    fn priority_incorrect_beats_hint_substring() {
        assert_eq!(
            classify_reply("Incorrect! Hint: think smaller."),
            Outcome::ConfirmedIncorrect
        );
    }

    #[test]
    fn free_form_reply_is_unclassified_not_an_error() {
        assert_eq!(
            classify_reply("That is an interesting question!"),
            Outcome::Unclassified
        );
        assert_eq!(classify_reply(""), Outcome::Unclassified);
    }

    #[test]
    fn incorrect_is_not_mistaken_for_correct() {
        // "incorrect" não começa com "correct" — a ordem de prefixos não engana.
        assert_eq!(classify_reply("incorrect"), Outcome::ConfirmedIncorrect);
    }
}
