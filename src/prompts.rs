//! # Prompts — Instruções Enviadas ao Modelo
//!
//! Dois builders de prompt, ambos funções puras de estado já conhecido:
//!
//! - [`system_prompt()`] — monta a persona do assistente de jogo com a
//!   ficha completa do Pokémon sorteado e as instruções de marcador
//!   ("Hint:", "Correct!", "Incorrect!") que o
//!   [`classifier`](crate::classifier) reconhece depois.
//! - [`judge_prompt()`] — monta o pedido de avaliação pós-rodada, com o
//!   transcript inteiro, os contadores e o formato de resposta
//!   `<nota>: <justificativa>` que o [`judge`](crate::judge) interpreta.
//!
//! Os prompts são em inglês — é o idioma em que o modelo segue melhor
//! instruções de formato.

use crate::core::{Entity, Turn};

/// Ficha de atributos compartilhada pelos dois prompts.
fn attribute_sheet(entity: &Entity) -> String {
    format!(
        "- Name: {name}\n\
         - Type(s): {types}\n\
         - Classification: {classification}\n\
         - Height: {height}\n\
         - Weight: {weight}\n\
         - Abilities: {abilities}\n\
         - Base Stats: {hp} HP, {attack} Attack, {defense} Defense, {sp_attack} Special Attack, {sp_defense} Special Defense, {speed} Speed\n\
         - Generation: {generation}\n\
         - Legendary: {legendary}",
        name = entity.name,
        types = entity.type_line(),
        classification = entity.classification,
        height = entity.height_line(),
        weight = entity.weight_line(),
        abilities = entity.abilities_line(),
        hp = entity.hp,
        attack = entity.attack,
        defense = entity.defense,
        sp_attack = entity.sp_attack,
        sp_defense = entity.sp_defense,
        speed = entity.speed,
        generation = entity.generation,
        legendary = if entity.is_legendary { "Yes" } else { "No" },
    )
}

/// Transcript formatado linha a linha para embutir no prompt do juiz.
fn transcript_sheet(transcript: &[Turn]) -> String {
    transcript
        .iter()
        .map(|turn| format!("{}: {}", turn.speaker.wire_role(), turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// System prompt do assistente de jogo para a rodada corrente.
///
/// Reconstruído a cada palpite — embute a ficha do Pokémon sorteado e
/// exige os marcadores de abertura que tornam a resposta classificável.
pub fn system_prompt(entity: &Entity) -> String {
    format!(
        "You are an intelligent and engaging assistant in a \"Who's that Pokémon?\" guessing game.\n\
         The player is trying to guess the name of a Pokémon based on your hints.\n\
         You know everything about the Pokémon and its attributes, but you should not directly reveal its name.\n\
         The user may ask you questions or hints, but only reveal one attribute at a time.\n\
         \n\
         Here are the attributes of the Pokémon:\n\
         {sheet}\n\
         \n\
         Start your responses with:\n\
         - \"Hint:\" when giving the user information about the Pokémon.\n\
         - \"Correct!\" if the user names the correct Pokémon.\n\
         - \"Incorrect!\" if the user names an incorrect Pokémon.",
        sheet = attribute_sheet(entity),
    )
}

/// Prompt do juiz para uma rodada recém-concluída.
///
/// Inclui as baselines de referência (4 palpites, 7 dicas) e o formato
/// de resposta de linha única que o parser do juiz espera.
pub fn judge_prompt(entity: &Entity, transcript: &[Turn], guesses: u32, hints: u32) -> String {
    format!(
        "You are an expert judge evaluating the quality of guesses in a \"Who's that Pokémon?\" guessing game.\n\
         The user has just finished the game by correctly guessing the Pokémon. Your task is to rate the quality of the guesses on a scale of 1 to 10.\n\
         \n\
         Consider the following factors:\n\
         - How many guesses the user made before guessing correctly (4 guesses is the average)\n\
         - How many hints were needed (7 hints is the average)\n\
         - The similarity between the user's guesses and the correct Pokémon (e.g., type, generation, abilities).\n\
         - A lower score indicates poor guess quality (many incorrect guesses, irrelevant guesses, lots of hints).\n\
         - A higher score indicates excellent guess quality (few guesses, few hints, and guesses closely related to the correct Pokémon).\n\
         \n\
         The correct Pokémon's attributes are:\n\
         {sheet}\n\
         \n\
         Here is the chat history:\n\
         {transcript}\n\
         \n\
         Here is the amount of guesses and hints:\n\
         - Guesses: {guesses}\n\
         - Hints: {hints}\n\
         \n\
         Respond in the following format, omitting the chevron icons: <rating from 1 to 10>: <brief explanation of your evaluation>",
        sheet = attribute_sheet(entity),
        transcript = transcript_sheet(transcript),
        guesses = guesses,
        hints = hints,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;

    fn entity() -> Entity {
        Entity {
            name: "Pikachu".to_string(),
            type1: "Electric".to_string(),
            type2: None,
            classification: "Mouse Pokémon".to_string(),
            height_m: Some(0.4),
            weight_kg: Some(6.0),
            abilities: vec!["Static".to_string(), "Lightning Rod".to_string()],
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
    fn system_prompt_carries_attributes_and_markers() {
        let prompt = system_prompt(&entity());
        assert!(prompt.contains("- Name: Pikachu"));
        assert!(prompt.contains("- Type(s): Electric"));
        assert!(prompt.contains("Static, Lightning Rod"));
        assert!(prompt.contains("\"Hint:\""));
        assert!(prompt.contains("\"Correct!\""));
        assert!(prompt.contains("\"Incorrect!\""));
    }

    #[test]
    fn judge_prompt_embeds_transcript_and_counters() {
        let transcript = vec![
            Turn::assistant("Please guess!"),
            Turn::user("is it electric?"),
            Turn::assistant("Hint: yes, it is an Electric type."),
        ];
        let prompt = judge_prompt(&entity(), &transcript, 3, 5);
        assert!(prompt.contains("user: is it electric?"));
        assert!(prompt.contains("assistant: Hint: yes, it is an Electric type."));
        assert!(prompt.contains("- Guesses: 3"));
        assert!(prompt.contains("- Hints: 5"));
        assert!(prompt.contains("4 guesses is the average"));
        assert!(prompt.contains("7 hints is the average"));
    }
}
