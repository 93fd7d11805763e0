//! # Entity — O Registro Imutável do Catálogo
//!
//! Uma [`Entity`] é um Pokémon do catálogo de referência, com o conjunto
//! de atributos que o assistente usa para construir dicas. O registro é
//! **imutável**: nasce na desserialização de `data/pokemon.json` e nunca
//! é alterado durante o jogo — apenas clonado para dentro de um
//! [`Round`](super::Round) no sorteio.
//!
//! ## Campos
//!
//! | Campo | Tipo | Exemplo |
//! |-------|------|---------|
//! | `name` | String | "Bulbasaur" (chave única, matching case-insensitive) |
//! | `type1` / `type2` | String / Option | "Grass" / Some("Poison") |
//! | `classification` | String | "Seed Pokémon" |
//! | `height_m` / `weight_kg` | Option<f64> | dados ausentes no dataset viram `None` |
//! | `abilities` | Vec<String> | ["Overgrow", "Chlorophyll"] |
//! | `hp`..`speed` | u32 | base stats |
//! | `generation` | u32 | 1..=7 |
//! | `is_legendary` | bool | Mewtwo sim, Pikachu não |

use serde::{Deserialize, Serialize};

/// Um Pokémon do catálogo — registro somente-leitura.
///
/// O `name` é a chave de identificação: o caminho rápido de palpite exato
/// e o `lookup_by_name` do catálogo comparam contra ele de forma
/// case-insensitive (ver [`classifier::matches_entity_name`](crate::classifier::matches_entity_name)).
///
/// Os demais campos só aparecem em dois lugares: no system prompt do
/// assistente e no prompt do juiz (ver [`prompts`](crate::prompts)).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Entity {
    /// Nome do Pokémon — chave única do catálogo.
    pub name: String,

    /// Tipo primário (sempre presente).
    pub type1: String,

    /// Tipo secundário — muitos Pokémon têm um só tipo.
    #[serde(default)]
    pub type2: Option<String>,

    /// Classificação da Pokédex (ex: "Mouse Pokémon").
    pub classification: String,

    /// Altura em metros — `None` quando o dataset não traz o valor.
    #[serde(default)]
    pub height_m: Option<f64>,

    /// Peso em quilogramas — `None` quando o dataset não traz o valor.
    #[serde(default)]
    pub weight_kg: Option<f64>,

    /// Habilidades possíveis.
    pub abilities: Vec<String>,

    /// Base stat: HP.
    pub hp: u32,
    /// Base stat: Attack.
    pub attack: u32,
    /// Base stat: Defense.
    pub defense: u32,
    /// Base stat: Special Attack.
    pub sp_attack: u32,
    /// Base stat: Special Defense.
    pub sp_defense: u32,
    /// Base stat: Speed.
    pub speed: u32,

    /// Geração em que o Pokémon foi introduzido.
    pub generation: u32,

    /// Se o Pokémon é lendário.
    pub is_legendary: bool,
}

impl Entity {
    /// Tipos formatados em uma linha: `"Grass, Poison"` ou apenas `"Fire"`.
    pub fn type_line(&self) -> String {
        match &self.type2 {
            Some(t2) => format!("{}, {}", self.type1, t2),
            None => self.type1.clone(),
        }
    }

    /// Habilidades formatadas em uma linha separada por vírgulas.
    pub fn abilities_line(&self) -> String {
        self.abilities.join(", ")
    }

    /// Altura formatada para os prompts — "0.4 m" ou "unknown".
    pub fn height_line(&self) -> String {
        match self.height_m {
            Some(h) => format!("{h} m"),
            None => "unknown".to_string(),
        }
    }

    /// Peso formatado para os prompts — "6.0 kg" ou "unknown".
    pub fn weight_line(&self) -> String {
        match self.weight_kg {
            Some(w) => format!("{w} kg"),
            None => "unknown".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entity {
        Entity {
            name: "Bulbasaur".to_string(),
            type1: "Grass".to_string(),
            type2: Some("Poison".to_string()),
            classification: "Seed Pokémon".to_string(),
            height_m: Some(0.7),
            weight_kg: Some(6.9),
            abilities: vec!["Overgrow".to_string(), "Chlorophyll".to_string()],
            hp: 45,
            attack: 49,
            defense: 49,
            sp_attack: 65,
            sp_defense: 65,
            speed: 45,
            generation: 1,
            is_legendary: false,
        }
    }

    #[test]
    fn type_line_with_two_types() {
        assert_eq!(sample().type_line(), "Grass, Poison");
    }

    #[test]
    fn type_line_with_one_type() {
        let mut e = sample();
        e.type2 = None;
        assert_eq!(e.type_line(), "Grass");
    }

    #[test]
    fn missing_measurements_render_as_unknown() {
        let mut e = sample();
        e.height_m = None;
        e.weight_kg = None;
        assert_eq!(e.height_line(), "unknown");
        assert_eq!(e.weight_line(), "unknown");
    }
}
