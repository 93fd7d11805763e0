//! # Catálogo — O Dataset de Referência dos Pokémon
//!
//! O [`Catalog`] é a coleção somente-leitura de [`Entity`]s sorteáveis,
//! carregada uma vez no startup a partir de `data/pokemon.json`. Expõe
//! exatamente duas consultas:
//!
//! - [`sample()`](Catalog::sample) — um Pokémon uniforme ao acaso
//! - [`lookup_by_name()`](Catalog::lookup_by_name) — busca exata
//!   case-insensitive pelo nome
//!
//! Catálogo vazio é **precondição fatal**: [`load()`](Catalog::load)
//! falha no startup e o processo não sobe. Assim `sample()` nunca tem
//! de lidar com a coleção vazia no meio do jogo.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rand::Rng;

use crate::classifier;
use crate::core::Entity;

/// Caminho do dataset de Pokémon (relativo à raiz do projeto).
pub const CATALOG_PATH: &str = "data/pokemon.json";

/// Coleção imutável de Pokémon sorteáveis.
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// Carrega o catálogo de um arquivo JSON.
    ///
    /// # Erros
    ///
    /// Retorna erro se o arquivo não puder ser lido, não for JSON
    /// válido, ou descrever um catálogo vazio.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Falha ao ler {}", path.display()))?;
        let entities: Vec<Entity> = serde_json::from_str(&json)
            .with_context(|| format!("Falha ao desserializar {}", path.display()))?;
        Self::from_entities(entities)
    }

    /// Monta o catálogo a partir de entidades já em memória.
    ///
    /// # Erros
    ///
    /// Retorna erro se a coleção for vazia — jogo sem Pokémon não existe.
    pub fn from_entities(entities: Vec<Entity>) -> Result<Self> {
        if entities.is_empty() {
            bail!("catálogo vazio: nenhum Pokémon para sortear");
        }
        Ok(Self { entities })
    }

    /// Sorteia um Pokémon uniformemente ao acaso.
    ///
    /// Nunca falha: `from_entities` garantiu coleção não-vazia.
    pub fn sample(&self) -> &Entity {
        let idx = rand::thread_rng().gen_range(0..self.entities.len());
        &self.entities[idx]
    }

    /// Busca exata por nome, case-insensitive e normalizada (NFC).
    pub fn lookup_by_name(&self, name: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| classifier::matches_entity_name(name, &e.name))
    }

    /// Número de Pokémon no catálogo.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Sempre `false` para um catálogo construído — mantido por simetria.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> Entity {
        Entity {
            name: name.to_string(),
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
    fn empty_catalog_is_a_fatal_load_error() {
        assert!(Catalog::from_entities(Vec::new()).is_err());
    }

    #[test]
    fn sample_returns_an_entity_from_the_set() {
        let catalog =
            Catalog::from_entities(vec![entity("Pikachu"), entity("Raichu")]).expect("catalog");
        let drawn = catalog.sample();
        assert!(drawn.name == "Pikachu" || drawn.name == "Raichu");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::from_entities(vec![entity("Pikachu")]).expect("catalog");
        assert!(catalog.lookup_by_name("pikachu").is_some());
        assert!(catalog.lookup_by_name("PIKACHU").is_some());
        assert!(catalog.lookup_by_name("Raichu").is_none());
    }

    #[test]
    fn lookup_handles_accented_names() {
        let catalog = Catalog::from_entities(vec![entity("Flabébé")]).expect("catalog");
        assert!(catalog.lookup_by_name("flabébé").is_some());
    }
}
