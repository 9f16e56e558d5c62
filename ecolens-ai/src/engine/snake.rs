// Snake-family sub-resolution
//
// Entered from the override cascade once a snake/reptile term is present. A
// named species term wins outright; otherwise a configurable fallback strategy
// picks a species.

use super::normalizer::TermSet;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Named species terms and the category each resolves to, checked in order
pub const SNAKE_SPECIES: &[(&str, &str)] = &[
    ("red-bellied", "red-bellied-black-snake"),
    ("python", "python"),
    ("cobra", "cobra"),
    ("viper", "viper"),
    ("rattlesnake", "rattlesnake"),
    ("boa", "boa"),
    ("anaconda", "anaconda"),
    ("mamba", "mamba"),
    ("adder", "adder"),
    ("copperhead", "copperhead"),
    ("cottonmouth", "cottonmouth"),
    ("kingsnake", "kingsnake"),
    ("garter", "garter-snake"),
    ("corn", "corn-snake"),
    ("milk", "milk-snake"),
    ("hognose", "hognose-snake"),
];

/// Environmental context words and the species they suggest, checked in order
const CONTEXT_HINTS: &[(&[&str], &str)] = &[
    (&["water", "swamp", "pond"], "cottonmouth"),
    (&["sand", "desert", "dry"], "rattlesnake"),
    (&["grass", "garden", "yard"], "garter-snake"),
    (&["large", "thick", "heavy"], "python"),
    (&["colorful", "bright", "pattern"], "corn-snake"),
];

const DEFAULT_SPECIES: &str = "python";

/// Strategy used when no species term is present
///
/// `ContextHeuristic` is the shipped default. It reads environmental context
/// words from the term set; `RandomSpecies` draws uniformly from
/// [`SNAKE_SPECIES`] instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnakeFallback {
    #[default]
    ContextHeuristic,
    RandomSpecies,
}

/// Resolve a snake-family term set to one species category
pub fn resolve_snake(terms: &TermSet, fallback: SnakeFallback) -> &'static str {
    if let Some(species) = named_species(terms) {
        tracing::debug!("Snake species term found: {}", species);
        return species;
    }

    let species = match fallback {
        SnakeFallback::ContextHeuristic => context_species(terms),
        SnakeFallback::RandomSpecies => random_species(&mut rand::thread_rng()),
    };
    tracing::debug!("No species term, {:?} fallback chose {}", fallback, species);
    species
}

/// First species (table order) whose term is a member of the set
pub fn named_species(terms: &TermSet) -> Option<&'static str> {
    SNAKE_SPECIES
        .iter()
        .find(|(term, _)| terms.contains(term))
        .map(|(_, category)| *category)
}

fn context_species(terms: &TermSet) -> &'static str {
    CONTEXT_HINTS
        .iter()
        .find(|(words, _)| terms.contains_any(words))
        .map(|(_, species)| *species)
        .unwrap_or(DEFAULT_SPECIES)
}

fn random_species<R: rand::Rng + ?Sized>(rng: &mut R) -> &'static str {
    SNAKE_SPECIES
        .choose(rng)
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_SPECIES)
}
