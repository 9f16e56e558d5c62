// Override cascade (resolver tier 4)
//
// Concept: A declarative, ordered list of "trigger present AND current best in
// guard set => replace" records, processed by one generic loop that applies the
// first matching record and stops. Runs on every tier 1-3 result, because the
// earlier tiers happily settle on a generic category ("tree", "river") when a
// more specific or more urgent one is also in view.
//
// Order (first match wins):
// 1. pollution-over-nature
// 2. snake-over-misread
// 3. ecosystem-over-object
// 4. specific-over-generic, per domain

use super::normalizer::TermSet;
use super::snake::{self, SnakeFallback, SNAKE_SPECIES};
use serde::Serialize;

/// Override family, for logging and the resolution trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverrideGroup {
    PollutionOverNature,
    SnakeFamily,
    EcosystemOverObject,
    SpecificOverGeneric,
}

/// What a triggered override produces
#[derive(Debug, Clone, Copy)]
pub enum OverrideAction {
    /// Any trigger term present → fixed category
    Replace {
        triggers: &'static [&'static str],
        category: &'static str,
    },
    /// First `(term, category)` pair whose term is present
    MostSpecific(&'static [(&'static str, &'static str)]),
    /// Any trigger present → pollution-family sub-resolution
    Pollution { triggers: &'static [&'static str] },
    /// Any trigger present → snake species sub-resolution
    SnakeFamily { triggers: &'static [&'static str] },
}

/// One named priority check
#[derive(Debug, Clone, Copy)]
pub struct OverrideRule {
    pub name: &'static str,
    pub group: OverrideGroup,
    /// Categories this rule is allowed to replace
    pub guard: &'static [&'static str],
    pub action: OverrideAction,
}

/// Result of a triggered override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedOverride {
    pub rule: &'static str,
    pub group: OverrideGroup,
    pub category: &'static str,
}

const POLLUTION_TRIGGERS: &[&str] = &[
    "plastic", "trash", "garbage", "litter", "rubbish", "waste", "debris", "pollution", "smog",
    "cigarette", "oil", "landfill",
];

/// Pollution-family priority: plastic > cigarette > pollution/oil > trash
const POLLUTION_PRIORITY: &[(&str, &str)] = &[
    ("plastic", "plastic"),
    ("cigarette", "cigarette"),
    ("pollution", "pollution"),
    ("smog", "pollution"),
    ("oil", "oil-spill"),
];

const POLLUTION_DEFAULT: &str = "trash";

const TREE_SPECIES: &[(&str, &str)] = &[
    ("oak", "oak"),
    ("maple", "maple"),
    ("pine", "pine"),
    ("palm", "palm"),
    ("birch", "birch"),
    ("willow", "willow"),
    ("eucalyptus", "eucalyptus"),
    ("baobab", "baobab"),
    ("bamboo", "bamboo"),
    ("cactus", "cactus"),
];

const FLOWER_SPECIES: &[(&str, &str)] = &[
    ("sunflower", "sunflower"),
    ("rose", "rose"),
    ("tulip", "tulip"),
    ("lotus", "lotus"),
    ("orchid", "orchid"),
    ("daisy", "daisy"),
    ("lily", "lily"),
    ("lavender", "lavender"),
    ("hibiscus", "hibiscus"),
    ("dandelion", "dandelion"),
];

const NAMED_FRUITS: &[(&str, &str)] = &[
    ("apple", "apple"),
    ("banana", "banana"),
    ("mango", "mango"),
    ("orange", "orange"),
    ("strawberry", "strawberry"),
    ("grape", "grape"),
];

const NAMED_RIVERS: &[(&str, &str)] = &[
    ("nile", "nile"),
    ("ganges", "ganges"),
    ("mississippi", "mississippi"),
    ("amazon", "amazon-river"),
];

const BIRD_SPECIES: &[(&str, &str)] = &[
    ("eagle", "eagle"),
    ("owl", "owl"),
    ("parrot", "parrot"),
    ("sparrow", "sparrow"),
    ("peacock", "peacock"),
    ("penguin", "penguin"),
    ("hummingbird", "hummingbird"),
];

const INSECT_SPECIES: &[(&str, &str)] = &[
    ("bee", "bee"),
    ("butterfly", "butterfly"),
    ("ant", "ant"),
    ("ladybug", "ladybug"),
    ("dragonfly", "dragonfly"),
    ("spider", "spider"),
    ("mosquito", "mosquito"),
    ("cockroach", "cockroach"),
];

const NAMED_ANIMALS: &[(&str, &str)] = &[
    ("dog", "dog"),
    ("cat", "cat"),
    ("bear", "bear"),
    ("elephant", "elephant"),
    ("tiger", "tiger"),
    ("lion", "lion"),
    ("monkey", "monkey"),
    ("deer", "deer"),
    ("horse", "horse"),
    ("cow", "cow"),
    ("fox", "fox"),
    ("wolf", "wolf"),
    ("rabbit", "rabbit"),
    ("squirrel", "squirrel"),
    ("frog", "frog"),
    ("fish", "fish"),
    ("turtle", "turtle"),
    ("whale", "whale"),
    ("dolphin", "dolphin"),
    ("snake", "snake"),
    ("lizard", "lizard"),
    ("bird", "bird"),
];

pub static OVERRIDE_RULES: &[OverrideRule] = &[
    // 1. Pollution beats nature
    OverrideRule {
        name: "pollution-over-nature",
        group: OverrideGroup::PollutionOverNature,
        guard: &["river", "ocean", "tree", "forest", "mountain", "earth"],
        action: OverrideAction::Pollution {
            triggers: POLLUTION_TRIGGERS,
        },
    },
    // 2. Snake misread as something bulky
    OverrideRule {
        name: "snake-over-misread",
        group: OverrideGroup::SnakeFamily,
        guard: &["bear", "earth", "tree"],
        action: OverrideAction::SnakeFamily {
            triggers: &["snake", "reptile", "serpent"],
        },
    },
    // 3. Ecosystem beats object
    OverrideRule {
        name: "rainforest-over-vegetation",
        group: OverrideGroup::EcosystemOverObject,
        guard: &["tree", "forest", "plant", "leaf"],
        action: OverrideAction::Replace {
            triggers: &["rainforest", "jungle"],
            category: "rainforest",
        },
    },
    OverrideRule {
        name: "reef-over-water",
        group: OverrideGroup::EcosystemOverObject,
        guard: &["ocean", "water", "fish"],
        action: OverrideAction::Replace {
            triggers: &["coral", "reef"],
            category: "coral-reef",
        },
    },
    OverrideRule {
        name: "wetland-over-water",
        group: OverrideGroup::EcosystemOverObject,
        guard: &["water", "river", "lake", "grass"],
        action: OverrideAction::Replace {
            triggers: &["wetland", "swamp", "marsh", "bog"],
            category: "wetland",
        },
    },
    // 4. Specific beats generic
    OverrideRule {
        name: "tree-species",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["tree", "forest", "plant", "leaf"],
        action: OverrideAction::MostSpecific(TREE_SPECIES),
    },
    OverrideRule {
        name: "flower-species",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["flower", "plant"],
        action: OverrideAction::MostSpecific(FLOWER_SPECIES),
    },
    OverrideRule {
        name: "named-fruit",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["fruit"],
        action: OverrideAction::MostSpecific(NAMED_FRUITS),
    },
    OverrideRule {
        name: "named-river",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["river", "water"],
        action: OverrideAction::MostSpecific(NAMED_RIVERS),
    },
    OverrideRule {
        name: "snake-species",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["snake"],
        action: OverrideAction::MostSpecific(SNAKE_SPECIES),
    },
    OverrideRule {
        name: "bird-species",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["bird", "animal"],
        action: OverrideAction::MostSpecific(BIRD_SPECIES),
    },
    OverrideRule {
        name: "insect-species",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["insect", "animal"],
        action: OverrideAction::MostSpecific(INSECT_SPECIES),
    },
    OverrideRule {
        name: "named-animal",
        group: OverrideGroup::SpecificOverGeneric,
        guard: &["animal"],
        action: OverrideAction::MostSpecific(NAMED_ANIMALS),
    },
];

impl OverrideRule {
    /// Category this rule produces for `current`, if it triggers
    pub fn apply(
        &self,
        current: &str,
        terms: &TermSet,
        snake_fallback: SnakeFallback,
    ) -> Option<&'static str> {
        if !self.guard.contains(&current) {
            return None;
        }

        match self.action {
            OverrideAction::Replace { triggers, category } => {
                terms.contains_any(triggers).then_some(category)
            }
            OverrideAction::MostSpecific(pairs) => first_present(pairs, terms),
            OverrideAction::Pollution { triggers } => terms
                .contains_any(triggers)
                .then(|| first_present(POLLUTION_PRIORITY, terms).unwrap_or(POLLUTION_DEFAULT)),
            OverrideAction::SnakeFamily { triggers } => terms
                .contains_any(triggers)
                .then(|| snake::resolve_snake(terms, snake_fallback)),
        }
    }

    /// Every category this rule can produce
    pub fn targets(&self) -> Vec<&'static str> {
        match self.action {
            OverrideAction::Replace { category, .. } => vec![category],
            OverrideAction::MostSpecific(pairs) => pairs.iter().map(|(_, c)| *c).collect(),
            OverrideAction::Pollution { .. } => POLLUTION_PRIORITY
                .iter()
                .map(|(_, c)| *c)
                .chain(std::iter::once(POLLUTION_DEFAULT))
                .collect(),
            OverrideAction::SnakeFamily { .. } => SNAKE_SPECIES.iter().map(|(_, c)| *c).collect(),
        }
    }
}

fn first_present(pairs: &[(&'static str, &'static str)], terms: &TermSet) -> Option<&'static str> {
    pairs
        .iter()
        .find(|(term, _)| terms.contains(term))
        .map(|(_, category)| *category)
}

/// Apply the first triggering override in `rules` to `current`
pub fn apply_overrides(
    rules: &[OverrideRule],
    current: &str,
    terms: &TermSet,
    snake_fallback: SnakeFallback,
) -> Option<AppliedOverride> {
    for rule in rules {
        if let Some(category) = rule.apply(current, terms, snake_fallback) {
            tracing::debug!(
                "Override '{}' replaced '{}' with '{}'",
                rule.name,
                current,
                category
            );
            return Some(AppliedOverride {
                rule: rule.name,
                group: rule.group,
                category,
            });
        }
    }
    None
}
