// Field generators for categories without a knowledge base record
//
// Each field is generated independently through the same tiered lookup:
//   (a) exact key in the field's table
//   (b) priority lists (flowers, fruits, snakes): the category mentions a
//       specific name that has a table entry
//   (c) longest-key-first substring match across the field's table
//   (d) domain bucket template (flowers/trees/fruits/insects/birds/animals)
//   (e) generic template
//
// Substring matches in (b) and (c) must sit on word boundaries (a trailing
// plural "s" is allowed), so "boat" never picks up "boa".

use super::classify::{contains_phrase, is_harmful_object, Domain};
use super::tables;
use std::cmp::Reverse;

type Table = &'static [(&'static str, &'static str)];

/// Template set for one narrative field
struct FieldTemplates {
    table: Table,
    bucket: fn(Domain) -> Option<&'static str>,
    generic: Option<&'static str>,
}

const EMOJI: FieldTemplates = FieldTemplates {
    table: tables::EMOJIS,
    bucket: |domain| {
        Some(match domain {
            Domain::Flowers => "🌸",
            Domain::Trees => "🌳",
            Domain::Fruits => "🍎",
            Domain::Insects => "🐛",
            Domain::Birds => "🐦",
            Domain::Animals => "🐾",
        })
    },
    generic: Some("🔍"),
};

const INTRODUCTION: FieldTemplates = FieldTemplates {
    table: tables::INTRODUCTIONS,
    bucket: |domain| {
        Some(match domain {
            Domain::Flowers => "I am a {name}, a beautiful flower.",
            Domain::Trees => "I am a {name}, a plant that gives shelter and clean air.",
            Domain::Fruits => "I am a {name}, a fruit full of goodness and seeds.",
            Domain::Insects => "I am a {name}, a small but mighty insect.",
            Domain::Birds => "I am a {name}, a bird that shares the sky with you.",
            Domain::Animals => "I am a {name}, a living creature of this planet.",
        })
    },
    generic: Some("I am a {name}."),
};

const MESSAGE: FieldTemplates = FieldTemplates {
    table: tables::MESSAGES,
    bucket: |domain| {
        Some(match domain {
            Domain::Flowers => "Flowers like me feed bees, butterflies, and birds with nectar and pollen.",
            Domain::Trees => "Plants like me clean the air, hold the soil, and give animals a home.",
            Domain::Fruits => "Fruits like me give you vitamins and help plants spread their seeds.",
            Domain::Insects => "Insects like me pollinate plants, recycle waste, and feed many animals.",
            Domain::Birds => "Birds like me spread seeds, eat pests, and fill the world with song.",
            Domain::Animals => "Animals like me keep ecosystems balanced and full of life.",
        })
    },
    generic: Some("{Name} represents the incredible diversity of life and things on our planet."),
};

const EXPLANATION: FieldTemplates = FieldTemplates {
    table: tables::EXPLANATIONS,
    bucket: |domain| {
        Some(match domain {
            Domain::Flowers => "Most flowering plants need animal pollinators to make seeds.",
            Domain::Trees => "Plants make their own food from sunlight through photosynthesis.",
            Domain::Fruits => "A fruit is the part of a plant that protects and carries its seeds.",
            Domain::Insects => "Insects make up more than half of all known animal species.",
            Domain::Birds => "Birds are the living descendants of dinosaurs.",
            Domain::Animals => "Every animal plays a part in the food web that keeps nature working.",
        })
    },
    generic: Some("Learning about {name} helps us see how everything around us connects to nature."),
};

const CONSEQUENCES: FieldTemplates = FieldTemplates {
    table: tables::CONSEQUENCES,
    bucket: |domain| match domain {
        Domain::Flowers => Some("Without flowers like me, pollinators go hungry and fewer seeds and fruits form."),
        Domain::Trees => Some("Without plants like me, soil erodes, air gets dirtier, and animals lose their homes."),
        Domain::Fruits => Some("Without fruit plants, people and animals lose an important source of food."),
        Domain::Insects => Some("Without insects, flowers go unpollinated and birds and fish lose their food."),
        Domain::Birds | Domain::Animals => None,
    },
    generic: None,
};

const PLEA: FieldTemplates = FieldTemplates {
    table: tables::PLEAS,
    bucket: |domain| {
        Some(match domain {
            Domain::Flowers => "Please save me! Plant native flowers and protect pollinators.",
            Domain::Trees => "Please save me! Plant trees and protect green spaces.",
            Domain::Fruits => "Please save me! Waste less food and protect the pollinators that make fruit.",
            Domain::Insects => "Please save me! Avoid pesticides and leave wild corners for insects.",
            Domain::Birds => "Please save me! Protect nesting places and keep cats indoors.",
            Domain::Animals => "Please save me! Protect wild places where animals live.",
        })
    },
    generic: Some("Please save me! Learn about {name} and care for the world we share."),
};

const HARMFUL_EMOJI: &str = "⚠️";
const HARMFUL_PLEA: &str =
    "Please avoid me! Dispose of {name} responsibly and choose cleaner alternatives.";

pub fn generate_emoji(category: &str) -> String {
    if let Some(found) = table_lookup(EMOJI.table, category) {
        return found.to_string();
    }
    if is_harmful_object(category) {
        return HARMFUL_EMOJI.to_string();
    }
    generate(&EMOJI, category).unwrap_or_default()
}

pub fn generate_introduction(category: &str) -> String {
    generate(&INTRODUCTION, category).unwrap_or_default()
}

pub fn generate_message(category: &str) -> String {
    generate(&MESSAGE, category).unwrap_or_default()
}

pub fn generate_explanation(category: &str) -> String {
    generate(&EXPLANATION, category).unwrap_or_default()
}

pub fn generate_consequences(category: &str) -> Option<String> {
    generate(&CONSEQUENCES, category)
}

/// Call to action; harmful categories get "avoid" phrasing instead of "save"
pub fn generate_plea(category: &str) -> String {
    if let Some(found) = table_lookup(PLEA.table, category) {
        return found.to_string();
    }
    if is_harmful_object(category) {
        return fill(HARMFUL_PLEA, category);
    }
    generate(&PLEA, category).unwrap_or_default()
}

/// Tiers (a)-(e) for one field
fn generate(templates: &FieldTemplates, category: &str) -> Option<String> {
    if let Some(found) = table_lookup(templates.table, category) {
        return Some(found.to_string());
    }
    if let Some(template) = Domain::of(category).and_then(templates.bucket) {
        return Some(fill(template, category));
    }
    templates.generic.map(|template| fill(template, category))
}

/// Tiers (a)-(c)
fn table_lookup(table: Table, category: &str) -> Option<&'static str> {
    let category = category.trim().to_lowercase();
    let exact = |key: &str| table.iter().find(|(k, _)| *k == key).map(|(_, text)| *text);

    // (a)
    if let Some(text) = exact(category.as_str()) {
        return Some(text);
    }

    // (b)
    for list in [tables::FLOWER_PRIORITY, tables::FRUIT_PRIORITY, tables::SNAKE_PRIORITY] {
        for name in list.iter().copied() {
            if contains_phrase(&category, name) {
                if let Some(text) = exact(name) {
                    return Some(text);
                }
            }
        }
    }

    // (c)
    let mut by_length: Vec<(&str, &'static str)> = table.to_vec();
    by_length.sort_by_key(|(key, _)| Reverse(key.len()));
    by_length
        .into_iter()
        .find(|(key, _)| contains_phrase(&category, key))
        .map(|(_, text)| text)
}

/// Human-readable form of a category key ("corn-snake" -> "corn snake")
pub fn display_name(category: &str) -> String {
    category.trim().replace('-', " ")
}

fn fill(template: &str, category: &str) -> String {
    let name = display_name(category);
    let capitalized = capitalize(&name);
    template.replace("{Name}", &capitalized).replace("{name}", &name)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_entry() {
        assert_eq!(
            generate_introduction("cottonmouth"),
            "I am a cottonmouth, a water snake of southern swamps."
        );
        assert_eq!(generate_emoji("giraffe"), "🦒");
    }

    #[test]
    fn test_priority_list_beats_generic_word() {
        // "cherry blossom tree" contains both "cherry" and "cherry blossom"
        assert_eq!(
            generate_introduction("cherry blossom tree"),
            "I am a cherry blossom, the pink herald of spring."
        );
    }

    #[test]
    fn test_longest_substring_match() {
        assert_eq!(
            generate_explanation("baby kangaroo"),
            "Baby kangaroos, called joeys, are the size of a jellybean at birth."
        );
    }

    #[test]
    fn test_domain_bucket() {
        assert_eq!(generate_introduction("peony"), "I am a peony, a beautiful flower.");
        assert!(generate_consequences("peony").is_some());
        assert!(generate_consequences("heron").is_none());
    }

    #[test]
    fn test_generic_template() {
        assert_eq!(generate_introduction("xyz123"), "I am a xyz123.");
        assert!(generate_message("xyz123").starts_with("Xyz123 represents the incredible diversity of life"));
        assert_eq!(generate_consequences("xyz123"), None);
    }

    #[test]
    fn test_harmful_plea_flips_phrasing() {
        let plea = generate_plea("styrofoam plastic");
        assert!(plea.starts_with("Please avoid me!"), "{}", plea);
        assert_eq!(generate_emoji("styrofoam plastic"), "⚠️");

        let plea = generate_plea("peony");
        assert!(plea.starts_with("Please save me!"));
    }

    #[test]
    fn test_substring_tiers_respect_word_boundaries() {
        // "boat" must not be read as "boa"
        assert_eq!(generate_introduction("boat"), "I am a boat.");
        assert_eq!(generate_emoji("camellia"), "🔍");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("corn-snake"), "corn snake");
        assert_eq!(generate_introduction("corn-snake"), "I am a corn snake, gentle and brightly patterned.");
    }
}
