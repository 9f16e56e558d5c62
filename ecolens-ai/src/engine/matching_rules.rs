// Scored rule-matching table (resolver tier 3)
//
// Each rule lists synonyms/variants for one catalogued category. A rule's score
// is the number of terms in the TermSet that match any of its synonyms; each
// term counts at most once per rule. Table order only matters for ties: the
// earlier rule keeps the lead because replacement requires a strictly higher
// score.

use super::normalizer::TermSet;

/// Substring containment only counts when the shorter string is at least this long
const MIN_SUBSTRING_CHARS: usize = 4;

/// One row of the matching table
#[derive(Debug, Clone, Copy)]
pub struct MatchingRule {
    pub terms: &'static [&'static str],
    pub category: &'static str,
}

const fn rule(category: &'static str, terms: &'static [&'static str]) -> MatchingRule {
    MatchingRule { terms, category }
}

pub static MATCHING_RULES: &[MatchingRule] = &[
    // Plants
    rule("tree", &["tree", "trees", "trunk", "bark", "branch", "timber", "woody plant"]),
    rule("flower", &["flower", "flowers", "blossom", "bloom", "petal", "floral", "bouquet"]),
    rule("plant", &["plant", "plants", "shrub", "bush", "vegetation", "herb", "houseplant", "fern"]),
    rule("leaf", &["leaf", "leaves", "foliage", "frond"]),
    rule("grass", &["grass", "lawn", "meadow", "pasture", "prairie", "field"]),
    rule("fruit", &["fruit", "fruits", "berry", "berries", "produce"]),
    rule("mushroom", &["mushroom", "fungus", "fungi", "toadstool"]),
    // Landscapes
    rule("forest", &["forest", "woodland", "woods", "grove", "timberland"]),
    rule("rainforest", &["rainforest", "jungle", "tropical forest"]),
    rule("river", &["river", "stream", "creek", "brook", "riverbank", "waterway"]),
    rule("lake", &["lake", "pond", "reservoir", "lagoon"]),
    rule("ocean", &["ocean", "sea", "seascape", "marine", "seawater", "underwater"]),
    rule("water", &["water", "waterfall", "droplet", "liquid"]),
    rule("wetland", &["wetland", "swamp", "marsh", "bog"]),
    rule("coral-reef", &["coral", "reef", "coral reef"]),
    rule("mountain", &["mountain", "mountains", "peak", "summit", "hill", "alpine", "volcano"]),
    rule("earth", &["earth", "planet", "globe", "landscape", "environment"]),
    rule("soil", &["soil", "dirt", "mud", "ground", "compost"]),
    rule("rock", &["rock", "stone", "boulder", "pebble", "granite", "cliff"]),
    rule("desert", &["desert", "dune", "sand dune", "arid", "sahara"]),
    rule("beach", &["beach", "shore", "coast", "seashore", "sand"]),
    // Animals
    rule("animal", &["animal", "mammal", "wildlife", "fauna", "creature", "pet"]),
    rule("dog", &["dog", "puppy", "canine", "hound", "retriever", "terrier", "shepherd"]),
    rule("cat", &["cat", "kitten", "feline", "kitty", "tabby"]),
    rule("bear", &["bear", "grizzly", "panda"]),
    rule("elephant", &["elephant", "tusk", "pachyderm"]),
    rule("tiger", &["tiger", "bengal"]),
    rule("lion", &["lion", "lions", "lioness"]),
    rule("monkey", &["monkey", "primate", "ape", "macaque", "chimpanzee", "gorilla", "baboon"]),
    rule("deer", &["deer", "fawn", "stag", "elk", "moose", "antler"]),
    rule("horse", &["horse", "pony", "stallion", "mare", "foal"]),
    rule("cow", &["cow", "cattle", "calf", "bull", "livestock"]),
    rule("fox", &["fox", "vixen"]),
    rule("wolf", &["wolf", "wolves"]),
    rule("rabbit", &["rabbit", "bunny", "hare"]),
    rule("squirrel", &["squirrel", "chipmunk", "rodent"]),
    rule("frog", &["frog", "toad", "tadpole", "amphibian"]),
    rule("fish", &["fish", "salmon", "trout", "goldfish", "carp", "aquarium"]),
    rule("turtle", &["turtle", "tortoise", "terrapin"]),
    rule("whale", &["whale", "humpback", "orca"]),
    rule("dolphin", &["dolphin", "porpoise"]),
    rule("bird", &["bird", "birds", "avian", "feather", "beak", "songbird", "nest"]),
    rule("insect", &["insect", "bug", "beetle", "caterpillar", "larva"]),
    rule("bee", &["bee", "honeybee", "bumblebee", "beehive", "honeycomb"]),
    rule("butterfly", &["butterfly", "butterflies", "moth", "monarch"]),
    rule("spider", &["spider", "spiderweb", "cobweb", "arachnid", "tarantula"]),
    rule("snake", &["snake", "serpent", "reptile", "viper", "constrictor"]),
    rule("lizard", &["lizard", "gecko", "iguana", "chameleon"]),
    // Pollutants and pests
    rule("plastic", &["plastic", "bottle", "plastic bag", "packaging", "wrapper", "polythene"]),
    rule("trash", &["trash", "garbage", "litter", "rubbish", "waste", "debris", "landfill", "dumpster"]),
    rule("cigarette", &["cigarette", "tobacco", "ashtray", "cigar"]),
    rule("pollution", &["pollution", "smog", "smoke", "exhaust", "emission", "factory", "chimney"]),
    rule("oil-spill", &["oil spill", "oil slick", "petroleum", "crude"]),
    rule("mosquito", &["mosquito", "mosquitoes", "gnat"]),
    rule("cockroach", &["cockroach", "roach"]),
    // General objects
    rule("car", &["car", "vehicle", "automobile", "truck", "sedan", "traffic"]),
    rule("phone", &["phone", "smartphone", "mobile phone", "cellphone", "telephone"]),
    rule("laptop", &["laptop", "computer", "keyboard", "monitor", "notebook"]),
    rule("chair", &["chair", "furniture", "sofa", "stool", "bench"]),
    rule("book", &["book", "novel", "magazine", "textbook", "paper"]),
    rule("cup", &["cup", "mug", "teacup", "tumbler"]),
    rule("bicycle", &["bicycle", "bike", "cycling"]),
];

/// Whether a term matches one rule synonym
///
/// Exact equality, containment at a word boundary (either direction), or plain
/// substring containment when the shorter string has at least four characters.
pub fn term_matches(term: &str, rule_term: &str) -> bool {
    if term == rule_term {
        return true;
    }
    if contains_word(term, rule_term) || contains_word(rule_term, term) {
        return true;
    }
    let shorter = term.chars().count().min(rule_term.chars().count());
    shorter >= MIN_SUBSTRING_CHARS && (term.contains(rule_term) || rule_term.contains(term))
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.contains(&format!("{needle} ")) || haystack.contains(&format!(" {needle}"))
}

impl MatchingRule {
    /// Number of terms matching at least one synonym of this rule
    pub fn score(&self, terms: &TermSet) -> usize {
        terms
            .iter()
            .filter(|term| self.terms.iter().any(|rule_term| term_matches(term, rule_term)))
            .count()
    }
}

/// Highest-scoring rule's category; ties keep the earlier rule
pub fn best_match(rules: &[MatchingRule], terms: &TermSet) -> Option<(&'static str, usize)> {
    let mut best: Option<(&'static str, usize)> = None;
    for rule in rules {
        let score = rule.score(terms);
        if score > best.map_or(0, |(_, s)| s) {
            best = Some((rule.category, score));
        }
    }
    best
}
