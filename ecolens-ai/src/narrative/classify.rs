// Category classification by membership lists
//
// Shared by the narrative composer (presentation mode, generator buckets,
// harmful-object phrasing) and the quiz generator (question buckets).
//
// Membership is word-bounded: a label "mentions" a list term when the whole
// label, or one of its words (split on whitespace, '-', '_' and ','), equals the
// term or its plural. "pineapple" therefore does not mention "apple", and
// "vegetable" does not mention "table".

/// Manufactured and household items
pub const GENERAL_OBJECTS: &[&str] = &[
    "object", "car", "phone", "laptop", "chair", "book", "cup", "bicycle", "table", "computer",
    "keyboard", "monitor", "pen", "pencil", "shoe", "clothing", "furniture", "television", "lamp",
    "clock", "building", "house", "vehicle", "truck", "toy", "glasses", "camera", "door",
    "window", "sofa", "desk", "bag", "mug", "bike", "smartphone", "tablet", "paper", "ball",
];

/// Animals and reptiles (rendered without consequences or plea)
pub const ANIMALS_AND_REPTILES: &[&str] = &[
    "animal", "mammal", "pet", "dog", "puppy", "cat", "kitten", "bear", "elephant", "tiger", "lion",
    "monkey", "deer", "horse", "cow", "fox", "wolf", "rabbit", "squirrel", "frog", "fish",
    "turtle", "whale", "dolphin", "giraffe", "zebra", "kangaroo", "koala", "panda", "camel",
    "goat", "sheep", "pig", "chicken", "duck", "bird", "eagle", "owl", "parrot", "sparrow",
    "peacock", "penguin", "hummingbird", "crow", "pigeon", "swan", "insect", "ant", "ladybug",
    "dragonfly", "spider", "mosquito", "cockroach", "reptile", "serpent", "snake", "lizard",
    "python", "cobra", "viper", "rattlesnake", "boa", "anaconda", "mamba", "adder", "copperhead",
    "cottonmouth", "kingsnake", "crocodile", "alligator", "gecko", "iguana", "octopus", "shark",
    "crab",
];

/// Pollutants and garbage (rendered in warning mode)
pub const POLLUTANTS: &[&str] = &[
    "plastic", "trash", "garbage", "litter", "rubbish", "waste", "debris", "cigarette",
    "pollution", "pollutant", "smog", "smoke", "oil", "landfill", "sewage", "toxic", "chemical",
];

/// Substrings marking pollutants, pests and pathogens
const HARMFUL_SUBSTRINGS: &[&str] = &[
    "plastic", "trash", "garbage", "litter", "rubbish", "waste", "debris", "cigarette",
    "pollution", "pollutant", "smog", "oil-spill", "oil spill", "landfill", "sewage", "toxic",
    "mosquito", "cockroach", "locust", "termite", "bacteria", "virus", "pathogen", "parasite",
    "pesticide", "mold",
];

pub const FLOWERS: &[&str] = &[
    "flower", "rose", "tulip", "lily", "daisy", "orchid", "lotus", "sunflower", "jasmine",
    "marigold", "lavender", "hibiscus", "dandelion", "poppy", "peony", "iris", "magnolia",
    "blossom", "bloom", "petal", "carnation", "chrysanthemum", "bouquet",
];

pub const TREES: &[&str] = &[
    "tree", "oak", "maple", "pine", "palm", "birch", "willow", "cedar", "sequoia", "redwood",
    "spruce", "fir", "eucalyptus", "baobab", "banyan", "mahogany", "teak", "bamboo", "cactus",
    "trunk", "forest", "wood", "woodland", "plant", "leaf", "leaves", "shrub", "bush", "grass",
];

pub const FRUITS: &[&str] = &[
    "fruit", "apple", "banana", "mango", "orange", "strawberry", "grape", "cherry", "peach",
    "pear", "lemon", "lime", "watermelon", "pineapple", "berry", "coconut", "papaya", "kiwi",
    "plum", "melon",
];

pub const INSECTS: &[&str] = &[
    "insect", "bee", "butterfly", "ant", "beetle", "ladybug", "dragonfly", "moth", "grasshopper",
    "cricket", "firefly", "wasp", "bug", "caterpillar", "fly", "spider",
];

pub const BIRDS: &[&str] = &[
    "bird", "eagle", "owl", "parrot", "sparrow", "peacock", "penguin", "hummingbird", "crow",
    "pigeon", "duck", "swan", "flamingo", "robin", "heron", "hawk", "falcon", "kingfisher",
];

/// Water and aquatic places
pub const WATERS: &[&str] = &[
    "water", "river", "lake", "ocean", "sea", "wetland", "coral", "reef", "pond", "stream",
    "waterfall", "nile", "ganges", "amazon", "mississippi", "beach", "swamp", "marsh",
];

/// Generator bucket for uncatalogued categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Flowers,
    Trees,
    Fruits,
    Insects,
    Birds,
    Animals,
}

impl Domain {
    /// First domain (fixed order) whose membership list the label mentions
    pub fn of(label: &str) -> Option<Domain> {
        let buckets: [(Domain, &[&str]); 6] = [
            (Domain::Flowers, FLOWERS),
            (Domain::Trees, TREES),
            (Domain::Fruits, FRUITS),
            (Domain::Insects, INSECTS),
            (Domain::Birds, BIRDS),
            (Domain::Animals, ANIMALS_AND_REPTILES),
        ];
        buckets
            .into_iter()
            .find(|(_, list)| mentions_any(label, list))
            .map(|(domain, _)| domain)
    }
}

/// Word-bounded membership test (see module comment)
pub fn mentions(label: &str, term: &str) -> bool {
    let label = label.trim().to_lowercase();
    if label == term {
        return true;
    }
    label
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_' || c == ',')
        .filter(|word| !word.is_empty())
        .any(|word| {
            word == term
                || word.strip_suffix('s') == Some(term)
                || word.strip_suffix("es") == Some(term)
        })
}

pub fn mentions_any(label: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| mentions(label, term))
}

/// `phrase` occurs in `haystack` delimited by non-alphanumerics (or a plural "s")
pub fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let is_boundary = |c: Option<char>| !c.is_some_and(char::is_alphanumeric);
    haystack.match_indices(phrase).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let mut after = haystack[start + phrase.len()..].chars();
        let next = after.next();
        is_boundary(before) && (is_boundary(next) || (next == Some('s') && is_boundary(after.next())))
    })
}

/// True if the category is a pollutant, pest or pathogen (substring denylist)
pub fn is_harmful_object(category: &str) -> bool {
    let lowered = category.to_lowercase();
    HARMFUL_SUBSTRINGS.iter().any(|term| lowered.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mentions_is_word_bounded() {
        assert!(mentions("red-bellied-black-snake", "snake"));
        assert!(mentions("Plastic bottle", "plastic"));
        assert!(mentions("roses", "rose"));
        assert!(mentions("foxes", "fox"));
        assert!(!mentions("pineapple", "apple"));
        assert!(!mentions("vegetable", "table"));
        assert!(!mentions("soil", "oil"));
        assert!(mentions("oil-spill", "oil"));
    }

    #[test]
    fn test_contains_phrase() {
        assert!(contains_phrase("two vipers", "viper"));
        assert!(contains_phrase("cherry blossom tree", "cherry blossom"));
        assert!(!contains_phrase("camellia", "camel"));
        assert!(!contains_phrase("boast", "boa"));
    }

    #[test]
    fn test_harmful_objects() {
        assert!(is_harmful_object("plastic"));
        assert!(is_harmful_object("oil-spill"));
        assert!(is_harmful_object("Mosquito"));
        assert!(is_harmful_object("plastic bag"));
        assert!(!is_harmful_object("oak"));
        assert!(!is_harmful_object("soil"));
        assert!(!is_harmful_object("dog"));
    }

    #[test]
    fn test_domain_order() {
        assert_eq!(Domain::of("jasmine"), Some(Domain::Flowers));
        assert_eq!(Domain::of("giant sequoia"), Some(Domain::Trees));
        assert_eq!(Domain::of("cherry"), Some(Domain::Fruits));
        assert_eq!(Domain::of("firefly"), Some(Domain::Insects));
        assert_eq!(Domain::of("flamingo"), Some(Domain::Birds));
        assert_eq!(Domain::of("giraffe"), Some(Domain::Animals));
        assert_eq!(Domain::of("xyz123"), None);
    }
}
