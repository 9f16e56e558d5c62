// Quiz question bank
//
// Per-category hand-authored questions, plus five broad-bucket sets used when a
// category has no entry of its own. `correct` is an index into `options`.

/// Static question as authored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionTemplate {
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
}

const fn q(
    question: &'static str,
    options: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
) -> QuestionTemplate {
    QuestionTemplate {
        question,
        options,
        correct,
        explanation,
    }
}

/// Per-category questions, keyed like the knowledge base
pub static CATEGORY_QUESTIONS: &[(&str, &[QuestionTemplate])] = &[
    (
        "tree",
        &[
            q(
                "What gas do trees absorb from the air?",
                ["Oxygen", "Carbon dioxide", "Nitrogen", "Helium"],
                1,
                "Trees take in carbon dioxide and use it to build wood, leaves, and roots.",
            ),
            q(
                "How can you tell the age of a cut tree?",
                ["Count its leaves", "Measure its height", "Count its growth rings", "Weigh its branches"],
                2,
                "Most trees add one growth ring each year.",
            ),
        ],
    ),
    (
        "oak",
        &[
            q(
                "What seed does an oak tree produce?",
                ["Pine cone", "Acorn", "Coconut", "Walnut"],
                1,
                "Oaks grow acorns, which feed jays, squirrels, and deer.",
            ),
            q(
                "Roughly how many other species can one oak support?",
                ["About 20", "About 200", "More than 2,000", "None"],
                2,
                "Oaks host thousands of insects, fungi, birds, and mammals.",
            ),
        ],
    ),
    (
        "pine",
        &[q(
            "Why are pine trees called evergreen?",
            ["They are always painted", "They keep their needles all year", "They only grow in spring", "They never grow"],
            1,
            "Pine needles stay on the tree through winter.",
        )],
    ),
    (
        "palm",
        &[q(
            "Which of these comes from a palm tree?",
            ["Acorns", "Coconuts", "Apples", "Maple syrup"],
            1,
            "Coconut palms and date palms feed millions of people.",
        )],
    ),
    (
        "maple",
        &[q(
            "What sweet food is made from maple sap?",
            ["Honey", "Jam", "Maple syrup", "Chocolate"],
            2,
            "Around 40 litres of sap are boiled down for one litre of syrup.",
        )],
    ),
    (
        "bamboo",
        &[
            q(
                "Bamboo is actually a giant kind of what?",
                ["Tree", "Grass", "Fern", "Mushroom"],
                1,
                "Bamboo belongs to the grass family.",
            ),
            q(
                "Which animal eats almost only bamboo?",
                ["Giant panda", "Lion", "Penguin", "Shark"],
                0,
                "Giant pandas eat bamboo for up to 14 hours a day.",
            ),
        ],
    ),
    (
        "cactus",
        &[q(
            "What are a cactus's spines?",
            ["Hairs", "Changed leaves", "Roots", "Flowers"],
            1,
            "Spines are modified leaves that save water and deter animals.",
        )],
    ),
    (
        "flower",
        &[
            q(
                "Which animals help flowers make seeds?",
                ["Pollinators like bees", "Fish", "Worms only", "Nobody"],
                0,
                "Pollinators carry pollen from flower to flower.",
            ),
            q(
                "What sweet liquid do flowers make to attract insects?",
                ["Sap", "Nectar", "Milk", "Oil"],
                1,
                "Nectar is a sugary reward for visiting pollinators.",
            ),
        ],
    ),
    (
        "sunflower",
        &[
            q(
                "What do young sunflowers follow across the sky?",
                ["The Moon", "The Sun", "Clouds", "Birds"],
                1,
                "Young sunflowers track the Sun, a behaviour called heliotropism.",
            ),
            q(
                "A sunflower head is actually made of...",
                ["One big petal", "Hundreds of tiny flowers", "Leaves", "Seeds only"],
                1,
                "Each sunflower head holds hundreds of small florets.",
            ),
        ],
    ),
    (
        "rose",
        &[q(
            "What are the fruits of a rose called?",
            ["Rosehips", "Rosebuds", "Thorns", "Petals"],
            0,
            "Rosehips are rich in vitamin C and feed birds in winter.",
        )],
    ),
    (
        "lotus",
        &[q(
            "Why do lotus leaves stay clean?",
            ["They are washed by fish", "They repel water and dirt", "They are waxed by people", "They never get wet"],
            1,
            "The lotus effect inspires self-cleaning materials.",
        )],
    ),
    (
        "dandelion",
        &[q(
            "How do dandelion seeds travel?",
            ["On the wind", "Inside fish", "By rolling", "They do not travel"],
            0,
            "Fluffy parachutes carry the seeds for long distances.",
        )],
    ),
    (
        "fruit",
        &[q(
            "Why do plants make tasty fruit?",
            ["To look pretty", "So animals spread their seeds", "To keep warm", "To scare birds"],
            1,
            "Animals eat fruit and drop the seeds in new places.",
        )],
    ),
    (
        "apple",
        &[q(
            "What must happen to apple blossoms before fruit can grow?",
            ["They must be pollinated", "They must freeze", "They must be painted", "They must fall off"],
            0,
            "Bees pollinate apple blossoms so apples can form.",
        )],
    ),
    (
        "banana",
        &[q(
            "Botanically, a banana is a kind of...",
            ["Nut", "Berry", "Vegetable", "Grass seed"],
            1,
            "Bananas are berries that grow on giant herbs.",
        )],
    ),
    (
        "strawberry",
        &[q(
            "Where are a strawberry's seeds?",
            ["Inside", "On the outside", "In the leaves", "It has none"],
            1,
            "A strawberry carries around 200 seeds on its surface.",
        )],
    ),
    (
        "forest",
        &[
            q(
                "How much of Earth's land is covered by forests?",
                ["About 5%", "About 31%", "About 75%", "About 95%"],
                1,
                "Forests cover nearly a third of the land.",
            ),
            q(
                "Which of these do forests help make?",
                ["Rain", "Plastic", "Sand", "Oil"],
                0,
                "Trees release water vapour that forms clouds and rain.",
            ),
        ],
    ),
    (
        "rainforest",
        &[q(
            "What share of species live in tropical rainforests?",
            ["About a tenth", "More than half", "Almost none", "Exactly a quarter"],
            1,
            "Rainforests cover about 6% of the land but host over half of all species.",
        )],
    ),
    (
        "river",
        &[q(
            "Where does most river water start?",
            ["In the sea", "In mountains and hills", "In caves only", "In deserts"],
            1,
            "Rain and melting snow in high ground feed rivers.",
        )],
    ),
    (
        "ocean",
        &[
            q(
                "How much of the oxygen we breathe comes from the ocean?",
                ["None", "About a tenth", "More than half", "All of it"],
                2,
                "Phytoplankton in the ocean make over half of Earth's oxygen.",
            ),
            q(
                "What covers more than 70% of Earth's surface?",
                ["Forests", "Deserts", "Oceans", "Cities"],
                2,
                "Oceans cover most of our planet.",
            ),
        ],
    ),
    (
        "water",
        &[q(
            "How much of Earth's water is fresh?",
            ["About 3%", "About 30%", "About 50%", "About 97%"],
            0,
            "Most of Earth's water is salty ocean water.",
        )],
    ),
    (
        "coral-reef",
        &[q(
            "What builds a coral reef?",
            ["Tiny animals called polyps", "Sea turtles", "Sand storms", "Whales"],
            0,
            "Coral polyps build limestone skeletons that form reefs.",
        )],
    ),
    (
        "mountain",
        &[q(
            "Mountain glaciers matter because they...",
            ["Feed rivers with meltwater", "Make volcanoes", "Block sunlight", "Create deserts"],
            0,
            "Half of humanity depends on water that starts in mountains.",
        )],
    ),
    (
        "bee",
        &[
            q(
                "How do honeybees share where flowers are?",
                ["By singing", "By dancing", "By writing", "By colour changes"],
                1,
                "The waggle dance tells other bees the direction and distance.",
            ),
            q(
                "About how much of our food depends on pollinators?",
                ["A third", "None", "All of it", "A hundredth"],
                0,
                "Many fruits, nuts, and vegetables need pollinators.",
            ),
        ],
    ),
    (
        "butterfly",
        &[q(
            "How do butterflies taste their food?",
            ["With their wings", "With their feet", "With their antennae only", "They cannot taste"],
            1,
            "Butterflies have taste sensors on their feet.",
        )],
    ),
    (
        "dog",
        &[
            q(
                "How many scent receptors can a dog's nose have?",
                ["About 6 thousand", "About 6 million", "Up to 300 million", "About 10"],
                2,
                "Dogs' noses are tens of times more sensitive than ours.",
            ),
            q(
                "Which wild animal is the ancestor of dogs?",
                ["Fox", "Wolf", "Bear", "Lion"],
                1,
                "Dogs were domesticated from wolves thousands of years ago.",
            ),
        ],
    ),
    (
        "cat",
        &[q(
            "How much of their lives do cats spend sleeping?",
            ["About a tenth", "About a third", "About two thirds", "They never sleep"],
            2,
            "Cats sleep for most of the day.",
        )],
    ),
    (
        "elephant",
        &[q(
            "How do elephants help other animals?",
            ["They dig water holes", "They build nests", "They make honey", "They hunt lions"],
            0,
            "Elephants dig for water that other animals also drink.",
        )],
    ),
    (
        "bird",
        &[q(
            "Birds are living descendants of which animals?",
            ["Fish", "Dinosaurs", "Frogs", "Insects"],
            1,
            "Birds evolved from small feathered dinosaurs.",
        )],
    ),
    (
        "owl",
        &[q(
            "Why can owls fly so quietly?",
            ["They fly slowly", "Their feathers have soft edges", "They hold their breath", "They have no wings"],
            1,
            "Fringed feathers break up the sound of air.",
        )],
    ),
    (
        "snake",
        &[
            q(
                "How do snakes smell?",
                ["With their nose only", "With their forked tongue", "With their tail", "They cannot smell"],
                1,
                "A snake's tongue collects scent particles for an organ in its mouth.",
            ),
            q(
                "What should you do if you see a snake?",
                ["Pick it up", "Keep a safe distance", "Chase it", "Throw stones"],
                1,
                "Most snakes only bite when they feel threatened.",
            ),
        ],
    ),
    (
        "python",
        &[q(
            "How does a python catch its prey?",
            ["With venom", "By squeezing", "By chasing for miles", "By spitting"],
            1,
            "Pythons are constrictors, not venomous snakes.",
        )],
    ),
    (
        "plastic",
        &[
            q(
                "How long can plastic last in nature?",
                ["A few days", "A few weeks", "Hundreds of years", "One year"],
                2,
                "Plastic breaks into tiny microplastics but does not disappear.",
            ),
            q(
                "Which is the best way to reduce plastic waste?",
                ["Burn it", "Refuse single-use plastic", "Bury it", "Throw it in rivers"],
                1,
                "Avoiding single-use plastic stops waste before it starts.",
            ),
        ],
    ),
    (
        "trash",
        &[q(
            "Where should litter go?",
            ["In the right bin", "In the river", "On the beach", "Down the drain"],
            0,
            "Sorting waste properly lets more of it be recycled.",
        )],
    ),
    (
        "cigarette",
        &[q(
            "What are cigarette filters mostly made of?",
            ["Cotton", "Plastic fibres", "Paper", "Wood"],
            1,
            "Filters are made of cellulose acetate, a kind of plastic.",
        )],
    ),
    (
        "mosquito",
        &[q(
            "Which mosquitoes bite people?",
            ["Only males", "Only females", "Both", "Neither"],
            1,
            "Females need blood to produce their eggs.",
        )],
    ),
];

/// Generic tree bucket
pub static TREE_QUESTIONS: &[QuestionTemplate] = &[
    q(
        "What do plants and trees release that we need to breathe?",
        ["Carbon dioxide", "Oxygen", "Smoke", "Helium"],
        1,
        "Photosynthesis releases oxygen into the air.",
    ),
    q(
        "What do roots do for a plant?",
        ["Make flowers", "Take up water and hold soil", "Catch insects", "Make noise"],
        1,
        "Roots anchor plants and absorb water and nutrients.",
    ),
    q(
        "Which is a good way to help trees?",
        ["Use recycled paper", "Carve names in bark", "Burn leaves", "Cut young trees"],
        0,
        "Recycled paper means fewer trees need to be cut down.",
    ),
    q(
        "What process do leaves use to make food from sunlight?",
        ["Respiration", "Photosynthesis", "Evaporation", "Digestion"],
        1,
        "Leaves turn light, water, and carbon dioxide into sugar.",
    ),
];

/// Generic flower bucket
pub static FLOWER_QUESTIONS: &[QuestionTemplate] = &[
    q(
        "Which insect is the best-known flower pollinator?",
        ["Bee", "Mosquito", "Cockroach", "Flea"],
        0,
        "Bees visit thousands of flowers a day.",
    ),
    q(
        "What does a flower turn into after pollination?",
        ["A leaf", "A seed or fruit", "A root", "A stone"],
        1,
        "Pollinated flowers develop seeds, often inside fruit.",
    ),
    q(
        "How can you help flowers in your area?",
        ["Spray pesticides", "Plant native flowers", "Pick every bloom", "Pave the garden"],
        1,
        "Native flowers support local pollinators.",
    ),
];

/// Generic water bucket
pub static WATER_QUESTIONS: &[QuestionTemplate] = &[
    q(
        "How much of Earth's water is fresh water?",
        ["About 3%", "About 50%", "About 75%", "All of it"],
        0,
        "Most water on Earth is salty.",
    ),
    q(
        "Which of these pollutes rivers and oceans the most?",
        ["Fish", "Plastic waste", "Rain", "Sand"],
        1,
        "Millions of tonnes of plastic reach the water every year.",
    ),
    q(
        "What is a simple way to save water at home?",
        ["Leave taps running", "Turn off the tap while brushing", "Take longer showers", "Water the road"],
        1,
        "Turning off the tap saves litres every minute.",
    ),
];

/// Generic animal bucket
pub static ANIMAL_QUESTIONS: &[QuestionTemplate] = &[
    q(
        "What is a habitat?",
        ["An animal's home and surroundings", "A kind of food", "A type of weather", "A zoo"],
        0,
        "A habitat gives an animal food, water, and shelter.",
    ),
    q(
        "What is the biggest threat to most wild animals?",
        ["Habitat loss", "Too much rain", "Bright colours", "Loud music"],
        0,
        "Destroying forests, wetlands, and grasslands leaves animals homeless.",
    ),
    q(
        "How should you behave around wild animals?",
        ["Feed them snacks", "Watch quietly from a distance", "Chase them", "Take them home"],
        1,
        "Keeping distance keeps both you and the animal safe.",
    ),
];

/// Generic harmful-object bucket
pub static HARMFUL_QUESTIONS: &[QuestionTemplate] = &[
    q(
        "What do the three Rs stand for?",
        ["Run, Rest, Read", "Reduce, Reuse, Recycle", "Rain, River, Rock", "Red, Round, Rough"],
        1,
        "Reducing comes first because it stops waste before it is made.",
    ),
    q(
        "Where does much litter dropped on streets end up?",
        ["In the ocean", "On the Moon", "It vanishes", "In the sky"],
        0,
        "Rain washes street litter into drains, rivers, and the sea.",
    ),
    q(
        "Which is the safest way to handle harmful waste?",
        ["Burn it outside", "Take it to a proper disposal point", "Hide it in a bush", "Pour it down the drain"],
        1,
        "Disposal points keep toxins out of soil and water.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_templates() -> impl Iterator<Item = &'static QuestionTemplate> {
        CATEGORY_QUESTIONS
            .iter()
            .flat_map(|(_, qs)| qs.iter())
            .chain(TREE_QUESTIONS)
            .chain(FLOWER_QUESTIONS)
            .chain(WATER_QUESTIONS)
            .chain(ANIMAL_QUESTIONS)
            .chain(HARMFUL_QUESTIONS)
    }

    #[test]
    fn test_correct_index_in_range() {
        for template in all_templates() {
            assert!(template.correct < 4, "bad index for '{}'", template.question);
            assert!(!template.explanation.is_empty());
        }
    }

    #[test]
    fn test_bank_entries_have_one_to_four_questions() {
        for (key, questions) in CATEGORY_QUESTIONS {
            assert!(
                (1..=4).contains(&questions.len()),
                "{} has {} questions",
                key,
                questions.len()
            );
        }
    }

    #[test]
    fn test_buckets_have_three_to_five_questions() {
        for bucket in [TREE_QUESTIONS, FLOWER_QUESTIONS, WATER_QUESTIONS, ANIMAL_QUESTIONS, HARMFUL_QUESTIONS] {
            assert!((3..=5).contains(&bucket.len()));
        }
    }
}
