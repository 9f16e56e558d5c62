// Knowledge Base literal table
//
// One entry per canonical category. Keywords are exact-match alternative labels
// used by resolver tier 2; they must be lowercase, unique across the table, and
// never equal to another key (tier 1 already covers keys).
//
// `consequences` is only filled for nature categories. Animals, pollutants and
// general objects leave it empty because their rendering never shows it.

use super::{CategoryEntry, CategoryRecord};

pub static CATEGORY_ENTRIES: &[CategoryEntry] = &[
    // ------------------------------------------------------------------------
    // Generic nature
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "tree",
        record: CategoryRecord {
            emoji: "🌳",
            introduction: "I am a tree, one of the oldest and tallest living things on Earth.",
            message: "I clean the air you breathe, shade your streets, and shelter countless creatures in my branches.",
            explanation: "A single mature tree can absorb around 20 kilograms of carbon dioxide a year and release enough oxygen for two people.",
            consequences: Some("Without trees, soil washes away, rivers silt up, cities overheat, and thousands of species lose their homes."),
            plea: "Please save me! Plant a tree, protect old ones, and never waste paper.",
            keywords: &["trees", "tree trunk", "woody plant"],
        },
    },
    CategoryEntry {
        key: "flower",
        record: CategoryRecord {
            emoji: "🌸",
            introduction: "I am a flower, the colourful heart of a flowering plant.",
            message: "My nectar and pollen feed bees, butterflies, and birds, and in return they carry my pollen to make seeds.",
            explanation: "Around 90% of flowering plants depend on animal pollinators, and a third of the food you eat relies on them too.",
            consequences: Some("Without flowers, pollinators starve, fruit and seeds stop forming, and whole food webs begin to unravel."),
            plea: "Please save me! Grow native flowers and avoid spraying pesticides in gardens.",
            keywords: &["flowers", "blossom", "bloom", "petal"],
        },
    },
    CategoryEntry {
        key: "plant",
        record: CategoryRecord {
            emoji: "🪴",
            introduction: "I am a plant, turning sunlight into food for almost every living thing.",
            message: "Through photosynthesis I make sugar from light, water, and air, and I give you oxygen in return.",
            explanation: "Plants produce most of the oxygen on land and form the base of nearly every food chain on the planet.",
            consequences: Some("If plants disappear, animals lose food and shelter, soil erodes, and the air becomes harder to breathe."),
            plea: "Please save me! Water plants, protect green spaces, and choose native species for your garden.",
            keywords: &["plants", "houseplant", "potted plant", "shrub", "vegetation"],
        },
    },
    CategoryEntry {
        key: "leaf",
        record: CategoryRecord {
            emoji: "🍃",
            introduction: "I am a leaf, a tiny solar panel made by a plant.",
            message: "I capture sunlight and breathe in carbon dioxide so my plant can grow and feed the world.",
            explanation: "Leaves have thousands of tiny pores called stomata that open and close to trade gases with the air.",
            consequences: Some("Without leaves, plants cannot feed themselves, and the animals that depend on them go hungry."),
            plea: "Please save me! Compost fallen leaves instead of burning them.",
            keywords: &["leaves", "foliage"],
        },
    },
    CategoryEntry {
        key: "grass",
        record: CategoryRecord {
            emoji: "🌾",
            introduction: "I am grass, the green carpet covering a quarter of the land.",
            message: "My roots hold soil in place and my blades feed grazing animals from rabbits to elephants.",
            explanation: "Grasslands store huge amounts of carbon underground, and rice, wheat, and corn are all members of the grass family.",
            consequences: Some("When grasslands vanish, soil blows away as dust and the animals that graze there lose their food."),
            plea: "Please save me! Leave some wild grass uncut for insects and birds.",
            keywords: &["lawn", "meadow", "pasture", "prairie"],
        },
    },
    CategoryEntry {
        key: "fruit",
        record: CategoryRecord {
            emoji: "🍎",
            introduction: "I am a fruit, the way a plant wraps and shares its seeds.",
            message: "I give you vitamins and energy, and when animals eat me they spread my seeds far and wide.",
            explanation: "Fruits evolved to be tasty so animals would carry seeds away from the parent plant to new places to grow.",
            consequences: Some("Without fruit, many plants could not spread, and people and animals would lose a vital source of food."),
            plea: "Please save me! Eat seasonal fruit, waste less food, and protect the pollinators that make me.",
            keywords: &["fruits", "berry", "berries", "produce"],
        },
    },
    CategoryEntry {
        key: "mushroom",
        record: CategoryRecord {
            emoji: "🍄",
            introduction: "I am a mushroom, the fruiting body of a hidden fungus.",
            message: "I break down dead wood and leaves, returning their nutrients to the soil for new life.",
            explanation: "Underground fungal threads connect tree roots into a network that shares water and nutrients across a forest.",
            consequences: Some("Without fungi, dead material would pile up and forests would starve for recycled nutrients."),
            plea: "Please save me! Admire wild mushrooms without picking them and leave dead logs to rot.",
            keywords: &["fungus", "fungi", "toadstool"],
        },
    },
    // ------------------------------------------------------------------------
    // Landscapes and ecosystems
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "forest",
        record: CategoryRecord {
            emoji: "🌲",
            introduction: "I am a forest, a living city of trees, animals, and fungi.",
            message: "I store carbon, make rain, filter water, and give a home to most of the animals that live on land.",
            explanation: "Forests cover about 31% of the land and hold roughly 80% of the world's land-dwelling species.",
            consequences: Some("When forests are cut, the climate warms faster, rivers dry up, and countless species disappear forever."),
            plea: "Please save me! Choose recycled paper and certified wood, and support forest protection.",
            keywords: &["woodland", "woods", "grove"],
        },
    },
    CategoryEntry {
        key: "rainforest",
        record: CategoryRecord {
            emoji: "🌴",
            introduction: "I am a tropical rainforest, the richest ecosystem on Earth.",
            message: "I make my own rain, store vast amounts of carbon, and hide medicines that are still being discovered.",
            explanation: "Rainforests cover only about 6% of the land but shelter more than half of all plant and animal species.",
            consequences: Some("Every minute, rainforest the size of many football fields is lost, taking unknown species and medicines with it."),
            plea: "Please save me! Avoid products linked to deforestation, like unsustainable palm oil.",
            keywords: &["jungle", "tropical forest", "tropical rainforest"],
        },
    },
    CategoryEntry {
        key: "river",
        record: CategoryRecord {
            emoji: "🏞️",
            introduction: "I am a river, carrying fresh water from the mountains to the sea.",
            message: "I give drinking water to cities, water crops, and provide a home for fish, birds, and otters.",
            explanation: "Rivers hold less than 1% of Earth's water, yet they support about a third of all vertebrate species.",
            consequences: Some("Polluted or dammed rivers lose their fish, flood more often, and leave people without clean water."),
            plea: "Please save me! Never throw rubbish into rivers and use water wisely.",
            keywords: &["stream", "creek", "brook", "riverbank"],
        },
    },
    CategoryEntry {
        key: "lake",
        record: CategoryRecord {
            emoji: "🌊",
            introduction: "I am a lake, a still pool of fresh water.",
            message: "I store water for dry seasons and give fish, frogs, and water birds a place to live.",
            explanation: "Lake Baikal in Russia alone holds about 20% of all the unfrozen fresh surface water in the world.",
            consequences: Some("When lakes are polluted, algae blooms choke the water and fish suffocate."),
            plea: "Please save me! Keep fertilisers and soap out of lakes and ponds.",
            keywords: &["pond", "reservoir", "lagoon"],
        },
    },
    CategoryEntry {
        key: "ocean",
        record: CategoryRecord {
            emoji: "🌊",
            introduction: "I am the ocean, covering more than 70% of our planet.",
            message: "I make over half of the oxygen you breathe and soak up heat and carbon from the air.",
            explanation: "Tiny ocean plants called phytoplankton produce more oxygen than all the rainforests combined.",
            consequences: Some("Without a healthy ocean, the climate spins out of control and billions of people lose their main source of protein."),
            plea: "Please save me! Cut down on single-use plastic and choose sustainable seafood.",
            keywords: &["sea", "seascape", "marine", "seawater"],
        },
    },
    CategoryEntry {
        key: "water",
        record: CategoryRecord {
            emoji: "💧",
            introduction: "I am water, the essence of all life.",
            message: "Every cell in your body needs me, and so does every plant and animal on Earth.",
            explanation: "Only about 3% of Earth's water is fresh, and most of that is locked away in ice and underground.",
            consequences: Some("Without clean water, crops fail, diseases spread, and life simply cannot continue."),
            plea: "Please save me! Turn off taps, fix leaks, and keep waterways clean.",
            keywords: &["waterfall", "droplet", "aqua"],
        },
    },
    CategoryEntry {
        key: "wetland",
        record: CategoryRecord {
            emoji: "🪷",
            introduction: "I am a wetland, where land and water meet.",
            message: "I soak up floods like a sponge, clean dirty water, and give birds a place to rest on long migrations.",
            explanation: "Wetlands store more carbon per hectare than almost any other ecosystem, even rainforests.",
            consequences: Some("When wetlands are drained, floods get worse, water gets dirtier, and migrating birds have nowhere to stop."),
            plea: "Please save me! Support wetland restoration and never dump waste in marshes.",
            keywords: &["swamp", "marsh", "bog"],
        },
    },
    CategoryEntry {
        key: "coral-reef",
        record: CategoryRecord {
            emoji: "🪸",
            introduction: "I am a coral reef, a rainforest beneath the sea.",
            message: "I shelter a quarter of all ocean fish and protect coastlines from storms and waves.",
            explanation: "Coral reefs are built by tiny animals called polyps, which live together with algae that feed them sunlight sugars.",
            consequences: Some("As oceans warm, corals bleach and die, and the fish that feed millions of people go with them."),
            plea: "Please save me! Use reef-safe sunscreen and never touch or take coral.",
            keywords: &["coral", "reef"],
        },
    },
    CategoryEntry {
        key: "mountain",
        record: CategoryRecord {
            emoji: "🏔️",
            introduction: "I am a mountain, reaching high into the clouds.",
            message: "My snow and glaciers feed the rivers that give fresh water to half the world's people.",
            explanation: "Mountains are home to about a quarter of all land animals and plants, many found nowhere else.",
            consequences: Some("As mountain glaciers melt, rivers shrink and the people and animals downstream lose their water."),
            plea: "Please save me! Stay on trails, carry your litter home, and help slow climate change.",
            keywords: &["peak", "summit", "hill", "alpine"],
        },
    },
    CategoryEntry {
        key: "earth",
        record: CategoryRecord {
            emoji: "🌍",
            introduction: "I am Earth, the only home we know.",
            message: "I give you air, water, food, and shelter, and I am shared by millions of other species.",
            explanation: "Scientists estimate Earth hosts around 8.7 million species, and most have not been discovered yet.",
            consequences: Some("If we keep harming the planet, climate change and extinction will make it harder for every living thing to survive."),
            plea: "Please save me! Reduce, reuse, and recycle, and care for the nature around you.",
            keywords: &["planet", "globe", "world map"],
        },
    },
    CategoryEntry {
        key: "soil",
        record: CategoryRecord {
            emoji: "🟫",
            introduction: "I am soil, the living skin of the Earth.",
            message: "I grow 95% of your food and hold water and nutrients for every plant.",
            explanation: "A single handful of healthy soil holds more living organisms than there are people on Earth.",
            consequences: Some("Without healthy soil, crops fail and rain washes the land away into rivers."),
            plea: "Please save me! Compost food scraps and avoid chemicals that poison the soil.",
            keywords: &["dirt", "mud", "ground", "compost"],
        },
    },
    CategoryEntry {
        key: "rock",
        record: CategoryRecord {
            emoji: "🪨",
            introduction: "I am a rock, a record of Earth's long history.",
            message: "Over thousands of years I break down into the minerals that make soil fertile.",
            explanation: "Some rocks are more than 4 billion years old and hold fossils that show how life evolved.",
            consequences: Some("When rocky habitats are quarried away, lizards, lichens, and nesting birds lose their shelter."),
            plea: "Please save me! Leave rocks where you find them; they are homes for small creatures.",
            keywords: &["stone", "boulder", "pebble", "granite"],
        },
    },
    CategoryEntry {
        key: "desert",
        record: CategoryRecord {
            emoji: "🏜️",
            introduction: "I am a desert, a land of sun, sand, and survival.",
            message: "My plants and animals have amazing tricks to save water, and I hold minerals that enrich far-off lands.",
            explanation: "Dust from the Sahara blows across the Atlantic and fertilises the Amazon rainforest.",
            consequences: Some("Careless farming and climate change are spreading deserts into land that once fed people."),
            plea: "Please save me! Protect desert wildlife and never drive over fragile desert crusts.",
            keywords: &["sand dune", "dune", "arid"],
        },
    },
    CategoryEntry {
        key: "beach",
        record: CategoryRecord {
            emoji: "🏖️",
            introduction: "I am a beach, where the land meets the sea.",
            message: "I protect the coast from waves and give turtles and shorebirds a place to nest.",
            explanation: "Sea turtles return to the very same beach where they hatched to lay their own eggs.",
            consequences: Some("Litter and rising seas are swallowing beaches, leaving turtles and shorebirds with nowhere to nest."),
            plea: "Please save me! Take your rubbish home and join a beach clean-up.",
            keywords: &["shore", "coast", "seashore"],
        },
    },
    // ------------------------------------------------------------------------
    // Named rivers
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "nile",
        record: CategoryRecord {
            emoji: "🏞️",
            introduction: "I am the Nile, one of the longest rivers in the world.",
            message: "For thousands of years my floods have fed farms and cities across north-east Africa.",
            explanation: "I flow more than 6,600 kilometres through eleven countries before reaching the Mediterranean Sea.",
            consequences: Some("If my waters are overused or polluted, millions of people and farms downstream lose their lifeline."),
            plea: "Please save me! Share water fairly and keep my banks free of waste.",
            keywords: &["nile river", "river nile"],
        },
    },
    CategoryEntry {
        key: "ganges",
        record: CategoryRecord {
            emoji: "🏞️",
            introduction: "I am the Ganges, a sacred river of South Asia.",
            message: "I water the farms of hundreds of millions of people and shelter rare river dolphins.",
            explanation: "The Ganges river dolphin is almost blind and finds its food using echolocation.",
            consequences: Some("Sewage and plastic are choking my waters, endangering my dolphins and the people who rely on me."),
            plea: "Please save me! Never throw waste or plastic into my waters.",
            keywords: &["ganga", "ganges river"],
        },
    },
    CategoryEntry {
        key: "amazon-river",
        record: CategoryRecord {
            emoji: "🏞️",
            introduction: "I am the Amazon, the largest river on Earth by volume.",
            message: "I carry a fifth of all the fresh water that flows into the world's oceans and feed the greatest rainforest.",
            explanation: "More than 3,000 kinds of fish swim in my waters, including piranhas and the giant arapaima.",
            consequences: Some("Deforestation and mining along my banks poison my water and threaten thousands of species."),
            plea: "Please save me! Support protection of the Amazon basin and its indigenous guardians.",
            keywords: &["amazon river"],
        },
    },
    CategoryEntry {
        key: "mississippi",
        record: CategoryRecord {
            emoji: "🏞️",
            introduction: "I am the Mississippi, the great river of North America.",
            message: "I drain nearly 40% of the United States and give a highway to migrating birds.",
            explanation: "About 40% of North America's ducks, geese, and swans follow my flyway on their migrations.",
            consequences: Some("Fertiliser runoff down my channel creates a dead zone in the Gulf of Mexico where fish cannot breathe."),
            plea: "Please save me! Use less fertiliser and protect my wetlands.",
            keywords: &["mississippi river"],
        },
    },
    // ------------------------------------------------------------------------
    // Trees
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "oak",
        record: CategoryRecord {
            emoji: "🌳",
            introduction: "I am an oak tree, strong and long-lived.",
            message: "A single oak can support more than 2,000 other species, from insects to owls.",
            explanation: "Oaks can live for over 1,000 years, and one oak can drop up to 10 million acorns in its lifetime.",
            consequences: Some("When old oaks fall, hundreds of insects, birds, and fungi that depend on them vanish too."),
            plea: "Please save me! Protect ancient trees and plant an acorn for the future.",
            keywords: &["oak tree", "acorn", "quercus"],
        },
    },
    CategoryEntry {
        key: "maple",
        record: CategoryRecord {
            emoji: "🍁",
            introduction: "I am a maple tree, famous for my fiery autumn leaves.",
            message: "My sweet sap becomes maple syrup, and my seeds spin like helicopters to travel far.",
            explanation: "It takes about 40 litres of maple sap to make a single litre of maple syrup.",
            consequences: Some("Warmer winters are shortening the sap season and stressing maple forests."),
            plea: "Please save me! Help slow climate change so my forests stay healthy.",
            keywords: &["maple tree", "maple leaf", "acer"],
        },
    },
    CategoryEntry {
        key: "pine",
        record: CategoryRecord {
            emoji: "🌲",
            introduction: "I am a pine tree, evergreen all year round.",
            message: "My needles stay green through winter and my cones feed squirrels and birds.",
            explanation: "Some bristlecone pines are nearly 5,000 years old, among the oldest living things on Earth.",
            consequences: Some("When pine forests burn too often or are cleared, winter shelter for wildlife disappears."),
            plea: "Please save me! Prevent forest fires and protect old evergreen forests.",
            keywords: &["pine tree", "pine cone", "conifer", "evergreen"],
        },
    },
    CategoryEntry {
        key: "palm",
        record: CategoryRecord {
            emoji: "🌴",
            introduction: "I am a palm tree, a symbol of the tropics.",
            message: "I give coconuts, dates, and shade, and my fronds shelter birds and bats.",
            explanation: "There are more than 2,500 kinds of palm, and coconut palms can float their seeds across oceans.",
            consequences: Some("Clearing forests for palm plantations destroys homes for orangutans and tigers."),
            plea: "Please save me! Choose products with sustainable palm oil.",
            keywords: &["palm tree", "coconut tree", "date palm"],
        },
    },
    CategoryEntry {
        key: "birch",
        record: CategoryRecord {
            emoji: "🌳",
            introduction: "I am a birch tree with bright, papery bark.",
            message: "I am a pioneer: I grow first on bare ground and prepare the soil for other trees.",
            explanation: "My white bark reflects sunlight, protecting my trunk from overheating in winter sun.",
            consequences: Some("Without pioneer trees like me, damaged land takes far longer to heal."),
            plea: "Please save me! Let young trees grow on wild land.",
            keywords: &["birch tree", "silver birch"],
        },
    },
    CategoryEntry {
        key: "willow",
        record: CategoryRecord {
            emoji: "🌳",
            introduction: "I am a willow tree, leaning gracefully over water.",
            message: "My roots hold riverbanks together and my early catkins feed hungry bees in spring.",
            explanation: "My bark contains salicin, the natural ancestor of the medicine aspirin.",
            consequences: Some("Without willows, riverbanks crumble and early-spring bees go hungry."),
            plea: "Please save me! Protect the trees that line rivers and streams.",
            keywords: &["willow tree", "weeping willow"],
        },
    },
    CategoryEntry {
        key: "eucalyptus",
        record: CategoryRecord {
            emoji: "🌿",
            introduction: "I am a eucalyptus tree from Australia.",
            message: "My leaves are the only food of koalas, and my flowers feed honeyeaters and bees.",
            explanation: "Some eucalyptus trees grow over 90 metres tall, making them the tallest flowering plants on Earth.",
            consequences: Some("When eucalyptus forests burn or are cleared, koalas have nothing left to eat."),
            plea: "Please save me! Support bushfire recovery and koala habitat protection.",
            keywords: &["eucalyptus tree", "gum tree"],
        },
    },
    CategoryEntry {
        key: "baobab",
        record: CategoryRecord {
            emoji: "🌳",
            introduction: "I am a baobab, the tree of life of the African savanna.",
            message: "I store thousands of litres of water in my trunk and give fruit to people and animals in the dry season.",
            explanation: "Baobabs can live for more than 2,000 years and look like they were planted upside down.",
            consequences: Some("Several of the oldest baobabs have died recently as the climate grows hotter and drier."),
            plea: "Please save me! Protect ancient trees and help fight climate change.",
            keywords: &["baobab tree", "adansonia"],
        },
    },
    CategoryEntry {
        key: "bamboo",
        record: CategoryRecord {
            emoji: "🎋",
            introduction: "I am bamboo, the fastest-growing plant in the world.",
            message: "I can grow almost a metre in a single day and I feed giant pandas.",
            explanation: "Bamboo is actually a giant grass, and it releases more oxygen than many trees of similar size.",
            consequences: Some("When bamboo forests are cleared, pandas and red pandas lose both their food and their home."),
            plea: "Please save me! Choose sustainably harvested bamboo products.",
            keywords: &["bamboo shoot", "bamboo forest"],
        },
    },
    CategoryEntry {
        key: "cactus",
        record: CategoryRecord {
            emoji: "🌵",
            introduction: "I am a cactus, a master of desert survival.",
            message: "I store water in my thick stem and give food and shelter to desert birds, bats, and insects.",
            explanation: "My spines are actually leaves that changed shape to save water and protect me from thirsty animals.",
            consequences: Some("Illegal collecting and land clearing have made many cactus species endangered."),
            plea: "Please save me! Never take cacti from the wild.",
            keywords: &["cacti", "succulent", "saguaro"],
        },
    },
    // ------------------------------------------------------------------------
    // Flowers
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "sunflower",
        record: CategoryRecord {
            emoji: "🌻",
            introduction: "I am a sunflower, always turning toward the light.",
            message: "My big face is made of hundreds of tiny flowers that feed bees, and my seeds feed birds.",
            explanation: "Young sunflowers follow the Sun across the sky each day, a behaviour called heliotropism.",
            consequences: Some("Without sunflowers and their cousins, many bees and seed-eating birds would lose a key food."),
            plea: "Please save me! Plant sunflowers and leave the seed heads for birds in autumn.",
            keywords: &["sunflowers", "helianthus"],
        },
    },
    CategoryEntry {
        key: "rose",
        record: CategoryRecord {
            emoji: "🌹",
            introduction: "I am a rose, loved for my beauty and scent.",
            message: "My flowers feed bees and my rosehips feed birds through the winter.",
            explanation: "Rosehips contain more vitamin C than oranges and were gathered to prevent illness in wartime.",
            consequences: Some("When wild roses are removed from hedgerows, birds lose vital winter food."),
            plea: "Please save me! Grow wild roses and leave the hips for birds.",
            keywords: &["roses", "rosebush", "rosehip"],
        },
    },
    CategoryEntry {
        key: "tulip",
        record: CategoryRecord {
            emoji: "🌷",
            introduction: "I am a tulip, one of spring's first bright colours.",
            message: "I bloom early to feed bees that wake up hungry after winter.",
            explanation: "Wild tulips come from the mountains of Central Asia, and once cost more than a house in the Netherlands.",
            consequences: Some("Several wild tulip species are now endangered in their native mountains."),
            plea: "Please save me! Buy bulbs from responsible growers, never from the wild.",
            keywords: &["tulips"],
        },
    },
    CategoryEntry {
        key: "lotus",
        record: CategoryRecord {
            emoji: "🪷",
            introduction: "I am a lotus, rising clean from muddy water.",
            message: "My leaves shade ponds for fish and my seeds can sprout after centuries.",
            explanation: "Lotus leaves repel water and dirt so well that scientists copy them to make self-cleaning surfaces.",
            consequences: Some("When ponds are drained or polluted, lotus beds and the creatures they shelter disappear."),
            plea: "Please save me! Keep ponds and wetlands clean.",
            keywords: &["lotus flower", "water lily"],
        },
    },
    CategoryEntry {
        key: "orchid",
        record: CategoryRecord {
            emoji: "🌺",
            introduction: "I am an orchid, part of one of the largest flower families on Earth.",
            message: "I have clever partnerships with insects and fungi, and vanilla comes from one of my relatives.",
            explanation: "Orchid seeds are as fine as dust and cannot sprout without help from special soil fungi.",
            consequences: Some("Many wild orchids are endangered by forest loss and illegal collecting."),
            plea: "Please save me! Only buy orchids grown in nurseries.",
            keywords: &["orchids", "orchidaceae"],
        },
    },
    CategoryEntry {
        key: "daisy",
        record: CategoryRecord {
            emoji: "🌼",
            introduction: "I am a daisy, small but full of life.",
            message: "I bloom almost all year round and feed many small bees and hoverflies.",
            explanation: "My name comes from 'day's eye' because I open in the morning and close at night.",
            consequences: Some("When lawns are sprayed and mowed too often, daisies vanish and small pollinators go hungry."),
            plea: "Please save me! Let daisies bloom in your lawn.",
            keywords: &["daisies", "bellis"],
        },
    },
    CategoryEntry {
        key: "lily",
        record: CategoryRecord {
            emoji: "💮",
            introduction: "I am a lily, tall and elegant.",
            message: "My large trumpet flowers feed moths, butterflies, and bees.",
            explanation: "Lilies grow from bulbs that store food underground so they can bloom again each year.",
            consequences: Some("Wild lilies are disappearing as meadows are ploughed and built on."),
            plea: "Please save me! Protect wild meadows where lilies grow.",
            keywords: &["lilies", "lilium"],
        },
    },
    CategoryEntry {
        key: "lavender",
        record: CategoryRecord {
            emoji: "💜",
            introduction: "I am lavender, fragrant and purple.",
            message: "Bees adore my flowers, and my scent has been used to calm people for centuries.",
            explanation: "Lavender oil comes from tiny glands on my flowers and leaves.",
            consequences: Some("Without nectar-rich plants like me, bees in towns struggle to find enough food."),
            plea: "Please save me! Plant lavender to help bees in your neighbourhood.",
            keywords: &["lavandula"],
        },
    },
    CategoryEntry {
        key: "hibiscus",
        record: CategoryRecord {
            emoji: "🌺",
            introduction: "I am a hibiscus, a big, bright tropical flower.",
            message: "Hummingbirds and butterflies visit my flowers, and my petals make a tangy tea.",
            explanation: "Each hibiscus flower usually lasts only a single day before a new one opens.",
            consequences: Some("As tropical habitats shrink, wild hibiscus species and their pollinators decline."),
            plea: "Please save me! Grow native tropical plants to support pollinators.",
            keywords: &["hibiscus flower", "rose mallow"],
        },
    },
    CategoryEntry {
        key: "dandelion",
        record: CategoryRecord {
            emoji: "🌼",
            introduction: "I am a dandelion, often called a weed but full of gifts.",
            message: "I am one of the first foods for bees in spring, and every part of me is edible.",
            explanation: "My fluffy seed heads can carry seeds more than 100 kilometres on the wind.",
            consequences: Some("Spraying dandelions away removes an important early meal for bees."),
            plea: "Please save me! Let dandelions bloom in spring.",
            keywords: &["dandelions", "taraxacum"],
        },
    },
    // ------------------------------------------------------------------------
    // Fruits
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "apple",
        record: CategoryRecord {
            emoji: "🍎",
            introduction: "I am an apple, crunchy and sweet.",
            message: "My blossoms feed bees in spring and my fruit feeds people and wildlife in autumn.",
            explanation: "There are more than 7,500 apple varieties, and the wild ancestor of apples still grows in Kazakhstan.",
            consequences: Some("Without bees to pollinate apple blossoms, orchards would produce very little fruit."),
            plea: "Please save me! Protect pollinators and buy local apples.",
            keywords: &["apples", "apple tree"],
        },
    },
    CategoryEntry {
        key: "banana",
        record: CategoryRecord {
            emoji: "🍌",
            introduction: "I am a banana, full of energy.",
            message: "I am one of the most eaten fruits on Earth and a staple food for millions of people.",
            explanation: "Banana plants are not trees but giant herbs, and bananas are technically berries.",
            consequences: Some("Because most bananas are clones, a single disease could wipe out whole plantations."),
            plea: "Please save me! Support farms that grow diverse banana varieties.",
            keywords: &["bananas", "plantain"],
        },
    },
    CategoryEntry {
        key: "mango",
        record: CategoryRecord {
            emoji: "🥭",
            introduction: "I am a mango, the king of tropical fruits.",
            message: "My juicy fruit is full of vitamins, and my tree gives shade for decades.",
            explanation: "Mangoes have been grown in South Asia for over 4,000 years and are related to cashews.",
            consequences: Some("Losing old mango trees removes shade, food, and homes for birds and bats."),
            plea: "Please save me! Plant fruit trees and waste less food.",
            keywords: &["mangoes", "mango tree"],
        },
    },
    CategoryEntry {
        key: "orange",
        record: CategoryRecord {
            emoji: "🍊",
            introduction: "I am an orange, bursting with vitamin C.",
            message: "My blossoms smell sweet to bees and my fruit keeps people healthy.",
            explanation: "Oranges are a cross between pomelo and mandarin first grown in ancient China.",
            consequences: Some("Diseases spread by insects are destroying orange groves around the world."),
            plea: "Please save me! Support farmers who grow citrus sustainably.",
            keywords: &["oranges", "citrus", "mandarin"],
        },
    },
    CategoryEntry {
        key: "strawberry",
        record: CategoryRecord {
            emoji: "🍓",
            introduction: "I am a strawberry, sweet and red.",
            message: "My flowers feed bees and my fruit feeds birds, hedgehogs, and people.",
            explanation: "My seeds grow on the outside of my fruit, around 200 of them on every berry.",
            consequences: Some("Without pollinators, strawberries grow small and misshapen."),
            plea: "Please save me! Grow strawberries without pesticides.",
            keywords: &["strawberries"],
        },
    },
    CategoryEntry {
        key: "grape",
        record: CategoryRecord {
            emoji: "🍇",
            introduction: "I am a grape, growing in clusters on climbing vines.",
            message: "My fruit feeds birds and people, and my vines cover hillsides around the world.",
            explanation: "People have grown grapes for over 8,000 years, and there are thousands of varieties.",
            consequences: Some("Heat waves and droughts are making it harder for vineyards to grow healthy grapes."),
            plea: "Please save me! Support farms that protect soil and wildlife.",
            keywords: &["grapes", "grapevine", "vineyard"],
        },
    },
    // ------------------------------------------------------------------------
    // Animals
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "animal",
        record: CategoryRecord {
            emoji: "🐾",
            introduction: "I am an animal, one of millions of kinds sharing this planet.",
            message: "Animals pollinate plants, spread seeds, and keep ecosystems in balance.",
            explanation: "More than a million animal species are thought to be at risk of extinction.",
            consequences: None,
            plea: "Please respect wild animals and watch them from a distance.",
            keywords: &["mammal", "wildlife", "fauna", "creature"],
        },
    },
    CategoryEntry {
        key: "dog",
        record: CategoryRecord {
            emoji: "🐕",
            introduction: "I am a dog, humanity's oldest animal friend.",
            message: "Dogs help people herd, guide, rescue, and comfort, and they love to play.",
            explanation: "A dog's nose has up to 300 million scent receptors, compared with about 6 million in yours.",
            consequences: None,
            plea: "Please adopt pets responsibly and keep dogs away from nesting wildlife.",
            keywords: &["puppy", "canine", "golden retriever", "retriever", "labrador", "hound", "terrier", "poodle", "bulldog", "beagle"],
        },
    },
    CategoryEntry {
        key: "cat",
        record: CategoryRecord {
            emoji: "🐈",
            introduction: "I am a cat, curious and independent.",
            message: "Cats keep people company and have lived alongside humans for about 10,000 years.",
            explanation: "Cats spend around two thirds of their lives asleep and can rotate their ears 180 degrees.",
            consequences: None,
            plea: "Please keep pet cats indoors at night to protect birds and small wildlife.",
            keywords: &["kitten", "feline", "kitty", "tabby"],
        },
    },
    CategoryEntry {
        key: "bear",
        record: CategoryRecord {
            emoji: "🐻",
            introduction: "I am a bear, a powerful guardian of the forest.",
            message: "Bears spread seeds and carry salmon into forests, fertilising the trees.",
            explanation: "Some bears hibernate for up to seven months without eating, drinking, or going to the toilet.",
            consequences: None,
            plea: "Please never feed bears and store food safely when camping.",
            keywords: &["grizzly", "brown bear", "black bear", "polar bear"],
        },
    },
    CategoryEntry {
        key: "elephant",
        record: CategoryRecord {
            emoji: "🐘",
            introduction: "I am an elephant, the largest animal that walks on land.",
            message: "Elephants dig water holes, open paths in forests, and spread the seeds of many trees.",
            explanation: "Elephants can recognise themselves in a mirror and mourn their dead.",
            consequences: None,
            plea: "Please never buy ivory and support elephant protection.",
            keywords: &["tusker", "african elephant", "asian elephant"],
        },
    },
    CategoryEntry {
        key: "tiger",
        record: CategoryRecord {
            emoji: "🐅",
            introduction: "I am a tiger, the largest wild cat.",
            message: "As a top predator I keep deer and boar numbers in balance so forests can regrow.",
            explanation: "No two tigers have the same stripes, and their skin is striped too.",
            consequences: None,
            plea: "Please support tiger reserves and never buy tiger products.",
            keywords: &["bengal tiger", "siberian tiger"],
        },
    },
    CategoryEntry {
        key: "lion",
        record: CategoryRecord {
            emoji: "🦁",
            introduction: "I am a lion, the king of the savanna.",
            message: "Lions keep grazing herds healthy by hunting the weak and sick.",
            explanation: "Lions are the only cats that live in family groups, called prides.",
            consequences: None,
            plea: "Please support wildlife reserves that protect lions.",
            keywords: &["lioness", "lion cub"],
        },
    },
    CategoryEntry {
        key: "monkey",
        record: CategoryRecord {
            emoji: "🐒",
            introduction: "I am a monkey, clever and playful.",
            message: "Monkeys spread the seeds of fruit trees as they travel through the forest.",
            explanation: "Some monkeys use tools, like stones to crack nuts.",
            consequences: None,
            plea: "Please never keep wild monkeys as pets.",
            keywords: &["primate", "ape", "macaque", "chimpanzee", "gorilla"],
        },
    },
    CategoryEntry {
        key: "deer",
        record: CategoryRecord {
            emoji: "🦌",
            introduction: "I am a deer, quiet and graceful.",
            message: "Deer browse plants and are food for wolves, tigers, and other predators.",
            explanation: "Male deer grow new antlers every year, among the fastest-growing tissues in nature.",
            consequences: None,
            plea: "Please drive carefully near forests and keep wild deer wild.",
            keywords: &["fawn", "stag", "elk", "moose", "reindeer"],
        },
    },
    CategoryEntry {
        key: "horse",
        record: CategoryRecord {
            emoji: "🐎",
            introduction: "I am a horse, strong and fast.",
            message: "Horses have helped people farm, travel, and explore for thousands of years.",
            explanation: "Horses can sleep standing up thanks to a special locking system in their legs.",
            consequences: None,
            plea: "Please treat working animals with kindness.",
            keywords: &["pony", "stallion", "mare", "foal"],
        },
    },
    CategoryEntry {
        key: "cow",
        record: CategoryRecord {
            emoji: "🐄",
            introduction: "I am a cow, a gentle grazer.",
            message: "Cows give milk, and well-managed grazing can keep meadows rich in flowers.",
            explanation: "Cows have one stomach with four compartments to digest tough grass.",
            consequences: None,
            plea: "Please support farms that care for animals and land.",
            keywords: &["cattle", "calf", "bull", "ox"],
        },
    },
    CategoryEntry {
        key: "fox",
        record: CategoryRecord {
            emoji: "🦊",
            introduction: "I am a fox, clever and adaptable.",
            message: "Foxes control rodents and live everywhere from deserts to cities.",
            explanation: "Foxes use the Earth's magnetic field to help them pounce on hidden prey.",
            consequences: None,
            plea: "Please do not feed wild foxes; let them stay wild.",
            keywords: &["red fox", "vixen"],
        },
    },
    CategoryEntry {
        key: "wolf",
        record: CategoryRecord {
            emoji: "🐺",
            introduction: "I am a wolf, the wild ancestor of dogs.",
            message: "When wolves returned to Yellowstone, rivers, trees, and birds recovered too.",
            explanation: "Wolves live in family packs and can hear other wolves howling from 10 kilometres away.",
            consequences: None,
            plea: "Please support wolf protection and learn to coexist with predators.",
            keywords: &["wolves", "grey wolf", "gray wolf"],
        },
    },
    CategoryEntry {
        key: "rabbit",
        record: CategoryRecord {
            emoji: "🐇",
            introduction: "I am a rabbit, quick and alert.",
            message: "Rabbits are food for foxes, hawks, and owls, and their burrows shelter other animals.",
            explanation: "A rabbit's teeth never stop growing, so they must chew constantly to wear them down.",
            consequences: None,
            plea: "Please give pet rabbits space and never release them into the wild.",
            keywords: &["bunny", "hare"],
        },
    },
    CategoryEntry {
        key: "squirrel",
        record: CategoryRecord {
            emoji: "🐿️",
            introduction: "I am a squirrel, the forest's busy gardener.",
            message: "Squirrels bury nuts and forget many of them, planting thousands of new trees.",
            explanation: "A squirrel may bury up to 10,000 nuts in one autumn.",
            consequences: None,
            plea: "Please plant nut trees and keep cats indoors to help squirrels.",
            keywords: &["chipmunk", "red squirrel"],
        },
    },
    CategoryEntry {
        key: "frog",
        record: CategoryRecord {
            emoji: "🐸",
            introduction: "I am a frog, living between water and land.",
            message: "Frogs eat huge numbers of insects, including mosquitoes.",
            explanation: "Frogs drink and breathe partly through their skin, which makes them very sensitive to pollution.",
            consequences: None,
            plea: "Please keep ponds clean and avoid garden chemicals.",
            keywords: &["toad", "tadpole", "amphibian", "tree frog"],
        },
    },
    CategoryEntry {
        key: "fish",
        record: CategoryRecord {
            emoji: "🐟",
            introduction: "I am a fish, breathing water through my gills.",
            message: "Fish feed birds, bears, seals, and billions of people.",
            explanation: "There are more kinds of fish than all other vertebrates combined.",
            consequences: None,
            plea: "Please choose sustainable seafood and keep waters clean.",
            keywords: &["salmon", "trout", "goldfish", "carp"],
        },
    },
    CategoryEntry {
        key: "turtle",
        record: CategoryRecord {
            emoji: "🐢",
            introduction: "I am a turtle, carrying my home on my back.",
            message: "Sea turtles keep seagrass beds healthy and control jellyfish.",
            explanation: "Turtles have existed for over 200 million years, since the time of the dinosaurs.",
            consequences: None,
            plea: "Please keep plastic out of the sea; I mistake bags for jellyfish.",
            keywords: &["tortoise", "sea turtle", "terrapin"],
        },
    },
    CategoryEntry {
        key: "whale",
        record: CategoryRecord {
            emoji: "🐋",
            introduction: "I am a whale, the giant of the ocean.",
            message: "Whale poo fertilises the ocean and helps tiny plants absorb carbon.",
            explanation: "The blue whale is the largest animal that has ever lived, bigger than any dinosaur.",
            consequences: None,
            plea: "Please support ocean protection and quieter, safer shipping.",
            keywords: &["humpback", "blue whale", "orca"],
        },
    },
    CategoryEntry {
        key: "dolphin",
        record: CategoryRecord {
            emoji: "🐬",
            introduction: "I am a dolphin, clever and social.",
            message: "Dolphins are top predators that keep fish populations healthy.",
            explanation: "Dolphins call each other by unique signature whistles, like names.",
            consequences: None,
            plea: "Please never buy tickets to shows with captive dolphins.",
            keywords: &["porpoise", "bottlenose"],
        },
    },
    // ------------------------------------------------------------------------
    // Birds
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "bird",
        record: CategoryRecord {
            emoji: "🐦",
            introduction: "I am a bird, a feathered descendant of the dinosaurs.",
            message: "Birds spread seeds, pollinate flowers, and eat pests in farms and gardens.",
            explanation: "Some birds migrate more than 70,000 kilometres a year between the poles.",
            consequences: None,
            plea: "Please put out fresh water for birds and keep windows bird-safe.",
            keywords: &["birds", "avian", "songbird", "feather", "beak"],
        },
    },
    CategoryEntry {
        key: "eagle",
        record: CategoryRecord {
            emoji: "🦅",
            introduction: "I am an eagle, soaring high above the land.",
            message: "Eagles are top predators that keep rodent and fish populations in check.",
            explanation: "An eagle's eyesight is about four to eight times sharper than a human's.",
            consequences: None,
            plea: "Please protect tall trees and cliffs where eagles nest.",
            keywords: &["bald eagle", "golden eagle", "hawk", "falcon", "raptor"],
        },
    },
    CategoryEntry {
        key: "owl",
        record: CategoryRecord {
            emoji: "🦉",
            introduction: "I am an owl, the silent hunter of the night.",
            message: "A single barn owl family can eat thousands of mice in a year.",
            explanation: "Soft edges on an owl's feathers let it fly almost silently.",
            consequences: None,
            plea: "Please avoid rat poisons; they harm owls too.",
            keywords: &["barn owl", "owlet"],
        },
    },
    CategoryEntry {
        key: "parrot",
        record: CategoryRecord {
            emoji: "🦜",
            introduction: "I am a parrot, colourful and clever.",
            message: "Parrots spread the seeds of rainforest trees.",
            explanation: "Some parrots can learn hundreds of words and live for over 80 years.",
            consequences: None,
            plea: "Please never buy wild-caught parrots.",
            keywords: &["macaw", "cockatoo", "parakeet"],
        },
    },
    CategoryEntry {
        key: "sparrow",
        record: CategoryRecord {
            emoji: "🐦",
            introduction: "I am a sparrow, a small bird that lives close to people.",
            message: "Sparrows eat insects and weed seeds around farms and cities.",
            explanation: "House sparrows have declined sharply in many cities as nesting holes disappear.",
            consequences: None,
            plea: "Please put up a nest box and grow native plants for insects.",
            keywords: &["house sparrow", "finch"],
        },
    },
    CategoryEntry {
        key: "peacock",
        record: CategoryRecord {
            emoji: "🦚",
            introduction: "I am a peacock, famous for my shimmering tail.",
            message: "Peafowl eat insects, small snakes, and pests in fields.",
            explanation: "A peacock's colours come from tiny structures in the feathers that bend light, not from pigment.",
            consequences: None,
            plea: "Please protect open woodlands where peafowl live.",
            keywords: &["peafowl", "peahen"],
        },
    },
    CategoryEntry {
        key: "penguin",
        record: CategoryRecord {
            emoji: "🐧",
            introduction: "I am a penguin, a bird that flies underwater.",
            message: "Penguins are a sign of a healthy southern ocean full of fish and krill.",
            explanation: "Emperor penguins can dive deeper than 500 metres and hold their breath for over 20 minutes.",
            consequences: None,
            plea: "Please help slow climate change so sea ice can return.",
            keywords: &["emperor penguin", "king penguin"],
        },
    },
    CategoryEntry {
        key: "hummingbird",
        record: CategoryRecord {
            emoji: "🐦",
            introduction: "I am a hummingbird, the tiniest bird of all.",
            message: "Hummingbirds pollinate thousands of kinds of flowers in the Americas.",
            explanation: "My heart can beat more than 1,200 times a minute and my wings beat up to 80 times a second.",
            consequences: None,
            plea: "Please plant tube-shaped native flowers for hummingbirds.",
            keywords: &["hummingbirds"],
        },
    },
    // ------------------------------------------------------------------------
    // Insects and spiders
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "insect",
        record: CategoryRecord {
            emoji: "🐛",
            introduction: "I am an insect, one of the most numerous animals on Earth.",
            message: "Insects pollinate crops, recycle waste, and feed birds, bats, and fish.",
            explanation: "There are thought to be about 10 quintillion insects alive at any moment.",
            consequences: None,
            plea: "Please leave wild corners in gardens for insects.",
            keywords: &["bug", "beetle", "arthropod", "caterpillar"],
        },
    },
    CategoryEntry {
        key: "bee",
        record: CategoryRecord {
            emoji: "🐝",
            introduction: "I am a bee, a tiny worker that feeds the world.",
            message: "Bees pollinate about a third of the food you eat, from apples to almonds.",
            explanation: "A honeybee visits up to 5,000 flowers a day and communicates by dancing.",
            consequences: Some("Without bees, many fruits, vegetables, and nuts would become rare and expensive."),
            plea: "Please save me! Plant flowers and avoid pesticides.",
            keywords: &["honeybee", "bumblebee", "honey bee", "beehive"],
        },
    },
    CategoryEntry {
        key: "butterfly",
        record: CategoryRecord {
            emoji: "🦋",
            introduction: "I am a butterfly, a flying flower.",
            message: "Butterflies pollinate wildflowers and are food for birds.",
            explanation: "Butterflies taste with their feet and see colours humans cannot.",
            consequences: Some("Disappearing butterflies are a warning sign that meadows and gardens are in trouble."),
            plea: "Please save me! Grow host plants for caterpillars and nectar flowers for butterflies.",
            keywords: &["butterflies", "monarch", "moth"],
        },
    },
    CategoryEntry {
        key: "ant",
        record: CategoryRecord {
            emoji: "🐜",
            introduction: "I am an ant, part of a super-organised colony.",
            message: "Ants aerate soil, spread seeds, and clean up dead insects.",
            explanation: "Ants can carry objects many times their own body weight.",
            consequences: None,
            plea: "Please leave ant nests in the wild undisturbed.",
            keywords: &["ants", "anthill"],
        },
    },
    CategoryEntry {
        key: "ladybug",
        record: CategoryRecord {
            emoji: "🐞",
            introduction: "I am a ladybug, the gardener's little helper.",
            message: "A single ladybug can eat around 5,000 aphids in its lifetime.",
            explanation: "My bright spots warn birds that I taste bitter.",
            consequences: None,
            plea: "Please avoid insecticides so ladybugs can protect your plants.",
            keywords: &["ladybird", "lady beetle"],
        },
    },
    CategoryEntry {
        key: "dragonfly",
        record: CategoryRecord {
            emoji: "🪰",
            introduction: "I am a dragonfly, an ancient aerial hunter.",
            message: "Dragonflies eat mosquitoes and show that a pond is healthy.",
            explanation: "Dragonflies catch more than 90% of the prey they chase, among the best hunters on Earth.",
            consequences: None,
            plea: "Please keep ponds clean and free of chemicals.",
            keywords: &["damselfly"],
        },
    },
    CategoryEntry {
        key: "spider",
        record: CategoryRecord {
            emoji: "🕷️",
            introduction: "I am a spider, a skilled silk engineer.",
            message: "Spiders eat enormous numbers of pests and flies.",
            explanation: "Spider silk is stronger than steel of the same thickness.",
            consequences: None,
            plea: "Please let spiders be; they are natural pest controllers.",
            keywords: &["spiderweb", "cobweb", "tarantula", "arachnid"],
        },
    },
    // ------------------------------------------------------------------------
    // Reptiles
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "snake",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a snake, a misunderstood predator.",
            message: "Snakes control rats and mice that spread disease and eat crops.",
            explanation: "Snakes smell with their forked tongues and can sense heat or vibrations.",
            consequences: None,
            plea: "Please keep a safe distance and never harm a snake; call an expert instead.",
            keywords: &["serpent", "reptile"],
        },
    },
    CategoryEntry {
        key: "lizard",
        record: CategoryRecord {
            emoji: "🦎",
            introduction: "I am a lizard, basking in the sun.",
            message: "Lizards eat insects and are food for birds and snakes.",
            explanation: "Some lizards can drop their tails to escape predators and grow new ones.",
            consequences: None,
            plea: "Please leave rocks and logs in place for lizards to hide.",
            keywords: &["gecko", "iguana", "chameleon", "komodo dragon"],
        },
    },
    CategoryEntry {
        key: "python",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a python, a powerful constrictor.",
            message: "Pythons control rodents and are important predators in tropical ecosystems.",
            explanation: "Pythons are not venomous; they squeeze their prey and can go months between meals.",
            consequences: None,
            plea: "Please never release pet pythons into the wild.",
            keywords: &["reticulated python", "ball python", "burmese python"],
        },
    },
    CategoryEntry {
        key: "cobra",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a cobra, famous for my hood.",
            message: "Cobras keep rat populations down around farms and villages.",
            explanation: "King cobras are the longest venomous snakes and mostly eat other snakes.",
            consequences: None,
            plea: "Please stay calm and back away slowly if you meet a cobra.",
            keywords: &["king cobra", "spitting cobra"],
        },
    },
    CategoryEntry {
        key: "rattlesnake",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a rattlesnake, and my rattle is a polite warning.",
            message: "Rattlesnakes eat rodents that can spread disease like hantavirus.",
            explanation: "My rattle is made of hollow segments of keratin, the same material as your fingernails.",
            consequences: None,
            plea: "Please step back when you hear a rattle and let me move away.",
            keywords: &["rattler", "diamondback"],
        },
    },
    CategoryEntry {
        key: "anaconda",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am an anaconda, the heaviest snake in the world.",
            message: "Anacondas are top predators in South American rivers and swamps.",
            explanation: "Green anacondas can weigh over 200 kilograms and spend most of their lives in water.",
            consequences: None,
            plea: "Please protect the wetlands of the Amazon where anacondas live.",
            keywords: &["green anaconda", "eunectes"],
        },
    },
    CategoryEntry {
        key: "red-bellied-black-snake",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a red-bellied black snake from eastern Australia.",
            message: "I hunt frogs and small animals along creeks and swamps, and I am shy around people.",
            explanation: "I can eat cane toads but their poison often harms me, so invasive toads threaten my kind.",
            consequences: None,
            plea: "Please leave me alone; I only bite if cornered.",
            keywords: &["red-bellied black snake", "pseudechis porphyriacus"],
        },
    },
    CategoryEntry {
        key: "garter-snake",
        record: CategoryRecord {
            emoji: "🐍",
            introduction: "I am a garter snake, a harmless garden visitor.",
            message: "Garter snakes eat slugs, snails, and insects that damage plants.",
            explanation: "Thousands of garter snakes gather in dens to survive the winter together.",
            consequences: None,
            plea: "Please welcome me in your garden; I am harmless.",
            keywords: &["garter snake", "thamnophis"],
        },
    },
    // ------------------------------------------------------------------------
    // Pollutants and pests
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "plastic",
        record: CategoryRecord {
            emoji: "🧴",
            introduction: "I am plastic, and I can last for hundreds of years.",
            message: "I am useful, but once thrown away I break into microplastics that end up in water, soil, and food.",
            explanation: "About 11 million tonnes of plastic enter the ocean every year, harming turtles, birds, and fish.",
            consequences: None,
            plea: "Please avoid me! Refuse single-use plastic, reuse what you have, and recycle properly.",
            keywords: &["plastic bag", "plastic bottle", "polyethylene", "packaging", "wrapper"],
        },
    },
    CategoryEntry {
        key: "trash",
        record: CategoryRecord {
            emoji: "🗑️",
            introduction: "I am trash, waste that ended up where it does not belong.",
            message: "Litter blocks drains, poisons animals, and spoils beautiful places.",
            explanation: "The world produces more than 2 billion tonnes of household waste every year.",
            consequences: None,
            plea: "Please eliminate me! Put waste in the right bin and reduce what you throw away.",
            keywords: &["garbage", "litter", "rubbish", "waste", "debris", "landfill", "junk"],
        },
    },
    CategoryEntry {
        key: "cigarette",
        record: CategoryRecord {
            emoji: "🚬",
            introduction: "I am a cigarette butt, the most littered item on Earth.",
            message: "My filter is made of plastic and leaks toxic chemicals into water and soil.",
            explanation: "Around 4.5 trillion cigarette butts are littered every year.",
            consequences: None,
            plea: "Please avoid me! Never flick butts on the ground or into drains.",
            keywords: &["cigarette butt", "tobacco", "ashtray"],
        },
    },
    CategoryEntry {
        key: "pollution",
        record: CategoryRecord {
            emoji: "🏭",
            introduction: "I am pollution, poisoning air, water, and land.",
            message: "Smoke and chemicals make people sick and harm animals and plants.",
            explanation: "Air pollution contributes to millions of early deaths around the world every year.",
            consequences: None,
            plea: "Please fight me! Walk, cycle, save energy, and never burn rubbish.",
            keywords: &["smog", "smoke", "exhaust", "emission", "contamination"],
        },
    },
    CategoryEntry {
        key: "oil-spill",
        record: CategoryRecord {
            emoji: "🛢️",
            introduction: "I am an oil spill, a slick of poison on the water.",
            message: "Oil coats feathers and fur so animals cannot stay warm or float.",
            explanation: "A single litre of oil can contaminate up to a million litres of water.",
            consequences: None,
            plea: "Please help prevent me! Dispose of motor oil properly and use less fuel.",
            keywords: &["oil spill", "petroleum", "crude oil", "oil slick"],
        },
    },
    CategoryEntry {
        key: "mosquito",
        record: CategoryRecord {
            emoji: "🦟",
            introduction: "I am a mosquito, a tiny insect with a big bite.",
            message: "Some mosquitoes spread diseases like malaria and dengue.",
            explanation: "Only female mosquitoes bite; they need blood to make eggs.",
            consequences: None,
            plea: "Please avoid me! Empty standing water and use nets and repellent.",
            keywords: &["mosquitoes", "gnat"],
        },
    },
    CategoryEntry {
        key: "cockroach",
        record: CategoryRecord {
            emoji: "🪳",
            introduction: "I am a cockroach, a survivor from before the dinosaurs.",
            message: "Indoors, cockroaches spread germs and trigger allergies.",
            explanation: "Cockroaches can live for a week without their heads.",
            consequences: None,
            plea: "Please eliminate me safely! Keep food sealed and kitchens clean.",
            keywords: &["roach", "cockroaches"],
        },
    },
    // ------------------------------------------------------------------------
    // General objects
    // ------------------------------------------------------------------------
    CategoryEntry {
        key: "Object",
        record: CategoryRecord {
            emoji: "🔍",
            introduction: "I am an everyday object.",
            message: "Every object is made from materials that came from nature, like metal, wood, or oil.",
            explanation: "Using things for longer and repairing them saves the energy and resources needed to make new ones.",
            consequences: None,
            plea: "Please reuse and repair things before replacing them.",
            keywords: &[],
        },
    },
    CategoryEntry {
        key: "car",
        record: CategoryRecord {
            emoji: "🚗",
            introduction: "I am a car.",
            message: "Cars help people travel, and electric cars and car-sharing make journeys cleaner.",
            explanation: "Transport is one of the largest sources of greenhouse gases worldwide.",
            consequences: None,
            plea: "Please walk, cycle, or share rides when you can.",
            keywords: &["vehicle", "automobile", "truck", "sedan"],
        },
    },
    CategoryEntry {
        key: "phone",
        record: CategoryRecord {
            emoji: "📱",
            introduction: "I am a phone.",
            message: "Phones connect people and can even help identify plants and animals.",
            explanation: "A phone contains dozens of metals, including gold and rare earth elements, that are mined from the ground.",
            consequences: None,
            plea: "Please keep your phone longer and recycle it properly.",
            keywords: &["smartphone", "mobile phone", "cellphone", "telephone"],
        },
    },
    CategoryEntry {
        key: "laptop",
        record: CategoryRecord {
            emoji: "💻",
            introduction: "I am a laptop.",
            message: "Computers help people learn, create, and study nature from anywhere.",
            explanation: "Electronic waste is the fastest-growing waste stream, and only a fraction is recycled.",
            consequences: None,
            plea: "Please repair and recycle electronics responsibly.",
            keywords: &["computer", "notebook computer", "keyboard", "monitor"],
        },
    },
    CategoryEntry {
        key: "chair",
        record: CategoryRecord {
            emoji: "🪑",
            introduction: "I am a chair.",
            message: "Furniture made from certified wood helps keep forests healthy.",
            explanation: "Well-made furniture can last for generations and be repaired many times.",
            consequences: None,
            plea: "Please choose second-hand or certified wooden furniture.",
            keywords: &["furniture", "sofa", "stool"],
        },
    },
    CategoryEntry {
        key: "book",
        record: CategoryRecord {
            emoji: "📚",
            introduction: "I am a book.",
            message: "Books share knowledge about nature with people all over the world.",
            explanation: "Recycled paper uses much less water and energy than paper made from fresh trees.",
            consequences: None,
            plea: "Please share books and choose recycled paper.",
            keywords: &["novel", "magazine", "textbook"],
        },
    },
    CategoryEntry {
        key: "cup",
        record: CategoryRecord {
            emoji: "☕",
            introduction: "I am a cup.",
            message: "A reusable cup can replace hundreds of throwaway cups every year.",
            explanation: "Most disposable coffee cups are lined with plastic, so they are hard to recycle.",
            consequences: None,
            plea: "Please carry a reusable cup and skip single-use ones.",
            keywords: &["coffee cup", "travel mug"],
        },
    },
    CategoryEntry {
        key: "bicycle",
        record: CategoryRecord {
            emoji: "🚲",
            introduction: "I am a bicycle.",
            message: "Bicycles are one of the cleanest ways to travel, with zero exhaust.",
            explanation: "Cycling a short trip instead of driving saves about 150 grams of carbon dioxide per kilometre.",
            consequences: None,
            plea: "Please ride me more and drive less.",
            keywords: &["bike", "cycling"],
        },
    },
];
