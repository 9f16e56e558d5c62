// Narrative generator tables
//
// Per-field literal text for categories the knowledge base does not carry
// (snake species reached through the snake sub-resolver, plus common labels
// that only arrive through tier-5 passthrough). Fields are independent: a key
// may have an introduction but no consequences entry, in which case that field
// falls through to the bucket or generic template.
//
// Priority lists hold specific names that must win over a generic word they
// contain ("cherry blossom" before "blossom").

pub const EMOJIS: &[(&str, &str)] = &[
    ("viper", "🐍"),
    ("boa", "🐍"),
    ("mamba", "🐍"),
    ("adder", "🐍"),
    ("copperhead", "🐍"),
    ("cottonmouth", "🐍"),
    ("kingsnake", "🐍"),
    ("corn-snake", "🐍"),
    ("milk-snake", "🐍"),
    ("hognose-snake", "🐍"),
    ("sequoia", "🌲"),
    ("cedar", "🌲"),
    ("jasmine", "🌼"),
    ("marigold", "🌼"),
    ("poppy", "🌺"),
    ("cherry blossom", "🌸"),
    ("cherry", "🍒"),
    ("watermelon", "🍉"),
    ("pineapple", "🍍"),
    ("lemon", "🍋"),
    ("crow", "🐦‍⬛"),
    ("pigeon", "🐦"),
    ("duck", "🦆"),
    ("flamingo", "🦩"),
    ("giraffe", "🦒"),
    ("zebra", "🦓"),
    ("kangaroo", "🦘"),
    ("koala", "🐨"),
    ("panda", "🐼"),
    ("camel", "🐪"),
    ("shark", "🦈"),
    ("octopus", "🐙"),
    ("jellyfish", "🪼"),
    ("crab", "🦀"),
    ("snail", "🐌"),
    ("earthworm", "🪱"),
    ("grasshopper", "🦗"),
    ("firefly", "✨"),
    ("wasp", "🐝"),
    ("locust", "🦗"),
];

pub const INTRODUCTIONS: &[(&str, &str)] = &[
    ("viper", "I am a viper, a venomous snake with long folding fangs."),
    ("boa", "I am a boa, a strong constrictor of the Americas."),
    ("mamba", "I am a mamba, one of Africa's fastest snakes."),
    ("adder", "I am an adder, a small venomous snake with a zigzag back."),
    ("copperhead", "I am a copperhead, camouflaged among fallen leaves."),
    ("cottonmouth", "I am a cottonmouth, a water snake of southern swamps."),
    ("kingsnake", "I am a kingsnake, a snake that hunts other snakes."),
    ("corn-snake", "I am a corn snake, gentle and brightly patterned."),
    ("milk-snake", "I am a milk snake, harmless but dressed in warning colours."),
    ("hognose-snake", "I am a hognose snake, famous for playing dead."),
    ("sequoia", "I am a giant sequoia, one of the largest living things on Earth."),
    ("cedar", "I am a cedar tree, fragrant and long-lived."),
    ("jasmine", "I am jasmine, a small flower with a big scent."),
    ("marigold", "I am a marigold, bright orange and tough."),
    ("poppy", "I am a poppy, a red flower of fields and meadows."),
    ("cherry blossom", "I am a cherry blossom, the pink herald of spring."),
    ("cherry", "I am a cherry, a small stone fruit loved by birds and people."),
    ("watermelon", "I am a watermelon, full of juice on a hot day."),
    ("pineapple", "I am a pineapple, a tropical fruit made of many berries."),
    ("lemon", "I am a lemon, sour and sunny."),
    ("crow", "I am a crow, one of the cleverest birds alive."),
    ("pigeon", "I am a pigeon, a city bird with an amazing sense of direction."),
    ("duck", "I am a duck, at home on ponds and rivers."),
    ("flamingo", "I am a flamingo, pink from the food I eat."),
    ("giraffe", "I am a giraffe, the tallest animal on Earth."),
    ("zebra", "I am a zebra, and no two of us share the same stripes."),
    ("kangaroo", "I am a kangaroo, hopping across Australia."),
    ("koala", "I am a koala, napping in the eucalyptus trees."),
    ("panda", "I am a giant panda, living in bamboo forests."),
    ("camel", "I am a camel, built for life in the desert."),
    ("shark", "I am a shark, a guardian of healthy oceans."),
    ("octopus", "I am an octopus, with eight arms and three hearts."),
    ("jellyfish", "I am a jellyfish, drifting through the sea for millions of years."),
    ("crab", "I am a crab, scuttling sideways along the shore."),
    ("snail", "I am a snail, carrying my spiral house on my back."),
    ("earthworm", "I am an earthworm, a hidden farmer of the soil."),
    ("grasshopper", "I am a grasshopper, a champion jumper of the meadow."),
    ("firefly", "I am a firefly, lighting up summer nights."),
    ("wasp", "I am a wasp, a busy hunter and pollinator."),
    ("locust", "I am a locust, a grasshopper that can swarm in millions."),
];

pub const MESSAGES: &[(&str, &str)] = &[
    ("viper", "Vipers control rodents in fields, forests, and deserts."),
    ("boa", "Boas keep rats and mice in check across tropical forests."),
    ("mamba", "Mambas hunt rodents and birds and avoid people whenever they can."),
    ("adder", "Adders eat voles and mice in heaths and woodland edges."),
    ("copperhead", "Copperheads eat mice and help keep forest rodents in balance."),
    ("cottonmouth", "Cottonmouths eat fish, frogs, and rodents around wetlands."),
    ("kingsnake", "Kingsnakes even eat venomous snakes, keeping their numbers down."),
    ("corn-snake", "Corn snakes protect grain stores by hunting mice."),
    ("milk-snake", "Milk snakes eat rodents around farms and barns."),
    ("hognose-snake", "Hognose snakes eat toads and are almost never dangerous to people."),
    ("sequoia", "My huge trunk stores tons of carbon and my bark resists fire."),
    ("cedar", "My scented wood repels insects and my branches shelter birds."),
    ("jasmine", "My night-time scent attracts moths that pollinate me."),
    ("marigold", "My flowers keep some pests away and attract helpful insects to gardens."),
    ("poppy", "My flowers feed bees and brighten fields after the soil is disturbed."),
    ("cherry blossom", "My blossoms give bees an early feast in spring."),
    ("cherry", "My blossoms feed bees, and my fruit feeds birds and people."),
    ("watermelon", "I am more than 90% water and keep people hydrated."),
    ("pineapple", "My fruit is rich in vitamin C and grows from the top of an old pineapple."),
    ("lemon", "My juice is full of vitamin C and my blossoms feed bees."),
    ("crow", "Crows clean up waste and can even use tools."),
    ("pigeon", "Pigeons carried messages for people for thousands of years."),
    ("duck", "Ducks spread water plants and eat insects around wetlands."),
    ("flamingo", "Flamingos filter tiny shrimp and algae from salty lakes."),
    ("giraffe", "Giraffes prune tall trees and spread their seeds across the savanna."),
    ("zebra", "Zebras graze tough grasses, making way for other grazers."),
    ("kangaroo", "Kangaroos graze grasses and help spread seeds."),
    ("koala", "Koalas are a symbol of healthy eucalyptus forests."),
    ("panda", "Pandas spread bamboo seeds and help keep their forests growing."),
    ("camel", "Camels carry people and goods across deserts without needing water for days."),
    ("shark", "Sharks keep fish populations healthy by hunting the weak and sick."),
    ("octopus", "Octopuses are clever hunters that can solve puzzles."),
    ("jellyfish", "Jellyfish feed turtles and many fish."),
    ("crab", "Crabs clean up the seabed and shoreline."),
    ("snail", "Snails recycle dead leaves into soil nutrients."),
    ("earthworm", "Earthworms dig tunnels that let air and water reach plant roots."),
    ("grasshopper", "Grasshoppers are food for birds, lizards, and spiders."),
    ("firefly", "Fireflies are a sign of clean, dark, healthy land."),
    ("wasp", "Wasps eat garden pests and pollinate some flowers."),
    ("locust", "Locust swarms can strip fields bare in hours."),
];

pub const EXPLANATIONS: &[(&str, &str)] = &[
    ("viper", "Vipers sense the body heat of their prey with special pits on their heads."),
    ("boa", "Boas give birth to live young instead of laying eggs."),
    ("mamba", "Black mambas can move at over 15 kilometres per hour."),
    ("adder", "The adder is the only venomous snake native to Britain."),
    ("copperhead", "Young copperheads wiggle bright yellow tail tips to lure frogs."),
    ("cottonmouth", "I open my mouth wide to show its white lining as a warning."),
    ("kingsnake", "Kingsnakes are immune to the venom of many other snakes."),
    ("corn-snake", "Corn snakes got their name from hanging around corn stores."),
    ("milk-snake", "My colours copy venomous coral snakes to fool predators."),
    ("hognose-snake", "When threatened, I roll over, stick out my tongue, and pretend to be dead."),
    ("sequoia", "Giant sequoias can live for more than 3,000 years."),
    ("cedar", "Cedars were used to build temples and ships in ancient times."),
    ("jasmine", "Jasmine flowers open at night when their scent is strongest."),
    ("marigold", "Marigold roots release chemicals that keep some soil pests away."),
    ("poppy", "Poppy seeds can wait in the soil for decades before sprouting."),
    ("cherry blossom", "Cherry blossoms usually last only about a week on the tree."),
    ("cherry", "Cherry trees need bees to pollinate their blossoms."),
    ("watermelon", "Watermelons first grew wild in Africa thousands of years ago."),
    ("pineapple", "A pineapple takes about two years to grow."),
    ("lemon", "Lemon trees can flower and fruit at the same time."),
    ("crow", "Crows remember human faces and can hold grudges for years."),
    ("pigeon", "Pigeons navigate using the Sun and Earth's magnetic field."),
    ("duck", "Ducks' feathers are waterproofed with oil from a special gland."),
    ("flamingo", "Flamingos are born grey and turn pink from pigments in their food."),
    ("giraffe", "A giraffe's tongue is about 50 centimetres long and dark to avoid sunburn."),
    ("zebra", "Stripes may help zebras stay cool and keep biting flies away."),
    ("kangaroo", "Baby kangaroos, called joeys, are the size of a jellybean at birth."),
    ("koala", "Koalas sleep up to 20 hours a day to save energy."),
    ("panda", "Pandas eat up to 38 kilograms of bamboo every day."),
    ("camel", "A camel's hump stores fat, not water."),
    ("shark", "Sharks existed before trees, more than 400 million years ago."),
    ("octopus", "Octopuses can change colour and texture in a fraction of a second."),
    ("jellyfish", "Jellyfish have no brain, heart, or bones."),
    ("crab", "Crabs regrow lost legs when they moult."),
    ("snail", "Some snails can sleep for up to three years."),
    ("earthworm", "Charles Darwin spent decades studying how earthworms build soil."),
    ("grasshopper", "Grasshoppers hear with organs on their bellies."),
    ("firefly", "Fireflies make light with a chemical reaction that gives off almost no heat."),
    ("wasp", "Fig trees rely on tiny wasps to pollinate them."),
    ("locust", "A large swarm can eat as much food in a day as millions of people."),
];

pub const CONSEQUENCES: &[(&str, &str)] = &[
    ("sequoia", "Logging once cut down most ancient sequoias, and hotter wildfires now threaten the rest."),
    ("cedar", "When cedar forests vanish, mountain soils wash away."),
    ("jasmine", "Without night pollinators like moths, jasmine could not set seed."),
    ("marigold", "Fewer flowers in gardens means fewer helpful insects to protect crops."),
    ("poppy", "Modern farming has removed poppies from many fields, and their pollinators with them."),
    ("cherry blossom", "Warmer winters are making cherry trees bloom before their pollinators are ready."),
    ("cherry", "Without bees, cherry harvests would fail."),
    ("watermelon", "Without pollinators, watermelon flowers would not produce fruit."),
    ("pineapple", "Large plantations can clear rainforest and drain soils if they are not managed well."),
    ("lemon", "Citrus diseases spread by insects are destroying lemon groves."),
    ("earthworm", "Without earthworms, soil becomes hard and crops struggle to grow."),
    ("firefly", "Light pollution and pesticides are making fireflies disappear."),
];

pub const PLEAS: &[(&str, &str)] = &[
    ("sequoia", "Please save me! Support the protection of ancient forests."),
    ("cedar", "Please save me! Choose certified wood and protect mountain forests."),
    ("jasmine", "Please save me! Plant fragrant flowers for night pollinators."),
    ("marigold", "Please save me! Grow marigolds instead of spraying chemicals."),
    ("poppy", "Please save me! Leave wild field edges unsprayed."),
    ("cherry blossom", "Please save me! Plant flowering trees for early bees."),
    ("earthworm", "Please save me! Avoid chemicals and add compost to your soil."),
    ("firefly", "Please save me! Turn off outdoor lights at night."),
    ("locust", "Please help control me! Support early warning systems that stop swarms."),
];

pub const FLOWER_PRIORITY: &[&str] = &["cherry blossom", "sunflower", "jasmine", "marigold", "poppy"];

pub const FRUIT_PRIORITY: &[&str] = &["pineapple", "watermelon", "cherry", "lemon"];

pub const SNAKE_PRIORITY: &[&str] = &[
    "cottonmouth",
    "copperhead",
    "kingsnake",
    "hognose-snake",
    "corn-snake",
    "milk-snake",
    "mamba",
    "viper",
    "adder",
    "boa",
];
