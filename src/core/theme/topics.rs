//! Curated topic map.
//!
//! Defined once as static data and never mutated. Keywords are
//! lower-case. Order matters: earlier topics win ties.

/// Topic label -> representative keywords, in classification order
pub const TOPIC_MAP: &[(&str, &[&str])] = &[
    (
        "Water Cycle",
        &[
            "evaporation",
            "condensation",
            "precipitation",
            "collection",
            "water vapor",
            "cloud",
            "runoff",
        ],
    ),
    (
        "Weather",
        &[
            "weather",
            "temperature",
            "forecast",
            "rain",
            "snow",
            "wind",
            "storm",
            "thermometer",
            "cloud",
        ],
    ),
    (
        "Seasons",
        &["season", "spring", "summer", "autumn", "fall", "winter"],
    ),
    (
        "Plants",
        &[
            "seed", "root", "stem", "leaf", "flower", "sprout", "soil", "photosynthesis",
        ],
    ),
    (
        "Animals",
        &[
            "habitat",
            "mammal",
            "reptile",
            "amphibian",
            "insect",
            "predator",
            "prey",
            "hibernate",
            "migrate",
        ],
    ),
    (
        "Life Cycles",
        &["egg", "larva", "pupa", "caterpillar", "cocoon", "tadpole", "life cycle"],
    ),
    (
        "Human Body",
        &["skeleton", "muscle", "heart", "lungs", "brain", "senses", "bones"],
    ),
    (
        "Earth and Rocks",
        &["rock", "mineral", "erosion", "volcano", "earthquake", "fossil", "sediment"],
    ),
    (
        "Space",
        &["planet", "moon", "star", "orbit", "sun", "astronaut", "telescope", "solar system"],
    ),
    (
        "Matter",
        &["solid", "liquid", "gas", "mass", "volume", "melt", "freeze", "matter"],
    ),
    (
        "Energy and Forces",
        &["energy", "force", "motion", "magnet", "push", "pull", "gravity", "friction"],
    ),
    (
        "Community Helpers",
        &[
            "firefighter",
            "police officer",
            "doctor",
            "nurse",
            "mail carrier",
            "teacher",
            "community",
        ],
    ),
    (
        "Family",
        &["family", "parent", "sibling", "grandparent", "cousin", "brother", "sister"],
    ),
    (
        "Feelings",
        &["happy", "sad", "angry", "afraid", "proud", "lonely", "feelings", "emotion"],
    ),
    (
        "Food and Nutrition",
        &["fruit", "vegetable", "grain", "protein", "dairy", "healthy", "nutrition"],
    ),
    (
        "Economics",
        &["goods", "services", "money", "buyer", "seller", "trade", "needs", "wants"],
    ),
    (
        "Government and Citizenship",
        &["citizen", "vote", "law", "rules", "government", "mayor", "president", "leader"],
    ),
    (
        "Geography",
        &["map", "globe", "continent", "ocean", "river", "mountain", "compass", "landform"],
    ),
    (
        "Transportation",
        &["car", "bus", "train", "airplane", "boat", "bicycle", "transportation", "travel"],
    ),
];
