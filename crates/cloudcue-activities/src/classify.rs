//! Place category classification.
//!
//! Maps Geoapify category slugs (`catering.restaurant`,
//! `entertainment.culture.theatre`, ...) and place names to an emoji, a
//! human label and a tag list.

/// Display metadata for a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDisplay {
    pub emoji: String,
    pub category: String,
    pub tags: Vec<String>,
}

struct CategoryEntry {
    slug: &'static str,
    emoji: &'static str,
    label: &'static str,
    tags: &'static [&'static str],
    /// Broad bucket that says little about the place itself
    generic: bool,
}

const fn entry(
    slug: &'static str,
    emoji: &'static str,
    label: &'static str,
    tags: &'static [&'static str],
) -> CategoryEntry {
    CategoryEntry {
        slug,
        emoji,
        label,
        tags,
        generic: false,
    }
}

const fn generic(slug: &'static str) -> CategoryEntry {
    CategoryEntry {
        slug,
        emoji: "📍",
        label: "Point of Interest",
        tags: &["Explore"],
        generic: true,
    }
}

const CATEGORY_TABLE: &[CategoryEntry] = &[
    entry("catering", "🍴", "Food & Drink", &["Food"]),
    entry("catering.restaurant", "🍽️", "Restaurant", &["Food", "Dining"]),
    entry("catering.cafe", "☕", "Café", &["Coffee", "Food"]),
    entry("catering.bar", "🍸", "Bar", &["Nightlife", "Drinks"]),
    entry("catering.pub", "🍺", "Pub", &["Nightlife", "Drinks"]),
    entry("catering.fast_food", "🍔", "Fast Food", &["Food", "Quick Bite"]),
    entry("catering.ice_cream", "🍦", "Ice Cream", &["Dessert", "Food"]),
    entry("entertainment.museum", "🏛️", "Museum", &["Culture", "Indoor"]),
    entry("entertainment.culture", "🎨", "Culture", &["Culture", "Indoor"]),
    entry("entertainment.culture.theatre", "🎭", "Theatre", &["Culture", "Indoor", "Nightlife"]),
    entry("entertainment.culture.gallery", "🖼️", "Gallery", &["Art", "Culture", "Indoor"]),
    entry("entertainment.cinema", "🎬", "Cinema", &["Movies", "Indoor"]),
    entry("entertainment.zoo", "🦁", "Zoo", &["Animals", "Outdoor", "Family"]),
    entry("entertainment.aquarium", "🐠", "Aquarium", &["Animals", "Indoor", "Family"]),
    entry("entertainment.planetarium", "🔭", "Planetarium", &["Science", "Indoor"]),
    entry("entertainment.bowling_alley", "🎳", "Bowling", &["Games", "Indoor"]),
    entry("entertainment.escape_game", "🔐", "Escape Room", &["Games", "Indoor"]),
    entry("entertainment.theme_park", "🎢", "Theme Park", &["Thrills", "Outdoor", "Family"]),
    entry("leisure.park", "🌳", "Park", &["Nature", "Outdoor"]),
    entry("leisure.park.garden", "🌷", "Garden", &["Nature", "Outdoor"]),
    entry("leisure.playground", "🛝", "Playground", &["Family", "Outdoor"]),
    entry("leisure.spa", "💆", "Spa", &["Relaxation", "Indoor"]),
    entry("natural.beach", "🏖️", "Beach", &["Outdoor", "Relaxation"]),
    entry("natural.forest", "🌲", "Forest", &["Nature", "Hiking", "Outdoor"]),
    entry("natural.mountain.peak", "⛰️", "Mountain", &["Hiking", "Outdoor"]),
    entry("tourism.attraction", "📸", "Attraction", &["Sightseeing"]),
    entry("tourism.attraction.viewpoint", "🌄", "Viewpoint", &["Sightseeing", "Outdoor"]),
    entry("tourism.sights.castle", "🏰", "Castle", &["History", "Sightseeing"]),
    entry("tourism.sights.memorial", "🗿", "Memorial", &["History"]),
    entry("accommodation.hotel", "🏨", "Hotel", &["Stay"]),
    entry("commercial.shopping_mall", "🛍️", "Shopping Mall", &["Shopping", "Indoor"]),
    entry("commercial.marketplace", "🧺", "Market", &["Shopping", "Food"]),
    entry("sport.fitness", "💪", "Gym", &["Fitness", "Indoor"]),
    entry("sport.swimming_pool", "🏊", "Swimming Pool", &["Fitness", "Swimming"]),
    entry("sport.stadium", "🏟️", "Stadium", &["Sports", "Events"]),
    generic("tourism"),
    generic("tourism.sights"),
    generic("entertainment"),
    generic("leisure"),
    generic("natural"),
    generic("commercial"),
    generic("sport"),
];

struct NameRule {
    keywords: &'static [&'static str],
    emoji: &'static str,
    label: &'static str,
    tags: &'static [&'static str],
}

/// Name heuristics, checked in order.
const NAME_RULES: &[NameRule] = &[
    NameRule {
        keywords: &["restaurant", "bistro", "diner", "grill"],
        emoji: "🍽️",
        label: "Restaurant",
        tags: &["Food", "Dining"],
    },
    NameRule {
        keywords: &["cafe", "café", "coffee"],
        emoji: "☕",
        label: "Café",
        tags: &["Coffee", "Food"],
    },
    NameRule {
        keywords: &["bar", "pub", "taproom"],
        emoji: "🍸",
        label: "Bar",
        tags: &["Nightlife", "Drinks"],
    },
    NameRule {
        keywords: &["museum"],
        emoji: "🏛️",
        label: "Museum",
        tags: &["Culture", "Indoor"],
    },
    NameRule {
        keywords: &["park"],
        emoji: "🌳",
        label: "Park",
        tags: &["Nature", "Outdoor"],
    },
    NameRule {
        keywords: &["theatre", "theater"],
        emoji: "🎭",
        label: "Theatre",
        tags: &["Culture", "Indoor", "Nightlife"],
    },
    NameRule {
        keywords: &["hotel", "inn"],
        emoji: "🏨",
        label: "Hotel",
        tags: &["Stay"],
    },
    NameRule {
        keywords: &["mall"],
        emoji: "🛍️",
        label: "Shopping Mall",
        tags: &["Shopping", "Indoor"],
    },
    NameRule {
        keywords: &["gym", "fitness"],
        emoji: "💪",
        label: "Gym",
        tags: &["Fitness", "Indoor"],
    },
    NameRule {
        keywords: &["spa"],
        emoji: "💆",
        label: "Spa",
        tags: &["Relaxation", "Indoor"],
    },
];

const FALLBACK_EMOJIS: &[&str] = &["✨", "🎯", "🗺️", "🌟", "🎈", "📸"];
const FALLBACK_LABEL: &str = "Point of Interest";
const FALLBACK_TAGS: &[&str] = &["Explore", "Local"];

fn display(emoji: &str, label: &str, tags: &[&str]) -> PlaceDisplay {
    PlaceDisplay {
        emoji: emoji.to_string(),
        category: label.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// Table entry for a slug, walking up the hierarchy
/// (`catering.restaurant.pizza` falls back to `catering.restaurant`).
fn lookup_slug(slug: &str) -> Option<&'static CategoryEntry> {
    let mut current = slug.trim();
    loop {
        if let Some(entry) = CATEGORY_TABLE.iter().find(|e| e.slug == current) {
            return Some(entry);
        }
        match current.rfind('.') {
            Some(idx) => current = &current[..idx],
            None => return None,
        }
    }
}

/// Whole-word match, allowing a plural "s".
fn name_matches(words: &[String], keyword: &str) -> bool {
    words
        .iter()
        .any(|w| w == keyword || w.strip_suffix('s') == Some(keyword))
}

fn classify_by_name(name: &str) -> Option<PlaceDisplay> {
    let lowered = name.to_lowercase();
    let words: Vec<String> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();

    NAME_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|k| name_matches(&words, k)))
        .map(|rule| display(rule.emoji, rule.label, rule.tags))
}

fn fallback(index: usize) -> PlaceDisplay {
    let emoji = FALLBACK_EMOJIS[index % FALLBACK_EMOJIS.len()];
    display(emoji, FALLBACK_LABEL, FALLBACK_TAGS)
}

/// Classify a single category slug and place name.
///
/// Direct slug match first; an unmatched or generic slug falls through to name
/// heuristics and then to a fallback emoji picked by `index`.
pub fn classify_place(slug: &str, name: &str, index: usize) -> PlaceDisplay {
    if let Some(entry) = lookup_slug(slug).filter(|e| !e.generic) {
        return display(entry.emoji, entry.label, entry.tags);
    }

    classify_by_name(name).unwrap_or_else(|| fallback(index))
}

/// Classify a place carrying several slugs: the most specific known,
/// non-generic slug wins.
pub fn classify_categories<S: AsRef<str>>(slugs: &[S], name: &str, index: usize) -> PlaceDisplay {
    let best = slugs
        .iter()
        .filter_map(|s| lookup_slug(s.as_ref()))
        .filter(|e| !e.generic)
        .max_by_key(|e| e.slug.split('.').count());

    match best {
        Some(entry) => display(entry.emoji, entry.label, entry.tags),
        None => classify_by_name(name).unwrap_or_else(|| fallback(index)),
    }
}
