//! Outfit suggestions from weather condition text.
//!
//! Lookup order: exact table match, case-insensitive table match, substring
//! heuristics, then a fallback that echoes the input. Never fails.

use crate::types::ConditionKind;

/// Known condition strings from the forecast provider.
const OUTFIT_TABLE: &[(&str, ConditionKind, &str)] = &[
    ("Sunny", ConditionKind::Clear, "😎 Sunglasses, sunscreen and a t-shirt"),
    ("Clear", ConditionKind::Clear, "🌙 Clear skies, bring a light sweater for the evening"),
    ("Partly cloudy", ConditionKind::Cloudy, "🧢 Light jacket just in case"),
    ("Cloudy", ConditionKind::Cloudy, "🧥 A light layer should do"),
    ("Overcast", ConditionKind::Cloudy, "🧥 Long sleeves and a light jacket"),
    ("Mist", ConditionKind::Fog, "🧣 A light scarf and layers"),
    ("Fog", ConditionKind::Fog, "🧣 Layers and something bright to stay visible"),
    ("Freezing fog", ConditionKind::Fog, "🧤 Warm coat and gloves, watch for ice"),
    ("Patchy rain possible", ConditionKind::Rain, "🌂 Pack a compact umbrella"),
    ("Patchy rain nearby", ConditionKind::Rain, "🌂 Pack a compact umbrella"),
    ("Patchy light drizzle", ConditionKind::Rain, "🌂 A water-resistant jacket"),
    ("Light drizzle", ConditionKind::Rain, "🌂 A water-resistant jacket"),
    ("Light rain", ConditionKind::Rain, "☔ Umbrella and a rain jacket"),
    ("Moderate rain", ConditionKind::Rain, "☔ Umbrella, rain jacket and waterproof shoes"),
    ("Heavy rain", ConditionKind::Rain, "🥾 Full rain gear with a waterproof jacket and boots"),
    ("Light rain shower", ConditionKind::Rain, "☔ Umbrella and a rain jacket"),
    ("Moderate or heavy rain shower", ConditionKind::Rain, "🥾 Full rain gear with a waterproof jacket and boots"),
    ("Torrential rain shower", ConditionKind::Rain, "🥾 Full rain gear, or better yet stay in"),
    ("Patchy snow possible", ConditionKind::Snow, "🧣 Warm layers, a hat and gloves"),
    ("Light snow", ConditionKind::Snow, "🧤 Winter coat, gloves and boots"),
    ("Moderate snow", ConditionKind::Snow, "🧤 Winter coat, gloves and boots"),
    ("Heavy snow", ConditionKind::Snow, "❄️ Heavy coat, thermal layers and snow boots"),
    ("Blizzard", ConditionKind::Snow, "❄️ Stay inside if you can, full winter gear otherwise"),
    ("Patchy sleet possible", ConditionKind::Snow, "🧥 Waterproof winter coat and boots"),
    ("Light sleet", ConditionKind::Snow, "🧥 Waterproof winter coat and boots"),
    ("Thundery outbreaks possible", ConditionKind::Thunderstorm, "⛈️ Raincoat, and keep indoor plans ready"),
    ("Patchy light rain with thunder", ConditionKind::Thunderstorm, "⛈️ Raincoat and an indoor backup plan"),
    ("Moderate or heavy rain with thunder", ConditionKind::Thunderstorm, "⛈️ Stay indoors, full rain gear if you go out"),
];

fn lookup(condition: &str) -> Option<&'static (&'static str, ConditionKind, &'static str)> {
    OUTFIT_TABLE
        .iter()
        .find(|(text, _, _)| *text == condition)
        .or_else(|| {
            let trimmed = condition.trim();
            OUTFIT_TABLE
                .iter()
                .find(|(text, _, _)| text.eq_ignore_ascii_case(trimmed))
        })
}

fn heuristic_suggestion(kind: ConditionKind) -> &'static str {
    match kind {
        ConditionKind::Clear => "😎 Sunglasses and a t-shirt",
        ConditionKind::Rain => "☔ Bring an umbrella and a waterproof jacket",
        ConditionKind::Snow => "🧤 Bundle up with a heavy coat, gloves and boots",
        ConditionKind::Cloudy => "🧥 A light layer should do",
        ConditionKind::Thunderstorm => "⛈️ Stay indoors if you can and pack a raincoat",
        ConditionKind::Fog => "🧣 Wear layers and bright colours for visibility",
    }
}

/// Outfit suggestion for a free-text condition. Total over all inputs.
pub fn outfit_suggestion(condition: &str) -> String {
    if let Some((_, _, suggestion)) = lookup(condition) {
        return (*suggestion).to_string();
    }

    match ConditionKind::from_text(condition) {
        Some(kind) => heuristic_suggestion(kind).to_string(),
        None => {
            tracing::debug!(condition, "No outfit mapping for condition");
            format!("🤔 No outfit tip for \"{}\", dress for comfort", condition)
        }
    }
}

/// Coarse category for a condition, preferring the table over heuristics.
pub fn condition_kind(condition: &str) -> Option<ConditionKind> {
    lookup(condition)
        .map(|(_, kind, _)| *kind)
        .or_else(|| ConditionKind::from_text(condition))
}
