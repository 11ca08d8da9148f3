//! Building blocks shared by the views.

use cloudcue_activities::Activity;
use cloudcue_core::AppError;
use cloudcue_weather::WeatherDay;

const UNKNOWN_CONDITION_EMOJI: &str = "🌡️";

/// One forecast day: date, emoji, condition, temperatures and chance of rain.
pub fn weather_card(day: &WeatherDay) -> String {
    let emoji = day.kind().map_or(UNKNOWN_CONDITION_EMOJI, |k| k.emoji());
    format!(
        "{date}  {emoji} {condition}\n    avg {avg:.1}°C · max {max:.1}°C · min {min:.1}°C · rain {rain}%",
        date = day.date.format("%a %b %-d"),
        emoji = emoji,
        condition = day.condition,
        avg = day.avg_temp,
        max = day.max_temp,
        min = day.min_temp,
        rain = day.chance_of_rain,
    )
}

/// Activity card. `favorite` switches the heart marker.
pub fn activity_card(activity: &Activity, favorite: bool) -> String {
    let marker = if favorite { "❤️" } else { "➕" };
    let mut card = format!(
        "{image} {name}  {marker}\n    {category} · ⭐ {rating:.1} · {location}\n    {description}\n    id: {id}",
        image = activity.image,
        name = activity.name,
        marker = marker,
        category = activity.category,
        rating = activity.rating,
        location = activity.location,
        description = activity.description,
        id = activity.id,
    );
    if !activity.tags.is_empty() {
        card.push_str(&format!("\n    tags: {}", activity.tags.join(", ")));
    }
    card
}

/// Tag list with the selected tag bracketed. Empty when there are no tags.
pub fn tag_bar(tags: &[String], selected: Option<&str>) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let all = if selected.is_none() { "[All]" } else { "All" };
    let rendered: Vec<String> = tags
        .iter()
        .map(|t| {
            if selected == Some(t.as_str()) {
                format!("[{}]", t)
            } else {
                t.clone()
            }
        })
        .collect();
    format!("🏷️  {} | {}", all, rendered.join(" | "))
}

/// The single error panel shown in place of results.
pub fn error_panel(err: &AppError) -> String {
    format!("⚠️ {}\n   {}", err.detail(), err.user_message())
}
