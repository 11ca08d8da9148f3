//! The activities view: weather, outfit and nearby places for one city.

use cloudcue_activities::{filter_by_tag, unique_tags, FavoritesStore, LocalStorage};
use cloudcue_core::AppError;

use super::cards::{activity_card, error_panel, tag_bar, weather_card};
use crate::routes::UNKNOWN_LOCATION;
use crate::services::activities_service::ActivitiesPage;

fn heading(city: &str) -> String {
    format!("Activities in {}", city)
}

/// Render a successful lookup, optionally narrowed to one tag.
pub fn render_activities<S: LocalStorage>(
    page: &ActivitiesPage,
    favorites: &FavoritesStore<S>,
    tag: Option<&str>,
) -> String {
    let mut sections = vec![heading(&page.city)];

    let resolved = page.forecast.location.display_name();
    if !resolved.is_empty() && resolved != page.city {
        sections.push(format!("📍 {}", resolved));
    }

    if !page.forecast.days.is_empty() {
        let cards: Vec<String> = page.forecast.days.iter().map(weather_card).collect();
        sections.push(cards.join("\n"));
    }
    if let Some(outfit) = &page.outfit {
        sections.push(format!("👕 Today: {}", outfit));
    }
    sections.push(page.plan.headline().to_string());

    if page.activities.is_empty() {
        sections.push(format!(
            "🔍 No activities found near {}. Try a nearby city or check back later.",
            page.city
        ));
        return sections.join("\n\n");
    }

    let tags = unique_tags(&page.activities);
    let bar = tag_bar(&tags, tag);
    if !bar.is_empty() {
        sections.push(bar);
    }

    let shown = filter_by_tag(&page.activities, tag);
    if shown.is_empty() {
        if let Some(tag) = tag {
            sections.push(format!("No activities tagged \"{}\".", tag));
        }
    } else {
        let cards: Vec<String> = shown
            .iter()
            .map(|a| activity_card(a, favorites.is_favorite(&a.id)))
            .collect();
        sections.push(cards.join("\n\n"));
    }

    sections.join("\n\n")
}

/// Render a failed lookup: the heading and one error panel.
pub fn render_activities_error(city: &str, err: &AppError) -> String {
    format!("{}\n\n{}", heading(city), error_panel(err))
}

/// Activities route without a city.
pub fn render_unknown_location() -> String {
    format!(
        "{}\n\nEnter a city to see what's on, e.g. `cloudcue search Vancouver`.",
        heading(UNKNOWN_LOCATION)
    )
}
