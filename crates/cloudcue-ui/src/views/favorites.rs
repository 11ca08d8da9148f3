//! The favorites view.

use cloudcue_activities::{FavoritesStore, LocalStorage};

use super::cards::{activity_card, tag_bar};

/// "1 Favorite", "3 Favorites", with the active tag appended when filtering.
pub fn favorites_summary(count: usize, tag: Option<&str>) -> String {
    let noun = if count == 1 { "Favorite" } else { "Favorites" };
    match tag {
        Some(tag) => format!("{} {} with \"{}\"", count, noun, tag),
        None => format!("{} {}", count, noun),
    }
}

pub fn render_favorites<S: LocalStorage>(favorites: &FavoritesStore<S>, tag: Option<&str>) -> String {
    if favorites.is_empty() {
        return "❤️ No Favorites Yet\n\nSave activities from a search with \
                `cloudcue search <city> --save <ID>` and they will show up here."
            .to_string();
    }

    let mut sections = vec!["❤️ Your Favorites".to_string()];

    let bar = tag_bar(&favorites.all_tags(), tag);
    if !bar.is_empty() {
        sections.push(bar);
    }

    let shown = favorites.filter_by_tag(tag);
    if !shown.is_empty() {
        let cards: Vec<String> = shown.iter().map(|a| activity_card(a, true)).collect();
        sections.push(cards.join("\n\n"));
    }
    sections.push(favorites_summary(shown.len(), tag));

    sections.join("\n\n")
}
