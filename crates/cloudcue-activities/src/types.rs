use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A recommended point of interest.
///
/// Equality and hashing use `id` only, so two results for the same upstream
/// place compare equal even if their display fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub location: String,
    pub category: String,
    pub rating: f64,
    pub description: String,
    /// Emoji token shown in place of an image
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Activity {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl PartialEq for Activity {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Activity {}

impl Hash for Activity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
pub(crate) fn sample(id: &str, tags: &[&str]) -> Activity {
    Activity {
        id: id.to_string(),
        name: format!("Place {}", id),
        location: "Vancouver".to_string(),
        category: "Park".to_string(),
        rating: 4.5,
        description: "A nice place".to_string(),
        image: "🌳".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}
