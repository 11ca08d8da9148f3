use crate::types::Activity;

/// Unique tags across activities, in first-seen order.
pub fn unique_tags(activities: &[Activity]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in activities.iter().flat_map(|a| a.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Activities carrying `tag`; all of them when no tag is selected.
pub fn filter_by_tag<'a>(activities: &'a [Activity], tag: Option<&str>) -> Vec<&'a Activity> {
    match tag {
        Some(tag) => activities.iter().filter(|a| a.has_tag(tag)).collect(),
        None => activities.iter().collect(),
    }
}
