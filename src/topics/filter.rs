use super::registry::Topic;

/// Case-insensitive substring match against title, tagline and id
pub fn matches_query(topic: &Topic, query: &str) -> bool {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return true;
    }

    [topic.title, topic.tagline, topic.id]
        .iter()
        .any(|field| field.to_lowercase().contains(&query_lower))
}

/// Topics matching the query, paired with their absolute index.
///
/// An empty or whitespace-only query yields every topic. Original order is
/// always preserved.
pub fn filter_topics<'a>(topics: &'a [Topic], query: &str) -> Vec<(usize, &'a Topic)> {
    topics
        .iter()
        .enumerate()
        .filter(|(_, topic)| matches_query(topic, query))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
