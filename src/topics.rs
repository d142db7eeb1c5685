//! Topic registry module
//!
//! Holds the four fixed topics of the presentation and the search filter
//! that narrows them down in overview mode.

mod filter;
mod registry;

pub use filter::{filter_topics, matches_query};
pub use registry::{TOPICS, Topic, TopicBody, topic_count};
