use std::time::{Duration, Instant};

use super::slide::{DEFAULT_SLIDE_DURATION, SlideDirection, SlideTransition};
use crate::topics::{TOPICS, Topic, filter_topics};

/// Session-local navigation state.
///
/// `current_index` always indexes the full topic list. While overview is
/// active, `overview_focused_index` indexes the filtered list (0 when that
/// list is empty).
#[derive(Debug, Clone)]
pub struct NavigationState {
    topics: &'static [Topic],
    current_index: usize,
    is_overview: bool,
    search_query: String,
    overview_focused_index: usize,
    slide: SlideTransition,
    is_status_bar_collapsed: bool,
    show_help_modal: bool,
    reveal_pending: bool,
}

impl NavigationState {
    pub fn new(topics: &'static [Topic], slide_duration: Duration) -> Self {
        Self {
            topics,
            current_index: 0,
            is_overview: false,
            search_query: String::new(),
            overview_focused_index: 0,
            slide: SlideTransition::new(slide_duration),
            is_status_bar_collapsed: false,
            show_help_modal: false,
            reveal_pending: false,
        }
    }


    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_topic(&self) -> &'static Topic {
        &self.topics[self.current_index]
    }

    pub fn is_overview(&self) -> bool {
        self.is_overview
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn overview_focused_index(&self) -> usize {
        self.overview_focused_index
    }

    pub fn slide_direction(&self) -> SlideDirection {
        self.slide.direction()
    }

    pub fn is_status_bar_collapsed(&self) -> bool {
        self.is_status_bar_collapsed
    }

    pub fn show_help_modal(&self) -> bool {
        self.show_help_modal
    }

    /// Topics matching the current query, with their absolute index
    pub fn filtered_topics(&self) -> Vec<(usize, &'static Topic)> {
        filter_topics(self.topics, &self.search_query)
    }

    /// Topic under the overview focus, with its absolute index
    pub fn focused_topic(&self) -> Option<(usize, &'static Topic)> {
        self.filtered_topics()
            .get(self.overview_focused_index)
            .copied()
    }

    pub fn go_to_next(&mut self, now: Instant) {
        let count = self.topic_count();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % count;
        self.slide.start(SlideDirection::Right, now);
        log::debug!("Next topic: {}", self.current_topic().id);
    }

    pub fn go_to_previous(&mut self, now: Instant) {
        let count = self.topic_count();
        if count == 0 {
            return;
        }
        self.current_index = (self.current_index + count - 1) % count;
        self.slide.start(SlideDirection::Left, now);
        log::debug!("Previous topic: {}", self.current_topic().id);
    }

    /// Clears the slide indicator once its animation window has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.slide.tick(now);
    }

    /// Jump to a topic by 1-based position; out-of-range positions are ignored
    pub fn jump_to_topic(&mut self, position: usize) {
        if position == 0 || position > self.topic_count() {
            return;
        }
        self.current_index = position - 1;
        log::debug!("Jumped to topic: {}", self.current_topic().id);
    }

    pub fn toggle_overview(&mut self) {
        if self.is_overview {
            self.is_overview = false;
        } else {
            self.enter_overview();
        }
    }

    pub fn enter_overview(&mut self) {
        if self.is_overview {
            return;
        }
        self.overview_focused_index = self.locate_current_in_filtered().unwrap_or(0);
        self.is_overview = true;
        self.reveal_pending = true;
        log::debug!(
            "Entered overview, focused index {}",
            self.overview_focused_index
        );
    }

    pub fn close_overview(&mut self) {
        self.is_overview = false;
    }

    pub fn set_search_query(&mut self, query: &str) {
        if self.search_query == query {
            return;
        }
        self.search_query = query.to_string();

        self.overview_focused_index = if query.trim().is_empty() {
            self.locate_current_in_filtered().unwrap_or(0)
        } else {
            0
        };
        self.reveal_pending = true;
    }

    /// Open the topic at `filtered_index` of the filtered list and leave overview
    pub fn select_window(&mut self, filtered_index: usize) {
        if !self.is_overview {
            return;
        }
        let Some(&(absolute_index, topic)) = self.filtered_topics().get(filtered_index) else {
            return;
        };

        self.current_index = absolute_index;
        self.is_overview = false;
        log::debug!("Selected window: {}", topic.id);
    }

    pub fn focus_next(&mut self) {
        let len = self.filtered_topics().len();
        if len == 0 {
            return;
        }
        self.overview_focused_index = (self.overview_focused_index + 1) % len;
        self.reveal_pending = true;
    }

    pub fn focus_previous(&mut self) {
        let len = self.filtered_topics().len();
        if len == 0 {
            return;
        }
        self.overview_focused_index = (self.overview_focused_index + len - 1) % len;
        self.reveal_pending = true;
    }

    /// Returns the focused index once after each overview focus change
    pub fn take_reveal_request(&mut self) -> Option<usize> {
        if !self.is_overview || !self.reveal_pending {
            return None;
        }
        self.reveal_pending = false;
        Some(self.overview_focused_index)
    }

    pub fn open_help(&mut self) {
        self.show_help_modal = true;
    }

    pub fn close_help(&mut self) {
        self.show_help_modal = false;
    }

    pub fn toggle_status_bar(&mut self) {
        self.is_status_bar_collapsed = !self.is_status_bar_collapsed;
    }

    pub fn set_status_bar_collapsed(&mut self, collapsed: bool) {
        self.is_status_bar_collapsed = collapsed;
    }

    fn locate_current_in_filtered(&self) -> Option<usize> {
        self.filtered_topics()
            .iter()
            .position(|(index, _)| *index == self.current_index)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(TOPICS, DEFAULT_SLIDE_DURATION)
    }
}

#[cfg(test)]
#[path = "nav_state_tests.rs"]
mod nav_state_tests;
