//! Command-line arguments

use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::Config;
use crate::topics::{TOPICS, Topic, topic_count};

#[derive(Debug, Parser)]
#[command(
    name = "village",
    about = "Keyboard-driven terminal presentation of the resistant digital village",
    version,
    after_help = "Examples:\n  village\n  village --topic 3\n  village --overview --no-parallax\n  village --list --json\n"
)]
pub struct Cli {
    /// Topic to open first (1-4)
    #[arg(long, short = 't', value_parser = clap::value_parser!(u8).range(1..=4))]
    pub topic: Option<u8>,

    /// Start in the overview
    #[arg(long, short = 'o')]
    pub overview: bool,

    /// Disable the mouse parallax effect
    #[arg(long)]
    pub no_parallax: bool,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the topics and exit
    #[arg(long)]
    pub list: bool,

    /// Print the topic list as JSON (with --list)
    #[arg(long, requires = "list")]
    pub json: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if self.no_parallax {
            config.ui.parallax = false;
        }
    }
}

#[derive(Debug, Serialize)]
struct ListedTopic {
    number: usize,
    #[serde(flatten)]
    topic: &'static Topic,
}

/// Text printed by `--list`
pub fn topic_listing(json: bool) -> serde_json::Result<String> {
    if json {
        let listed: Vec<ListedTopic> = TOPICS
            .iter()
            .enumerate()
            .map(|(i, topic)| ListedTopic {
                number: i + 1,
                topic,
            })
            .collect();
        return serde_json::to_string_pretty(&listed);
    }

    let width = topic_count().to_string().len();
    Ok(TOPICS
        .iter()
        .enumerate()
        .map(|(i, topic)| format!("{:>width$}. {}  {}", i + 1, topic.title, topic.tagline))
        .collect::<Vec<_>>()
        .join("\n"))
}
