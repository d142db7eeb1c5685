pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("?", "Open this help"),
            ("Esc", "Close help, then close overview"),
            ("W", "Toggle overview"),
            ("b", "Collapse/expand status bar"),
            ("q / Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "FOCUSED VIEW",
        entries: &[
            ("1-4", "Jump to topic"),
            ("Alt+Q", "Next topic"),
            ("Alt+Shift+Q", "Previous topic"),
            ("[_] [□] [x]", "Click to open overview"),
        ],
    },
    HelpSection {
        title: "OVERVIEW",
        entries: &[
            ("←/→/↑/↓", "Move between windows"),
            ("Enter/Space", "Open focused window"),
            ("/ or Tab", "Search topics"),
            ("Enter/Tab", "Back to windows (from search)"),
            ("Click", "Open window"),
        ],
    },
];

pub const HELP_FOOTER: &str = "j/k: scroll | g/G: top/bottom | Esc: close";

/// Number of rendered lines: one per entry, plus a title and a blank line
/// per section
pub fn help_line_count() -> usize {
    HELP_SECTIONS
        .iter()
        .map(|section| section.entries.len() + 2)
        .sum()
}
