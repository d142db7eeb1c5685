use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action::{Action, Dispatch, HelpScroll};

/// The slice of app state that decides key precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyContext {
    pub overview: bool,
    pub help_open: bool,
    pub input_focused: bool,
    pub filtered_len: usize,
}

type Guard = fn(&KeyEvent, &KeyContext) -> Option<Dispatch>;

/// Guards run in order; the first one returning `Some` decides the key
const GUARDS: &[Guard] = &[
    open_help,
    escape,
    help_modal,
    quit_on_ctrl_c,
    jump_by_digit,
    cycle_topics,
    toggle_overview,
    cycle_overview_focus,
    search_input_keys,
    overview_grid_keys,
    plain_shortcuts,
];

pub fn dispatch_key(key: KeyEvent, ctx: KeyContext) -> Dispatch {
    GUARDS
        .iter()
        .find_map(|guard| guard(&key, &ctx))
        .unwrap_or(Dispatch::Unhandled)
}

fn has_ctrl_or_alt(key: &KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

// `?`: open help
fn open_help(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    (key.code == KeyCode::Char('?') && !ctx.help_open)
        .then_some(Dispatch::Handled(Action::OpenHelp))
}

// Esc: help first, then overview
fn escape(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if key.code != KeyCode::Esc {
        return None;
    }
    if ctx.help_open {
        Some(Dispatch::Handled(Action::CloseHelp))
    } else if ctx.overview {
        Some(Dispatch::Handled(Action::CloseOverview))
    } else {
        None
    }
}

// Help is modal: only its own scroll keys get through
fn help_modal(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if !ctx.help_open {
        return None;
    }

    let scroll = match key.code {
        KeyCode::Up | KeyCode::Char('k') => HelpScroll::LineUp,
        KeyCode::Down | KeyCode::Char('j') => HelpScroll::LineDown,
        KeyCode::PageUp => HelpScroll::PageUp,
        KeyCode::PageDown => HelpScroll::PageDown,
        KeyCode::Home | KeyCode::Char('g') => HelpScroll::Top,
        KeyCode::End | KeyCode::Char('G') => HelpScroll::Bottom,
        _ => return Some(Dispatch::Blocked),
    };
    Some(Dispatch::Handled(Action::ScrollHelp(scroll)))
}

fn quit_on_ctrl_c(key: &KeyEvent, _ctx: &KeyContext) -> Option<Dispatch> {
    (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        .then_some(Dispatch::Handled(Action::Quit))
}

fn jump_by_digit(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if ctx.overview || has_ctrl_or_alt(key) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|n| Dispatch::Handled(Action::JumpToTopic(n as usize))),
        _ => None,
    }
}

// Alt+Q / Alt+Shift+Q, focused mode only
fn cycle_topics(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if ctx.overview || !key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char('Q') => Some(Dispatch::Handled(Action::PreviousTopic)),
        KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Dispatch::Handled(Action::PreviousTopic))
        }
        KeyCode::Char('q') => Some(Dispatch::Handled(Action::NextTopic)),
        _ => None,
    }
}

fn toggle_overview(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if ctx.input_focused || has_ctrl_or_alt(key) {
        return None;
    }
    matches!(key.code, KeyCode::Char('w') | KeyCode::Char('W'))
        .then_some(Dispatch::Handled(Action::ToggleOverview))
}

// Arrows belong to the search input while it has focus
fn cycle_overview_focus(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if !ctx.overview || ctx.input_focused || ctx.filtered_len == 0 {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Down => Some(Dispatch::Handled(Action::FocusNextWindow)),
        KeyCode::Left | KeyCode::Up => Some(Dispatch::Handled(Action::FocusPreviousWindow)),
        _ => None,
    }
}

fn search_input_keys(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if !ctx.overview || !ctx.input_focused {
        return None;
    }
    matches!(key.code, KeyCode::Enter | KeyCode::Tab)
        .then_some(Dispatch::Handled(Action::FocusWindows))
}

fn overview_grid_keys(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if !ctx.overview || ctx.input_focused {
        return None;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') if ctx.filtered_len > 0 => {
            Some(Dispatch::Handled(Action::SelectFocusedWindow))
        }
        KeyCode::Char('/') | KeyCode::Tab => Some(Dispatch::Handled(Action::FocusSearch)),
        _ => None,
    }
}

fn plain_shortcuts(key: &KeyEvent, ctx: &KeyContext) -> Option<Dispatch> {
    if ctx.input_focused || has_ctrl_or_alt(key) {
        return None;
    }
    match key.code {
        KeyCode::Char('b') => Some(Dispatch::Handled(Action::ToggleStatusBar)),
        KeyCode::Char('q') => Some(Dispatch::Handled(Action::Quit)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod dispatch_tests;
