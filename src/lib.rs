pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod help;
pub mod keys;
pub mod layout;
pub mod logging;
pub mod navigation;
pub mod scroll;
pub mod search;
pub mod status_bar;
pub mod topics;
pub mod widgets;
pub mod windows;
