// Reusable TUI components

pub mod dua_card;
pub mod progress_bar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;
