//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns (theme, dashboard sidebar) out of
//! session and cache state so rendering controls can evolve independently.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the theme toggle and dashboard sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_open: bool,
}
