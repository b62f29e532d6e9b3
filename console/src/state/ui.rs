//! Local UI chrome state (theme, navigation rail).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of page state so navigating between pages
//! never carries campaign data along. This is the only state shared through
//! context; everything else is owned by a page instance.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell-wide presentation state provided via context.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_expanded: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: false, nav_expanded: true }
    }
}

impl UiState {
    pub fn toggle_nav(&mut self) {
        self.nav_expanded = !self.nav_expanded;
    }
}
