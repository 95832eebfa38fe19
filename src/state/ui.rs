//! Local UI chrome state (sidebar, right panel, auth screen toggle).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`session`,
//! `wizard`) so layout controls can evolve independently of auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which unauthenticated screen is showing. A pure UI toggle; switching
/// carries no form state across.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthScreen {
    #[default]
    Login,
    Signup,
}

/// UI state for the navigation chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub auth_screen: AuthScreen,
    pub sidebar_open: bool,
    pub right_panel_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            auth_screen: AuthScreen::Login,
            sidebar_open: true,
            right_panel_open: false,
        }
    }
}
