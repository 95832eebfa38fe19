//! Layout chrome for the authenticated shell.

pub mod footer;
pub mod navbar;
pub mod right_panel;
pub mod sidebar;
