//! Pure helpers shared across pages.

pub mod format;
pub mod validate;
