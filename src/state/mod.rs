//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `wizard`, `chat`, `ui`) so individual
//! components can depend on small focused models. Each model is a plain
//! struct with pure transition methods; the Leptos layer wraps them in
//! `RwSignal`s provided via context.

pub mod chat;
pub mod session;
pub mod ui;
pub mod wizard;
