//! Routed pages and the unauthenticated flow.

pub mod assistant;
pub mod auth;
pub mod chat;
pub mod content;
pub mod pages;
pub mod profile;
pub mod settings;
pub mod website_create;
pub mod website_detail;
pub mod websites;
