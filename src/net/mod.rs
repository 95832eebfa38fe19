//! Network boundary: auth provider client and shared DTOs.

pub mod auth;
pub mod types;
