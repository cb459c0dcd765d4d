//! Courtstat server library.
//!
//! ## Structure
//!
//! - `use_cases/` - Pass-through services decoupling HTTP from storage
//! - `infrastructure/` - Port traits and storage adapters (document, column, graph)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module with in-memory repositories for router tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
