//! Courtstat domain types.
//!
//! Entity records with a CRUD lifecycle, append-only statistics facts, the
//! validated storage identifier, and the pagination value type. This crate
//! carries no storage or transport concerns.

pub mod entities;
pub mod ids;
pub mod page;
pub mod stats;

pub use entities::{Award, Game, League, Player};
pub use ids::{EntityId, IdError};
pub use page::Page;
pub use stats::{PlayerStat, RewardStat};
