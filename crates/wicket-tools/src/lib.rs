//! # wicket-tools
//!
//! The concrete query-tool catalog: seven handlers, each mapping a typed
//! argument bag onto a parameterized SQL query over the match store.
//!
//! Every handler follows one construction: for each present optional
//! filter, append a predicate and its positional parameter in matching
//! order; compose a WHERE clause only if any filter is present; let
//! SQLite compute the aggregates; wrap rows plus a row count into the
//! tool's result mapping.

pub mod ball_by_ball;
pub mod match_details;
pub mod match_officials;
pub mod player_info;
pub mod player_performance;
pub mod team_info;
pub mod venue_info;

use std::sync::Arc;

use wicket_registry::{RegistryError, ToolError, ToolRegistry};
use wicket_store_sqlite::{MatchStore, StoreError};

pub use ball_by_ball::BallByBall;
pub use match_details::MatchDetails;
pub use match_officials::MatchOfficials;
pub use player_info::PlayerInfo;
pub use player_performance::PlayerPerformance;
pub use team_info::TeamInfo;
pub use venue_info::VenueInfo;

/// Builds the fixed catalog over the given store, in catalog order.
///
/// # Errors
///
/// Returns `RegistryError::Duplicate` if a tool name repeats — fatal at
/// startup by construction.
pub fn build_registry(store: Arc<MatchStore>) -> Result<ToolRegistry, RegistryError> {
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(TeamInfo::new(store.clone())))?;
    registry.register(Box::new(PlayerInfo::new(store.clone())))?;
    registry.register(Box::new(MatchDetails::new(store.clone())))?;
    registry.register(Box::new(BallByBall::new(store.clone())))?;
    registry.register(Box::new(PlayerPerformance::new(store.clone())))?;
    registry.register(Box::new(MatchOfficials::new(store.clone())))?;
    registry.register(Box::new(VenueInfo::new(store)))?;
    Ok(registry)
}

/// Maps a store fault to a handler failure.
pub(crate) fn store_err(e: StoreError) -> ToolError {
    ToolError::Query {
        message: e.to_string(),
    }
}
