//! `get_venue_info` — venues ranked by matches hosted.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Aggregates match history per venue.
pub struct VenueInfo {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct VenueInfoArgs {
    venue_name: Option<String>,
    city: Option<String>,
}

impl VenueInfo {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: VenueInfoArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        if let Some(venue_name) = &args.venue_name {
            filters.like("m.venue", venue_name);
        }
        if let Some(city) = &args.city {
            filters.like("m.city", city);
        }

        let sql = format!(
            "SELECT m.venue, \
                    COUNT(m.id) AS total_matches, \
                    COUNT(CASE WHEN m.winner = m.team1 THEN 1 END) AS team1_wins, \
                    COUNT(CASE WHEN m.winner = m.team2 THEN 1 END) AS team2_wins, \
                    GROUP_CONCAT(DISTINCT m.winner) AS teams_won, \
                    MIN(m.date) AS first_match_date, \
                    MAX(m.date) AS last_match_date \
             FROM matches m \
             {} \
             GROUP BY m.venue \
             ORDER BY total_matches DESC, m.venue",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        let total = rows.len();
        Ok(json!({
            "venues": rows,
            "total_venues": total,
        }))
    }
}

#[async_trait]
impl QueryTool for VenueInfo {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetVenueInfo,
            description: "Get information about cricket venues".to_string(),
            arguments: vec![
                ToolArgument::string("venue_name", "Name of the venue"),
                ToolArgument::string("city", "Filter by city"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
