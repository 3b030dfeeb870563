//! `get_match_details` — match records with innings totals and outcome.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Lists matches with per-innings score summaries.
pub struct MatchDetails {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchDetailsArgs {
    match_id: Option<String>,
    season: Option<i64>,
    team_name: Option<String>,
    venue: Option<String>,
}

impl MatchDetails {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: MatchDetailsArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        if let Some(match_id) = &args.match_id {
            filters.eq("m.id", match_id.clone());
        }
        if let Some(season) = args.season {
            filters.eq("m.season", season);
        }
        if let Some(team_name) = &args.team_name {
            filters.like_any(&["m.team1", "m.team2"], team_name);
        }
        if let Some(venue) = &args.venue {
            filters.like("m.venue", venue);
        }

        let sql = format!(
            "SELECT m.*, \
                    i1.total_runs AS team1_runs, \
                    i1.total_wickets AS team1_wickets, \
                    i1.total_overs AS team1_overs, \
                    i2.total_runs AS team2_runs, \
                    i2.total_wickets AS team2_wickets, \
                    i2.total_overs AS team2_overs, \
                    COUNT(o.id) AS total_officials \
             FROM matches m \
             LEFT JOIN innings i1 ON i1.match_id = m.id AND i1.innings_number = 1 \
             LEFT JOIN innings i2 ON i2.match_id = m.id AND i2.innings_number = 2 \
             LEFT JOIN officials o ON o.match_id = m.id \
             {} \
             GROUP BY m.id \
             ORDER BY m.date DESC",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        let total = rows.len();
        Ok(json!({
            "matches": rows,
            "total_matches": total,
        }))
    }
}

#[async_trait]
impl QueryTool for MatchDetails {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetMatchDetails,
            description: "Get detailed match information including scores and outcome"
                .to_string(),
            arguments: vec![
                ToolArgument::string("match_id", "Specific match ID"),
                ToolArgument::integer("season", "Season year"),
                ToolArgument::string("team_name", "Filter by team name"),
                ToolArgument::string("venue", "Filter by venue"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
