//! `get_team_info` — team directory with win/match aggregates.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Lists teams with their win and appearance counts.
pub struct TeamInfo {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TeamInfoArgs {
    team_name: Option<String>,
}

impl TeamInfo {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: TeamInfoArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        if let Some(team_name) = &args.team_name {
            filters.like_any(&["t.name", "t.short_name"], team_name);
        }

        let sql = format!(
            "SELECT t.*, \
                    COUNT(CASE WHEN m.winner = t.name THEN 1 END) AS wins, \
                    COUNT(m.id) AS total_matches \
             FROM teams t \
             LEFT JOIN matches m ON (m.team1 = t.name OR m.team2 = t.name) \
             {} \
             GROUP BY t.id \
             ORDER BY t.name",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        let total = rows.len();
        Ok(json!({
            "teams": rows,
            "total_teams": total,
        }))
    }
}

#[async_trait]
impl QueryTool for TeamInfo {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetTeamInfo,
            description: "Get information about cricket teams".to_string(),
            arguments: vec![ToolArgument::string(
                "team_name",
                "Name or short name of the team",
            )],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
