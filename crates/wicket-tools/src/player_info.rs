//! `get_player_info` — player directory with delivery-derived stats.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Lists players with aggregate batting involvement.
pub struct PlayerInfo {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlayerInfoArgs {
    player_name: Option<String>,
    team_name: Option<String>,
}

impl PlayerInfo {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: PlayerInfoArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        if let Some(player_name) = &args.player_name {
            filters.like("p.name", player_name);
        }
        if let Some(team_name) = &args.team_name {
            filters.like("p.team", team_name);
        }

        let sql = format!(
            "SELECT p.*, \
                    COUNT(d.id) AS total_deliveries, \
                    SUM(d.runs_batter) AS total_runs, \
                    AVG(d.runs_batter) AS avg_runs_per_delivery, \
                    COUNT(CASE WHEN d.runs_batter >= 4 THEN 1 END) AS boundaries \
             FROM players p \
             LEFT JOIN deliveries d ON d.batter = p.name OR d.bowler = p.name \
             {} \
             GROUP BY p.id \
             ORDER BY total_runs DESC NULLS LAST, p.name",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        let total = rows.len();
        Ok(json!({
            "players": rows,
            "total_players": total,
        }))
    }
}

#[async_trait]
impl QueryTool for PlayerInfo {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetPlayerInfo,
            description: "Get player information and team details".to_string(),
            arguments: vec![
                ToolArgument::string("player_name", "Name of the player"),
                ToolArgument::string("team_name", "Filter by team name"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
