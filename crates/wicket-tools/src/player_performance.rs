//! `get_player_performance` — batting and bowling aggregates for one player.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{StatType, ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Computes per-category aggregate blocks for a player, overall or within
/// one match.
pub struct PlayerPerformance {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlayerPerformanceArgs {
    player_name: String,
    match_id: Option<String>,
    #[serde(default)]
    stat_type: StatType,
}

impl PlayerPerformance {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: PlayerPerformanceArgs) -> Result<Value, ToolError> {
        // `fielding` is a recognized category with no computation block,
        // so a pure-fielding request yields an empty performance mapping.
        let mut performance = Map::new();

        if args.stat_type.includes_batting() {
            let block = self.batting_block(&args)?;
            performance.insert("batting".to_string(), block);
        }
        if args.stat_type.includes_bowling() {
            let block = self.bowling_block(&args)?;
            performance.insert("bowling".to_string(), block);
        }

        Ok(json!({
            "player_name": args.player_name,
            "match_id": args.match_id,
            "stat_type": args.stat_type,
            "performance": performance,
        }))
    }

    /// Batting aggregates over deliveries faced. Zero balls faced leaves
    /// the strike rate null (SQLite division by zero), never a fault.
    fn batting_block(&self, args: &PlayerPerformanceArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        filters.like("d.batter", &args.player_name);
        if let Some(match_id) = &args.match_id {
            filters.eq("d.match_id", match_id.clone());
        }

        let sql = format!(
            "SELECT COUNT(d.id) AS balls_faced, \
                    SUM(d.runs_batter) AS runs_scored, \
                    COUNT(CASE WHEN d.runs_batter = 4 THEN 1 END) AS fours, \
                    COUNT(CASE WHEN d.runs_batter = 6 THEN 1 END) AS sixes, \
                    COUNT(CASE WHEN d.runs_batter >= 4 THEN 1 END) AS boundaries, \
                    ROUND(CAST(SUM(d.runs_batter) AS FLOAT) / COUNT(d.id) * 100, 2) \
                        AS strike_rate, \
                    COUNT(DISTINCT d.match_id) AS matches_played \
             FROM deliveries d \
             {}",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;
        Ok(rows
            .into_iter()
            .next()
            .map(Value::Object)
            .unwrap_or_else(|| json!({})))
    }

    /// Bowling aggregates over deliveries bowled. Zero balls bowled
    /// leaves the economy rate null.
    fn bowling_block(&self, args: &PlayerPerformanceArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        filters.like("d.bowler", &args.player_name);
        if let Some(match_id) = &args.match_id {
            filters.eq("d.match_id", match_id.clone());
        }

        let sql = format!(
            "SELECT COUNT(d.id) AS balls_bowled, \
                    SUM(d.runs_total) AS runs_conceded, \
                    COUNT(CASE WHEN d.wicket_type IS NOT NULL AND d.wicket_type != '' THEN 1 END) \
                        AS wickets, \
                    ROUND(CAST(SUM(d.runs_total) AS FLOAT) / COUNT(d.id) * 6, 2) \
                        AS economy_rate, \
                    COUNT(DISTINCT d.match_id) AS matches_bowled \
             FROM deliveries d \
             {}",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;
        Ok(rows
            .into_iter()
            .next()
            .map(Value::Object)
            .unwrap_or_else(|| json!({})))
    }
}

#[async_trait]
impl QueryTool for PlayerPerformance {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetPlayerPerformance,
            description: "Get player performance in specific match or overall".to_string(),
            arguments: vec![
                ToolArgument::string("player_name", "Player name").required(),
                ToolArgument::string("match_id", "Specific match ID"),
                ToolArgument::string("stat_type", "Type of stats")
                    .with_enum(&["batting", "bowling", "fielding", "all"])
                    .with_default("all"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
