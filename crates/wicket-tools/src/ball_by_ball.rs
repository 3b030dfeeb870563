//! `get_ball_by_ball` — every delivery of one match, in play order.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Returns a match's deliveries plus the parent match record.
pub struct BallByBall {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BallByBallArgs {
    match_id: String,
    innings: Option<i64>,
    over_start: Option<i64>,
    over_end: Option<i64>,
}

impl BallByBall {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: BallByBallArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        filters.eq("d.match_id", args.match_id.clone());
        if let Some(innings) = args.innings {
            filters.eq("d.innings", innings);
        }
        if let Some(over_start) = args.over_start {
            filters.at_least("d.over", over_start);
        }
        if let Some(over_end) = args.over_end {
            filters.at_most("d.over", over_end);
        }

        let sql = format!(
            "SELECT d.*, m.team1, m.team2 \
             FROM deliveries d \
             JOIN matches m ON m.id = d.match_id \
             {} \
             ORDER BY d.innings, d.over, d.ball",
            filters.where_clause()
        );
        let deliveries = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        // Parent match record, embedded as explicit null when missing.
        let mut lookup = FilterSet::new();
        lookup.eq("id", args.match_id.clone());
        let match_sql = format!("SELECT * FROM matches {}", lookup.where_clause());
        let match_rows = self
            .store
            .query(&match_sql, &lookup.params())
            .map_err(store_err)?;
        let match_info = match_rows
            .into_iter()
            .next()
            .map(Value::Object)
            .unwrap_or(Value::Null);

        let overs_covered = distinct_overs(&deliveries);
        let total = deliveries.len();
        Ok(json!({
            "match_info": match_info,
            "deliveries": deliveries,
            "total_deliveries": total,
            "overs_covered": overs_covered,
        }))
    }
}

/// Counts distinct (innings, over) pairs in the returned delivery set.
fn distinct_overs(deliveries: &[wicket_store_sqlite::Row]) -> usize {
    deliveries
        .iter()
        .filter_map(|row| {
            let innings = row.get("innings")?.as_i64()?;
            let over = row.get("over")?.as_i64()?;
            Some((innings, over))
        })
        .collect::<HashSet<_>>()
        .len()
}

#[async_trait]
impl QueryTool for BallByBall {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetBallByBall,
            description: "Get ball-by-ball commentary and deliveries for a match".to_string(),
            arguments: vec![
                ToolArgument::string("match_id", "Match ID").required(),
                ToolArgument::integer("innings", "Innings number (1 or 2)"),
                ToolArgument::integer("over_start", "Starting over number"),
                ToolArgument::integer("over_end", "Ending over number"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
