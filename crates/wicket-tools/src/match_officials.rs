//! `get_match_officials` — officials with their match context.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use wicket_registry::{decode_args, QueryTool, ToolError};
use wicket_store_sqlite::{FilterSet, MatchStore};
use wicket_types::{ToolArgument, ToolName, ToolSpec};

use crate::store_err;

/// Lists match officials, joined with the match they stood in.
pub struct MatchOfficials {
    store: Arc<MatchStore>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MatchOfficialsArgs {
    match_id: Option<String>,
    official_name: Option<String>,
}

impl MatchOfficials {
    pub fn new(store: Arc<MatchStore>) -> Self {
        Self { store }
    }

    fn execute(&self, args: MatchOfficialsArgs) -> Result<Value, ToolError> {
        let mut filters = FilterSet::new();
        if let Some(match_id) = &args.match_id {
            filters.eq("o.match_id", match_id.clone());
        }
        if let Some(official_name) = &args.official_name {
            filters.like("o.name", official_name);
        }

        let sql = format!(
            "SELECT o.*, m.date, m.venue, m.team1, m.team2 \
             FROM officials o \
             LEFT JOIN matches m ON m.id = o.match_id \
             {} \
             ORDER BY m.date DESC, o.role, o.name",
            filters.where_clause()
        );
        let rows = self
            .store
            .query(&sql, &filters.params())
            .map_err(store_err)?;

        let total = rows.len();
        Ok(json!({
            "officials": rows,
            "total_officials": total,
        }))
    }
}

#[async_trait]
impl QueryTool for MatchOfficials {
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: ToolName::GetMatchOfficials,
            description: "Get match officials information".to_string(),
            arguments: vec![
                ToolArgument::string("match_id", "Match ID"),
                ToolArgument::string("official_name", "Official name"),
            ],
        }
    }

    async fn call(&self, arguments: Value) -> Result<Value, ToolError> {
        self.execute(decode_args(arguments)?)
    }
}
