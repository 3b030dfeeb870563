//! Ingestion of cricsheet match files into the store.
//!
//! Each file is loaded inside one transaction, delete-then-insert keyed
//! by match id, so re-ingesting the same file is idempotent. Lookup
//! tables (teams, players) accumulate across files with INSERT OR IGNORE.

use std::path::Path;

use rusqlite::{params, Transaction};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::cricsheet::{self, MatchFile};
use crate::store::{MatchStore, StoreError};

/// Errors from the ingestion path.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The match file could not be read.
    #[error("cannot read match file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// The file content is not a valid cricsheet match document.
    #[error("invalid match JSON in '{path}': {message}")]
    Parse { path: String, message: String },
    /// The store rejected the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Row counts produced by an ingestion run.
#[derive(Debug, Default, Serialize)]
pub struct IngestReport {
    pub matches: usize,
    pub deliveries: usize,
    pub innings: usize,
    pub officials: usize,
    pub teams: usize,
    pub players: usize,
    /// Files that failed to parse or load; logged, not fatal to the batch.
    pub failed_files: usize,
}

impl IngestReport {
    fn absorb(&mut self, other: IngestReport) {
        self.matches += other.matches;
        self.deliveries += other.deliveries;
        self.innings += other.innings;
        self.officials += other.officials;
        self.teams += other.teams;
        self.players += other.players;
    }
}

/// Ingests every `*.json` file under `dir` (recursively, in path order).
///
/// Individual file failures are logged and counted in the report; only a
/// store-level fault aborts the batch.
pub fn ingest_dir(store: &MatchStore, dir: &Path) -> Result<IngestReport, IngestError> {
    let mut paths: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.into_path()),
            Err(e) => {
                warn!(error = %e, "skipping unreadable directory entry");
                None
            }
        })
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut report = IngestReport::default();
    for path in &paths {
        match ingest_file(store, path) {
            Ok(file_report) => report.absorb(file_report),
            Err(IngestError::Store(e)) => return Err(IngestError::Store(e)),
            Err(e) => {
                warn!(error = %e, "failed to ingest match file");
                report.failed_files += 1;
            }
        }
    }

    info!(
        matches = report.matches,
        deliveries = report.deliveries,
        failed = report.failed_files,
        "ingestion complete"
    );
    Ok(report)
}

/// Ingests one cricsheet match file.
pub fn ingest_file(store: &MatchStore, path: &Path) -> Result<IngestReport, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let parsed: MatchFile = serde_json::from_str(&content).map_err(|e| IngestError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let match_id = cricsheet::match_id_from_path(path);
    debug!(%match_id, "ingesting match");

    let mut conn = store.connect()?;
    let tx = conn.transaction().map_err(sql_err)?;
    let report = load_match(&tx, &match_id, &parsed).map_err(sql_err)?;
    tx.commit().map_err(sql_err)?;
    Ok(report)
}

/// Writes one parsed match into the store inside an open transaction.
fn load_match(
    tx: &Transaction<'_>,
    match_id: &str,
    parsed: &MatchFile,
) -> Result<IngestReport, rusqlite::Error> {
    let mut report = IngestReport {
        matches: 1,
        ..IngestReport::default()
    };
    let info = &parsed.info;

    // Re-ingest is delete-then-insert, keyed by match id.
    tx.execute("DELETE FROM deliveries WHERE match_id = ?1", params![match_id])?;
    tx.execute("DELETE FROM innings WHERE match_id = ?1", params![match_id])?;
    tx.execute("DELETE FROM officials WHERE match_id = ?1", params![match_id])?;
    tx.execute("DELETE FROM matches WHERE id = ?1", params![match_id])?;

    let team1 = info.teams.first().cloned().unwrap_or_default();
    let team2 = info.teams.get(1).cloned().unwrap_or_default();
    let (toss_winner, toss_decision) = match &info.toss {
        Some(t) => (
            t.winner.clone().unwrap_or_default(),
            t.decision.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };
    let (winner, result, margin) = match &info.outcome {
        Some(o) => (
            o.winner.clone().unwrap_or_default(),
            o.result.clone().unwrap_or_else(|| "normal".to_string()),
            o.margin_text(),
        ),
        None => (String::new(), "normal".to_string(), String::new()),
    };

    tx.execute(
        "INSERT INTO matches (id, date, season, city, venue, team1, team2, \
         toss_winner, toss_decision, winner, result, margin) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            match_id,
            info.dates.first().cloned().unwrap_or_default(),
            cricsheet::season_from_dates(&info.dates),
            info.city.clone().unwrap_or_default(),
            info.venue.clone().unwrap_or_default(),
            team1,
            team2,
            toss_winner,
            toss_decision,
            winner,
            result,
            margin,
        ],
    )?;

    for team in &info.teams {
        report.teams += tx.execute(
            "INSERT OR IGNORE INTO teams (name, short_name) VALUES (?1, ?2)",
            params![team, cricsheet::short_name(team)],
        )?;
    }

    for (team, squad) in &info.players {
        for player in squad {
            report.players += tx.execute(
                "INSERT OR IGNORE INTO players (name, team) VALUES (?1, ?2)",
                params![player, team],
            )?;
        }
    }

    if let Some(officials) = &info.officials {
        let roles = [
            ("umpire", &officials.umpires),
            ("tv_umpire", &officials.tv_umpires),
            ("match_referee", &officials.match_referees),
        ];
        for (role, names) in roles {
            for name in names {
                report.officials += tx.execute(
                    "INSERT INTO officials (match_id, name, role) VALUES (?1, ?2, ?3)",
                    params![match_id, name, role],
                )?;
            }
        }
    }

    let mut insert_delivery = tx.prepare(
        "INSERT INTO deliveries (match_id, innings, batting_team, bowling_team, \
         over, ball, batter, non_striker, bowler, \
         runs_batter, runs_extras, runs_total, wicket_type, player_dismissed) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
    )?;

    for (innings_idx, innings) in parsed.innings.iter().enumerate() {
        let innings_number = innings_idx as i64 + 1;
        let batting_team = innings.team.as_str();
        let bowling_team = if batting_team == team1 { &team2 } else { &team1 };

        let mut total_runs = 0i64;
        let mut total_wickets = 0i64;

        for over in &innings.overs {
            for (ball_idx, delivery) in over.deliveries.iter().enumerate() {
                let first_wicket = delivery.wickets.first();
                let wicket_type = first_wicket
                    .and_then(|w| w.kind.clone())
                    .unwrap_or_default();
                let player_dismissed = first_wicket
                    .and_then(|w| w.player_out.clone())
                    .unwrap_or_default();

                insert_delivery.execute(params![
                    match_id,
                    innings_number,
                    batting_team,
                    bowling_team,
                    over.over,
                    ball_idx as i64 + 1,
                    delivery.batter,
                    delivery.non_striker,
                    delivery.bowler,
                    delivery.runs.batter,
                    delivery.runs.extras,
                    delivery.runs.total,
                    wicket_type,
                    player_dismissed,
                ])?;
                report.deliveries += 1;

                total_runs += delivery.runs.total;
                if !delivery.wickets.is_empty() {
                    total_wickets += 1;
                }
            }
        }

        tx.execute(
            "INSERT INTO innings (match_id, innings_number, batting_team, \
             total_runs, total_wickets, total_overs) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                match_id,
                innings_number,
                batting_team,
                total_runs,
                total_wickets,
                overs_notation(&innings.overs),
            ],
        )?;
        report.innings += 1;
    }
    drop(insert_delivery);

    Ok(report)
}

/// Renders the overs faced in cricket notation: "19.4" is nineteen
/// complete overs and four balls of the twentieth.
fn overs_notation(overs: &[cricsheet::Over]) -> String {
    match overs.last() {
        None => "0.0".to_string(),
        Some(last) => {
            let balls = last.deliveries.len();
            if balls >= 6 {
                format!("{}.0", overs.len())
            } else {
                format!("{}.{}", overs.len() - 1, balls)
            }
        }
    }
}

fn sql_err(e: rusqlite::Error) -> IngestError {
    IngestError::Store(StoreError::Query {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cricsheet::Over;

    fn over(n: i64, deliveries: usize) -> Over {
        let raw = serde_json::json!({
            "over": n,
            "deliveries": (0..deliveries).map(|_| serde_json::json!({
                "batter": "A", "bowler": "B", "non_striker": "C",
                "runs": {"batter": 0, "extras": 0, "total": 0}
            })).collect::<Vec<_>>()
        });
        serde_json::from_value(raw).expect("over")
    }

    #[test]
    fn overs_notation_complete_final_over() {
        let overs = vec![over(0, 6), over(1, 6)];
        assert_eq!(overs_notation(&overs), "2.0");
    }

    #[test]
    fn overs_notation_partial_final_over() {
        let overs = vec![over(0, 6), over(1, 4)];
        assert_eq!(overs_notation(&overs), "1.4");
    }

    #[test]
    fn overs_notation_empty() {
        assert_eq!(overs_notation(&[]), "0.0");
    }
}
