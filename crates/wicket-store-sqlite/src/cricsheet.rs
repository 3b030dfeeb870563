//! Serde model of a cricsheet ball-by-ball match file.
//!
//! Only the fields the store consumes are modeled; everything else in the
//! source JSON is ignored. Absent optional blocks decode to empty
//! defaults so partially-populated files still ingest.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// A complete match file: metadata plus per-innings ball-by-ball data.
#[derive(Debug, Deserialize)]
pub struct MatchFile {
    /// Match metadata.
    pub info: MatchInfo,
    /// Innings in play order.
    #[serde(default)]
    pub innings: Vec<InningsData>,
}

/// The `info` block of a match file.
#[derive(Debug, Deserialize)]
pub struct MatchInfo {
    /// Match dates; the first is the match date of record.
    #[serde(default)]
    pub dates: Vec<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    /// The two competing teams.
    #[serde(default)]
    pub teams: Vec<String>,
    /// Squad lists keyed by team name.
    #[serde(default)]
    pub players: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub officials: Option<Officials>,
    #[serde(default)]
    pub toss: Option<Toss>,
    #[serde(default)]
    pub outcome: Option<Outcome>,
}

/// Match officials by role.
#[derive(Debug, Default, Deserialize)]
pub struct Officials {
    #[serde(default)]
    pub umpires: Vec<String>,
    #[serde(default)]
    pub tv_umpires: Vec<String>,
    #[serde(default)]
    pub match_referees: Vec<String>,
}

/// Toss outcome.
#[derive(Debug, Deserialize)]
pub struct Toss {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub decision: Option<String>,
}

/// Match outcome.
#[derive(Debug, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub by: Option<Margin>,
}

/// Victory margin: runs or wickets, whichever applies.
#[derive(Debug, Deserialize)]
pub struct Margin {
    #[serde(default)]
    pub runs: Option<i64>,
    #[serde(default)]
    pub wickets: Option<i64>,
}

impl Outcome {
    /// Renders the margin as display text ("140 runs", "6 wickets"), or
    /// empty when the outcome has none.
    pub fn margin_text(&self) -> String {
        match &self.by {
            Some(Margin { runs: Some(r), .. }) => format!("{r} runs"),
            Some(Margin {
                wickets: Some(w), ..
            }) => format!("{w} wickets"),
            _ => String::new(),
        }
    }
}

/// One innings: the batting team and its overs.
#[derive(Debug, Deserialize)]
pub struct InningsData {
    pub team: String,
    #[serde(default)]
    pub overs: Vec<Over>,
}

/// One over of deliveries.
#[derive(Debug, Deserialize)]
pub struct Over {
    pub over: i64,
    #[serde(default)]
    pub deliveries: Vec<Delivery>,
}

/// One bowled ball: the atomic row of match event data.
#[derive(Debug, Deserialize)]
pub struct Delivery {
    pub batter: String,
    pub bowler: String,
    pub non_striker: String,
    #[serde(default)]
    pub runs: Runs,
    #[serde(default)]
    pub wickets: Vec<Wicket>,
}

/// Runs breakdown for a delivery.
#[derive(Debug, Default, Deserialize)]
pub struct Runs {
    #[serde(default)]
    pub batter: i64,
    #[serde(default)]
    pub extras: i64,
    #[serde(default)]
    pub total: i64,
}

/// Dismissal on a delivery.
#[derive(Debug, Deserialize)]
pub struct Wicket {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub player_out: Option<String>,
}

/// The season a match belongs to: the year of its first date.
pub fn season_from_dates(dates: &[String]) -> Option<i64> {
    dates
        .first()
        .and_then(|d| d.get(..4))
        .and_then(|y| y.parse().ok())
}

/// Derives a short name from a team name ("Royal Challengers Bangalore"
/// becomes "RCB").
pub fn short_name(team: &str) -> String {
    team.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// The match id of a file: its stem, matching the cricsheet convention
/// of naming files after the match identifier.
pub fn match_id_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_minimal_match_file() {
        let raw = json!({
            "info": {
                "dates": ["2008-04-18"],
                "city": "Bangalore",
                "venue": "M Chinnaswamy Stadium",
                "teams": ["Royal Challengers Bangalore", "Kolkata Knight Riders"],
                "toss": {"winner": "Royal Challengers Bangalore", "decision": "field"},
                "outcome": {"winner": "Kolkata Knight Riders", "by": {"runs": 140}}
            },
            "innings": [
                {
                    "team": "Kolkata Knight Riders",
                    "overs": [
                        {
                            "over": 0,
                            "deliveries": [
                                {
                                    "batter": "SC Ganguly",
                                    "bowler": "P Kumar",
                                    "non_striker": "BB McCullum",
                                    "runs": {"batter": 0, "extras": 1, "total": 1}
                                }
                            ]
                        }
                    ]
                }
            ]
        });
        let parsed: MatchFile = serde_json::from_value(raw).expect("parse");
        assert_eq!(parsed.info.teams.len(), 2);
        assert_eq!(parsed.innings[0].overs[0].deliveries.len(), 1);
        assert_eq!(
            parsed.info.outcome.as_ref().expect("outcome").margin_text(),
            "140 runs"
        );
    }

    #[test]
    fn season_is_year_of_first_date() {
        assert_eq!(season_from_dates(&["2008-04-18".into()]), Some(2008));
        assert_eq!(season_from_dates(&[]), None);
        assert_eq!(season_from_dates(&["bad".into()]), None);
    }

    #[test]
    fn short_name_takes_initials() {
        assert_eq!(short_name("Royal Challengers Bangalore"), "RCB");
        assert_eq!(short_name("Mumbai Indians"), "MI");
    }

    #[test]
    fn wickets_margin_text() {
        let outcome = Outcome {
            winner: Some("Mumbai Indians".into()),
            result: None,
            by: Some(Margin {
                runs: None,
                wickets: Some(6),
            }),
        };
        assert_eq!(outcome.margin_text(), "6 wickets");
    }

    #[test]
    fn match_id_is_file_stem() {
        assert_eq!(
            match_id_from_path(Path::new("/data/335982.json")),
            "335982"
        );
    }
}
