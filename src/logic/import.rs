//! CSV fixture import.
//!
//! Expected header: `home,away,round,group,home_goals,away_goals`. Teams are
//! referenced by name (case-insensitive). `group` may be blank. Both goal
//! columns filled means the match was played; both blank means scheduled.

use crate::models::{GameMatch, GroupLabel, RoundId, Team, TeamId, TournamentError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FixtureRecord {
    home: String,
    away: String,
    round: RoundId,
    #[serde(default)]
    group: Option<GroupLabel>,
    #[serde(default)]
    home_goals: Option<u32>,
    #[serde(default)]
    away_goals: Option<u32>,
}

fn csv_error(line: u64, message: impl Into<String>) -> TournamentError {
    TournamentError::Csv {
        line,
        message: message.into(),
    }
}

fn resolve_team(teams: &[Team], name: &str) -> Result<TeamId, TournamentError> {
    teams
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .map(|t| t.id)
        .ok_or_else(|| TournamentError::TeamNameNotFound(name.to_string()))
}

/// Parse fixtures from CSV, resolving team names against `teams`.
pub fn import_matches_csv<R: std::io::Read>(
    reader: R,
    teams: &[Team],
) -> Result<Vec<GameMatch>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| csv_error(1, e.to_string()))?
        .clone();

    let mut matches = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or(0);
            csv_error(line, e.to_string())
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: FixtureRecord = record
            .deserialize(Some(&headers))
            .map_err(|e| csv_error(line, e.to_string()))?;

        let home = resolve_team(teams, &row.home)?;
        let away = resolve_team(teams, &row.away)?;
        let mut game = GameMatch::new(home, away, row.round);
        game.group = row.group.filter(|g| !g.is_empty());
        match (row.home_goals, row.away_goals) {
            (Some(h), Some(a)) => game.record_result(h, a),
            (None, None) => {}
            _ => return Err(csv_error(line, "only one of home_goals/away_goals is set")),
        }
        matches.push(game);
    }
    log::debug!("Imported {} fixtures from CSV", matches.len());
    Ok(matches)
}
