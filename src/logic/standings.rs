//! League table: reduce teams + matches into ranked standings rows.

use crate::logic::tie_break::TieBreakRules;
use crate::models::{GameMatch, StandingsRow, Team, TeamId, TournamentError};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Standings with the default ranking (points, goal difference, goals scored).
pub fn compute_standings(teams: &[Team], matches: &[GameMatch]) -> Vec<StandingsRow> {
    compute_standings_with(teams, matches, &TieBreakRules::default())
}

/// Standings ranked by an explicit list of keys.
pub fn compute_standings_with(
    teams: &[Team],
    matches: &[GameMatch],
    rules: &TieBreakRules,
) -> Vec<StandingsRow> {
    compute_standings_by(teams, matches, |a, b| rules.compare(a, b))
}

/// Standings ranked by any comparator.
///
/// 1. One zeroed row per distinct team id; a repeated id reuses the row of its first occurrence.
/// 2. Every match with a usable score credits the sides that are known teams.
/// 3. Rows are stable-sorted with `cmp`, so full ties keep the input team order.
pub fn compute_standings_by<F>(teams: &[Team], matches: &[GameMatch], cmp: F) -> Vec<StandingsRow>
where
    F: Fn(&StandingsRow, &StandingsRow) -> Ordering,
{
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(teams.len());
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(teams.len());
    for team in teams {
        if index.contains_key(&team.id) {
            continue;
        }
        index.insert(team.id, rows.len());
        rows.push(StandingsRow::for_team(team));
    }

    for m in matches {
        let Some((home_goals, away_goals)) = m.score() else {
            if m.is_played() {
                log::debug!("Skipping match {}: played without a full score", m.id);
            }
            continue;
        };
        let home = index.get(&m.home_team_id).copied();
        let away = index.get(&m.away_team_id).copied();
        if home.is_none() && away.is_none() {
            log::debug!("Skipping match {}: neither team is in this table", m.id);
            continue;
        }
        if let Some(i) = home {
            rows[i].record(home_goals, away_goals);
        }
        if let Some(i) = away {
            rows[i].record(away_goals, home_goals);
        }
    }

    rows.sort_by(|a, b| cmp(a, b));
    rows
}

/// Reject snapshots with repeated team or match ids before they reach the table code.
pub fn validate_snapshot(teams: &[Team], matches: &[GameMatch]) -> Result<(), TournamentError> {
    let mut team_ids = HashSet::with_capacity(teams.len());
    for team in teams {
        if !team_ids.insert(team.id) {
            return Err(TournamentError::DuplicateTeamId(team.id));
        }
    }
    let mut match_ids = HashSet::with_capacity(matches.len());
    for m in matches {
        if !match_ids.insert(m.id) {
            return Err(TournamentError::DuplicateMatchId(m.id));
        }
    }
    Ok(())
}
