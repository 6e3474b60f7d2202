//! Bracket/round views: partition matches by round or group and render fixtures.

use crate::models::{find_team, GameMatch, GroupLabel, MatchId, RoundId, Team};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Display name used when a match references a team that is not in the list.
pub const UNKNOWN_TEAM: &str = "TBD";

/// Matches bucketed by round. Iteration is in ascending round order; each
/// bucket keeps the input order of its matches.
pub fn group_matches_by_round(matches: &[GameMatch]) -> BTreeMap<RoundId, Vec<&GameMatch>> {
    let mut rounds: BTreeMap<RoundId, Vec<&GameMatch>> = BTreeMap::new();
    for m in matches {
        rounds.entry(m.round).or_default().push(m);
    }
    rounds
}

/// Matches bucketed by group label, groups in order of first appearance.
/// Matches without a label are left out.
pub fn group_matches_by_group(matches: &[GameMatch]) -> Vec<(GroupLabel, Vec<&GameMatch>)> {
    let mut groups: Vec<(GroupLabel, Vec<&GameMatch>)> = Vec::new();
    for m in matches {
        let Some(label) = &m.group else { continue };
        match groups.iter_mut().find(|(g, _)| g == label) {
            Some((_, bucket)) => bucket.push(m),
            None => groups.push((label.clone(), vec![m])),
        }
    }
    groups
}

/// One fixture as shown in a bracket or round list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FixtureView {
    pub match_id: MatchId,
    pub home_name: String,
    pub away_name: String,
    /// Unset until the match counts as played.
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    pub completed: bool,
    pub group: Option<GroupLabel>,
    pub kickoff: Option<DateTime<Utc>>,
}

/// Resolve names and score of a match for display.
pub fn render_fixture(m: &GameMatch, teams: &[Team]) -> FixtureView {
    let name_of = |id| {
        find_team(teams, id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_TEAM.to_string())
    };
    let score = m.score();
    FixtureView {
        match_id: m.id,
        home_name: name_of(m.home_team_id),
        away_name: name_of(m.away_team_id),
        home_goals: score.map(|(h, _)| h),
        away_goals: score.map(|(_, a)| a),
        completed: score.is_some(),
        group: m.group.clone(),
        kickoff: m.kickoff,
    }
}

/// Fixtures of one round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RoundView {
    pub round: RoundId,
    pub fixtures: Vec<FixtureView>,
}

/// All rounds, ascending, with rendered fixtures.
pub fn round_views(matches: &[GameMatch], teams: &[Team]) -> Vec<RoundView> {
    group_matches_by_round(matches)
        .into_iter()
        .map(|(round, bucket)| RoundView {
            round,
            fixtures: bucket.into_iter().map(|m| render_fixture(m, teams)).collect(),
        })
        .collect()
}
