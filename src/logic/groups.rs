//! Group stage: one independent table per group.

use crate::logic::standings::compute_standings_with;
use crate::logic::tie_break::TieBreakRules;
use crate::models::{GameMatch, GroupLabel, StandingsRow, Team, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which group each team plays in.
pub type GroupAssignment = HashMap<TeamId, GroupLabel>;

/// Standings of a single group.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupTable {
    pub group: GroupLabel,
    pub rows: Vec<StandingsRow>,
}

/// Group labels in the order they are first declared by the team list.
pub fn group_order(teams: &[Team], assignment: &GroupAssignment) -> Vec<GroupLabel> {
    let mut order: Vec<GroupLabel> = Vec::new();
    for team in teams {
        if let Some(label) = assignment.get(&team.id) {
            if !order.contains(label) {
                order.push(label.clone());
            }
        }
    }
    order
}

/// Group tables with the default ranking.
pub fn compute_grouped_standings(
    teams: &[Team],
    matches: &[GameMatch],
    assignment: &GroupAssignment,
) -> Vec<GroupTable> {
    compute_grouped_standings_with(teams, matches, assignment, &TieBreakRules::default())
}

/// Group tables ranked by `rules`.
///
/// Each group gets the teams assigned to it and the matches carrying its label.
/// Teams without a group and matches without a label take part in no table.
pub fn compute_grouped_standings_with(
    teams: &[Team],
    matches: &[GameMatch],
    assignment: &GroupAssignment,
    rules: &TieBreakRules,
) -> Vec<GroupTable> {
    group_order(teams, assignment)
        .into_iter()
        .map(|group| {
            let group_teams: Vec<Team> = teams
                .iter()
                .filter(|t| assignment.get(&t.id) == Some(&group))
                .cloned()
                .collect();
            let group_matches: Vec<GameMatch> = matches
                .iter()
                .filter(|m| m.group.as_deref() == Some(group.as_str()))
                .cloned()
                .collect();
            let rows = compute_standings_with(&group_teams, &group_matches, rules);
            GroupTable { group, rows }
        })
        .collect()
}

/// Derive a group assignment from labelled matches: each team takes the label
/// of the first labelled match it appears in.
pub fn infer_group_assignment(matches: &[GameMatch]) -> GroupAssignment {
    let mut assignment = GroupAssignment::new();
    for m in matches {
        if let Some(label) = &m.group {
            for id in [m.home_team_id, m.away_team_id] {
                assignment.entry(id).or_insert_with(|| label.clone());
            }
        }
    }
    assignment
}
