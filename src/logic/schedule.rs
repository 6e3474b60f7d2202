//! Fixture generation: round robin (circle method), per league or per group.

use crate::logic::groups::{group_order, GroupAssignment};
use crate::models::{GameMatch, RoundId, Team, TeamId, TournamentError};
use std::collections::HashSet;

/// Single round robin: every pair of teams meets once.
///
/// `n` even gives `n - 1` rounds, `n` odd gives `n` rounds with one team idle
/// per round. Rounds are numbered from `first_round` upwards. Home and away
/// alternate between rounds.
pub fn generate_round_robin(
    teams: &[Team],
    first_round: RoundId,
) -> Result<Vec<GameMatch>, TournamentError> {
    if teams.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }
    let mut seen = HashSet::with_capacity(teams.len());
    for t in teams {
        if !seen.insert(t.id) {
            return Err(TournamentError::DuplicateTeamId(t.id));
        }
    }

    // None is the bye slot for an odd number of teams.
    let mut slots: Vec<Option<TeamId>> = teams.iter().map(|t| Some(t.id)).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let mut matches = Vec::with_capacity(teams.len() * (teams.len() - 1) / 2);

    for r in 0..n - 1 {
        for i in 0..n / 2 {
            if let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) {
                let (home, away) = if (r + i) % 2 == 0 { (a, b) } else { (b, a) };
                matches.push(GameMatch::new(home, away, first_round + r as RoundId));
            }
        }
        // First slot stays fixed, the rest rotate.
        slots[1..].rotate_right(1);
    }
    Ok(matches)
}

/// One round robin per group, every match tagged with its group label.
/// Teams without a group get no fixtures.
pub fn generate_group_fixtures(
    teams: &[Team],
    assignment: &GroupAssignment,
) -> Result<Vec<GameMatch>, TournamentError> {
    let groups = group_order(teams, assignment);
    if groups.is_empty() {
        return Err(TournamentError::NotEnoughTeams);
    }
    let mut matches = Vec::new();
    for group in groups {
        let group_teams: Vec<Team> = teams
            .iter()
            .filter(|t| assignment.get(&t.id) == Some(&group))
            .cloned()
            .collect();
        let fixtures = generate_round_robin(&group_teams, 1)?;
        matches.extend(fixtures.into_iter().map(|m| m.in_group(group.clone())));
    }
    Ok(matches)
}
