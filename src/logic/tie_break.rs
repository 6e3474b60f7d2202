//! Ranking keys for standings tables.
//!
//! A table is ordered by an explicit list of keys applied in turn; teams equal
//! on every key keep their input order. Callers that need something not listed
//! here (head-to-head, fair play) can pass their own comparator to
//! [`compute_standings_by`](crate::logic::compute_standings_by).

use crate::models::StandingsRow;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ranking key.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// More points first.
    Points,
    /// Higher goal difference first.
    GoalDifference,
    /// More goals scored first.
    GoalsFor,
    /// Fewer goals conceded first.
    GoalsAgainst,
    /// More wins first.
    Wins,
    /// Team name, A to Z, ignoring ASCII case.
    Name,
}

impl TieBreak {
    pub fn compare(self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        match self {
            TieBreak::Points => b.points.cmp(&a.points),
            TieBreak::GoalDifference => b.goal_difference.cmp(&a.goal_difference),
            TieBreak::GoalsFor => b.goals_for.cmp(&a.goals_for),
            TieBreak::GoalsAgainst => a.goals_against.cmp(&b.goals_against),
            TieBreak::Wins => b.won.cmp(&a.won),
            TieBreak::Name => a
                .team_name
                .to_ascii_lowercase()
                .cmp(&b.team_name.to_ascii_lowercase()),
        }
    }
}

/// Ordered list of ranking keys.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TieBreakRules(Vec<TieBreak>);

impl Default for TieBreakRules {
    /// Points, then goal difference, then goals scored.
    fn default() -> Self {
        Self(vec![
            TieBreak::Points,
            TieBreak::GoalDifference,
            TieBreak::GoalsFor,
        ])
    }
}

impl TieBreakRules {
    pub fn new(keys: Vec<TieBreak>) -> Self {
        Self(keys)
    }

    /// Append a key applied after the existing ones.
    pub fn then(mut self, key: TieBreak) -> Self {
        self.0.push(key);
        self
    }

    /// First non-equal key decides.
    pub fn compare(&self, a: &StandingsRow, b: &StandingsRow) -> Ordering {
        self.0
            .iter()
            .map(|key| key.compare(a, b))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}
