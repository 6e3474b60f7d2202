//! Derived standings row (one per team, recomputed on every call).

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;
pub const POINTS_FOR_LOSS: u32 = 0;

/// Statistics for one team across the counted matches.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    /// Zeroed row for a team.
    pub fn for_team(team: &Team) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            ..Self::default()
        }
    }

    /// Add one match from this team's point of view.
    pub fn record(&mut self, goals_for: u32, goals_against: u32) {
        self.played += 1;
        self.goals_for = self.goals_for.saturating_add(u64::from(goals_for));
        self.goals_against = self.goals_against.saturating_add(u64::from(goals_against));
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => {
                self.won += 1;
                self.points += POINTS_FOR_WIN;
            }
            std::cmp::Ordering::Equal => {
                self.drawn += 1;
                self.points += POINTS_FOR_DRAW;
            }
            std::cmp::Ordering::Less => {
                self.lost += 1;
                self.points += POINTS_FOR_LOSS;
            }
        }
        self.goal_difference = goal_difference(self.goals_for, self.goals_against);
    }
}

/// `goals_for - goals_against`, clamped to the `i64` range.
fn goal_difference(goals_for: u64, goals_against: u64) -> i64 {
    if goals_for >= goals_against {
        i64::try_from(goals_for - goals_against).unwrap_or(i64::MAX)
    } else {
        i64::try_from(goals_against - goals_for).map_or(i64::MIN, |d| -d)
    }
}
