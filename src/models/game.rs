//! Match (game) record and its lifecycle state.

use crate::models::team::{GroupLabel, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Round identifier. Any integer; never renumbered.
pub type RoundId = i32;

/// Lifecycle of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    #[default]
    Scheduled,
    Played,
}

/// A single match between a home and an away team.
///
/// Scores are only meaningful when `state` is `Played`; see [`GameMatch::score`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default)]
    pub state: MatchState,
    #[serde(default)]
    pub home_goals: Option<u32>,
    #[serde(default)]
    pub away_goals: Option<u32>,
    pub round: RoundId,
    /// Only set for group-stage formats.
    #[serde(default)]
    pub group: Option<GroupLabel>,
    #[serde(default)]
    pub kickoff: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// New scheduled match without a group.
    pub fn new(home_team_id: TeamId, away_team_id: TeamId, round: RoundId) -> Self {
        Self {
            id: Uuid::new_v4(),
            home_team_id,
            away_team_id,
            state: MatchState::Scheduled,
            home_goals: None,
            away_goals: None,
            round,
            group: None,
            kickoff: None,
        }
    }

    /// Tag the match with a group label.
    pub fn in_group(mut self, group: impl Into<GroupLabel>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Builder form of [`GameMatch::record_result`].
    pub fn played(mut self, home_goals: u32, away_goals: u32) -> Self {
        self.record_result(home_goals, away_goals);
        self
    }

    /// Record the final score and mark the match as played.
    pub fn record_result(&mut self, home_goals: u32, away_goals: u32) {
        self.home_goals = Some(home_goals);
        self.away_goals = Some(away_goals);
        self.state = MatchState::Played;
    }

    /// Drop the result and put the match back to scheduled.
    pub fn clear_result(&mut self) {
        self.home_goals = None;
        self.away_goals = None;
        self.state = MatchState::Scheduled;
    }

    pub fn is_played(&self) -> bool {
        self.state == MatchState::Played
    }

    /// `(home, away)` goals if the match counts as played.
    ///
    /// A `Played` match with a missing score, or a `Scheduled` match carrying
    /// scores, yields `None` and is left out of every aggregate.
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.state, self.home_goals, self.away_goals) {
            (MatchState::Played, Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }

    /// Whether the given team plays on either side.
    pub fn involves(&self, team_id: TeamId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}
