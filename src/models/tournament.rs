//! Tournament container and TournamentError.

use crate::logic::{
    compute_grouped_standings_with, compute_standings_with, generate_group_fixtures,
    generate_round_robin, import_matches_csv, round_views, GroupTable, RoundView, TieBreakRules,
};
use crate::models::game::{GameMatch, MatchId, RoundId};
use crate::models::standings::StandingsRow;
use crate::models::team::{find_team, GroupLabel, Team, TeamId};
use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur at the tournament boundary (input validation and edits).
///
/// The standings and round computations themselves never fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// The same team id appears twice in a snapshot.
    DuplicateTeamId(TeamId),
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// The same match id appears twice in a snapshot.
    DuplicateMatchId(MatchId),
    EmptyTeamName,
    TeamNotFound(TeamId),
    /// A team name in imported data does not match any team.
    TeamNameNotFound(String),
    /// Team cannot be removed while matches reference it.
    TeamHasMatches(TeamId),
    MatchNotFound(MatchId),
    /// Home and away are the same team.
    SelfMatch(TeamId),
    /// Need at least 2 teams to generate fixtures.
    NotEnoughTeams,
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Malformed CSV input.
    Csv { line: u64, message: String },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::DuplicateTeamId(id) => write!(f, "Team {} appears more than once", id),
            TournamentError::DuplicateTeamName => write!(f, "A team with this name already exists"),
            TournamentError::DuplicateMatchId(id) => write!(f, "Match {} appears more than once", id),
            TournamentError::EmptyTeamName => write!(f, "Team name must not be empty"),
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::TeamNameNotFound(name) => write!(f, "No team named '{}'", name),
            TournamentError::TeamHasMatches(_) => {
                write!(f, "Team still has matches and cannot be removed")
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
            TournamentError::SelfMatch(_) => write!(f, "A team cannot play against itself"),
            TournamentError::NotEnoughTeams => write!(f, "Need at least 2 teams to generate fixtures"),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::Csv { line, message } => write!(f, "CSV line {}: {}", line, message),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Competition format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// One table, everybody against everybody.
    #[default]
    League,
    /// Teams split into groups, one table per group.
    Groups,
}

/// Full tournament state: teams, matches, group split and ranking rules.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: TournamentFormat,
    pub teams: Vec<Team>,
    pub matches: Vec<GameMatch>,
    /// Which group each team plays in (Groups format only).
    pub group_assignment: HashMap<TeamId, GroupLabel>,
    pub tie_breaks: TieBreakRules,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new(name: impl Into<String>, format: TournamentFormat) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            teams: Vec::new(),
            matches: Vec::new(),
            group_assignment: HashMap::new(),
            tie_breaks: TieBreakRules::default(),
            created_at: Utc::now(),
        }
    }

    pub fn get_team(&self, id: TeamId) -> Option<&Team> {
        find_team(&self.teams, id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Add a team. Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = Team::new(name_trimmed);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Remove a team that no match references.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<(), TournamentError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        if self.matches.iter().any(|m| m.involves(team_id)) {
            return Err(TournamentError::TeamHasMatches(team_id));
        }
        self.teams.remove(idx);
        self.group_assignment.remove(&team_id);
        Ok(())
    }

    /// Put a team into a group (Groups format only).
    pub fn assign_group(
        &mut self,
        team_id: TeamId,
        group: impl Into<GroupLabel>,
    ) -> Result<(), TournamentError> {
        if self.format != TournamentFormat::Groups {
            return Err(TournamentError::InvalidState);
        }
        if self.get_team(team_id).is_none() {
            return Err(TournamentError::TeamNotFound(team_id));
        }
        let group: GroupLabel = group.into();
        let group = group.trim();
        if group.is_empty() {
            return Err(TournamentError::InvalidState);
        }
        self.group_assignment.insert(team_id, group.to_string());
        Ok(())
    }

    /// Add a single scheduled match between two known teams.
    pub fn add_match(
        &mut self,
        home_team_id: TeamId,
        away_team_id: TeamId,
        round: RoundId,
        group: Option<GroupLabel>,
    ) -> Result<MatchId, TournamentError> {
        for id in [home_team_id, away_team_id] {
            if self.get_team(id).is_none() {
                return Err(TournamentError::TeamNotFound(id));
            }
        }
        if home_team_id == away_team_id {
            return Err(TournamentError::SelfMatch(home_team_id));
        }
        let mut game = GameMatch::new(home_team_id, away_team_id, round);
        game.group = group;
        let id = game.id;
        self.matches.push(game);
        Ok(id)
    }

    /// Replace all fixtures with a generated round robin (per group in Groups format).
    ///
    /// Refused once any result has been recorded.
    pub fn generate_fixtures(&mut self, shuffle: bool) -> Result<(), TournamentError> {
        if self.matches.iter().any(|m| m.is_played()) {
            return Err(TournamentError::InvalidState);
        }
        let mut teams = self.teams.clone();
        if shuffle {
            teams.shuffle(&mut rand::thread_rng());
        }
        let matches = match self.format {
            TournamentFormat::League => generate_round_robin(&teams, 1)?,
            TournamentFormat::Groups => generate_group_fixtures(&teams, &self.group_assignment)?,
        };
        log::debug!("Generated {} fixtures for '{}'", matches.len(), self.name);
        self.matches = matches;
        Ok(())
    }

    /// Append matches parsed from CSV. Returns how many were added.
    pub fn import_matches<R: std::io::Read>(&mut self, reader: R) -> Result<usize, TournamentError> {
        let imported = import_matches_csv(reader, &self.teams)?;
        if let Some(m) = imported.iter().find(|m| m.home_team_id == m.away_team_id) {
            return Err(TournamentError::SelfMatch(m.home_team_id));
        }
        let added = imported.len();
        self.matches.extend(imported);
        Ok(added)
    }

    /// Record the score of a match and mark it played.
    pub fn record_result(
        &mut self,
        match_id: MatchId,
        home_goals: u32,
        away_goals: u32,
    ) -> Result<(), TournamentError> {
        self.get_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?
            .record_result(home_goals, away_goals);
        Ok(())
    }

    /// Undo a recorded result.
    pub fn clear_result(&mut self, match_id: MatchId) -> Result<(), TournamentError> {
        self.get_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?
            .clear_result();
        Ok(())
    }

    pub fn set_tie_breaks(&mut self, rules: TieBreakRules) {
        self.tie_breaks = rules;
    }

    /// League table over all teams and matches.
    pub fn standings(&self) -> Vec<StandingsRow> {
        compute_standings_with(&self.teams, &self.matches, &self.tie_breaks)
    }

    /// One table per group, in the order groups first appear in the team list.
    pub fn grouped_standings(&self) -> Vec<GroupTable> {
        compute_grouped_standings_with(
            &self.teams,
            &self.matches,
            &self.group_assignment,
            &self.tie_breaks,
        )
    }

    /// Fixtures grouped by round, rounds ascending.
    pub fn rounds(&self) -> Vec<RoundView> {
        round_views(&self.matches, &self.teams)
    }
}
