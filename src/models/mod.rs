//! Data structures: teams, matches, standings rows, tournament container.

mod game;
mod standings;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, MatchState, RoundId};
pub use standings::{StandingsRow, POINTS_FOR_DRAW, POINTS_FOR_LOSS, POINTS_FOR_WIN};
pub use team::{find_team, GroupLabel, Team, TeamId};
pub use tournament::{Tournament, TournamentError, TournamentFormat, TournamentId};
