//! Football tournament organizer: library with models and standings/bracket logic.

pub mod logic;
pub mod models;

pub use logic::{
    compute_grouped_standings, compute_grouped_standings_with, compute_standings,
    compute_standings_by, compute_standings_with, generate_group_fixtures, generate_round_robin,
    group_matches_by_group, group_matches_by_round, group_order, import_matches_csv,
    infer_group_assignment, render_fixture, round_views, validate_snapshot, FixtureView,
    GroupAssignment, GroupTable, RoundView, TieBreak, TieBreakRules, UNKNOWN_TEAM,
};
pub use models::{
    find_team, GameMatch, GroupLabel, MatchId, MatchState, RoundId, StandingsRow, Team, TeamId,
    Tournament, TournamentError, TournamentFormat, TournamentId, POINTS_FOR_DRAW,
    POINTS_FOR_LOSS, POINTS_FOR_WIN,
};
