//! Tournament logic: standings, group tables, round views, fixtures, import.

mod groups;
mod import;
mod rounds;
mod schedule;
mod standings;
mod tie_break;

pub use groups::{
    compute_grouped_standings, compute_grouped_standings_with, group_order,
    infer_group_assignment, GroupAssignment, GroupTable,
};
pub use import::import_matches_csv;
pub use rounds::{
    group_matches_by_group, group_matches_by_round, render_fixture, round_views, FixtureView,
    RoundView, UNKNOWN_TEAM,
};
pub use schedule::{generate_group_fixtures, generate_round_robin};
pub use standings::{
    compute_standings, compute_standings_by, compute_standings_with, validate_snapshot,
};
pub use tie_break::{TieBreak, TieBreakRules};
