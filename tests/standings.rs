//! Integration tests for the league table: aggregation, ordering and fail-soft input handling.

use football_tournament_web::{
    compute_standings, compute_standings_by, compute_standings_with, validate_snapshot,
    GameMatch, MatchState, Team, TieBreak, TieBreakRules, TournamentError,
};
use uuid::Uuid;

fn teams(names: &[&str]) -> Vec<Team> {
    names.iter().map(|n| Team::new(*n)).collect()
}

fn names(rows: &[football_tournament_web::StandingsRow]) -> Vec<&str> {
    rows.iter().map(|r| r.team_name.as_str()).collect()
}

#[test]
fn example_scenario_ranks_a_c_b() {
    let t = teams(&["A", "B", "C"]);
    let (a, b, c) = (t[0].id, t[1].id, t[2].id);
    let matches = vec![
        GameMatch::new(a, b, 1).played(2, 1),
        GameMatch::new(b, c, 1).played(0, 0),
        GameMatch::new(a, c, 2),
    ];

    let rows = compute_standings(&t, &matches);
    assert_eq!(names(&rows), vec!["A", "C", "B"]);

    let row_a = &rows[0];
    assert_eq!((row_a.played, row_a.points, row_a.goals_for, row_a.goals_against), (1, 3, 2, 1));
    assert_eq!(row_a.goal_difference, 1);

    let row_c = &rows[1];
    assert_eq!((row_c.played, row_c.points, row_c.goals_for, row_c.goals_against), (1, 1, 0, 0));
    assert_eq!(row_c.goal_difference, 0);

    let row_b = &rows[2];
    assert_eq!((row_b.played, row_b.points, row_b.goals_for, row_b.goals_against), (2, 1, 1, 2));
    assert_eq!(row_b.goal_difference, -1);
    assert_eq!((row_b.won, row_b.drawn, row_b.lost), (0, 1, 1));
}

#[test]
fn empty_team_list_gives_empty_table() {
    let other = Team::new("X");
    let matches = vec![GameMatch::new(other.id, Uuid::new_v4(), 1).played(1, 0)];
    assert!(compute_standings(&[], &matches).is_empty());
}

#[test]
fn no_played_matches_keeps_input_order() {
    let t = teams(&["Zeta", "Alpha", "Mid"]);
    let matches = vec![GameMatch::new(t[0].id, t[1].id, 1)];
    let rows = compute_standings(&t, &matches);
    assert_eq!(names(&rows), vec!["Zeta", "Alpha", "Mid"]);
    assert!(rows.iter().all(|r| r.played == 0 && r.points == 0 && r.goal_difference == 0));
}

#[test]
fn goals_for_breaks_tie_on_points_and_difference() {
    let t = teams(&["A", "B", "C", "D"]);
    let matches = vec![
        GameMatch::new(t[0].id, t[2].id, 1).played(1, 0),
        GameMatch::new(t[1].id, t[3].id, 1).played(3, 2),
    ];
    let rows = compute_standings(&t, &matches);
    // A and B: 3 pts, +1 each; B scored more.
    assert_eq!(names(&rows), vec!["B", "A", "D", "C"]);
}

#[test]
fn played_match_without_score_is_ignored() {
    let t = teams(&["A", "B"]);
    let mut broken = GameMatch::new(t[0].id, t[1].id, 1);
    broken.state = MatchState::Played;
    broken.home_goals = Some(4);
    let rows = compute_standings(&t, &[broken]);
    assert!(rows.iter().all(|r| r.played == 0));
}

#[test]
fn scheduled_match_with_scores_is_ignored() {
    let t = teams(&["A", "B"]);
    let mut early = GameMatch::new(t[0].id, t[1].id, 1);
    early.home_goals = Some(2);
    early.away_goals = Some(0);
    let rows = compute_standings(&t, &[early]);
    assert!(rows.iter().all(|r| r.played == 0 && r.points == 0));
}

#[test]
fn unknown_opponent_still_credits_known_side() {
    let t = teams(&["A"]);
    let matches = vec![
        GameMatch::new(t[0].id, Uuid::new_v4(), 1).played(0, 2),
        GameMatch::new(Uuid::new_v4(), Uuid::new_v4(), 1).played(5, 5),
    ];
    let rows = compute_standings(&t, &matches);
    assert_eq!(rows.len(), 1);
    assert_eq!((rows[0].played, rows[0].lost, rows[0].goals_against), (1, 1, 2));
}

#[test]
fn duplicate_team_ids_collapse_into_first_row() {
    let a = Team::new("A");
    let b = Team::new("B");
    let dup = Team::with_id(a.id, "A again");
    let t = vec![a.clone(), b.clone(), dup];
    let matches = vec![GameMatch::new(a.id, b.id, 1).played(1, 1)];

    let rows = compute_standings(&t, &matches);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].team_name, "A");
    assert_eq!(rows[0].played, 1);

    assert_eq!(
        validate_snapshot(&t, &matches),
        Err(TournamentError::DuplicateTeamId(a.id))
    );
}

#[test]
fn validate_snapshot_rejects_repeated_match() {
    let t = teams(&["A", "B"]);
    let m = GameMatch::new(t[0].id, t[1].id, 1);
    let id = m.id;
    assert_eq!(
        validate_snapshot(&t, &[m.clone(), m]),
        Err(TournamentError::DuplicateMatchId(id))
    );
    assert!(validate_snapshot(&t, &[]).is_ok());
}

#[test]
fn extra_tie_break_orders_remaining_ties_by_name() {
    let t = teams(&["Rovers", "Athletic", "City"]);
    let rules = TieBreakRules::default().then(TieBreak::Name);
    let rows = compute_standings_with(&t, &[], &rules);
    assert_eq!(names(&rows), vec!["Athletic", "City", "Rovers"]);
}

#[test]
fn goals_against_rule_prefers_tighter_defence() {
    let t = teams(&["A", "B"]);
    let matches = vec![
        GameMatch::new(t[0].id, Uuid::new_v4(), 1).played(3, 2),
        GameMatch::new(t[1].id, Uuid::new_v4(), 1).played(1, 0),
    ];
    let rules = TieBreakRules::new(vec![TieBreak::Points, TieBreak::GoalsAgainst]);
    let rows = compute_standings_with(&t, &matches, &rules);
    assert_eq!(names(&rows), vec!["B", "A"]);
    // Default rules would prefer A on goals scored.
    assert_eq!(names(&compute_standings(&t, &matches)), vec!["A", "B"]);
}

#[test]
fn custom_comparator_is_applied_stably() {
    let t = teams(&["A", "B", "C"]);
    let matches = vec![GameMatch::new(t[2].id, t[0].id, 1).played(2, 0)];
    // Fewest matches played first.
    let rows = compute_standings_by(&t, &matches, |x, y| x.played.cmp(&y.played));
    assert_eq!(names(&rows), vec!["B", "A", "C"]);
}

#[test]
fn huge_scores_accumulate_without_overflow() {
    let t = teams(&["A", "B"]);
    let (a, b) = (t[0].id, t[1].id);
    let matches = vec![
        GameMatch::new(a, b, 1).played(u32::MAX, 0),
        GameMatch::new(a, b, 2).played(1, 0),
    ];
    let rows = compute_standings(&t, &matches);
    assert_eq!(names(&rows), vec!["A", "B"]);
    assert_eq!(rows[0].goals_for, u64::from(u32::MAX) + 1);
    assert_eq!(rows[0].goal_difference, i64::from(u32::MAX) + 1);
    assert_eq!(rows[1].goals_against, u64::from(u32::MAX) + 1);
    assert_eq!(rows[1].goal_difference, -(i64::from(u32::MAX) + 1));
    assert_eq!(rows[0].points, 6);
}

#[test]
fn self_match_credits_both_sides_of_the_same_row() {
    let t = teams(&["A", "B"]);
    let a = t[0].id;
    let rows = compute_standings(&t, &[GameMatch::new(a, a, 1).played(2, 1)]);
    let row = rows.iter().find(|r| r.team_id == a).unwrap();
    assert_eq!((row.played, row.won, row.drawn, row.lost), (2, 1, 0, 1));
    assert_eq!((row.goals_for, row.goals_against), (3, 3));
    assert_eq!(row.goal_difference, 0);
    assert_eq!(row.points, 3);
    assert_eq!(rows[0].team_id, a);
}
