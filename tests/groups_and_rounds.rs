//! Integration tests for group tables, round bucketing and fixture rendering.

use football_tournament_web::{
    compute_grouped_standings, group_matches_by_group, group_matches_by_round, group_order,
    infer_group_assignment, render_fixture, round_views, GameMatch, GroupAssignment, MatchState,
    Team, UNKNOWN_TEAM,
};
use uuid::Uuid;

fn two_groups() -> (Vec<Team>, GroupAssignment) {
    let teams: Vec<Team> = ["A1", "B1", "A2", "B2"].iter().map(|n| Team::new(*n)).collect();
    let mut assignment = GroupAssignment::new();
    assignment.insert(teams[0].id, "B".to_string());
    assignment.insert(teams[1].id, "A".to_string());
    assignment.insert(teams[2].id, "B".to_string());
    assignment.insert(teams[3].id, "A".to_string());
    (teams, assignment)
}

#[test]
fn groups_follow_declaration_order_and_only_count_their_matches() {
    let (teams, assignment) = two_groups();
    let matches = vec![
        GameMatch::new(teams[0].id, teams[2].id, 1).played(0, 2).in_group("B"),
        GameMatch::new(teams[1].id, teams[3].id, 1).played(1, 1).in_group("A"),
        // No label: counts for no group.
        GameMatch::new(teams[0].id, teams[2].id, 2).played(5, 0),
    ];

    let tables = compute_grouped_standings(&teams, &matches, &assignment);
    let labels: Vec<&str> = tables.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(labels, vec!["B", "A"]);

    let group_b = &tables[0];
    let order: Vec<&str> = group_b.rows.iter().map(|r| r.team_name.as_str()).collect();
    assert_eq!(order, vec!["A2", "A1"]);
    assert_eq!(group_b.rows[0].played, 1);
    assert_eq!(group_b.rows[0].goals_for, 2);

    let group_a = &tables[1];
    assert!(group_a.rows.iter().all(|r| r.points == 1 && r.drawn == 1));
}

#[test]
fn teams_without_group_are_left_out() {
    let (mut teams, assignment) = two_groups();
    teams.push(Team::new("Guest"));
    let tables = compute_grouped_standings(&teams, &[], &assignment);
    let total: usize = tables.iter().map(|g| g.rows.len()).sum();
    assert_eq!(total, 4);
    assert_eq!(group_order(&teams, &assignment), vec!["B".to_string(), "A".to_string()]);
}

#[test]
fn group_assignment_can_be_inferred_from_matches() {
    let (teams, _) = two_groups();
    let matches = vec![
        GameMatch::new(teams[0].id, teams[2].id, 1).in_group("X"),
        GameMatch::new(teams[0].id, teams[1].id, 2).in_group("Y"),
        GameMatch::new(teams[3].id, teams[1].id, 1),
    ];
    let assignment = infer_group_assignment(&matches);
    assert_eq!(assignment.get(&teams[0].id).map(String::as_str), Some("X"));
    assert_eq!(assignment.get(&teams[1].id).map(String::as_str), Some("Y"));
    assert_eq!(assignment.get(&teams[2].id).map(String::as_str), Some("X"));
    assert!(!assignment.contains_key(&teams[3].id));
}

#[test]
fn rounds_are_ascending_and_keep_their_ids() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let matches = vec![
        GameMatch::new(a, b, 10),
        GameMatch::new(b, a, -2),
        GameMatch::new(a, b, 3),
        GameMatch::new(b, a, 10),
    ];
    let rounds = group_matches_by_round(&matches);
    let keys: Vec<i32> = rounds.keys().copied().collect();
    assert_eq!(keys, vec![-2, 3, 10]);

    let round_ten: Vec<_> = rounds[&10].iter().map(|m| m.id).collect();
    assert_eq!(round_ten, vec![matches[0].id, matches[3].id]);
}

#[test]
fn matches_grouped_by_label_in_first_seen_order() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let matches = vec![
        GameMatch::new(a, b, 1).in_group("Z"),
        GameMatch::new(a, b, 1),
        GameMatch::new(a, b, 1).in_group("C"),
        GameMatch::new(b, a, 2).in_group("Z"),
    ];
    let groups = group_matches_by_group(&matches);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "Z");
    assert_eq!(groups[0].1.len(), 2);
    assert_eq!(groups[1].0, "C");
}

#[test]
fn fixture_shows_placeholder_and_score_only_when_played() {
    let home = Team::new("Home FC");
    let teams = vec![home.clone()];
    let scheduled = GameMatch::new(home.id, Uuid::new_v4(), 1);
    let view = render_fixture(&scheduled, &teams);
    assert_eq!(view.home_name, "Home FC");
    assert_eq!(view.away_name, UNKNOWN_TEAM);
    assert_eq!((view.home_goals, view.away_goals), (None, None));
    assert!(!view.completed);

    let played = scheduled.clone().played(3, 1);
    let view = render_fixture(&played, &teams);
    assert_eq!((view.home_goals, view.away_goals), (Some(3), Some(1)));
    assert!(view.completed);

    let mut half = scheduled;
    half.state = MatchState::Played;
    half.home_goals = Some(1);
    let view = render_fixture(&half, &teams);
    assert!(!view.completed);
    assert_eq!(view.home_goals, None);
}

#[test]
fn round_views_render_every_match_once() {
    let teams: Vec<Team> = ["A", "B", "C"].iter().map(|n| Team::new(*n)).collect();
    let matches = vec![
        GameMatch::new(teams[0].id, teams[1].id, 2),
        GameMatch::new(teams[1].id, teams[2].id, 1).played(1, 0),
        GameMatch::new(teams[2].id, teams[0].id, 2),
    ];
    let views = round_views(&matches, &teams);
    assert_eq!(views.iter().map(|r| r.round).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(views[0].fixtures[0].home_name, "B");
    assert!(views[0].fixtures[0].completed);
    assert_eq!(views[1].fixtures.len(), 2);
    assert_eq!(views[1].fixtures[1].home_name, "C");
}
