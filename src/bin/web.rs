//! Single binary web server: tournament management and standings via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, INACTIVITY_TIMEOUT_HOURS, CLEANUP_INTERVAL_MINUTES.

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use football_tournament_web::{
    compute_grouped_standings_with, compute_standings_with, validate_snapshot, GameMatch,
    GroupAssignment, GroupLabel, MatchId, RoundId, Team, TeamId, TieBreakRules, Tournament,
    TournamentError, TournamentFormat, TournamentId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-tournament entry: tournament data + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Inactive entries are removed periodically.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Settings read from the environment at startup.
#[derive(Clone, Debug)]
struct ServerConfig {
    host: String,
    port: u16,
    inactivity_timeout: Duration,
    cleanup_interval: Duration,
}

impl ServerConfig {
    fn from_env() -> Self {
        fn var_or<T: std::str::FromStr>(key: &str, default: T) -> T {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }
        Self {
            host: var_or("HOST", "0.0.0.0".to_string()),
            port: var_or("PORT", 8080),
            inactivity_timeout: Duration::from_secs(var_or("INACTIVITY_TIMEOUT_HOURS", 12u64) * 3600),
            cleanup_interval: Duration::from_secs(var_or("CLEANUP_INTERVAL_MINUTES", 30u64) * 60),
        }
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
    #[serde(default)]
    format: TournamentFormat,
}

#[derive(Deserialize)]
struct AddTeamBody {
    name: String,
}

#[derive(Deserialize)]
struct AssignGroupBody {
    group: GroupLabel,
}

#[derive(Deserialize)]
struct AddMatchBody {
    home_team_id: TeamId,
    away_team_id: TeamId,
    round: RoundId,
    #[serde(default)]
    group: Option<GroupLabel>,
}

#[derive(Deserialize)]
struct GenerateFixturesBody {
    #[serde(default)]
    shuffle: bool,
}

#[derive(Deserialize)]
struct RecordResultBody {
    home_goals: u32,
    away_goals: u32,
}

/// Snapshot posted for a one-off standings computation.
#[derive(Deserialize)]
struct StandingsSnapshotBody {
    teams: Vec<Team>,
    matches: Vec<GameMatch>,
    #[serde(default)]
    tie_breaks: TieBreakRules,
    #[serde(default)]
    group_assignment: Option<GroupAssignment>,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and team id.
#[derive(Deserialize)]
struct TournamentTeamPath {
    id: TournamentId,
    team_id: TeamId,
}

/// Path segments: tournament id and match id.
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: MatchId,
}

fn error_response(e: TournamentError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Lock the store, look up a tournament, refresh its activity time and run `f` on it.
fn with_tournament<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(&mut entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Run a mutating operation and answer with the updated tournament.
fn mutate<F>(state: &AppState, id: TournamentId, f: F) -> HttpResponse
where
    F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
{
    with_tournament(state, id, |t| match f(t) {
        Ok(()) => HttpResponse::Ok().json(&*t),
        Err(e) => error_response(e),
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "football-tournament-web",
    })
}

/// Create a new tournament (returns it with id; client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = Tournament::new(body.name.trim(), body.format);
    let response = HttpResponse::Ok().json(&tournament);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!("Created tournament {} ({:?})", tournament.id, tournament.format);
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(&*t))
}

#[post("/api/tournaments/{id}/teams")]
async fn api_add_team(state: AppState, path: Path<TournamentPath>, body: Json<AddTeamBody>) -> HttpResponse {
    mutate(&state, path.id, |t| t.add_team(body.name.as_str()).map(|_| ()))
}

/// Remove a team (only when no match references it).
#[delete("/api/tournaments/{id}/teams/{team_id}")]
async fn api_remove_team(state: AppState, path: Path<TournamentTeamPath>) -> HttpResponse {
    mutate(&state, path.id, |t| t.remove_team(path.team_id))
}

#[put("/api/tournaments/{id}/teams/{team_id}/group")]
async fn api_assign_group(
    state: AppState,
    path: Path<TournamentTeamPath>,
    body: Json<AssignGroupBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| t.assign_group(path.team_id, body.group.as_str()))
}

#[post("/api/tournaments/{id}/matches")]
async fn api_add_match(state: AppState, path: Path<TournamentPath>, body: Json<AddMatchBody>) -> HttpResponse {
    let body = body.into_inner();
    mutate(&state, path.id, |t| {
        t.add_match(body.home_team_id, body.away_team_id, body.round, body.group)
            .map(|_| ())
    })
}

/// Replace fixtures with a generated round robin.
#[post("/api/tournaments/{id}/matches/generate")]
async fn api_generate_fixtures(
    state: AppState,
    path: Path<TournamentPath>,
    body: Option<Json<GenerateFixturesBody>>,
) -> HttpResponse {
    let shuffle = body.as_ref().map(|b| b.shuffle).unwrap_or(false);
    mutate(&state, path.id, |t| t.generate_fixtures(shuffle))
}

/// Append fixtures from a CSV request body.
#[post("/api/tournaments/{id}/matches/import")]
async fn api_import_matches(state: AppState, path: Path<TournamentPath>, body: String) -> HttpResponse {
    mutate(&state, path.id, |t| {
        let added = t.import_matches(body.as_bytes())?;
        log::info!("Imported {} matches into tournament {}", added, t.id);
        Ok(())
    })
}

#[put("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<RecordResultBody>,
) -> HttpResponse {
    mutate(&state, path.id, |t| {
        t.record_result(path.match_id, body.home_goals, body.away_goals)
    })
}

#[delete("/api/tournaments/{id}/matches/{match_id}/result")]
async fn api_clear_result(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    mutate(&state, path.id, |t| t.clear_result(path.match_id))
}

#[put("/api/tournaments/{id}/tie-breaks")]
async fn api_set_tie_breaks(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TieBreakRules>,
) -> HttpResponse {
    let rules = body.into_inner();
    mutate(&state, path.id, |t| {
        t.set_tie_breaks(rules);
        Ok(())
    })
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.standings()))
}

#[get("/api/tournaments/{id}/groups")]
async fn api_group_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.grouped_standings()))
}

#[get("/api/tournaments/{id}/rounds")]
async fn api_rounds(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    with_tournament(&state, path.id, |t| HttpResponse::Ok().json(t.rounds()))
}

/// Compute standings for a posted snapshot without storing anything.
#[post("/api/standings")]
async fn api_compute_standings(body: Json<StandingsSnapshotBody>) -> HttpResponse {
    let body = body.into_inner();
    if let Err(e) = validate_snapshot(&body.teams, &body.matches) {
        return error_response(e);
    }
    let standings = compute_standings_with(&body.teams, &body.matches, &body.tie_breaks);
    let groups = body.group_assignment.as_ref().map(|assignment| {
        compute_grouped_standings_with(&body.teams, &body.matches, assignment, &body.tie_breaks)
    });
    HttpResponse::Ok().json(serde_json::json!({
        "standings": standings,
        "groups": groups,
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    log::info!("Starting server at http://{}:{}", config.host, config.port);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));

    // Background task: periodically remove tournaments nobody has touched for a while
    let state_cleanup = state.clone();
    let inactivity_timeout = config.inactivity_timeout;
    let cleanup_interval = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < inactivity_timeout);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive tournament(s)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_get_tournament)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_assign_group)
            .service(api_add_match)
            .service(api_generate_fixtures)
            .service(api_import_matches)
            .service(api_record_result)
            .service(api_clear_result)
            .service(api_set_tie_breaks)
            .service(api_standings)
            .service(api_group_standings)
            .service(api_rounds)
            .service(api_compute_standings)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
