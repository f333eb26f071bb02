//! Scoring server: REST commands for the scoring table, a read-only display feed.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST, PORT, KUMITE_DATA_DIR (session files, default "data").

use actix_web::{
    get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use kumite_scoring::{
    parse_entrants, ChannelBroadcaster, Command, DisplaySnapshot, JsonFileStore, MatchSession,
    Scoreboard,
};
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;

/// The single scoring session.
type AppState = Data<RwLock<Scoreboard>>;

/// Latest snapshot seen on the broadcast channel; the display's only view.
type DisplayFeed = Data<RwLock<Option<DisplaySnapshot>>>;

/// Snapshots buffered per display before it starts skipping.
const DISPLAY_CHANNEL_CAPACITY: usize = 64;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Session after a command; `ignored` says why nothing changed.
#[derive(Serialize)]
struct CommandResponse<'a> {
    session: &'a MatchSession,
    #[serde(skip_serializing_if = "Option::is_none")]
    ignored: Option<String>,
}

#[derive(Serialize)]
struct ImportResponse<'a> {
    session: &'a MatchSession,
    imported: usize,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "kumite-scoring",
    })
}

/// Current session: bracket, cursor, scores, outcome, history, clock.
#[get("/api/session")]
async fn api_get_session(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.session())
}

/// Apply one user action. Refused actions are not errors: the unchanged
/// session comes back with the reason in `ignored`.
#[post("/api/commands")]
async fn api_command(state: AppState, body: Json<Command>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let ignored = g.execute(body.into_inner()).err().map(|e| e.to_string());
    HttpResponse::Ok().json(CommandResponse {
        session: g.session(),
        ignored,
    })
}

/// Load entrants from the spreadsheet layout exported as CSV (request body).
#[post("/api/entrants")]
async fn api_import_entrants(state: AppState, body: String) -> HttpResponse {
    let list = match parse_entrants(body.as_bytes()) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Rejected entrant import: {}", e);
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let imported = g.import_entrants(list);
    HttpResponse::Ok().json(ImportResponse {
        session: g.session(),
        imported,
    })
}

/// What the secondary display shows. May lag the session slightly.
#[get("/api/display")]
async fn api_display(feed: DisplayFeed) -> HttpResponse {
    let g = match feed.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.as_ref() {
        Some(snapshot) => HttpResponse::Ok().json(snapshot),
        None => HttpResponse::NoContent().finish(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_dir() -> String {
    "data".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let data_dir = std::env::var("KUMITE_DATA_DIR").unwrap_or_else(|_| default_data_dir());
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!("Session files in {}", data_dir);

    let broadcaster = ChannelBroadcaster::new(DISPLAY_CHANNEL_CAPACITY);
    let mut display_rx = broadcaster.subscribe();
    let scoreboard = Scoreboard::restore(
        Box::new(broadcaster),
        Box::new(JsonFileStore::new(data_dir)),
    );
    let feed: DisplayFeed = Data::new(RwLock::new(Some(scoreboard.snapshot())));
    let state: AppState = Data::new(RwLock::new(scoreboard));

    // Background task: keep the latest broadcast snapshot for the display endpoint
    let feed_writer = feed.clone();
    actix_web::rt::spawn(async move {
        loop {
            match display_rx.recv().await {
                Ok(snapshot) => {
                    if let Ok(mut g) = feed_writer.write() {
                        *g = Some(snapshot);
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("Display feed skipped {} snapshot(s)", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Background task: drive the match clock once per second
    let state_clock = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(1));
        loop {
            interval.tick().await;
            let mut g = match state_clock.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            g.tick();
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(feed.clone())
            .service(api_health)
            .service(api_get_session)
            .service(api_command)
            .service(api_import_entrants)
            .service(api_display)
    })
    .bind(bind)?
    .run()
    .await
}
