use actix_files::Files;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, Responder};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use railpulse::data::master_schedule;
use railpulse::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;

struct AppState {
    engine: Engine,
    recommendations: Mutex<HashMap<String, Recommendation>>,
}

/// Externally computed recommendation, upserted keyed by train id
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation {
    train_id: String,
    action: String,
    reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    station_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    issued_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct SnapshotQuery {
    /// Reference instant; defaults to the current time
    at: Option<DateTime<Utc>>,
    /// Seed for the snapshot's randomness; fixed seeds reproduce output
    seed: Option<u64>,
}

#[get("/api/snapshot")]
async fn snapshot(state: web::Data<AppState>, query: web::Query<SnapshotQuery>) -> impl Responder {
    let now = query.at.unwrap_or_else(Utc::now);
    let seed = query.seed.unwrap_or_else(|| now.timestamp().unsigned_abs());
    let mut rng = StdRng::seed_from_u64(seed);

    match state.engine.compute_snapshot(now, &mut rng) {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(err) => {
            log::error!("snapshot computation failed: {err}");
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": err.to_string() }))
        }
    }
}

#[post("/api/recommendations")]
async fn upsert_recommendations(
    state: web::Data<AppState>,
    body: web::Json<Vec<Recommendation>>,
) -> impl Responder {
    let Ok(mut store) = state.recommendations.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    let received = body.len();
    for recommendation in body.into_inner() {
        store.insert(recommendation.train_id.clone(), recommendation);
    }
    HttpResponse::Ok().json(serde_json::json!({
        "received": received,
        "stored": store.len(),
    }))
}

#[get("/api/recommendations")]
async fn list_recommendations(state: web::Data<AppState>) -> impl Responder {
    let Ok(store) = state.recommendations.lock() else {
        return HttpResponse::InternalServerError().finish();
    };
    let mut records: Vec<Recommendation> = store.values().cloned().collect();
    records.sort_by(|a, b| a.train_id.cmp(&b.train_id));
    HttpResponse::Ok().json(records)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let state = web::Data::new(AppState {
        engine: Engine::new(master_schedule()),
        recommendations: Mutex::new(HashMap::new()),
    });

    log::info!("Starting server on 0.0.0.0:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(snapshot)
            .service(upsert_recommendations)
            .service(list_recommendations)
            .service(Files::new("/", "./dist").index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
