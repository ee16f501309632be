use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod response;
mod validate;

use db::Db;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::config();

    let db = Db::connect(&config.database)
        .unwrap_or_else(|e| panic!("invalid database configuration: {}", e));

    // Connections are lazy; report store reachability without holding up the bind
    tokio::spawn({
        let db = db.clone();
        async move {
            match db.health_check().await {
                Ok(()) => tracing::info!("database connection established"),
                Err(e) => tracing::warn!("database not reachable yet: {}", e),
            }
        }
    });

    let app = app(db);

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("HealthLink API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(db: Db) -> Router {
    Router::new()
        // Liveness
        .route("/", get(root))
        .route("/api", get(api_index))
        // Resource routes
        .merge(auth_routes())
        .merge(user_routes())
        .merge(clinic_routes())
        .merge(tip_routes())
        .merge(alert_routes())
        .merge(appointment_routes())
        .merge(medication_routes())
        .merge(symptom_routes())
        // Uploaded profile images
        .nest_service("/uploads", ServeDir::new(&config::config().upload_dir))
        // Global middleware
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

fn auth_routes() -> Router<Db> {
    use axum::routing::post;
    use handlers::auth;

    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
}

fn user_routes() -> Router<Db> {
    use axum::routing::post;
    use handlers::users;

    Router::new()
        .route(
            "/api/users/:id",
            get(users::get_profile).put(users::update_profile),
        )
        .route("/api/users/upload-profile/:id", post(users::upload_profile_image))
}

fn clinic_routes() -> Router<Db> {
    use handlers::clinics;

    Router::new().route("/api/clinics", get(clinics::list).post(clinics::add))
}

fn tip_routes() -> Router<Db> {
    use axum::routing::delete;
    use handlers::tips;

    Router::new()
        .route("/api/tips", get(tips::list).post(tips::add))
        .route("/api/tips/:id", delete(tips::delete))
}

fn alert_routes() -> Router<Db> {
    use axum::routing::{delete, patch};
    use handlers::alerts;

    Router::new()
        .route("/api/alerts", get(alerts::list_active).post(alerts::add))
        .route("/api/alerts/:id/deactivate", patch(alerts::deactivate))
        .route("/api/alerts/:id", delete(alerts::delete))
}

fn appointment_routes() -> Router<Db> {
    use axum::routing::{patch, post, put};
    use handlers::appointments;

    Router::new()
        .route("/api/appointments", post(appointments::create))
        // :id is the owning user id on the list route
        .route("/api/appointments/:id", get(appointments::list_for_user))
        .route("/api/appointments/:id/cancel", patch(appointments::cancel))
        .route("/api/appointments/:id/complete", put(appointments::complete))
        .route("/api/appointments/:id/reschedule", put(appointments::reschedule))
}

fn medication_routes() -> Router<Db> {
    use axum::routing::post;
    use handlers::medications;

    Router::new()
        .route("/api/medications", post(medications::create))
        // :id is the owning user id for GET, the medication id for DELETE
        .route(
            "/api/medications/:id",
            get(medications::list_for_user).delete(medications::delete),
        )
        .route("/api/medications/med/:id", get(medications::get_one))
}

fn symptom_routes() -> Router<Db> {
    use axum::routing::post;
    use handlers::symptoms;

    Router::new()
        .route("/api/symptoms", post(symptoms::add))
        // :id is the owning user id for GET, the entry id for DELETE
        .route(
            "/api/symptoms/:id",
            get(symptoms::list_for_user).delete(symptoms::delete),
        )
}

fn cors_layer() -> CorsLayer {
    let origin = config::config()
        .cors_origin
        .as_deref()
        .and_then(|o| o.parse::<HeaderValue>().ok());
    match origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    }
}

async fn root() -> &'static str {
    "HealthLink App backend running successfully."
}

async fn api_index() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "HealthLink API",
        "version": version,
        "status": "ok",
        "endpoints": {
            "auth": "/api/auth/signup, /api/auth/login",
            "users": "/api/users/:id, /api/users/upload-profile/:id",
            "clinics": "/api/clinics",
            "tips": "/api/tips[/:id]",
            "alerts": "/api/alerts[/:id][/deactivate]",
            "appointments": "/api/appointments[/:user_id][/:id/cancel|complete|reschedule]",
            "medications": "/api/medications[/:user_id][/med/:id]",
            "symptoms": "/api/symptoms[/:user_id]",
            "uploads": "/uploads/profile/:filename",
        }
    }))
}
