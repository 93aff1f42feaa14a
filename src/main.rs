mod api;
mod config;
mod sim;

use std::sync::{Arc, Mutex};

use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api::envelope::Envelope;
use config::Config;
use sim::junctions::{TrafficJunction, TrafficLevel};
use sim::parking::ParkingSpot;
use sim::signals::{AiTrafficSignal, SignalPhase};
use sim::suggestions::{AiSuggestion, SuggestionPriority};
use sim::{Coordinate, SharedRng};

#[derive(OpenApi)]
#[openapi(
    info(title = "Parking AI API", version = "1.0.0"),
    paths(
        api::parking::get_street_parking,
        api::junctions::get_traffic_junctions,
        api::suggestions::get_ai_suggestions,
        api::signals::get_ai_traffic_signals,
        api::health::health_check,
    ),
    components(schemas(
        api::ErrorResponse,
        api::health::HealthResponse,
        Coordinate,
        ParkingSpot,
        TrafficJunction,
        TrafficLevel,
        AiSuggestion,
        SuggestionPriority,
        AiTrafficSignal,
        SignalPhase,
        Envelope<Vec<ParkingSpot>>,
        Envelope<Vec<TrafficJunction>>,
        Envelope<Vec<AiSuggestion>>,
        Envelope<Vec<AiTrafficSignal>>,
    )),
    tags(
        (name = "parking", description = "Simulated street parking"),
        (name = "junctions", description = "Simulated traffic junctions"),
        (name = "suggestions", description = "AI driving and parking advisories"),
        (name = "signals", description = "AI-optimized traffic signals"),
        (name = "health", description = "Service health check")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    // Load config
    let config = Config::from_env().expect("Failed to read configuration");

    // Demo service consumed by the bundled dashboard from arbitrary origins.
    tracing::warn!("CORS: permissive mode (all origins allowed)");
    let cors_layer = CorsLayer::permissive();

    let rng: SharedRng = Arc::new(Mutex::new(StdRng::from_entropy()));

    // Build the app
    let app = Router::new()
        .nest("/api", api::router(rng))
        .nest("/health", api::health::router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    // Start server
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind port");

    tracing::info!(port = config.port, "Server running");
    tracing::info!("Dashboard: http://localhost:{}/", config.port);
    tracing::info!("Swagger UI: http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
