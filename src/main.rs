use axum::{
    Router,
    extract::Path,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use shiftnote_core::{ShiftRecord, ShiftType, compose};
use shiftnote_vocab::slots::shift_slots;

/// Health check response.
#[derive(Serialize, ToSchema)]
struct HealthRes {
    ok: bool,
    message: String,
}

/// Composed note response.
#[derive(Serialize, ToSchema)]
struct ComposeRes {
    note: String,
}

/// Slot labels for one shift.
#[derive(Serialize, ToSchema)]
struct SlotsRes {
    shift: String,
    slots: Vec<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, vocabulary, slots, compose_note),
    components(schemas(HealthRes, ComposeRes, SlotsRes))
)]
struct ApiDoc;

/// Main entry point for the shiftnote service
///
/// Starts the REST server that input surfaces (forms, scripts) call to
/// fetch vocabulary and compose notes.
///
/// # Environment Variables
/// - `SHIFTNOTE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shiftnote=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("SHIFTNOTE_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Starting shiftnote REST on {}", rest_addr);

    let app = Router::new()
        .route("/health", get(health))
        .route("/vocabulary", get(vocabulary))
        .route("/slots/:shift", get(slots))
        .route("/notes", post(compose_note))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint
///
/// Used for monitoring and load balancer health checks.
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "shiftnote is alive".into(),
    })
}

#[utoipa::path(
    get,
    path = "/vocabulary",
    responses(
        (status = 200, description = "Reference vocabulary tables", body = Object)
    )
)]
/// Reference vocabulary for input surfaces
///
/// Returns every closed vocabulary the input form offers: ADL options,
/// visitor types, intake and engagement levels, the behaviour taxonomy and
/// the trigger/management lists.
async fn vocabulary() -> Json<shiftnote_vocab::Vocabulary> {
    Json(shiftnote_vocab::vocabulary())
}

#[utoipa::path(
    get,
    path = "/slots/{shift}",
    params(
        ("shift" = String, Path, description = "Shift type: morning or afternoon")
    ),
    responses(
        (status = 200, description = "Half-hour slot labels", body = SlotsRes),
        (status = 404, description = "Unknown shift type")
    )
)]
/// Half-hour slot labels for a shift
async fn slots(Path(shift): Path<String>) -> Result<Json<SlotsRes>, (StatusCode, &'static str)> {
    let parsed = match shift.to_lowercase().as_str() {
        "morning" => ShiftType::Morning,
        "afternoon" => ShiftType::Afternoon,
        _ => return Err((StatusCode::NOT_FOUND, "Unknown shift type")),
    };
    Ok(Json(SlotsRes {
        shift,
        slots: shift_slots(parsed),
    }))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = Object,
    responses(
        (status = 200, description = "Composed shift note", body = ComposeRes),
        (status = 422, description = "Structurally invalid record")
    )
)]
/// Compose a shift note
///
/// Accepts a full shift record and returns the narrative paragraph.
/// Structurally invalid records (out-of-range scores, blank labels) are
/// rejected at deserialisation.
async fn compose_note(Json(record): Json<ShiftRecord>) -> Json<ComposeRes> {
    tracing::info!(
        episodes = record.episodes.len(),
        "composing note for {} shift",
        record.shift
    );
    Json(ComposeRes {
        note: compose(&record),
    })
}
