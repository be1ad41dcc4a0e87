//! Dashboard handlers
//!
//! Each request is an independent, side-effect-free computation: the
//! generator runs once, the view-model is returned or rendered, nothing is
//! cached across requests.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::DashboardViewModel;
use crate::telemetry::MockTelemetryGenerator;
use crate::view::{TextHost, ViewComposer};
use crate::{AppError, AppResult, AppState};

/// Fresh view-model as JSON, one generation per request
pub async fn view_model(State(state): State<AppState>) -> AppResult<Json<DashboardViewModel>> {
    let identity = state
        .auth
        .authenticate()
        .ok_or(AppError::AuthenticationFailed)?;

    tracing::debug!(user = %identity.username, "dashboard view-model requested");
    Ok(Json(generate(&state)))
}

/// One full render cycle as a plain-text page, terminal friendly
pub async fn page(State(state): State<AppState>) -> Response {
    let identity = state.auth.authenticate();
    let vm = generate(&state);

    let mut host = TextHost::new();
    ViewComposer::render(&vm, identity.as_ref(), &mut host);

    let status = if identity.is_some() {
        StatusCode::OK
    } else {
        StatusCode::UNAUTHORIZED
    };
    (status, host.into_page()).into_response()
}

fn generate(state: &AppState) -> DashboardViewModel {
    let mut rng = match state.config.mock_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    MockTelemetryGenerator::generate(Utc::now(), &mut rng)
}
