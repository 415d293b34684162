//! Theme catalog API

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::AppState;
use crate::theme::{fonts, presets, ColorPalette};

/// Build the theme catalog router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/themes", get(list_themes))
        .route("/themes/presets", get(list_presets))
        .route("/themes/fonts", get(list_fonts))
}

/// Preset palette as shown in the colour picker
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetResponse {
    id: &'static str,
    name: &'static str,
    palette: ColorPalette,
}

/// GET /themes
/// Template gallery in registration order
async fn list_themes(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.renderer.registry().summaries())
}

/// GET /themes/presets
async fn list_presets() -> impl IntoResponse {
    let items: Vec<PresetResponse> = presets::PRESETS
        .iter()
        .map(|p| PresetResponse {
            id: p.id,
            name: p.name,
            palette: p.palette(),
        })
        .collect();
    Json(items)
}

/// GET /themes/fonts
async fn list_fonts() -> impl IntoResponse {
    Json(fonts::FONTS)
}
