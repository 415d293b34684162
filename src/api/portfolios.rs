//! Portfolio API - create portfolios, edit theme options, render pages

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, warn};

use super::{AppState, ErrorResponse};
use crate::db::StoreError;
use crate::portfolio::Portfolio;
use crate::render::{not_found_page, RenderError};
use crate::theme::{OptionsPatch, ThemeOptions};

/// Build the portfolio router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/portfolios", post(create_portfolio).get(list_portfolios))
        .route("/portfolios/{id}", get(get_portfolio).delete(delete_portfolio))
        .route("/portfolios/{id}/options", patch(update_options))
        .route("/portfolios/{id}/theme", get(resolved_theme))
        .route("/portfolios/{id}/render", get(render_portfolio))
        .route("/portfolios/{id}/style.css", get(portfolio_stylesheet))
}

/// Optional template override, e.g. `?theme=elegant`
#[derive(Debug, Default, Deserialize)]
struct ThemeQuery {
    theme: Option<String>,
}

impl ThemeQuery {
    fn hint(&self) -> Option<&str> {
        self.theme.as_deref().filter(|t| !t.is_empty())
    }
}

fn store_error(e: StoreError) -> Response {
    match e {
        StoreError::NotFound(id) => ErrorResponse::with_status(
            StatusCode::NOT_FOUND,
            format!("portfolio not found: {}", id),
        ),
        StoreError::SlugExists(_) => {
            ErrorResponse::with_status(StatusCode::CONFLICT, e.to_string())
        }
        StoreError::InvalidSlug(_) | StoreError::InvalidOptions(_) => {
            ErrorResponse::with_status(StatusCode::BAD_REQUEST, e.to_string())
        }
        e => {
            error!("Portfolio store failure: {}", e);
            ErrorResponse::with_status(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Fetch a portfolio by id or slug, mapping absence to 404
async fn load(state: &AppState, id: &str) -> Result<Portfolio, Response> {
    match state.store.find(id).await {
        Ok(Some(portfolio)) => Ok(portfolio),
        Ok(None) => Err(store_error(StoreError::NotFound(id.to_string()))),
        Err(e) => Err(store_error(e)),
    }
}

/// Options as the chosen template will see them
fn effective_options(
    state: &AppState,
    portfolio: &Portfolio,
    hint: Option<&str>,
) -> ThemeOptions {
    match state.renderer.render(portfolio, hint) {
        Ok(rendered) => rendered.options,
        Err(RenderError::ThemeNotFound(_)) => state.renderer.resolve_options(portfolio, hint),
    }
}

/// GET /portfolios
async fn list_portfolios(State(state): State<AppState>) -> Response {
    match state.store.list().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => store_error(e),
    }
}

/// POST /portfolios
async fn create_portfolio(
    State(state): State<AppState>,
    Json(portfolio): Json<Portfolio>,
) -> Response {
    match state.store.create(&portfolio).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => store_error(e),
    }
}

/// GET /portfolios/{id}
async fn get_portfolio(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match load(&state, &id).await {
        Ok(portfolio) => Json(portfolio).into_response(),
        Err(response) => response,
    }
}

/// DELETE /portfolios/{id}
async fn delete_portfolio(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.delete(&id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => store_error(StoreError::NotFound(id)),
        Err(e) => store_error(e),
    }
}

/// PATCH /portfolios/{id}/options
/// Merges the patch over the stored options and returns the resolved result
async fn update_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<OptionsPatch>,
) -> Response {
    let portfolio = match load(&state, &id).await {
        Ok(portfolio) => portfolio,
        Err(response) => return response,
    };
    if patch.is_empty() {
        warn!("Empty options update for portfolio {}", portfolio.id);
    }

    if let Err(e) = state.store.update_options(&portfolio.id, &patch).await {
        return store_error(e);
    }
    match load(&state, &portfolio.id).await {
        Ok(updated) => Json(effective_options(&state, &updated, None)).into_response(),
        Err(response) => response,
    }
}

/// GET /portfolios/{id}/theme
async fn resolved_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ThemeQuery>,
) -> Response {
    match load(&state, &id).await {
        Ok(portfolio) => {
            Json(effective_options(&state, &portfolio, query.hint())).into_response()
        }
        Err(response) => response,
    }
}

/// GET /portfolios/{id}/render
async fn render_portfolio(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ThemeQuery>,
) -> Response {
    let portfolio = match load(&state, &id).await {
        Ok(portfolio) => portfolio,
        Err(response) => return response,
    };

    match state.renderer.render(&portfolio, query.hint()) {
        Ok(rendered) => Html(rendered.to_page()).into_response(),
        Err(RenderError::ThemeNotFound(theme_id)) => {
            warn!("No template for portfolio {}: {}", portfolio.id, theme_id);
            (StatusCode::NOT_FOUND, Html(not_found_page(&theme_id))).into_response()
        }
    }
}

/// GET /portfolios/{id}/style.css
async fn portfolio_stylesheet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ThemeQuery>,
) -> Response {
    let portfolio = match load(&state, &id).await {
        Ok(portfolio) => portfolio,
        Err(response) => return response,
    };

    match state.renderer.render(&portfolio, query.hint()) {
        Ok(rendered) => (
            [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
            rendered.stylesheet,
        )
            .into_response(),
        Err(e) => ErrorResponse::with_status(StatusCode::NOT_FOUND, e.to_string()),
    }
}
