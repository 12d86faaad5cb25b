use crate::dataset;
use crate::error::AppError;
use crate::ranking::selection::select;
use crate::ranking::{ChartData, Priority, ScoredRow, SelectionResult};
use crate::server::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    #[serde(default)]
    pub(crate) first_priority: Option<String>,
    #[serde(default)]
    pub(crate) second_priority: Option<String>,
    #[serde(default)]
    pub(crate) include_rows: bool,
}

/// Full dashboard payload for one ranking request. `selection` is `None`
/// when the caller supplied no usable priority pair; the dashboard then
/// renders its empty state.
#[derive(Debug, Serialize)]
pub(crate) struct RankResponse {
    pub(crate) options: Vec<&'static str>,
    pub(crate) selection: Option<SelectionView>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectionView {
    pub(crate) district: String,
    pub(crate) avg_cost: f64,
    pub(crate) avg_crime: i64,
    pub(crate) avg_area: f64,
    pub(crate) avg_heating_price: f64,
    pub(crate) cc_distance: &'static str,
    pub(crate) pros: Vec<&'static str>,
    pub(crate) cons: Vec<&'static str>,
    pub(crate) chart: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) rows: Option<Vec<ScoredRow>>,
}

impl SelectionView {
    fn from_result(result: SelectionResult, include_rows: bool) -> Self {
        let chart = result.chart_data();
        let cc_distance = result.cc_distance_label();
        let SelectionResult {
            district,
            rows,
            avg_cost,
            avg_crime,
            avg_area,
            avg_heating_price,
            pros,
            cons,
            ..
        } = result;

        Self {
            district,
            avg_cost,
            avg_crime,
            avg_area,
            avg_heating_price,
            cc_distance,
            pros,
            cons,
            chart,
            rows: include_rows.then_some(rows),
        }
    }
}

pub fn app_router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/priorities", get(priorities_endpoint))
        .route("/api/v1/districts/rank", post(rank_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn priorities_endpoint() -> Json<serde_json::Value> {
    Json(json!({ "options": option_labels() }))
}

/// Score the configured dataset snapshot against the requested priority
/// pair. The result is assembled per request and returned whole, chart
/// arrays included; nothing is retained between requests.
pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let Some((first, second)) = resolve_priorities(&payload) else {
        return Ok(Json(RankResponse {
            options: option_labels(),
            selection: None,
        }));
    };

    let rows = dataset::load_from_path(state.dataset_path.as_ref())?;
    let result = select(rows, first, second)?;

    Ok(Json(RankResponse {
        options: option_labels(),
        selection: Some(SelectionView::from_result(result, payload.include_rows)),
    }))
}

fn option_labels() -> Vec<&'static str> {
    Priority::ordered().into_iter().map(Priority::label).collect()
}

/// A missing, empty, or unrecognized priority means "no selection": the
/// engine is skipped entirely rather than scored with a default.
fn resolve_priorities(payload: &RankRequest) -> Option<(Priority, Priority)> {
    let first = payload.first_priority.as_deref().unwrap_or("");
    let second = payload.second_priority.as_deref().unwrap_or("");
    if first.trim().is_empty() || second.trim().is_empty() {
        warn!("priority selection missing; returning empty dashboard");
        return None;
    }

    match (Priority::from_label(first), Priority::from_label(second)) {
        (Ok(first), Ok(second)) => Some((first, second)),
        (Err(err), _) | (_, Err(err)) => {
            warn!(%err, "priority not recognized; returning empty dashboard");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(first: Option<&str>, second: Option<&str>) -> RankRequest {
        RankRequest {
            first_priority: first.map(str::to_string),
            second_priority: second.map(str::to_string),
            include_rows: false,
        }
    }

    #[test]
    fn resolves_a_valid_priority_pair() {
        let resolved = resolve_priorities(&request(Some("Cheapest"), Some("Safest")));
        assert_eq!(resolved, Some((Priority::Cheapest, Priority::Safest)));
    }

    #[test]
    fn missing_or_empty_priorities_mean_no_selection() {
        assert!(resolve_priorities(&request(None, Some("Safest"))).is_none());
        assert!(resolve_priorities(&request(Some("Cheapest"), Some("  "))).is_none());
    }

    #[test]
    fn unrecognized_priority_means_no_selection() {
        assert!(resolve_priorities(&request(Some("Sunniest"), Some("Safest"))).is_none());
    }

    #[test]
    fn option_labels_list_all_six_choices_in_order() {
        assert_eq!(
            option_labels(),
            vec![
                "Cheapest",
                "Safest",
                "Closest to the city center",
                "Biggest by area",
                "Biggest number of rooms",
                "Least heating price",
            ]
        );
    }
}
