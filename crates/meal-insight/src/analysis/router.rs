use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::context::ProfileContext;
use super::domain::Meal;
use super::MealAnalyzer;
use crate::error::AppError;

/// Request body shared by the HTTP route and the `analyze` CLI command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeMealRequest {
    pub meal: Meal,
    #[serde(default)]
    pub profile: ProfileContext,
}

/// Router builder exposing the analyzer over HTTP.
pub fn analysis_router(analyzer: Arc<MealAnalyzer>) -> Router {
    Router::new()
        .route("/api/v1/meals/analyze", post(analyze_handler))
        .with_state(analyzer)
}

pub(crate) async fn analyze_handler(
    State(analyzer): State<Arc<MealAnalyzer>>,
    axum::Json(request): axum::Json<AnalyzeMealRequest>,
) -> Response {
    if let Err(error) = request.meal.nutrients.validate() {
        return AppError::from(error).into_response();
    }

    let result = analyzer.analyze(&request.meal, &request.profile);
    info!(
        meal = %result.meal_name,
        warnings = result.warnings.len(),
        effects = result.effects.len(),
        color = result.overall_color().label(),
        "meal analyzed"
    );

    (StatusCode::OK, axum::Json(result.report())).into_response()
}
