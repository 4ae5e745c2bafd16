use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use tracing::{info, instrument, warn};

use bp_category_domain::services::classify_reading;

use crate::api::error::ApiError;
use crate::entities::classification::{ClassificationResponse, ClassifyParams};

/// Classify a blood pressure reading
#[utoipa::path(
    get,
    path = "/api/classify",
    params(ClassifyParams),
    responses(
        (status = 200, description = "Reading classified", body = ClassificationResponse),
        (status = 400, description = "Reading missing, malformed or outside the chart", body = crate::entities::common::ErrorDetail),
    ),
    tag = "classification"
)]
#[instrument(skip_all)]
pub async fn classify_blood_pressure(
    params: Result<Query<ClassifyParams>, QueryRejection>,
) -> Result<Json<ClassificationResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Malformed classification query: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let classification = classify_reading(params.into()).map_err(|e| {
        warn!(systolic = params.systolic, diastolic = params.diastolic, "Rejected reading: {}", e);
        ApiError::from(e)
    })?;

    info!(
        "Classified {} as {}",
        classification.reading, classification.category
    );
    Ok(Json(ClassificationResponse::from(classification)))
}
