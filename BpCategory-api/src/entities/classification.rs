use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use bp_category_domain::entities::{BloodPressureCategory, ReadingInput};
use bp_category_domain::services::Classification;

/// Query parameters for the JSON classification endpoint
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassifyParams {
    /// Systolic blood pressure in mmHg (70-190)
    #[param(example = 100)]
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg (40-100)
    #[param(example = 80)]
    pub diastolic: i32,
}

impl From<ClassifyParams> for ReadingInput {
    fn from(params: ClassifyParams) -> Self {
        ReadingInput::new(params.systolic, params.diastolic)
    }
}

/// Fields submitted by the HTML form
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CalculateForm {
    pub systolic: i32,
    pub diastolic: i32,
}

impl From<CalculateForm> for ReadingInput {
    fn from(form: CalculateForm) -> Self {
        ReadingInput::new(form.systolic, form.diastolic)
    }
}

/// Result of classifying a reading
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResponse {
    /// Systolic blood pressure in mmHg
    #[schema(example = 100)]
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg
    #[schema(example = 80)]
    pub diastolic: i32,

    /// Category of the reading on the chart
    pub category: BloodPressureCategory,
}

impl From<Classification> for ClassificationResponse {
    fn from(classification: Classification) -> Self {
        Self {
            systolic: classification.reading.systolic(),
            diastolic: classification.reading.diastolic(),
            category: classification.category,
        }
    }
}
