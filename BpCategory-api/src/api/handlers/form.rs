use axum::{
    extract::{rejection::FormRejection, Form},
    http::StatusCode,
    response::Html,
};
use tracing::{info, instrument, warn};

use bp_category_domain::services::classify_reading;

use crate::api::error::ApiError;
use crate::api::pages::IndexPage;
use crate::entities::classification::CalculateForm;

/// Show the empty calculator form
#[instrument]
pub async fn show_form() -> Result<Html<String>, ApiError> {
    IndexPage::empty().render_html()
}

/// Classify a reading submitted through the form.
///
/// Validation failures are shown on the page with a 200; only submissions
/// that cannot be parsed as integers get a 400.
#[instrument(skip_all)]
pub async fn calculate(
    form: Result<Form<CalculateForm>, FormRejection>,
) -> Result<(StatusCode, Html<String>), ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!("Malformed calculator submission: {}", rejection.body_text());
            return Ok((StatusCode::BAD_REQUEST, IndexPage::malformed().render_html()?));
        }
    };

    let page = match classify_reading(form.into()) {
        Ok(classification) => {
            info!(
                "Classified {} as {}",
                classification.reading, classification.category
            );
            IndexPage::classified(&classification)
        }
        Err(e) => {
            info!(systolic = form.systolic, diastolic = form.diastolic, "Rejected reading: {}", e);
            IndexPage::rejected(form.into(), &e)
        }
    };

    Ok((StatusCode::OK, page.render_html()?))
}
