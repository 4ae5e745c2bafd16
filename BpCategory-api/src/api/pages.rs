use askama::Template;
use axum::response::Html;

use bp_category_domain::entities::ReadingInput;
use bp_category_domain::services::{Classification, ValidationError};

use crate::api::error::ApiError;

pub const MALFORMED_INPUT_MESSAGE: &str =
    "Please enter whole numbers for both systolic and diastolic.";

/// Category shown under the form after a successful calculation
#[derive(Debug, Clone)]
pub struct ResultView {
    pub category: &'static str,
    pub colour: &'static str,
    pub systolic: i32,
    pub diastolic: i32,
}

/// The calculator page
#[derive(Debug, Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub result: Option<ResultView>,
    pub error: Option<String>,
    pub systolic: String,
    pub diastolic: String,
}

impl IndexPage {
    /// Blank form
    pub fn empty() -> Self {
        Self {
            result: None,
            error: None,
            systolic: String::new(),
            diastolic: String::new(),
        }
    }

    pub fn classified(classification: &Classification) -> Self {
        let reading = classification.reading;
        Self {
            result: Some(ResultView {
                category: classification.category.label(),
                colour: classification.category.colour(),
                systolic: reading.systolic(),
                diastolic: reading.diastolic(),
            }),
            error: None,
            systolic: reading.systolic().to_string(),
            diastolic: reading.diastolic().to_string(),
        }
    }

    /// Form echoing the submitted values with the validation message inline
    pub fn rejected(input: ReadingInput, err: &ValidationError) -> Self {
        Self {
            result: None,
            error: Some(err.to_string()),
            systolic: input.systolic.to_string(),
            diastolic: input.diastolic.to_string(),
        }
    }

    /// Blank form with an error, for submissions that could not be parsed
    pub fn malformed() -> Self {
        Self {
            error: Some(MALFORMED_INPUT_MESSAGE.to_string()),
            ..Self::empty()
        }
    }

    pub fn render_html(&self) -> Result<Html<String>, ApiError> {
        Ok(Html(self.render()?))
    }
}
