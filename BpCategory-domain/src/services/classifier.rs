use thiserror::Error;
use tracing::debug;
use validator::Validate;

use crate::entities::blood_pressure::{BloodPressureCategory, BloodPressureReading, ReadingInput};

/// Reasons a reading falls outside the chart.
///
/// The messages are stable; callers match on the substrings
/// "between 70 and 190", "between 40 and 100" and "must be higher than diastolic".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Systolic must be between 70 and 190 mmHg.")]
    SystolicOutOfRange,

    #[error("Diastolic must be between 40 and 100 mmHg.")]
    DiastolicOutOfRange,

    #[error("Systolic (top number) must be higher than diastolic (bottom number).")]
    SystolicNotAboveDiastolic,
}

/// Outcome of classifying a valid reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub reading: BloodPressureReading,
    pub category: BloodPressureCategory,
}

/// Validate a raw reading.
///
/// Checks run in a fixed order and the first failure wins: systolic range,
/// diastolic range, then ordering.
pub fn validate_reading(input: &ReadingInput) -> Result<BloodPressureReading, ValidationError> {
    if let Err(errors) = input.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("systolic") {
            return Err(ValidationError::SystolicOutOfRange);
        }
        if fields.contains_key("diastolic") {
            return Err(ValidationError::DiastolicOutOfRange);
        }
    }

    if input.systolic <= input.diastolic {
        return Err(ValidationError::SystolicNotAboveDiastolic);
    }

    Ok(BloodPressureReading::new_unchecked(input.systolic, input.diastolic))
}

/// Place a valid reading on the chart, banding by diastolic first
pub fn categorize(reading: &BloodPressureReading) -> BloodPressureCategory {
    use BloodPressureCategory::*;

    let systolic = reading.systolic();
    match reading.diastolic() {
        40..=59 => match systolic {
            70..=89 => Low,
            90..=119 => Ideal,
            120..=139 => PreHigh,
            _ => High,
        },
        60..=79 => match systolic {
            70..=119 => Ideal,
            120..=139 => PreHigh,
            _ => High,
        },
        80..=89 if systolic < 140 => PreHigh,
        _ => High,
    }
}

/// Validate and classify a raw reading
pub fn classify_reading(input: ReadingInput) -> Result<Classification, ValidationError> {
    let reading = validate_reading(&input)?;
    let category = categorize(&reading);
    debug!(%reading, %category, "Classified blood pressure reading");
    Ok(Classification { reading, category })
}

/// Classify a systolic/diastolic pair
pub fn classify(systolic: i32, diastolic: i32) -> Result<BloodPressureCategory, ValidationError> {
    classify_reading(ReadingInput::new(systolic, diastolic)).map(|c| c.category)
}
