use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// A systolic/diastolic pair as submitted by a client, before validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct ReadingInput {
    /// Systolic blood pressure in mmHg (the top number)
    #[validate(range(min = 70, max = 190))]
    pub systolic: i32,

    /// Diastolic blood pressure in mmHg (the bottom number)
    #[validate(range(min = 40, max = 100))]
    pub diastolic: i32,
}

impl ReadingInput {
    pub fn new(systolic: i32, diastolic: i32) -> Self {
        Self { systolic, diastolic }
    }
}

/// A reading that passed validation.
///
/// Only the classifier can build one, so holding a `BloodPressureReading`
/// means both values are inside the chart and systolic is above diastolic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BloodPressureReading {
    systolic: i32,
    diastolic: i32,
}

impl BloodPressureReading {
    pub(crate) fn new_unchecked(systolic: i32, diastolic: i32) -> Self {
        Self { systolic, diastolic }
    }

    /// Systolic blood pressure in mmHg
    pub fn systolic(&self) -> i32 {
        self.systolic
    }

    /// Diastolic blood pressure in mmHg
    pub fn diastolic(&self) -> i32 {
        self.diastolic
    }
}

impl fmt::Display for BloodPressureReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} mmHg", self.systolic, self.diastolic)
    }
}

/// Blood pressure category from the rectangular banding chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BloodPressureCategory {
    /// Purple region of the chart
    #[serde(rename = "Low blood pressure")]
    Low,

    /// Green region of the chart
    #[serde(rename = "Ideal blood pressure")]
    Ideal,

    /// Yellow region of the chart
    #[serde(rename = "Pre-high blood pressure")]
    PreHigh,

    /// Red region of the chart
    #[serde(rename = "High blood pressure")]
    High,
}

impl BloodPressureCategory {
    pub const ALL: [BloodPressureCategory; 4] = [
        BloodPressureCategory::Low,
        BloodPressureCategory::Ideal,
        BloodPressureCategory::PreHigh,
        BloodPressureCategory::High,
    ];

    /// Human-readable label, identical to the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            BloodPressureCategory::Low => "Low blood pressure",
            BloodPressureCategory::Ideal => "Ideal blood pressure",
            BloodPressureCategory::PreHigh => "Pre-high blood pressure",
            BloodPressureCategory::High => "High blood pressure",
        }
    }

    /// Colour of the category's region on the chart
    pub fn colour(&self) -> &'static str {
        match self {
            BloodPressureCategory::Low => "purple",
            BloodPressureCategory::Ideal => "green",
            BloodPressureCategory::PreHigh => "yellow",
            BloodPressureCategory::High => "red",
        }
    }
}

impl fmt::Display for BloodPressureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
