// BpCategory Domain
// This crate contains the business logic for the blood pressure category calculator

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

pub use entities::{BloodPressureCategory, BloodPressureReading, ReadingInput};
pub use services::{classify, classify_reading, Classification, ValidationError};
