pub mod classifier;

// Domain services
// This module contains business logic implementations.

// Re-export the classifier entry points
pub use classifier::{
    categorize, classify, classify_reading, validate_reading, Classification, ValidationError,
};
