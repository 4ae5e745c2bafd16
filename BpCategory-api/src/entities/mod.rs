// Public entities for the blood pressure category API
// This module contains data structures that are shared across the application boundary

// Request and response shapes for classification
pub mod classification;

// Common entities for error handling
pub mod common;
