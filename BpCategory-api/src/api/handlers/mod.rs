pub mod classify;
pub mod form;
pub mod health;

// Tests module
#[cfg(test)]
mod tests;

// Re-export handlers for easier imports
pub use classify::classify_blood_pressure;
pub use form::{calculate, show_form};
pub use health::health_check;
