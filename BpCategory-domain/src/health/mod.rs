//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use async_trait::async_trait;

use crate::entities::blood_pressure::BloodPressureCategory;
use crate::services::classifier::classify;

/// Reference reading used to check that the classifier still answers correctly
const REFERENCE_READING: (i32, i32) = (120, 80);
const REFERENCE_CATEGORY: BloodPressureCategory = BloodPressureCategory::PreHigh;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

impl SystemHealth {
    /// Build a system health report, deriving the overall status from the
    /// worst component
    pub fn from_components(components: HashMap<String, HealthComponent>) -> Self {
        let status = if components.values().any(|c| c.status == ComponentStatus::Unhealthy) {
            SystemStatus::Unhealthy
        } else if components.values().any(|c| c.status == ComponentStatus::Degraded) {
            SystemStatus::Degraded
        } else {
            SystemStatus::Healthy
        };

        Self { status, components }
    }
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Name of the environment the service runs in
    fn environment(&self) -> &str;
}

/// Check that the classifier places the reference reading where the chart says
pub fn check_classifier_status() -> HealthComponent {
    let (systolic, diastolic) = REFERENCE_READING;

    match classify(systolic, diastolic) {
        Ok(category) if category == REFERENCE_CATEGORY => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(category) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(format!(
                "Reference reading {}/{} classified as {}",
                systolic, diastolic, category
            )),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(format!("Reference reading rejected: {}", e)),
        },
    }
}

/// Default health service backed by the in-process classifier
#[derive(Debug, Clone)]
pub struct HealthService {
    environment: String,
}

impl HealthService {
    /// Create a new health service for the given environment
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }
}

#[async_trait]
impl HealthServiceTrait for HealthService {
    async fn get_system_health(&self) -> SystemHealth {
        let mut components = HashMap::new();
        components.insert("classifier".to_string(), check_classifier_status());

        // Add API component (always healthy while it can answer)
        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth::from_components(components)
    }

    fn environment(&self) -> &str {
        &self.environment
    }
}
