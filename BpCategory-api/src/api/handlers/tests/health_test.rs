#[cfg(test)]
mod health_tests {
    use bp_category_domain::health::{
        ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth,
    };
    use std::sync::Arc;
    use std::collections::HashMap;
    use async_trait::async_trait;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse, Extension};
    use serde_json::Value;

    use crate::api::handlers::health::{
        create_health_service, health_check, initialize_server_start_time, SharedHealthService,
    };

    // Direct implementation of a mock health service for testing
    #[derive(Debug)]
    struct TestMockHealthService {
        components: HashMap<String, HealthComponent>,
    }

    impl TestMockHealthService {
        fn new() -> Self {
            Self {
                components: HashMap::new(),
            }
        }

        fn with_component(mut self, name: &str, status: ComponentStatus, details: Option<&str>) -> Self {
            self.components.insert(
                name.to_string(),
                HealthComponent {
                    status,
                    details: details.map(str::to_string),
                },
            );
            self
        }
    }

    #[async_trait]
    impl HealthServiceTrait for TestMockHealthService {
        async fn get_system_health(&self) -> SystemHealth {
            SystemHealth::from_components(self.components.clone())
        }

        fn environment(&self) -> &str {
            "test"
        }
    }

    async fn call(service: SharedHealthService) -> (StatusCode, Value) {
        let response = health_check(Extension(service)).await.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health_check_response() {
        initialize_server_start_time();

        let (status, body) = call(create_health_service("qa")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["environment"], "qa");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["components"]["classifier"]["status"], "ok");
        assert_eq!(body["components"]["api"]["status"], "ok");
        assert!(body["uptime"].is_u64());
    }

    #[tokio::test]
    async fn test_degraded_component_returns_503() {
        let service = TestMockHealthService::new()
            .with_component("classifier", ComponentStatus::Healthy, None)
            .with_component("api", ComponentStatus::Degraded, Some("Slow responses"));

        let (status, body) = call(Arc::new(service)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["components"]["api"]["status"], "degraded");
        assert_eq!(body["components"]["api"]["message"], "Slow responses");
        assert!(body["components"]["classifier"].get("message").is_none());
    }

    #[tokio::test]
    async fn test_unhealthy_classifier_returns_500() {
        let service = TestMockHealthService::new().with_component(
            "classifier",
            ComponentStatus::Unhealthy,
            Some("Reference reading rejected"),
        );

        let (status, body) = call(Arc::new(service)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["status"], "error");
        assert_eq!(body["components"]["classifier"]["status"], "error");
        // Components the service does not report are shown as healthy
        assert_eq!(body["components"]["api"]["status"], "ok");
        assert_eq!(body["environment"], "test");
    }
}
