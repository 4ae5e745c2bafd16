#[cfg(test)]
mod api_routes_tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    use crate::api::create_application;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_unknown_path_returns_404_detail() {
        let app = create_application(&ServerConfig::default());

        let request = Request::builder()
            .uri("/etc/passwd")
            .method("GET")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["detail"], "Not Found");
    }

    #[tokio::test]
    async fn test_panic_is_reported_without_payload() {
        async fn boom() -> &'static str {
            panic!("secret internal state");
        }

        let app = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(crate::api::routes::handle_panic));

        let request = Request::builder().uri("/boom").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("Internal Server Error"));
        assert!(!text.contains("secret internal state"));
    }
}
