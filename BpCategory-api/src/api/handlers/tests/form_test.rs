#[cfg(test)]
mod form_tests {
    use axum::{
        body::{to_bytes, Body},
        extract::{Form, FromRequest},
        http::{header, Request, StatusCode},
        response::IntoResponse,
    };

    use crate::api::handlers::form::{calculate, show_form};

    async fn body_text(response: axum::response::Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn submit(body: &'static str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri("/calculate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();
        let form = Form::from_request(request, &()).await;

        let response = calculate(form).await.into_response();
        let status = response.status();
        (status, body_text(response).await)
    }

    #[tokio::test]
    async fn test_show_form() {
        let response = show_form().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_text(response).await;
        assert!(html.contains("Blood Pressure Category"));
    }

    #[tokio::test]
    async fn test_post_pre_high_reading() {
        let (status, html) = submit("systolic=100&diastolic=80").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Pre-high blood pressure"));
        assert!(html.contains("100/80 mmHg"));
    }

    #[tokio::test]
    async fn test_post_low_reading() {
        let (status, html) = submit("systolic=70&diastolic=50").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Low blood pressure"));
        assert!(html.contains("70/50 mmHg"));
    }

    #[tokio::test]
    async fn test_validation_error_shown_inline() {
        let (status, html) = submit("systolic=80&diastolic=80").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("must be higher than diastolic"));
        assert!(!html.contains("80/80 mmHg"));
    }

    #[tokio::test]
    async fn test_malformed_submission_returns_400() {
        let (status, html) = submit("systolic=high&diastolic=80").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("whole numbers"));

        let (status, _) = submit("systolic=120").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
