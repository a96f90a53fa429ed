pub mod contact;
pub mod health;
pub mod portfolio;

use axum::{
    http::{header::AUTHORIZATION, HeaderMap},
    routing::{get, post},
    Router,
};

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// Checks `Authorization: Bearer <ADMIN_TOKEN>`. Without a configured token the
/// admin routes are closed.
pub fn require_admin(headers: &HeaderMap, config: &Config) -> Result<(), AppError> {
    let Some(expected) = config.admin_token.as_deref() else {
        return Err(AppError::Forbidden);
    };
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    match presented {
        Some(token) if token == expected => Ok(()),
        Some(_) => Err(AppError::Forbidden),
        None => Err(AppError::Unauthorized),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio sections
        .route("/api/v1/portfolio/personal", get(portfolio::handle_personal))
        .route("/api/v1/portfolio/education", get(portfolio::handle_education))
        .route("/api/v1/portfolio/experience", get(portfolio::handle_experience))
        .route("/api/v1/portfolio/skills", get(portfolio::handle_skills))
        .route("/api/v1/portfolio/about", get(portfolio::handle_about))
        .route("/api/v1/portfolio/projects", get(portfolio::handle_projects))
        .route(
            "/api/v1/portfolio/projects/featured",
            get(portfolio::handle_featured_projects),
        )
        .route(
            "/api/v1/portfolio/projects/bulk",
            post(portfolio::handle_create_bulk),
        )
        .route(
            "/api/v1/portfolio/projects/import",
            post(portfolio::handle_import),
        )
        .route("/api/v1/portfolio/complete", get(portfolio::handle_complete))
        // Contact
        .route("/api/v1/contact", post(contact::handle_submit_contact))
        .route(
            "/api/v1/contact/messages",
            get(contact::handle_contact_messages),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::errors::CONTACT_FAILURE_MESSAGE;
    use crate::resolver::PortfolioResolver;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(admin_token: Option<&str>) -> Router {
        let config = Config {
            admin_token: admin_token.map(str::to_string),
            ..Config::default()
        };
        build_router(AppState {
            resolver: Arc::new(PortfolioResolver::default()),
            config,
        })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(app(None), get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["sources"], json!([]));
    }

    #[tokio::test]
    async fn test_static_mode_serves_default_personal_info() {
        let (status, body) = send(app(None), get("/api/v1/portfolio/personal")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], defaults::personal_info().name.as_str());
    }

    #[tokio::test]
    async fn test_about_combines_sections() {
        let (status, body) = send(app(None), get("/api/v1/portfolio/about")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["personal"]["bio"].is_string());
        assert_eq!(
            body["education"].as_array().map(Vec::len),
            Some(defaults::education().len())
        );
    }

    #[tokio::test]
    async fn test_projects_query_filters_defaults() {
        let (status, body) = send(
            app(None),
            get("/api/v1/portfolio/projects?category=AI%2FML&featured_only=true"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let projects = body.as_array().unwrap();
        assert!(!projects.is_empty());
        assert!(projects
            .iter()
            .all(|p| p["category"] == "AI/ML" && p["featured"] == true));
    }

    #[tokio::test]
    async fn test_skills_use_ai_ml_key() {
        let (_, body) = send(app(None), get("/api/v1/portfolio/skills")).await;
        assert!(body["aiMl"].is_array());
        assert!(body.get("ai_ml").is_none());
    }

    #[tokio::test]
    async fn test_contact_requires_every_field() {
        let request = post_json(
            "/api/v1/contact",
            json!({ "name": "Ada", "email": "", "subject": "Hi", "message": " " }),
        );
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Missing required fields: email, message"
        );
    }

    #[tokio::test]
    async fn test_contact_absent_fields_get_validation_error() {
        let request = post_json("/api/v1/contact", json!({ "name": "Ada", "subject": "Hi" }));
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(
            body["error"]["message"],
            "Missing required fields: email, message"
        );
    }

    #[tokio::test]
    async fn test_contact_without_sink_reports_not_sent() {
        let request = post_json(
            "/api/v1/contact",
            json!({ "name": "Ada", "email": "ada@example.com", "subject": "Hi", "message": "Hello" }),
        );
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "CONTACT_NOT_SENT");
        assert_eq!(body["error"]["message"], CONTACT_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_admin_routes_closed_without_token() {
        let (status, _) = send(app(None), get("/api/v1/contact/messages")).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_routes_check_bearer() {
        let (status, _) = send(app(Some("s3cret")), get("/api/v1/contact/messages")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let wrong = Request::builder()
            .uri("/api/v1/contact/messages")
            .header("authorization", "Bearer nope")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(app(Some("s3cret")), wrong).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let right = Request::builder()
            .uri("/api/v1/contact/messages")
            .header("authorization", "Bearer s3cret")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(app(Some("s3cret")), right).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_bulk_create_without_sink_is_upstream_error() {
        let mut request = post_json(
            "/api/v1/portfolio/projects/bulk",
            serde_json::to_value(defaults::projects(
                &crate::models::project::CategoryFilter::All,
                false,
            ))
            .unwrap(),
        );
        request
            .headers_mut()
            .insert("authorization", "Bearer s3cret".parse().unwrap());
        let (status, body) = send(app(Some("s3cret")), request).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_import_rejects_empty_selection() {
        let mut request = post_json("/api/v1/portfolio/projects/import", json!({ "repo_ids": [] }));
        request
            .headers_mut()
            .insert("authorization", "Bearer s3cret".parse().unwrap());
        let (status, _) = send(app(Some("s3cret")), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
