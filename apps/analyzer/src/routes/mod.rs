pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::documents::docx::tests::docx_fixture;
    use crate::documents::pdf::tests::pdf_fixture;

    const BOUNDARY: &str = "analyzer-test-boundary";

    enum Part<'a> {
        File {
            filename: &'a str,
            content_type: &'a str,
            bytes: &'a [u8],
        },
        Text {
            name: &'a str,
            value: &'a str,
        },
    }

    fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
        let mut body = Vec::new();
        for part in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match part {
                Part::File {
                    filename,
                    content_type,
                    bytes,
                } => {
                    body.extend_from_slice(
                        format!(
                            "Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
                        )
                        .as_bytes(),
                    );
                    body.extend_from_slice(bytes);
                }
                Part::Text { name, value } => {
                    body.extend_from_slice(
                        format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                            .as_bytes(),
                    );
                }
            }
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn analyze_request(parts: &[Part<'_>]) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(parts)))
            .unwrap()
    }

    fn app_with(config: Config) -> Router {
        build_router(AppState { config })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        send_to(app_with(Config::default()), request).await
    }

    async fn send_to(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-analyzer");
    }

    #[tokio::test]
    async fn test_analyze_docx() {
        let bytes = docx_fixture(&["Backend Engineer", "Java, Spring Boot, PostgreSQL"]);
        let (status, body) = send(analyze_request(&[
            Part::File {
                filename: "cv.docx",
                content_type: "application/octet-stream",
                bytes: &bytes,
            },
            Part::Text {
                name: "language",
                value: "en",
            },
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["skills"],
            serde_json::json!(["java", "postgresql", "spring", "spring boot"])
        );
    }

    #[tokio::test]
    async fn test_analyze_text_without_language() {
        let (status, body) = send(analyze_request(&[Part::File {
            filename: "resume.txt",
            content_type: "text/plain",
            bytes: b"REACT.JS developer, NodeJS backend, .NET core",
        }]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["skills"],
            serde_json::json!([".net", "node.js", "react"])
        );
    }

    #[tokio::test]
    async fn test_analyze_ignores_unknown_parts() {
        let (status, body) = send(analyze_request(&[
            Part::Text {
                name: "target_title",
                value: "Java Developer",
            },
            Part::File {
                filename: "resume.txt",
                content_type: "text/plain",
                bytes: b"Lorem ipsum dolor sit amet",
            },
        ]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_analyze_missing_file() {
        let (status, body) = send(analyze_request(&[Part::Text {
            name: "language",
            value: "en",
        }]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_empty_file() {
        let (status, body) = send(analyze_request(&[Part::File {
            filename: "cv.pdf",
            content_type: "application/pdf",
            bytes: b"",
        }]))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_analyze_corrupt_docx() {
        let (status, body) = send(analyze_request(&[Part::File {
            filename: "cv.docx",
            content_type: "application/octet-stream",
            bytes: b"PK\x03\x04 truncated",
        }]))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
    }

    #[tokio::test]
    async fn test_analyze_pdf() {
        let bytes = pdf_fixture("Kubernetes");
        let (status, body) = send(analyze_request(&[Part::File {
            filename: "cv.pdf",
            content_type: "application/pdf",
            bytes: &bytes,
        }]))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], serde_json::json!(["kubernetes"]));
    }

    #[tokio::test]
    async fn test_analyze_oversized_upload() {
        let config = Config {
            max_upload_bytes: 1024,
            ..Config::default()
        };
        let bytes = vec![b'a'; 4 * 1024];
        let (status, body) = send_to(
            app_with(config),
            analyze_request(&[Part::File {
                filename: "resume.txt",
                content_type: "text/plain",
                bytes: &bytes,
            }]),
        )
        .await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body["error"]["code"], "PAYLOAD_TOO_LARGE");
    }
}
