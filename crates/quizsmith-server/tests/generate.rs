//! Handler-level tests for the generate path. These never reach Bedrock:
//! the pipeline fails at PDF extraction first, which is exactly what the
//! cleanup and error-page behavior is asserted against.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use quizsmith_server::config::ServerConfig;
use quizsmith_server::handlers::run_pipeline;
use quizsmith_server::state::AppState;
use quizsmith_server::{router, templates};

fn test_config() -> ServerConfig {
    ServerConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        region: "us-east-1".to_string(),
        model_id: "us.test-model".to_string(),
    }
}

fn test_state(temp_dir: &std::path::Path) -> AppState {
    let aws = aws_config::SdkConfig::builder().build();
    let tera = templates::build_templates().expect("templates must parse");
    AppState::new(test_config(), aws, tera).with_temp_dir(temp_dir.to_path_buf())
}

fn dir_entry_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[tokio::test]
async fn failed_pipeline_leaves_no_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());

    let result = run_pipeline(&state, b"this is not a pdf", 5).await;
    assert!(result.is_err());
    assert_eq!(dir_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn bad_upload_renders_the_generic_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());
    let app = router(state);

    let boundary = "quizsmith-test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"count\"\r\n\r\n\
         3\r\n\
         --{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"doc.pdf\"\r\n\
         Content-Type: application/pdf\r\n\r\n\
         this is not a pdf\r\n\
         --{boundary}--\r\n"
    );

    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // The per-request temp file is gone even though the pipeline failed.
    assert_eq!(dir_entry_count(dir.path()), 0);
}

#[tokio::test]
async fn download_without_a_quiz_redirects_home() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());
    let app = router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/quiz.pdf")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn index_serves_the_upload_form() {
    let dir = tempfile::tempdir().unwrap();
    let state = test_state(dir.path());
    let app = router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
