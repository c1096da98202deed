//! Request handlers: upload form, the generate pipeline, and the download.

use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tempfile::NamedTempFile;
use tera::Context;
use tower_cookies::{Cookie, Cookies};
use tracing::{error, info};
use uuid::Uuid;

use quizsmith_core::models::quiz::Quiz;

use crate::state::AppState;
use crate::views::QuizView;

const SESSION_COOKIE: &str = "session";

pub const MIN_QUESTIONS: u8 = 1;
pub const MAX_QUESTIONS: u8 = 10;
pub const DEFAULT_QUESTIONS: u8 = 5;

/// Clamp the submitted question count into the supported range; anything
/// missing or unparseable falls back to the default.
pub fn parse_question_count(raw: Option<&str>) -> u8 {
    raw.and_then(|s| s.trim().parse::<u8>().ok())
        .map(|n| n.clamp(MIN_QUESTIONS, MAX_QUESTIONS))
        .unwrap_or(DEFAULT_QUESTIONS)
}

fn session_id(cookies: &Cookies) -> Uuid {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Ok(id) = Uuid::parse_str(cookie.value()) {
            return id;
        }
    }
    let id = Uuid::new_v4();
    let mut cookie = Cookie::new(SESSION_COOKIE, id.to_string());
    cookie.set_path("/");
    cookies.add(cookie);
    id
}

/// The upload form.
pub async fn index(State(state): State<AppState>) -> Response {
    let mut context = Context::new();
    context.insert("default_count", &DEFAULT_QUESTIONS);
    context.insert("max_count", &MAX_QUESTIONS);
    render_page(&state, "index.html", context)
}

/// One generate click: persist the upload to a per-request temp file,
/// sample it, ask the model for a quiz, remember the quiz for the session,
/// and render the quiz page.
///
/// Every failure renders the same generic error page — no partial output.
/// The temp file guard drops on all exit paths, success and failure alike.
pub async fn generate(
    State(state): State<AppState>,
    cookies: Cookies,
    mut multipart: Multipart,
) -> Response {
    let session = session_id(&cookies);

    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut count_raw: Option<String> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().map(str::to_string);
                match name.as_deref() {
                    Some("file") => match field.bytes().await {
                        Ok(bytes) => pdf_bytes = Some(bytes.to_vec()),
                        Err(e) => {
                            error!(error = %e, "failed to read upload");
                            return error_page(&state);
                        }
                    },
                    Some("count") => count_raw = field.text().await.ok(),
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "malformed multipart body");
                return error_page(&state);
            }
        }
    }

    let Some(pdf_bytes) = pdf_bytes else {
        error!("generate request without a file field");
        return error_page(&state);
    };
    let count = parse_question_count(count_raw.as_deref());

    let quiz = match run_pipeline(&state, &pdf_bytes, count).await {
        Ok(quiz) => quiz,
        Err(e) => {
            error!(error = %e, "quiz generation failed");
            return error_page(&state);
        }
    };

    state.sessions.lock().await.insert(session, quiz.clone());

    let view = QuizView::from_quiz(&quiz);
    let context = match Context::from_serialize(&view) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "failed to build template context");
            return error_page(&state);
        }
    };
    render_page(&state, "quiz.html", context)
}

/// Upload → sample → model. Public so tests can drive the pipeline and
/// observe temp-file cleanup directly.
pub async fn run_pipeline(state: &AppState, pdf_bytes: &[u8], count: u8) -> eyre::Result<Quiz> {
    // Per-request unique path; the guard removes the file when this scope
    // ends, whether the pipeline succeeded or not.
    let tmp = NamedTempFile::new_in(state.temp_dir.as_ref())?;
    tokio::fs::write(tmp.path(), pdf_bytes).await?;

    let sample = quizsmith_sampler::sample_pdf(tmp.path(), &state.chunking).await?;
    let quiz =
        quizsmith_bedrock::generate_quiz(&state.aws, &state.config.model_id, count, &sample)
            .await?;

    info!(questions = quiz.questions.len(), "pipeline complete");
    Ok(quiz)
}

/// Serve the session's current quiz as `quiz.pdf`. With no quiz generated
/// yet there is nothing to export, so redirect to the upload form.
pub async fn download(State(state): State<AppState>, cookies: Cookies) -> Response {
    let Some(cookie) = cookies.get(SESSION_COOKIE) else {
        return Redirect::to("/").into_response();
    };
    let Ok(session) = Uuid::parse_str(cookie.value()) else {
        return Redirect::to("/").into_response();
    };

    let quiz = state.sessions.lock().await.get(&session).cloned();
    let Some(quiz) = quiz else {
        return Redirect::to("/").into_response();
    };

    match quizsmith_export::render_quiz_pdf(&quiz) {
        Ok(bytes) => (
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"quiz.pdf\"",
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "quiz export failed");
            error_page(&state)
        }
    }
}

fn render_page(state: &AppState, template: &str, context: Context) -> Response {
    match state.templates.render(template, &context) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(template, error = %e, "template rendering failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn error_page(state: &AppState) -> Response {
    let mut response = render_page(state, "error.html", Context::new());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
