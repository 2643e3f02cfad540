use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::UserProfile;
use crate::state::AppState;
use crate::workflow::{SearchSource, SessionView};

type SessionResult = Result<Json<SessionView>, AppError>;

async fn view(state: &AppState) -> SessionResult {
    Ok(Json(state.workflow.snapshot().await))
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> SessionResult {
    view(&state).await
}

/// POST /api/v1/session/profile
pub async fn handle_submit_profile(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> SessionResult {
    state.workflow.submit_profile(profile).await?;
    view(&state).await
}

#[derive(Deserialize)]
pub struct DreamCompanyRequest {
    pub profile: UserProfile,
    pub company_name: String,
}

/// POST /api/v1/session/dream-company
pub async fn handle_dream_company(
    State(state): State<AppState>,
    Json(req): Json<DreamCompanyRequest>,
) -> SessionResult {
    state
        .workflow
        .submit_dream_company(req.profile, req.company_name)
        .await?;
    view(&state).await
}

/// POST /api/v1/session/recommendations/:index/analyze
pub async fn handle_analyze_recommendation(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> SessionResult {
    state.workflow.select_job_for_analysis(index).await?;
    view(&state).await
}

/// POST /api/v1/session/learning-path
pub async fn handle_create_learning_path(State(state): State<AppState>) -> SessionResult {
    state.workflow.create_learning_path().await?;
    view(&state).await
}

/// POST /api/v1/session/steps/:month/toggle
pub async fn handle_toggle_step(
    State(state): State<AppState>,
    Path(month): Path<u32>,
) -> SessionResult {
    state.workflow.toggle_step(month).await?;
    view(&state).await
}

/// POST /api/v1/session/assessment
pub async fn handle_request_assessment(State(state): State<AppState>) -> SessionResult {
    state.workflow.request_assessment().await?;
    view(&state).await
}

#[derive(Deserialize)]
pub struct ResumeFeedbackRequest {
    pub resume_text: String,
    pub target_role: String,
}

/// POST /api/v1/session/resume-feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    Json(req): Json<ResumeFeedbackRequest>,
) -> SessionResult {
    state
        .workflow
        .submit_resume_for_feedback(req.resume_text, req.target_role)
        .await?;
    view(&state).await
}

/// POST /api/v1/session/resume-feedback/upload
///
/// Multipart form with a `target_role` text field and a `resume` file, either
/// a PDF or plain text.
pub async fn handle_resume_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> SessionResult {
    let mut target_role = String::new();
    let mut resume_text = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("target_role") => {
                target_role = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
            }
            Some("resume") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(e.to_string()))?;
                resume_text =
                    resume_text_from_upload(file_name.as_deref(), content_type.as_deref(), &data)?;
            }
            _ => {}
        }
    }

    state
        .workflow
        .submit_resume_for_feedback(resume_text, target_role)
        .await?;
    view(&state).await
}

fn is_pdf(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    content_type == Some("application/pdf")
        || file_name.is_some_and(|n| n.to_ascii_lowercase().ends_with(".pdf"))
}

/// Extracts the text of an uploaded resume.
fn resume_text_from_upload(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: &Bytes,
) -> Result<String, AppError> {
    if is_pdf(file_name, content_type) {
        let text = pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Validation(format!("Could not read the uploaded PDF: {e}")))?;
        info!("Extracted {} characters from uploaded PDF", text.len());
        return Ok(text);
    }
    String::from_utf8(data.to_vec())
        .map_err(|_| AppError::Validation("The uploaded resume must be a PDF or a text file".into()))
}

/// POST /api/v1/session/interview
pub async fn handle_start_interview(State(state): State<AppState>) -> SessionResult {
    state.workflow.start_interview().await?;
    state.workflow.load_interview_questions().await?;
    view(&state).await
}

/// POST /api/v1/session/interview/questions
pub async fn handle_load_questions(State(state): State<AppState>) -> SessionResult {
    state.workflow.load_interview_questions().await?;
    view(&state).await
}

#[derive(Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
}

/// POST /api/v1/session/interview/answers/:index
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Json(req): Json<AnswerRequest>,
) -> SessionResult {
    state
        .workflow
        .submit_interview_answer(index, req.answer)
        .await?;
    view(&state).await
}

/// POST /api/v1/session/resume
pub async fn handle_generate_resume(State(state): State<AppState>) -> SessionResult {
    state.workflow.generate_resume().await?;
    view(&state).await
}

/// GET /api/v1/session/resume/text
pub async fn handle_download_resume(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let (file_name, text) = state.workflow.resume_download().await?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        text,
    ))
}

/// Omit `recommendation` to search for the active job.
#[derive(Deserialize)]
pub struct JobSearchRequest {
    pub recommendation: Option<usize>,
}

/// POST /api/v1/session/job-search
pub async fn handle_find_live_jobs(
    State(state): State<AppState>,
    Json(req): Json<JobSearchRequest>,
) -> SessionResult {
    let source = match req.recommendation {
        Some(index) => SearchSource::Recommendation(index),
        None => SearchSource::ActiveJob,
    };
    state.workflow.find_live_jobs(source).await?;
    view(&state).await
}

/// DELETE /api/v1/session/job-search
pub async fn handle_close_job_search(State(state): State<AppState>) -> SessionResult {
    state.workflow.close_job_search().await;
    view(&state).await
}

#[derive(Deserialize)]
pub struct CoverLetterRequest {
    pub job_index: usize,
}

/// POST /api/v1/session/cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(req): Json<CoverLetterRequest>,
) -> SessionResult {
    state.workflow.generate_cover_letter(req.job_index).await?;
    view(&state).await
}

/// POST /api/v1/session/back
pub async fn handle_back(State(state): State<AppState>) -> SessionResult {
    state.workflow.back().await;
    view(&state).await
}

/// POST /api/v1/session/reset
pub async fn handle_reset(State(state): State<AppState>) -> SessionResult {
    state.workflow.reset().await?;
    view(&state).await
}

/// POST /api/v1/session/error/clear
pub async fn handle_clear_error(State(state): State<AppState>) -> SessionResult {
    state.workflow.clear_error().await;
    view(&state).await
}
