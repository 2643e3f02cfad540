pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::workflow::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/session", get(handlers::handle_get_session))
        // Intake
        .route(
            "/api/v1/session/profile",
            post(handlers::handle_submit_profile),
        )
        .route(
            "/api/v1/session/dream-company",
            post(handlers::handle_dream_company),
        )
        .route(
            "/api/v1/session/resume-feedback",
            post(handlers::handle_resume_feedback),
        )
        .route(
            "/api/v1/session/resume-feedback/upload",
            post(handlers::handle_resume_upload),
        )
        // Job branch
        .route(
            "/api/v1/session/recommendations/:index/analyze",
            post(handlers::handle_analyze_recommendation),
        )
        .route(
            "/api/v1/session/learning-path",
            post(handlers::handle_create_learning_path),
        )
        .route(
            "/api/v1/session/steps/:month/toggle",
            post(handlers::handle_toggle_step),
        )
        .route(
            "/api/v1/session/assessment",
            post(handlers::handle_request_assessment),
        )
        .route(
            "/api/v1/session/interview",
            post(handlers::handle_start_interview),
        )
        .route(
            "/api/v1/session/interview/questions",
            post(handlers::handle_load_questions),
        )
        .route(
            "/api/v1/session/interview/answers/:index",
            post(handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/session/resume",
            post(handlers::handle_generate_resume),
        )
        .route(
            "/api/v1/session/resume/text",
            get(handlers::handle_download_resume),
        )
        .route(
            "/api/v1/session/job-search",
            post(handlers::handle_find_live_jobs).delete(handlers::handle_close_job_search),
        )
        .route(
            "/api/v1/session/cover-letter",
            post(handlers::handle_generate_cover_letter),
        )
        // Navigation
        .route("/api/v1/session/back", post(handlers::handle_back))
        .route("/api/v1/session/reset", post(handlers::handle_reset))
        .route(
            "/api/v1/session/error/clear",
            post(handlers::handle_clear_error),
        )
        .with_state(state)
}
