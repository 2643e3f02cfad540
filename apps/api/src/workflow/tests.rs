use std::sync::Arc;

use crate::errors::AppError;
use crate::session::{MemorySessionStore, PersistedSession, SessionStore};

use super::machine::{SearchSource, Workflow};
use super::phase::{Phase, SearchStatus, Track};
use super::slots::Slot;
use super::testing::{fixtures, ScriptedGateway};

fn setup() -> (Arc<ScriptedGateway>, Arc<MemorySessionStore>, Arc<Workflow>) {
    setup_with_store(MemorySessionStore::new())
}

fn setup_with_store(
    store: MemorySessionStore,
) -> (Arc<ScriptedGateway>, Arc<MemorySessionStore>, Arc<Workflow>) {
    let gateway = Arc::new(ScriptedGateway::new());
    let store = Arc::new(store);
    let workflow = Arc::new(Workflow::new(gateway.clone(), store.clone()));
    (gateway, store, workflow)
}

async fn phase(workflow: &Workflow) -> Phase {
    workflow.snapshot().await.phase
}

async fn track(workflow: &Workflow) -> Track {
    let phase = phase(workflow).await;
    match phase.track() {
        Some(track) => track.clone(),
        None => panic!("expected a track, got {}", phase.name()),
    }
}

async fn to_learning_path(workflow: &Workflow) {
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    workflow.select_job_for_analysis(0).await.unwrap();
    workflow.create_learning_path().await.unwrap();
}

fn saved(store: &MemorySessionStore) -> PersistedSession {
    store.load().unwrap().expect("a saved session")
}

#[tokio::test]
async fn test_profile_submission_lists_recommendations() {
    let (_, store, workflow) = setup();

    workflow.submit_profile(fixtures::profile()).await.unwrap();

    let Phase::Recommendations {
        profile,
        recommendations,
    } = phase(&workflow).await
    else {
        panic!("expected recommendations");
    };
    assert_eq!(profile, fixtures::profile());
    assert_eq!(recommendations.len(), 5);
    assert!(recommendations.iter().all(|r| !r.title.is_empty()));
    assert!(recommendations.iter().all(|r| r.skills.len() == 5));

    let record = saved(&store);
    assert_eq!(record.profile, Some(fixtures::profile()));
    assert!(record.job.is_none());
    assert!(record.path.is_none());
}

#[tokio::test]
async fn test_incomplete_profile_is_rejected_before_any_call() {
    let (gateway, store, workflow) = setup();
    let mut profile = fixtures::profile();
    profile.goals = "   ".into();

    let err = workflow.submit_profile(profile).await.unwrap_err();

    assert!(matches!(err, AppError::Validation(msg) if msg == "Please fill out all profile fields."));
    assert_eq!(gateway.count("recommendations"), 0);
    assert!(store.raw().is_none());
    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
}

#[tokio::test]
async fn test_failure_sets_error_flag_until_cleared() {
    let (gateway, _, workflow) = setup();
    gateway.fail("recommendations");

    let err = workflow.submit_profile(fixtures::profile()).await.unwrap_err();
    assert!(matches!(err, AppError::Llm(_)));

    let view = workflow.snapshot().await;
    assert_eq!(view.phase, Phase::ProfileInput);
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to get job recommendations. Please try again.")
    );
    assert!(view.busy.is_empty());

    gateway.recover("recommendations");
    let err = workflow.submit_profile(fixtures::profile()).await.unwrap_err();
    assert!(matches!(err, AppError::ErrorPending(_)));
    assert_eq!(gateway.count("recommendations"), 1);

    workflow.clear_error().await;
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    assert_eq!(phase(&workflow).await.name(), "recommendations");
}

#[tokio::test]
async fn test_learning_path_is_saved_in_full() {
    let (_, store, workflow) = setup();

    to_learning_path(&workflow).await;

    let view = workflow.snapshot().await;
    assert_eq!(view.phase.name(), "learning_path");
    assert_eq!(view.progress, Some(0));

    let track = track(&workflow).await;
    assert_eq!(track.job.title, "ML Engineer");
    let months: Vec<u32> = track.path.steps().iter().map(|s| s.month).collect();
    assert_eq!(months, vec![1, 2, 3]);

    let record = saved(&store);
    assert_eq!(record.job, Some(track.job.clone()));
    assert_eq!(record.path, Some(track.path.clone()));
    assert!(record.completed_steps.is_empty());
    assert!(record.resume.is_none());
}

#[tokio::test]
async fn test_learning_path_needs_gaps() {
    let (gateway, _, workflow) = setup();
    gateway.without_gaps();
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    workflow.select_job_for_analysis(0).await.unwrap();

    let err = workflow.create_learning_path().await.unwrap_err();

    assert!(matches!(err, AppError::Precondition(_)));
    assert_eq!(gateway.count("learning_path"), 0);
    assert_eq!(phase(&workflow).await.name(), "skill_gap");
}

#[tokio::test]
async fn test_unknown_recommendation_index() {
    let (gateway, _, workflow) = setup();
    workflow.submit_profile(fixtures::profile()).await.unwrap();

    let err = workflow.select_job_for_analysis(5).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(gateway.count("skill_gap"), 0);
}

#[tokio::test]
async fn test_toggle_updates_progress_and_record() {
    let (_, store, workflow) = setup();
    to_learning_path(&workflow).await;

    workflow.toggle_step(2).await.unwrap();
    assert_eq!(workflow.snapshot().await.progress, Some(33));
    assert_eq!(saved(&store).completed_steps, vec![2]);

    workflow.toggle_step(3).await.unwrap();
    assert_eq!(workflow.snapshot().await.progress, Some(67));

    workflow.toggle_step(2).await.unwrap();
    assert_eq!(workflow.snapshot().await.progress, Some(33));
    assert_eq!(saved(&store).completed_steps, vec![3]);

    let err = workflow.toggle_step(7).await.unwrap_err();
    assert!(matches!(err, AppError::Precondition(_)));
}

#[tokio::test]
async fn test_toggle_clears_assessment() {
    let (_, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.toggle_step(1).await.unwrap();

    workflow.request_assessment().await.unwrap();
    let assessment = track(&workflow).await.assessment;
    assert_eq!(
        assessment.as_deref(),
        Some("1 steps done toward ML Engineer. Keep going!")
    );

    workflow.toggle_step(2).await.unwrap();
    assert!(track(&workflow).await.assessment.is_none());
}

#[tokio::test]
async fn test_assessment_for_outdated_progress_is_discarded() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    gateway.gate("assessment");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.request_assessment().await }
    });
    gateway.started.notified().await;
    workflow.toggle_step(1).await.unwrap();
    gateway.release.notify_one();
    task.await.unwrap().unwrap();

    let view = workflow.snapshot().await;
    assert!(view.busy.is_empty());
    assert!(track(&workflow).await.assessment.is_none());
}

#[tokio::test]
async fn test_assessment_failure_sets_error() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    gateway.fail("assessment");

    let err = workflow.request_assessment().await.unwrap_err();

    assert!(matches!(err, AppError::Llm(_)));
    let view = workflow.snapshot().await;
    assert_eq!(
        view.error.as_deref(),
        Some("Failed to get AI assessment. Please try again.")
    );
    assert!(track(&workflow).await.assessment.is_none());
    assert!(matches!(
        workflow.toggle_step(1).await,
        Err(AppError::ErrorPending(_))
    ));
}

#[tokio::test]
async fn test_resume_generation_saves_resume() {
    let (_, store, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.toggle_step(1).await.unwrap();

    workflow.generate_resume().await.unwrap();

    assert_eq!(phase(&workflow).await.name(), "resume_generator");
    let record = saved(&store);
    assert_eq!(record.resume, Some(fixtures::resume()));
    assert_eq!(record.completed_steps, vec![1]);

    let (file_name, text) = workflow.resume_download().await.unwrap();
    assert_eq!(file_name, "ada_lovelace_resume.txt");
    assert!(text.starts_with("Ada Lovelace"));
}

#[tokio::test]
async fn test_resume_generation_failure_stays_on_learning_path() {
    let (gateway, store, workflow) = setup();
    to_learning_path(&workflow).await;
    gateway.fail("resume");

    let err = workflow.generate_resume().await.unwrap_err();

    assert!(matches!(err, AppError::Llm(_)));
    assert_eq!(phase(&workflow).await.name(), "learning_path");
    assert!(saved(&store).resume.is_none());
    assert!(matches!(
        workflow.resume_download().await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_cover_letter_requires_resume() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.find_live_jobs(SearchSource::ActiveJob).await.unwrap();

    let err = workflow.generate_cover_letter(0).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Precondition(msg)
            if msg == "Please generate a resume first to create a tailored cover letter."
    ));
    assert_eq!(gateway.count("cover_letter"), 0);
    assert!(workflow.snapshot().await.job_search.is_some());
}

#[tokio::test]
async fn test_cover_letter_for_live_job() {
    let (_, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.generate_resume().await.unwrap();
    workflow.find_live_jobs(SearchSource::ActiveJob).await.unwrap();

    let search = workflow.snapshot().await.job_search.unwrap();
    assert_eq!(search.target.title, "ML Engineer");
    assert!(matches!(&search.status, SearchStatus::Ready { jobs } if jobs.len() == 2));

    workflow.generate_cover_letter(1).await.unwrap();

    let view = workflow.snapshot().await;
    assert!(view.job_search.is_none());
    let Phase::CoverLetterGenerator { job, letter, .. } = view.phase else {
        panic!("expected cover letter");
    };
    assert_eq!(job.company, "Globex");
    assert!(letter.contains("Ada Lovelace"));

    workflow.back().await;
    assert_eq!(phase(&workflow).await.name(), "learning_path");
}

#[tokio::test]
async fn test_cover_letter_failure_returns_to_learning_path() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.generate_resume().await.unwrap();
    workflow.find_live_jobs(SearchSource::ActiveJob).await.unwrap();
    gateway.fail("cover_letter");

    let err = workflow.generate_cover_letter(0).await.unwrap_err();

    assert!(matches!(err, AppError::Llm(_)));
    let view = workflow.snapshot().await;
    assert_eq!(view.phase.name(), "learning_path");
    assert!(view.error.is_some());
    assert!(view.job_search.is_none());
    assert!(track(&workflow).await.resume.is_some());
}

#[tokio::test]
async fn test_back_walks_to_intake_and_clears_error() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    gateway.fail("resume");
    let _ = workflow.generate_resume().await;

    workflow.back().await;
    let view = workflow.snapshot().await;
    assert!(view.error.is_none());
    assert_eq!(view.phase.name(), "skill_gap");

    workflow.back().await;
    assert_eq!(phase(&workflow).await.name(), "recommendations");
    workflow.back().await;
    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
    workflow.back().await;
    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
}

#[tokio::test]
async fn test_restore_full_record_lands_on_learning_path() {
    let path = fixtures::learning_path();
    let record = PersistedSession::full(
        uuid::Uuid::new_v4(),
        fixtures::profile(),
        fixtures::recommendations()[2].clone(),
        path.clone(),
        &crate::models::learning::CompletedSteps::for_path([1, 3], &path),
        Some(fixtures::resume()),
    );
    let mut raw = serde_json::to_value(&record).unwrap();
    raw["completedSteps"] = serde_json::json!([1, 3, 9]);
    let (gateway, _, workflow) = setup_with_store(MemorySessionStore::with_raw(raw.to_string()));

    workflow.restore().await.unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(Some(view.session_id), record.session_id);
    assert_eq!(view.progress, Some(67));
    let track = track(&workflow).await;
    assert_eq!(track.job.title, "MLOps Engineer");
    assert_eq!(track.completed.to_vec(), vec![1, 3]);
    assert_eq!(track.resume, Some(fixtures::resume()));
    assert_eq!(gateway.count("recommendations"), 0);

    workflow.back().await;
    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
}

#[tokio::test]
async fn test_restore_replays_saved_profile() {
    let record = PersistedSession::profile_only(uuid::Uuid::new_v4(), fixtures::profile());
    let store = MemorySessionStore::new();
    store.save(&record).unwrap();
    let (gateway, _, workflow) = setup_with_store(store);

    workflow.restore().await.unwrap();

    assert_eq!(gateway.count("recommendations"), 1);
    let view = workflow.snapshot().await;
    assert_eq!(Some(view.session_id), record.session_id);
    let Phase::Recommendations { profile, .. } = view.phase else {
        panic!("expected recommendations");
    };
    assert_eq!(profile, fixtures::profile());
}

#[tokio::test]
async fn test_unstamped_learning_path_record_restores() {
    let raw = serde_json::json!({
        "profile": fixtures::profile(),
        "job": fixtures::recommendations()[0],
        "path": fixtures::learning_path(),
        "completedSteps": [1],
    });
    let (gateway, store, workflow) =
        setup_with_store(MemorySessionStore::with_raw(raw.to_string()));

    workflow.restore().await.unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(view.phase.name(), "learning_path");
    assert_eq!(view.progress, Some(33));
    assert!(!view.session_id.is_nil());
    assert_eq!(track(&workflow).await.completed.to_vec(), vec![1]);
    assert!(store.raw().is_some());
    assert_eq!(gateway.count("recommendations"), 0);
}

#[tokio::test]
async fn test_unstamped_profile_record_is_replayed() {
    let raw = serde_json::json!({ "profile": fixtures::profile() });
    let (gateway, store, workflow) =
        setup_with_store(MemorySessionStore::with_raw(raw.to_string()));

    workflow.restore().await.unwrap();

    assert_eq!(gateway.count("recommendations"), 1);
    assert_eq!(phase(&workflow).await.name(), "recommendations");
    let record = saved(&store);
    assert_eq!(record.profile, Some(fixtures::profile()));
    assert_eq!(record.session_id, Some(workflow.snapshot().await.session_id));
}

#[tokio::test]
async fn test_saved_track_survives_a_restart() {
    let (_, store, first) = setup();
    to_learning_path(&first).await;
    first.toggle_step(1).await.unwrap();
    first.toggle_step(3).await.unwrap();
    first.generate_resume().await.unwrap();
    let mut expected = track(&first).await;
    expected.origin = None;
    expected.assessment = None;

    let second = Workflow::new(Arc::new(ScriptedGateway::new()), store.clone());
    second.restore().await.unwrap();

    let view = second.snapshot().await;
    assert_eq!(view.session_id, first.snapshot().await.session_id);
    assert_eq!(view.phase, Phase::LearningPath { track: expected });
    assert_eq!(view.progress, Some(67));
}

#[tokio::test]
async fn test_failed_replay_stays_on_intake_with_error() {
    let store = MemorySessionStore::new();
    store
        .save(&PersistedSession::profile_only(
            uuid::Uuid::new_v4(),
            fixtures::profile(),
        ))
        .unwrap();
    let (gateway, _, workflow) = setup_with_store(store);
    gateway.fail("recommendations");

    workflow.restore().await.unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(view.phase, Phase::ProfileInput);
    assert!(view.error.is_some());
}

#[tokio::test]
async fn test_corrupt_record_starts_fresh() {
    let (gateway, store, workflow) = setup_with_store(MemorySessionStore::with_raw("{not json"));

    workflow.restore().await.unwrap();

    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
    assert!(store.raw().is_none());
    assert_eq!(gateway.count("recommendations"), 0);
}

#[tokio::test]
async fn test_reset_clears_store_and_mints_new_session() {
    let (_, store, workflow) = setup();
    to_learning_path(&workflow).await;
    let before = workflow.snapshot().await.session_id;

    workflow.reset().await.unwrap();

    let view = workflow.snapshot().await;
    assert_ne!(view.session_id, before);
    assert_eq!(view.phase, Phase::ProfileInput);
    assert!(store.raw().is_none());
}

#[tokio::test]
async fn test_result_arriving_after_reset_is_discarded() {
    let (gateway, store, workflow) = setup();
    to_learning_path(&workflow).await;
    gateway.gate("resume");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.generate_resume().await }
    });
    gateway.started.notified().await;
    workflow.reset().await.unwrap();
    gateway.release.notify_one();
    task.await.unwrap().unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(view.phase, Phase::ProfileInput);
    assert!(view.busy.is_empty());
    assert!(store.raw().is_none());
}

#[tokio::test]
async fn test_main_slot_rejects_second_dispatch() {
    let (gateway, _, workflow) = setup();
    gateway.gate("recommendations");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.submit_profile(fixtures::profile()).await }
    });
    gateway.started.notified().await;
    assert_eq!(workflow.snapshot().await.busy, vec![Slot::Main]);

    let err = workflow.submit_profile(fixtures::profile()).await.unwrap_err();
    assert!(matches!(err, AppError::Busy(Slot::Main)));

    gateway.release.notify_one();
    task.await.unwrap().unwrap();
    assert_eq!(gateway.count("recommendations"), 1);
    assert_eq!(phase(&workflow).await.name(), "recommendations");
}

#[tokio::test]
async fn test_job_search_runs_beside_main_workflow() {
    let (gateway, _, workflow) = setup();
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    gateway.gate("live_jobs");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.find_live_jobs(SearchSource::Recommendation(1)).await }
    });
    gateway.started.notified().await;

    let err = workflow
        .find_live_jobs(SearchSource::Recommendation(2))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Busy(Slot::JobSearch)));
    workflow.select_job_for_analysis(0).await.unwrap();

    gateway.release.notify_one();
    task.await.unwrap().unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(view.phase.name(), "skill_gap");
    let search = view.job_search.unwrap();
    assert_eq!(search.target.title, "Data Engineer");
    assert!(matches!(search.status, SearchStatus::Ready { .. }));
}

#[tokio::test]
async fn test_closed_search_ignores_late_results() {
    let (gateway, _, workflow) = setup();
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    gateway.gate("live_jobs");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.find_live_jobs(SearchSource::Recommendation(0)).await }
    });
    gateway.started.notified().await;
    workflow.close_job_search().await;
    gateway.release.notify_one();
    task.await.unwrap().unwrap();

    let view = workflow.snapshot().await;
    assert!(view.job_search.is_none());
    assert!(view.busy.is_empty());
}

#[tokio::test]
async fn test_job_search_failure_is_kept_on_the_search() {
    let (gateway, _, workflow) = setup();
    workflow.submit_profile(fixtures::profile()).await.unwrap();
    gateway.fail("live_jobs");

    let err = workflow
        .find_live_jobs(SearchSource::Recommendation(0))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Llm(_)));
    let view = workflow.snapshot().await;
    assert!(view.error.is_none());
    assert!(matches!(
        view.job_search.unwrap().status,
        SearchStatus::Failed { .. }
    ));
}

#[tokio::test]
async fn test_interview_practice() {
    let (_, _, workflow) = setup();
    to_learning_path(&workflow).await;

    workflow.start_interview().await.unwrap();
    workflow.load_interview_questions().await.unwrap();

    let err = workflow
        .submit_interview_answer(0, "  ".into())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(msg) if msg == "Please provide an answer."));

    workflow
        .submit_interview_answer(0, "I shipped a ranking model".into())
        .await
        .unwrap();

    let Phase::InterviewPrep { interview, .. } = phase(&workflow).await else {
        panic!("expected interview prep");
    };
    assert_eq!(interview.questions.len(), 5);
    let first = &interview.questions[0];
    assert_eq!(first.answer.as_deref(), Some("I shipped a ranking model"));
    assert_eq!(
        first.feedback.as_deref(),
        Some("Good answer: I shipped a ranking model")
    );
    assert!(interview.questions[1].answer.is_none());

    assert!(matches!(
        workflow.submit_interview_answer(9, "x".into()).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_interview_failure_stays_on_interview() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.start_interview().await.unwrap();
    gateway.fail("interview_questions");

    let err = workflow.load_interview_questions().await.unwrap_err();
    assert!(matches!(err, AppError::Llm(_)));

    let view = workflow.snapshot().await;
    assert!(view.error.is_none());
    let Phase::InterviewPrep { interview, .. } = view.phase else {
        panic!("expected interview prep");
    };
    assert!(interview.questions.is_empty());
    assert!(interview.error.is_some());

    gateway.recover("interview_questions");
    workflow.load_interview_questions().await.unwrap();
    let Phase::InterviewPrep { interview, .. } = phase(&workflow).await else {
        panic!("expected interview prep");
    };
    assert_eq!(interview.questions.len(), 5);
    assert!(interview.error.is_none());
}

#[tokio::test]
async fn test_questions_arriving_after_back_are_discarded() {
    let (gateway, _, workflow) = setup();
    to_learning_path(&workflow).await;
    workflow.start_interview().await.unwrap();
    gateway.gate("interview_questions");

    let task = tokio::spawn({
        let workflow = workflow.clone();
        async move { workflow.load_interview_questions().await }
    });
    gateway.started.notified().await;
    workflow.back().await;
    gateway.release.notify_one();
    task.await.unwrap().unwrap();

    let view = workflow.snapshot().await;
    assert_eq!(view.phase.name(), "learning_path");
    assert!(view.busy.is_empty());
}

#[tokio::test]
async fn test_interview_needs_a_job() {
    let (_, _, workflow) = setup();
    workflow.submit_profile(fixtures::profile()).await.unwrap();

    assert!(matches!(
        workflow.start_interview().await,
        Err(AppError::Precondition(_))
    ));
}

#[tokio::test]
async fn test_dream_company_roadmap() {
    let (gateway, store, workflow) = setup();

    let err = workflow
        .submit_dream_company(fixtures::profile(), " ".into())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(gateway.count("roadmap"), 0);

    workflow
        .submit_dream_company(fixtures::profile(), "Acme".into())
        .await
        .unwrap();

    let Phase::DreamCompanyRoadmap {
        company_name,
        roadmap,
        ..
    } = phase(&workflow).await
    else {
        panic!("expected roadmap");
    };
    assert_eq!(company_name, "Acme");
    assert_eq!(roadmap.company_name, "Acme");
    assert!(saved(&store).path.is_none());

    workflow.back().await;
    assert_eq!(phase(&workflow).await, Phase::ProfileInput);
}

#[tokio::test]
async fn test_resume_feedback_from_intake() {
    let (gateway, store, workflow) = setup();

    let err = workflow
        .submit_resume_for_feedback("".into(), "Data Engineer".into())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(msg) if msg == "Please paste your resume and specify a target role."
    ));

    workflow
        .submit_resume_for_feedback("Backend developer, 3 years".into(), "Data Engineer".into())
        .await
        .unwrap();

    let Phase::ResumeFeedback { feedback } = phase(&workflow).await else {
        panic!("expected resume feedback");
    };
    assert_eq!(feedback, fixtures::resume_feedback());
    assert_eq!(gateway.count("resume_feedback"), 1);
    assert!(store.raw().is_none());
}
