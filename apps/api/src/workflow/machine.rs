//! The coaching session state machine.
//!
//! Every AI-backed transition runs in three steps: lock the state, check the
//! guard and take a [`Ticket`]; release the lock and await the gateway; lock
//! again and apply the result only if the ticket is still current. The lock is
//! never held across a gateway call.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::gateway::{CareerGateway, GatewayError};
use crate::models::interview::InterviewSession;
use crate::models::profile::UserProfile;
use crate::session::{PersistedSession, RestorePlan, SessionStore};

use super::phase::{Analysis, JobSearch, Phase, SearchStatus, Track};
use super::slots::{InFlight, Slot, Ticket};

const PROFILE_INCOMPLETE: &str = "Please fill out all profile fields.";
const DREAM_COMPANY_INCOMPLETE: &str = "Please fill out all profile fields and the dream company name.";
const RESUME_INPUT_INCOMPLETE: &str = "Please paste your resume and specify a target role.";
const ANSWER_MISSING: &str = "Please provide an answer.";
const RESUME_REQUIRED: &str = "Please generate a resume first to create a tailored cover letter.";

const RECOMMENDATIONS_FAILED: &str = "Failed to get job recommendations. Please try again.";
const SKILL_GAP_FAILED: &str = "Failed to analyze skill gap. Please try again.";
const LEARNING_PATH_FAILED: &str = "Failed to generate learning path. Please try again.";
const RESUME_FEEDBACK_FAILED: &str = "Failed to get resume feedback. Please try again.";
const ASSESSMENT_FAILED: &str = "Failed to get AI assessment. Please try again.";
const QUESTIONS_FAILED: &str = "Failed to load interview questions. Please try again.";
const ANSWER_FEEDBACK_FAILED: &str = "Failed to get feedback on your answer. Please try again.";
const RESUME_FAILED: &str = "Failed to generate resume. Please try again.";
const LIVE_JOBS_FAILED: &str = "Failed to find live jobs. The AI may not have found relevant postings or formatted the response correctly. Please try again.";
const COVER_LETTER_FAILED: &str = "Failed to generate cover letter. Please try again.";
const ROADMAP_FAILED: &str = "Failed to generate dream company roadmap. Please try again.";

/// Which job a live-job search targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    /// A recommendation on the shortlist, by index.
    Recommendation(usize),
    /// The job of the current track.
    ActiveJob,
}

/// What clients see of the session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub busy: Vec<Slot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_search: Option<JobSearch>,
}

struct SessionState {
    session_id: Uuid,
    epoch: u64,
    phase: Phase,
    error: Option<String>,
    in_flight: InFlight,
    job_search: Option<JobSearch>,
    search_sequence: u64,
}

impl SessionState {
    fn fresh(epoch: u64) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            epoch,
            phase: Phase::ProfileInput,
            error: None,
            in_flight: InFlight::default(),
            job_search: None,
            search_sequence: 0,
        }
    }

    /// Replaces the phase. Any main or interview call still in flight becomes stale.
    fn transition(&mut self, next: impl FnOnce(Phase) -> Phase) {
        let current = std::mem::replace(&mut self.phase, Phase::ProfileInput);
        let from = current.name();
        self.phase = next(current);
        self.epoch += 1;
        self.in_flight.release(Slot::Main);
        self.in_flight.release(Slot::Interview);
        info!("Session {}: {from} -> {}", self.session_id, self.phase.name());
    }

    fn ensure_no_error(&self) -> Result<(), AppError> {
        match &self.error {
            Some(message) => Err(AppError::ErrorPending(message.clone())),
            None => Ok(()),
        }
    }

    /// Checks for a synchronous transition: no pending error, main slot idle.
    fn ensure_ready(&self) -> Result<(), AppError> {
        self.ensure_no_error()?;
        if self.in_flight.is_busy(Slot::Main) {
            return Err(AppError::Busy(Slot::Main));
        }
        Ok(())
    }

    fn dispatch(&mut self, slot: Slot) -> Result<Ticket, AppError> {
        if slot == Slot::Main {
            self.ensure_no_error()?;
        }
        self.in_flight.acquire(slot)?;
        Ok(Ticket {
            slot,
            session_id: self.session_id,
            epoch: self.epoch,
            sequence: self.search_sequence,
        })
    }

    fn accepts(&self, ticket: &Ticket) -> bool {
        if ticket.session_id != self.session_id {
            return false;
        }
        match ticket.slot {
            Slot::JobSearch => self
                .job_search
                .as_ref()
                .is_some_and(|s| s.sequence == ticket.sequence),
            Slot::Main | Slot::Interview => ticket.epoch == self.epoch,
        }
    }

    /// Records a main-slot failure on the session and builds the response error.
    fn fail(&mut self, message: &str, cause: GatewayError) -> AppError {
        match cause {
            GatewayError::InvalidInput(msg) => AppError::Validation(msg),
            cause => {
                error!("{message} ({cause})");
                self.error = Some(message.to_string());
                AppError::Llm(message.to_string())
            }
        }
    }
}

/// Side-slot failures are recorded by the caller on their own state.
fn side_failure(message: &str, cause: GatewayError) -> AppError {
    match cause {
        GatewayError::InvalidInput(msg) => AppError::Validation(msg),
        cause => {
            error!("{message} ({cause})");
            AppError::Llm(message.to_string())
        }
    }
}

fn precondition(message: impl Into<String>) -> AppError {
    AppError::Precondition(message.into())
}

/// One user's coaching session.
pub struct Workflow {
    gateway: Arc<dyn CareerGateway>,
    store: Arc<dyn SessionStore>,
    state: Mutex<SessionState>,
}

impl Workflow {
    pub fn new(gateway: Arc<dyn CareerGateway>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            gateway,
            store,
            state: Mutex::new(SessionState::fresh(0)),
        }
    }

    /// Re-locks the state for a completion, or returns `None` when the result is stale.
    async fn settle(&self, ticket: &Ticket) -> Option<MutexGuard<'_, SessionState>> {
        let mut state = self.state.lock().await;
        if state.accepts(ticket) {
            state.in_flight.release(ticket.slot);
            Some(state)
        } else {
            info!(
                "Discarding stale {} result for session {} (epoch {})",
                ticket.slot, ticket.session_id, ticket.epoch
            );
            None
        }
    }

    /// Writes the record on the blocking pool. Callers hold the state lock, so
    /// writes land in transition order.
    async fn persist(&self, session_id: Uuid, record: PersistedSession) {
        let store = self.store.clone();
        match tokio::task::spawn_blocking(move || store.save(&record)).await {
            Ok(Ok(())) => debug!("Saved session {session_id}"),
            Ok(Err(e)) => error!("Failed to save session {session_id}: {e}"),
            Err(e) => error!("Session {session_id} save task failed: {e}"),
        }
    }

    async fn persist_track(&self, state: &SessionState) {
        if let Some(track) = state.phase.track() {
            self.persist(state.session_id, track.record(state.session_id))
                .await;
        }
    }

    pub async fn snapshot(&self) -> SessionView {
        let state = self.state.lock().await;
        SessionView {
            session_id: state.session_id,
            phase: state.phase.clone(),
            progress: state.phase.track().map(Track::progress),
            error: state.error.clone(),
            busy: state.in_flight.busy(),
            job_search: state.job_search.clone(),
        }
    }

    /// Applies the saved session, if any. Run once before serving.
    pub async fn restore(&self) -> Result<(), AppError> {
        let Some(record) = self.store.load()? else {
            info!("No saved session; starting at profile input");
            return Ok(());
        };

        match record.into_plan() {
            RestorePlan::LearningPath {
                session_id,
                profile,
                job,
                path,
                completed,
                resume,
            } => {
                let mut state = self.state.lock().await;
                state.session_id = session_id;
                let track = Track::restored(profile, job, path, completed, resume);
                state.transition(|_| Phase::LearningPath { track });
                info!("Restored session {session_id} onto its learning path");
            }
            RestorePlan::ReplayProfile {
                session_id,
                profile,
            } => {
                self.state.lock().await.session_id = session_id;
                info!("Replaying saved profile for session {session_id}");
                if let Err(e) = self.submit_profile(profile).await {
                    warn!("Replaying saved profile failed: {e}");
                }
            }
            RestorePlan::Fresh => {
                info!("Saved session has no profile; starting fresh");
                self.store.clear()?;
            }
        }
        Ok(())
    }

    pub async fn submit_profile(&self, profile: UserProfile) -> Result<(), AppError> {
        if !profile.is_complete() {
            return Err(AppError::Validation(PROFILE_INCOMPLETE.into()));
        }
        let ticket = {
            let mut state = self.state.lock().await;
            if !matches!(state.phase, Phase::ProfileInput) {
                return Err(precondition("A profile can only be submitted from the intake screen"));
            }
            let ticket = state.dispatch(Slot::Main)?;
            self.persist(
                state.session_id,
                PersistedSession::profile_only(state.session_id, profile.clone()),
            )
            .await;
            ticket
        };

        let result = self.gateway.get_job_recommendations(&profile).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(recommendations) => {
                state.transition(|_| Phase::Recommendations {
                    profile,
                    recommendations,
                });
                Ok(())
            }
            Err(e) => Err(state.fail(RECOMMENDATIONS_FAILED, e)),
        }
    }

    pub async fn submit_dream_company(
        &self,
        profile: UserProfile,
        company_name: String,
    ) -> Result<(), AppError> {
        if !profile.is_complete() || company_name.trim().is_empty() {
            return Err(AppError::Validation(DREAM_COMPANY_INCOMPLETE.into()));
        }
        let ticket = {
            let mut state = self.state.lock().await;
            if !matches!(state.phase, Phase::ProfileInput) {
                return Err(precondition("A roadmap can only be requested from the intake screen"));
            }
            let ticket = state.dispatch(Slot::Main)?;
            self.persist(
                state.session_id,
                PersistedSession::profile_only(state.session_id, profile.clone()),
            )
            .await;
            ticket
        };

        let result = self
            .gateway
            .get_dream_company_roadmap(&profile, &company_name)
            .await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(roadmap) => {
                state.transition(|_| Phase::DreamCompanyRoadmap {
                    profile,
                    company_name,
                    roadmap,
                });
                Ok(())
            }
            Err(e) => Err(state.fail(ROADMAP_FAILED, e)),
        }
    }

    pub async fn select_job_for_analysis(&self, index: usize) -> Result<(), AppError> {
        let (ticket, skills, job) = {
            let mut state = self.state.lock().await;
            let Phase::Recommendations {
                profile,
                recommendations,
            } = &state.phase
            else {
                return Err(precondition("No job recommendations to choose from"));
            };
            let job = recommendations
                .get(index)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Recommendation {index} not found")))?;
            let skills = profile.skill_list();
            (state.dispatch(Slot::Main)?, skills, job)
        };

        let result = self.gateway.get_skill_gap_analysis(&skills, &job).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(gap) => {
                state.transition(|phase| match phase {
                    Phase::Recommendations {
                        profile,
                        recommendations,
                    } => Phase::SkillGap {
                        analysis: Analysis {
                            profile,
                            recommendations,
                            job,
                            gap,
                        },
                    },
                    other => other,
                });
                Ok(())
            }
            Err(e) => Err(state.fail(SKILL_GAP_FAILED, e)),
        }
    }

    pub async fn create_learning_path(&self) -> Result<(), AppError> {
        let (ticket, role, skills, gaps) = {
            let mut state = self.state.lock().await;
            let Phase::SkillGap { analysis } = &state.phase else {
                return Err(precondition("Analyze a target job before building a learning path"));
            };
            if !analysis.gap.has_gaps() {
                return Err(precondition("The skill gap analysis found nothing to learn"));
            }
            let role = analysis.job.title.clone();
            let skills = analysis.profile.skill_list();
            let gaps = analysis.gap.gaps.clone();
            (state.dispatch(Slot::Main)?, role, skills, gaps)
        };

        let result = self.gateway.get_learning_path(&role, &skills, &gaps).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(path) => {
                info!("Learning path for {role} has {} steps", path.len());
                state.transition(|phase| match phase {
                    Phase::SkillGap { analysis } => Phase::LearningPath {
                        track: Track::from_analysis(analysis, path),
                    },
                    other => other,
                });
                self.persist_track(&state).await;
                Ok(())
            }
            Err(e) => Err(state.fail(LEARNING_PATH_FAILED, e)),
        }
    }

    pub async fn toggle_step(&self, month: u32) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        state.ensure_no_error()?;
        let session_id = state.session_id;
        let Phase::LearningPath { track } = &mut state.phase else {
            return Err(precondition("Steps can only be ticked off on the learning path"));
        };
        if !track.path.contains_month(month) {
            return Err(precondition(format!("Month {month} is not part of the learning path")));
        }
        let done = track.completed.toggle(month);
        track.assessment = None;
        debug!("Month {month} completed: {done}");
        let record = track.record(session_id);
        self.persist(session_id, record).await;
        Ok(())
    }

    pub async fn request_assessment(&self) -> Result<(), AppError> {
        let (ticket, role, path, completed) = {
            let mut state = self.state.lock().await;
            let Phase::LearningPath { track } = &state.phase else {
                return Err(precondition("An assessment needs a learning path"));
            };
            let role = track.job.title.clone();
            let path = track.path.clone();
            let completed = track.completed.clone();
            (state.dispatch(Slot::Main)?, role, path, completed)
        };

        let result = self
            .gateway
            .get_progress_assessment(&role, &path, &completed)
            .await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(text) => {
                if let Phase::LearningPath { track } = &mut state.phase {
                    if track.completed == completed {
                        track.assessment = Some(text);
                    } else {
                        info!("Progress changed while assessing; discarding assessment");
                    }
                }
                Ok(())
            }
            Err(e) => {
                if let Phase::LearningPath { track } = &mut state.phase {
                    track.assessment = None;
                }
                Err(state.fail(ASSESSMENT_FAILED, e))
            }
        }
    }

    pub async fn submit_resume_for_feedback(
        &self,
        resume_text: String,
        target_role: String,
    ) -> Result<(), AppError> {
        if resume_text.trim().is_empty() || target_role.trim().is_empty() {
            return Err(AppError::Validation(RESUME_INPUT_INCOMPLETE.into()));
        }
        let ticket = {
            let mut state = self.state.lock().await;
            if !matches!(state.phase, Phase::ProfileInput | Phase::ResumeFeedback { .. }) {
                return Err(precondition("Resume feedback is requested from the intake screen"));
            }
            state.dispatch(Slot::Main)?
        };

        let result = self
            .gateway
            .get_resume_feedback(&resume_text, &target_role)
            .await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(feedback) => {
                state.transition(|_| Phase::ResumeFeedback { feedback });
                Ok(())
            }
            Err(e) => Err(state.fail(RESUME_FEEDBACK_FAILED, e)),
        }
    }

    /// Enters interview practice for the active job. Questions load separately.
    pub async fn start_interview(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        state.ensure_ready()?;
        if state.phase.track().is_none() || matches!(state.phase, Phase::InterviewPrep { .. }) {
            return Err(precondition("Select a target job before practicing interviews"));
        }
        state.transition(|phase| match phase.into_track() {
            Some(track) => Phase::InterviewPrep {
                track,
                interview: InterviewSession::default(),
            },
            None => Phase::ProfileInput,
        });
        Ok(())
    }

    pub async fn load_interview_questions(&self) -> Result<(), AppError> {
        let (ticket, title) = {
            let mut state = self.state.lock().await;
            let Phase::InterviewPrep { track, .. } = &state.phase else {
                return Err(precondition("Interview practice has not been started"));
            };
            let title = track.job.title.clone();
            (state.dispatch(Slot::Interview)?, title)
        };

        let result = self.gateway.get_interview_questions(&title).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        let Phase::InterviewPrep { interview, .. } = &mut state.phase else {
            return Ok(());
        };
        match result {
            Ok(questions) => {
                interview.questions = questions;
                interview.error = None;
                Ok(())
            }
            Err(e) => {
                interview.error = Some(QUESTIONS_FAILED.to_string());
                Err(side_failure(QUESTIONS_FAILED, e))
            }
        }
    }

    pub async fn submit_interview_answer(
        &self,
        index: usize,
        answer: String,
    ) -> Result<(), AppError> {
        if answer.trim().is_empty() {
            return Err(AppError::Validation(ANSWER_MISSING.into()));
        }
        let (ticket, question, title) = {
            let mut state = self.state.lock().await;
            let Phase::InterviewPrep { track, interview } = &state.phase else {
                return Err(precondition("Interview practice has not been started"));
            };
            let question = interview
                .questions
                .get(index)
                .map(|q| q.question.clone())
                .ok_or_else(|| AppError::NotFound(format!("Interview question {index} not found")))?;
            let title = track.job.title.clone();
            let ticket = state.dispatch(Slot::Interview)?;
            if let Phase::InterviewPrep { interview, .. } = &mut state.phase {
                interview.questions[index].answer = Some(answer.clone());
                interview.questions[index].feedback = None;
            }
            (ticket, question, title)
        };

        let result = self
            .gateway
            .get_answer_feedback(&question, &answer, &title)
            .await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        let Phase::InterviewPrep { interview, .. } = &mut state.phase else {
            return Ok(());
        };
        match result {
            Ok(feedback) => {
                if let Some(entry) = interview
                    .questions
                    .get_mut(index)
                    .filter(|q| q.question == question)
                {
                    entry.feedback = Some(feedback);
                }
                interview.error = None;
                Ok(())
            }
            Err(e) => {
                interview.error = Some(ANSWER_FEEDBACK_FAILED.to_string());
                Err(side_failure(ANSWER_FEEDBACK_FAILED, e))
            }
        }
    }

    pub async fn generate_resume(&self) -> Result<(), AppError> {
        let (ticket, profile, job) = {
            let mut state = self.state.lock().await;
            let Phase::LearningPath { track } = &state.phase else {
                return Err(precondition("A resume is generated from the learning path"));
            };
            let profile = track.profile.clone();
            let job = track.job.clone();
            (state.dispatch(Slot::Main)?, profile, job)
        };

        let result = self.gateway.generate_resume(&profile, &job).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(resume) => {
                state.transition(|phase| match phase {
                    Phase::LearningPath { mut track } => {
                        track.resume = Some(resume);
                        Phase::ResumeGenerator { track }
                    }
                    other => other,
                });
                self.persist_track(&state).await;
                Ok(())
            }
            Err(e) => Err(state.fail(RESUME_FAILED, e)),
        }
    }

    /// Opens a live-job search. Runs beside the main workflow.
    pub async fn find_live_jobs(&self, source: SearchSource) -> Result<(), AppError> {
        let (ticket, title, goals) = {
            let mut state = self.state.lock().await;
            let Some(profile) = state.phase.profile() else {
                return Err(precondition("A profile is required to search for jobs"));
            };
            let goals = profile.goals.clone();
            let target = match (source, &state.phase) {
                (SearchSource::Recommendation(index), Phase::Recommendations { recommendations, .. }) => {
                    recommendations.get(index).cloned().ok_or_else(|| {
                        AppError::NotFound(format!("Recommendation {index} not found"))
                    })?
                }
                (SearchSource::ActiveJob, phase) => match phase.track() {
                    Some(track) => track.job.clone(),
                    None => return Err(precondition("There is no active job to search for")),
                },
                (SearchSource::Recommendation(_), _) => {
                    return Err(precondition("No job recommendations to search from"));
                }
            };
            let mut ticket = state.dispatch(Slot::JobSearch)?;
            state.search_sequence += 1;
            ticket.sequence = state.search_sequence;
            let title = target.title.clone();
            state.job_search = Some(JobSearch {
                target,
                sequence: ticket.sequence,
                status: SearchStatus::Pending,
            });
            (ticket, title, goals)
        };

        let result = self.gateway.find_live_jobs(&title, &goals).await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        let Some(search) = state.job_search.as_mut() else {
            return Ok(());
        };
        match result {
            Ok(jobs) => {
                info!("Found {} live jobs for {title}", jobs.len());
                search.status = SearchStatus::Ready { jobs };
                Ok(())
            }
            Err(e) => {
                search.status = SearchStatus::Failed {
                    message: LIVE_JOBS_FAILED.to_string(),
                };
                Err(side_failure(LIVE_JOBS_FAILED, e))
            }
        }
    }

    pub async fn close_job_search(&self) {
        let mut state = self.state.lock().await;
        state.job_search = None;
        state.in_flight.release(Slot::JobSearch);
    }

    pub async fn generate_cover_letter(&self, job_index: usize) -> Result<(), AppError> {
        let (ticket, profile, resume, job) = {
            let mut state = self.state.lock().await;
            let Some(track) = state.phase.track() else {
                return Err(precondition(RESUME_REQUIRED));
            };
            let Some(resume) = track.resume.clone() else {
                return Err(precondition(RESUME_REQUIRED));
            };
            let profile = track.profile.clone();
            let job = match &state.job_search {
                Some(JobSearch {
                    status: SearchStatus::Ready { jobs },
                    ..
                }) => jobs.get(job_index).cloned().ok_or_else(|| {
                    AppError::NotFound(format!("Live job {job_index} not found"))
                })?,
                _ => return Err(precondition("No live job results are available")),
            };
            let ticket = state.dispatch(Slot::Main)?;
            state.job_search = None;
            state.in_flight.release(Slot::JobSearch);
            (ticket, profile, resume, job)
        };

        let result = self
            .gateway
            .generate_cover_letter(&profile, &resume, &job)
            .await;

        let Some(mut state) = self.settle(&ticket).await else {
            return Ok(());
        };
        match result {
            Ok(letter) => {
                state.transition(|phase| match phase.into_track() {
                    Some(track) => Phase::CoverLetterGenerator { track, job, letter },
                    None => Phase::ProfileInput,
                });
                Ok(())
            }
            Err(e) => {
                state.transition(|phase| match phase.into_track() {
                    Some(track) => Phase::LearningPath { track },
                    None => Phase::ProfileInput,
                });
                Err(state.fail(COVER_LETTER_FAILED, e))
            }
        }
    }

    /// Plain-text rendering of the generated resume and its download file name.
    pub async fn resume_download(&self) -> Result<(String, String), AppError> {
        let state = self.state.lock().await;
        let resume = state
            .phase
            .track()
            .and_then(|t| t.resume.as_ref())
            .ok_or_else(|| AppError::NotFound("No resume has been generated yet".into()))?;
        Ok((resume.download_file_name(), resume.to_plain_text()))
    }

    /// Returns to the fixed predecessor of the current phase and clears the error flag.
    pub async fn back(&self) {
        let mut state = self.state.lock().await;
        state.error = None;
        state.transition(Phase::back);
    }

    /// Discards everything, including the saved record, and starts a new session.
    pub async fn reset(&self) -> Result<(), AppError> {
        let mut state = self.state.lock().await;
        let previous = state.session_id;
        let epoch = state.epoch + 1;
        *state = SessionState::fresh(epoch);
        info!("Session {previous} reset; new session {}", state.session_id);
        self.store.clear()?;
        Ok(())
    }

    pub async fn clear_error(&self) {
        self.state.lock().await.error = None;
    }
}
