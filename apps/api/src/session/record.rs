//! The persisted session record and how it maps back onto a workflow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::learning::{CompletedSteps, LearningPath};
use crate::models::profile::{JobRecommendation, UserProfile};
use crate::models::resume::GeneratedResume;

/// Bumped when the record layout changes incompatibly.
pub const RECORD_VERSION: u32 = 1;

fn record_version() -> u32 {
    RECORD_VERSION
}

/// Everything needed to resume a session. Absent fields mean "not yet available";
/// a record with no `sessionId` is given a fresh one when it is restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default = "record_version")]
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<Uuid>,
    /// `None` when the writer did not stamp the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobRecommendation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<LearningPath>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<GeneratedResume>,
    #[serde(default)]
    pub completed_steps: Vec<u32>,
}

impl PersistedSession {
    /// A record holding only the intake profile.
    pub fn profile_only(session_id: Uuid, profile: UserProfile) -> Self {
        Self {
            version: RECORD_VERSION,
            session_id: Some(session_id),
            saved_at: Some(Utc::now()),
            profile: Some(profile),
            job: None,
            path: None,
            resume: None,
            completed_steps: vec![],
        }
    }

    /// A full learning-path record.
    pub fn full(
        session_id: Uuid,
        profile: UserProfile,
        job: JobRecommendation,
        path: LearningPath,
        completed: &CompletedSteps,
        resume: Option<GeneratedResume>,
    ) -> Self {
        Self {
            version: RECORD_VERSION,
            session_id: Some(session_id),
            saved_at: Some(Utc::now()),
            profile: Some(profile),
            job: Some(job),
            path: Some(path),
            resume,
            completed_steps: completed.to_vec(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.version <= RECORD_VERSION
    }

    /// Read policy: a full learning-path record restores directly, a profile
    /// alone is replayed through intake, anything else starts fresh.
    pub fn into_plan(self) -> RestorePlan {
        let session_id = self.session_id.unwrap_or_else(Uuid::new_v4);
        match (self.profile, self.job, self.path) {
            (Some(profile), Some(job), Some(path)) => {
                let completed = CompletedSteps::for_path(self.completed_steps, &path);
                RestorePlan::LearningPath {
                    session_id,
                    profile,
                    job,
                    path,
                    completed,
                    resume: self.resume,
                }
            }
            (Some(profile), _, _) => RestorePlan::ReplayProfile { session_id, profile },
            _ => RestorePlan::Fresh,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RestorePlan {
    LearningPath {
        session_id: Uuid,
        profile: UserProfile,
        job: JobRecommendation,
        path: LearningPath,
        completed: CompletedSteps,
        resume: Option<GeneratedResume>,
    },
    ReplayProfile {
        session_id: Uuid,
        profile: UserProfile,
    },
    Fresh,
}
