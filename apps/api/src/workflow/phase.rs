//! The screens of a coaching session and the data each one carries.

use serde::Serialize;
use uuid::Uuid;

use crate::models::interview::InterviewSession;
use crate::models::jobs::LiveJob;
use crate::models::learning::{progress, CompletedSteps, LearningPath};
use crate::models::profile::{JobRecommendation, SkillGap, UserProfile};
use crate::models::resume::{GeneratedResume, ResumeFeedback};
use crate::models::roadmap::DreamCompanyRoadmap;
use crate::session::PersistedSession;

/// The result of analyzing one recommendation against the user's profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub profile: UserProfile,
    /// The shortlist the job was picked from, kept so Back can return to it.
    pub recommendations: Vec<JobRecommendation>,
    pub job: JobRecommendation,
    pub gap: SkillGap,
}

/// Context shared by every screen after a learning path exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub profile: UserProfile,
    pub job: JobRecommendation,
    pub path: LearningPath,
    pub completed: CompletedSteps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<GeneratedResume>,
    /// Absent when the track was restored from storage.
    #[serde(skip)]
    pub origin: Option<Box<Analysis>>,
}

impl Track {
    pub fn from_analysis(analysis: Analysis, path: LearningPath) -> Self {
        Self {
            profile: analysis.profile.clone(),
            job: analysis.job.clone(),
            path,
            completed: CompletedSteps::default(),
            assessment: None,
            resume: None,
            origin: Some(Box::new(analysis)),
        }
    }

    pub fn restored(
        profile: UserProfile,
        job: JobRecommendation,
        path: LearningPath,
        completed: CompletedSteps,
        resume: Option<GeneratedResume>,
    ) -> Self {
        Self {
            profile,
            job,
            path,
            completed,
            assessment: None,
            resume,
            origin: None,
        }
    }

    pub fn progress(&self) -> u8 {
        progress(&self.completed, &self.path)
    }

    /// The full record written whenever the path, its progress or the resume changes.
    pub fn record(&self, session_id: Uuid) -> PersistedSession {
        PersistedSession::full(
            session_id,
            self.profile.clone(),
            self.job.clone(),
            self.path.clone(),
            &self.completed,
            self.resume.clone(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Phase {
    ProfileInput,
    Recommendations {
        profile: UserProfile,
        recommendations: Vec<JobRecommendation>,
    },
    SkillGap {
        analysis: Analysis,
    },
    LearningPath {
        track: Track,
    },
    ResumeFeedback {
        feedback: ResumeFeedback,
    },
    InterviewPrep {
        track: Track,
        interview: InterviewSession,
    },
    ResumeGenerator {
        track: Track,
    },
    CoverLetterGenerator {
        track: Track,
        job: LiveJob,
        letter: String,
    },
    DreamCompanyRoadmap {
        profile: UserProfile,
        company_name: String,
        roadmap: DreamCompanyRoadmap,
    },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::ProfileInput => "profile_input",
            Phase::Recommendations { .. } => "recommendations",
            Phase::SkillGap { .. } => "skill_gap",
            Phase::LearningPath { .. } => "learning_path",
            Phase::ResumeFeedback { .. } => "resume_feedback",
            Phase::InterviewPrep { .. } => "interview_prep",
            Phase::ResumeGenerator { .. } => "resume_generator",
            Phase::CoverLetterGenerator { .. } => "cover_letter_generator",
            Phase::DreamCompanyRoadmap { .. } => "dream_company_roadmap",
        }
    }

    pub fn track(&self) -> Option<&Track> {
        match self {
            Phase::LearningPath { track }
            | Phase::InterviewPrep { track, .. }
            | Phase::ResumeGenerator { track }
            | Phase::CoverLetterGenerator { track, .. } => Some(track),
            _ => None,
        }
    }

    pub fn into_track(self) -> Option<Track> {
        match self {
            Phase::LearningPath { track }
            | Phase::InterviewPrep { track, .. }
            | Phase::ResumeGenerator { track }
            | Phase::CoverLetterGenerator { track, .. } => Some(track),
            _ => None,
        }
    }

    /// The intake profile, once the session has moved past intake.
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            Phase::Recommendations { profile, .. } | Phase::DreamCompanyRoadmap { profile, .. } => {
                Some(profile)
            }
            Phase::SkillGap { analysis } => Some(&analysis.profile),
            other => other.track().map(|t| &t.profile),
        }
    }

    /// The fixed predecessor used by Back.
    pub fn back(self) -> Phase {
        match self {
            Phase::ProfileInput
            | Phase::Recommendations { .. }
            | Phase::ResumeFeedback { .. }
            | Phase::DreamCompanyRoadmap { .. } => Phase::ProfileInput,
            Phase::SkillGap { analysis } => Phase::Recommendations {
                profile: analysis.profile,
                recommendations: analysis.recommendations,
            },
            Phase::LearningPath { track } => match track.origin {
                Some(analysis) => Phase::SkillGap {
                    analysis: *analysis,
                },
                None => Phase::ProfileInput,
            },
            Phase::InterviewPrep { track, .. }
            | Phase::ResumeGenerator { track }
            | Phase::CoverLetterGenerator { track, .. } => Phase::LearningPath { track },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchStatus {
    Pending,
    Ready { jobs: Vec<LiveJob> },
    Failed { message: String },
}

/// A live-job search running beside the main workflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSearch {
    pub target: JobRecommendation,
    #[serde(skip)]
    pub sequence: u64,
    pub status: SearchStatus,
}
