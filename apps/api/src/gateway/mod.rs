//! AI Gateway: one async operation per coaching call.
//!
//! Each operation builds its prompt, declares the response shape when output is
//! structured, sends it through `LlmClient`, and validates the decoded value.
//! The gateway never touches session state; the workflow applies results.
//!
//! The workflow holds an `Arc<dyn CareerGateway>`, so tests can drive it with a
//! scripted gateway.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::prompts::{COACH_PERSONA, JSON_ONLY_INSTRUCTION, PLAIN_TEXT_INSTRUCTION};
use crate::llm_client::schema::Schema;
use crate::llm_client::{LlmClient, LlmError, LlmRequest, FLASH_MODEL, PRO_MODEL};
use crate::models::interview::InterviewQuestion;
use crate::models::jobs::LiveJob;
use crate::models::learning::{CompletedSteps, LearningPath};
use crate::models::profile::{JobRecommendation, SkillGap, UserProfile};
use crate::models::resume::{GeneratedResume, ResumeFeedback};
use crate::models::roadmap::DreamCompanyRoadmap;

pub mod prompts;
pub mod schemas;

use prompts::*;

/// Number of recommendations, skills per recommendation, and interview questions requested.
const REQUESTED_COUNT: usize = 5;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Request(LlmError),

    #[error("response rejected: {0}")]
    Decode(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to serialize prompt context: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<LlmError> for GatewayError {
    fn from(e: LlmError) -> Self {
        if e.is_decode() {
            GatewayError::Decode(e.to_string())
        } else {
            GatewayError::Request(e)
        }
    }
}

/// Every call the coach makes to the hosted model.
#[async_trait]
pub trait CareerGateway: Send + Sync {
    async fn get_job_recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<JobRecommendation>, GatewayError>;

    async fn get_skill_gap_analysis(
        &self,
        user_skills: &[String],
        job: &JobRecommendation,
    ) -> Result<SkillGap, GatewayError>;

    async fn get_learning_path(
        &self,
        target_role: &str,
        user_skills: &[String],
        skills_to_learn: &[String],
    ) -> Result<LearningPath, GatewayError>;

    async fn get_resume_feedback(
        &self,
        resume_text: &str,
        target_role: &str,
    ) -> Result<ResumeFeedback, GatewayError>;

    async fn get_progress_assessment(
        &self,
        target_role: &str,
        path: &LearningPath,
        completed: &CompletedSteps,
    ) -> Result<String, GatewayError>;

    async fn get_interview_questions(
        &self,
        job_title: &str,
    ) -> Result<Vec<InterviewQuestion>, GatewayError>;

    async fn get_answer_feedback(
        &self,
        question: &str,
        answer: &str,
        job_title: &str,
    ) -> Result<String, GatewayError>;

    async fn generate_resume(
        &self,
        profile: &UserProfile,
        job: &JobRecommendation,
    ) -> Result<GeneratedResume, GatewayError>;

    /// Grounded search, then schema-constrained extraction of the search text.
    async fn find_live_jobs(
        &self,
        job_title: &str,
        user_goals: &str,
    ) -> Result<Vec<LiveJob>, GatewayError>;

    async fn generate_cover_letter(
        &self,
        profile: &UserProfile,
        resume: &GeneratedResume,
        job: &LiveJob,
    ) -> Result<String, GatewayError>;

    async fn get_dream_company_roadmap(
        &self,
        profile: &UserProfile,
        company_name: &str,
    ) -> Result<DreamCompanyRoadmap, GatewayError>;
}

fn require(value: &str, field: &str) -> Result<(), GatewayError> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn structured(template: &str) -> String {
    format!("{COACH_PERSONA} {template}\n\n{JSON_ONLY_INSTRUCTION}")
}

fn prose(template: &str) -> String {
    format!("{COACH_PERSONA} {template}\n\n{PLAIN_TEXT_INSTRUCTION}")
}

fn fill_profile(template: &str, profile: &UserProfile) -> String {
    template
        .replace("{experience}", &profile.experience)
        .replace("{skills}", &profile.skills)
        .replace("{goals}", &profile.goals)
}

/// Gateway backed by the Gemini API.
#[derive(Clone)]
pub struct GeminiGateway {
    llm: LlmClient,
}

impl GeminiGateway {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn structured_call<T: serde::de::DeserializeOwned>(
        &self,
        model: &str,
        prompt: &str,
        schema: Schema,
    ) -> Result<T, GatewayError> {
        let request = LlmRequest::new(model, prompt).with_schema(schema);
        Ok(self.llm.call_json(&request).await?)
    }

    async fn prose_call(&self, model: &str, prompt: &str) -> Result<String, GatewayError> {
        let text = self.llm.call(&LlmRequest::new(model, prompt)).await?;
        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl CareerGateway for GeminiGateway {
    async fn get_job_recommendations(
        &self,
        profile: &UserProfile,
    ) -> Result<Vec<JobRecommendation>, GatewayError> {
        if !profile.is_complete() {
            return Err(GatewayError::InvalidInput(
                "profile fields cannot be empty".to_string(),
            ));
        }

        let prompt = structured(&fill_profile(RECOMMENDATIONS_PROMPT_TEMPLATE, profile));
        let recommendations: Vec<JobRecommendation> = self
            .structured_call(PRO_MODEL, &prompt, schemas::job_recommendations())
            .await?;

        if let Some(bad) = recommendations.iter().position(|r| r.title.trim().is_empty()) {
            return Err(GatewayError::Decode(format!(
                "recommendation {bad} has an empty title"
            )));
        }
        if recommendations.len() != REQUESTED_COUNT {
            warn!(
                "Requested {REQUESTED_COUNT} recommendations, model returned {}",
                recommendations.len()
            );
        }
        for rec in recommendations.iter().filter(|r| r.skills.len() != REQUESTED_COUNT) {
            warn!(
                "Recommendation {:?} lists {} skills (requested {REQUESTED_COUNT})",
                rec.title,
                rec.skills.len()
            );
        }

        Ok(recommendations)
    }

    async fn get_skill_gap_analysis(
        &self,
        user_skills: &[String],
        job: &JobRecommendation,
    ) -> Result<SkillGap, GatewayError> {
        require(&job.title, "job title")?;

        let prompt = structured(
            &SKILL_GAP_PROMPT_TEMPLATE
                .replace("{user_skills}", &user_skills.join(", "))
                .replace("{job_title}", &job.title)
                .replace("{job_skills}", &job.skills.join(", ")),
        );
        self.structured_call(FLASH_MODEL, &prompt, schemas::skill_gap())
            .await
    }

    async fn get_learning_path(
        &self,
        target_role: &str,
        user_skills: &[String],
        skills_to_learn: &[String],
    ) -> Result<LearningPath, GatewayError> {
        require(target_role, "target role")?;
        if skills_to_learn.is_empty() {
            return Err(GatewayError::InvalidInput(
                "a learning path needs at least one skill to learn".to_string(),
            ));
        }

        let prompt = structured(
            &LEARNING_PATH_PROMPT_TEMPLATE
                .replace("{role}", target_role)
                .replace("{user_skills}", &user_skills.join(", "))
                .replace("{skills_to_learn}", &skills_to_learn.join(", ")),
        );
        let path: LearningPath = self
            .structured_call(PRO_MODEL, &prompt, schemas::learning_path())
            .await?;

        if let Some(month) = path.invalid_month() {
            return Err(GatewayError::Decode(format!(
                "learning path month {month} is not positive and unique"
            )));
        }
        Ok(path)
    }

    async fn get_resume_feedback(
        &self,
        resume_text: &str,
        target_role: &str,
    ) -> Result<ResumeFeedback, GatewayError> {
        require(resume_text, "resume text")?;
        require(target_role, "target role")?;

        let prompt = structured(
            &RESUME_FEEDBACK_PROMPT_TEMPLATE
                .replace("{role}", target_role)
                .replace("{resume_text}", resume_text),
        );
        self.structured_call(PRO_MODEL, &prompt, schemas::resume_feedback())
            .await
    }

    async fn get_progress_assessment(
        &self,
        target_role: &str,
        path: &LearningPath,
        completed: &CompletedSteps,
    ) -> Result<String, GatewayError> {
        require(target_role, "target role")?;

        let (done, pending) = path.partition(completed);
        let prompt = prose(
            &ASSESSMENT_PROMPT_TEMPLATE
                .replace("{role}", target_role)
                .replace("{full_plan}", &serde_json::to_string_pretty(path)?)
                .replace("{completed_steps}", &serde_json::to_string_pretty(&done)?)
                .replace("{pending_steps}", &serde_json::to_string_pretty(&pending)?),
        );
        self.prose_call(FLASH_MODEL, &prompt).await
    }

    async fn get_interview_questions(
        &self,
        job_title: &str,
    ) -> Result<Vec<InterviewQuestion>, GatewayError> {
        require(job_title, "job title")?;

        let prompt = structured(&INTERVIEW_QUESTIONS_PROMPT_TEMPLATE.replace("{job_title}", job_title));
        let questions: Vec<String> = self
            .structured_call(PRO_MODEL, &prompt, schemas::interview_questions())
            .await?;

        if questions.iter().any(|q| q.trim().is_empty()) {
            return Err(GatewayError::Decode(
                "interview questions must not be blank".to_string(),
            ));
        }
        if questions.len() != REQUESTED_COUNT {
            warn!(
                "Requested {REQUESTED_COUNT} interview questions, model returned {}",
                questions.len()
            );
        }
        Ok(questions.into_iter().map(InterviewQuestion::new).collect())
    }

    async fn get_answer_feedback(
        &self,
        question: &str,
        answer: &str,
        job_title: &str,
    ) -> Result<String, GatewayError> {
        require(question, "question")?;
        require(answer, "answer")?;

        let prompt = prose(
            &ANSWER_FEEDBACK_PROMPT_TEMPLATE
                .replace("{job_title}", job_title)
                .replace("{question}", question)
                .replace("{answer}", answer),
        );
        self.prose_call(FLASH_MODEL, &prompt).await
    }

    async fn generate_resume(
        &self,
        profile: &UserProfile,
        job: &JobRecommendation,
    ) -> Result<GeneratedResume, GatewayError> {
        require(&job.title, "job title")?;

        let prompt = structured(
            &fill_profile(RESUME_PROMPT_TEMPLATE, profile)
                .replace("{job_title}", &job.title)
                .replace("{job_description}", &job.description)
                .replace("{job_skills}", &job.skills.join(", ")),
        );
        self.structured_call(PRO_MODEL, &prompt, schemas::generated_resume())
            .await
    }

    async fn find_live_jobs(
        &self,
        job_title: &str,
        user_goals: &str,
    ) -> Result<Vec<LiveJob>, GatewayError> {
        require(job_title, "job title")?;

        let search_prompt = LIVE_JOBS_SEARCH_PROMPT_TEMPLATE
            .replace("{job_title}", job_title)
            .replace("{goals}", user_goals);
        let search_text = self
            .llm
            .call(&LlmRequest::new(PRO_MODEL, &search_prompt).grounded())
            .await?;

        let extraction_prompt = structured(
            &LIVE_JOBS_EXTRACTION_PROMPT_TEMPLATE.replace("{search_text}", &search_text),
        );
        let jobs: Vec<LiveJob> = self
            .structured_call(FLASH_MODEL, &extraction_prompt, schemas::live_jobs())
            .await?;

        info!("Extracted {} live postings for {:?}", jobs.len(), job_title);
        Ok(jobs)
    }

    async fn generate_cover_letter(
        &self,
        profile: &UserProfile,
        resume: &GeneratedResume,
        job: &LiveJob,
    ) -> Result<String, GatewayError> {
        require(&job.title, "job title")?;
        require(&job.company, "company")?;

        let prompt = prose(
            &fill_profile(COVER_LETTER_PROMPT_TEMPLATE, profile)
                .replace("{resume_name}", &resume.name)
                .replace("{resume_summary}", &resume.summary)
                .replace("{job_title}", &job.title)
                .replace("{job_company}", &job.company)
                .replace("{job_location}", &job.location),
        );
        self.prose_call(PRO_MODEL, &prompt).await
    }

    async fn get_dream_company_roadmap(
        &self,
        profile: &UserProfile,
        company_name: &str,
    ) -> Result<DreamCompanyRoadmap, GatewayError> {
        require(company_name, "company name")?;

        let prompt = structured(
            &fill_profile(ROADMAP_PROMPT_TEMPLATE, profile).replace("{company}", company_name.trim()),
        );
        self.structured_call(PRO_MODEL, &prompt, schemas::dream_company_roadmap())
            .await
    }
}
