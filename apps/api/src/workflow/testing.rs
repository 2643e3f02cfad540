//! Test doubles for driving the workflow without a model behind it.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::gateway::{CareerGateway, GatewayError};
use crate::llm_client::LlmError;
use crate::models::interview::InterviewQuestion;
use crate::models::jobs::LiveJob;
use crate::models::learning::{CompletedSteps, LearningPath};
use crate::models::profile::{JobRecommendation, SkillGap, UserProfile};
use crate::models::resume::{GeneratedResume, ResumeFeedback};
use crate::models::roadmap::DreamCompanyRoadmap;

pub mod fixtures {
    use crate::models::interview::InterviewQuestion;
    use crate::models::jobs::LiveJob;
    use crate::models::learning::{LearningPath, LearningPathStep, Resource};
    use crate::models::profile::{JobRecommendation, SkillGap, UserProfile};
    use crate::models::resume::{
        EducationEntry, ExperienceEntry, GeneratedResume, ResumeFeedback, ResumeSkills,
    };
    use crate::models::roadmap::{
        DreamCompanyRoadmap, Opportunity, SkillPlan, SkillResources, TargetRole,
    };

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn profile() -> UserProfile {
        UserProfile {
            experience: "3 years as a backend developer".into(),
            skills: "Python, SQL, Docker".into(),
            goals: "Move into machine learning engineering".into(),
        }
    }

    pub fn recommendations() -> Vec<JobRecommendation> {
        [
            "ML Engineer",
            "Data Engineer",
            "MLOps Engineer",
            "Data Scientist",
            "Analytics Engineer",
        ]
        .iter()
        .map(|title| JobRecommendation {
            title: title.to_string(),
            description: format!("Work as a {title}"),
            skills: strings(&["Python", "SQL", "Statistics", "Spark", "Kubernetes"]),
        })
        .collect()
    }

    pub fn skill_gap() -> SkillGap {
        SkillGap {
            strengths: strings(&["Python", "SQL"]),
            gaps: strings(&["Statistics", "Spark", "Kubernetes"]),
        }
    }

    /// Three months, generated out of order.
    pub fn learning_path() -> LearningPath {
        let step = |month: u32, title: &str| LearningPathStep {
            month,
            title: title.to_string(),
            description: format!("Focus on {title}"),
            resources: vec![Resource {
                name: format!("{title} course"),
                url: "https://example.com/course".into(),
            }],
        };
        LearningPath::from(vec![
            step(2, "Spark"),
            step(1, "Statistics"),
            step(3, "Kubernetes"),
        ])
    }

    pub fn resume_feedback() -> ResumeFeedback {
        ResumeFeedback {
            impression: "Solid backend experience".into(),
            suggestions: strings(&["Quantify impact"]),
            formatting_feedback: strings(&["Use consistent dates"]),
            rewritten_summary: "Backend engineer moving into ML".into(),
        }
    }

    pub fn interview_questions() -> Vec<InterviewQuestion> {
        [
            "Tell me about a model you shipped.",
            "How do you validate a model?",
            "Describe a data pipeline you built.",
            "How do you handle drift?",
            "Why machine learning?",
        ]
        .iter()
        .map(|q| InterviewQuestion::new(q.to_string()))
        .collect()
    }

    pub fn resume() -> GeneratedResume {
        GeneratedResume {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            phone: "555-0100".into(),
            linkedin: "linkedin.com/in/ada".into(),
            summary: "Backend engineer moving into ML".into(),
            skills: ResumeSkills {
                technical: strings(&["Python", "SQL"]),
                soft: strings(&["Mentoring"]),
            },
            experience: vec![ExperienceEntry {
                role: "Backend Developer".into(),
                company: "Analytical Engines".into(),
                duration: "2021 - Present".into(),
                points: strings(&["Built data APIs"]),
            }],
            education: vec![EducationEntry {
                degree: "BSc Mathematics".into(),
                university: "University of London".into(),
                duration: "2014 - 2018".into(),
            }],
        }
    }

    pub fn live_jobs() -> Vec<LiveJob> {
        vec![
            LiveJob {
                title: "Machine Learning Engineer".into(),
                company: "Acme".into(),
                location: "Remote".into(),
                url: "https://jobs.example.com/1".into(),
            },
            LiveJob {
                title: "ML Platform Engineer".into(),
                company: "Globex".into(),
                location: "Berlin".into(),
                url: "https://jobs.example.com/2".into(),
            },
        ]
    }

    pub fn roadmap(company: &str) -> DreamCompanyRoadmap {
        DreamCompanyRoadmap {
            company_name: company.to_string(),
            company_profile: "Builds developer tools".into(),
            beginner_introduction: "A short tour of the company".into(),
            target_roles: vec![TargetRole {
                title: "ML Engineer".into(),
                reasoning: "Matches your goals".into(),
            }],
            skills_roadmap: vec![SkillPlan {
                skill: "Statistics".into(),
                reasoning: "Core to model evaluation".into(),
                resources: SkillResources {
                    video_courses: vec![],
                    youtube_tutorials: vec![],
                    books: vec![],
                    articles_and_pdfs: vec![],
                },
            }],
            networking_strategy: strings(&["Attend meetups"]),
            opportunities: vec![Opportunity {
                title: "ML Engineer".into(),
                url: "https://jobs.example.com/3".into(),
            }],
            resume_tips: strings(&["Lead with ML projects"]),
        }
    }
}

/// A gateway that answers from fixtures. Operations can be made to fail, or
/// to pause until the test releases them.
pub struct ScriptedGateway {
    calls: Mutex<Vec<&'static str>>,
    failing: Mutex<HashSet<&'static str>>,
    gated: Mutex<HashSet<&'static str>>,
    no_gaps: Mutex<bool>,
    /// Notified when a gated operation is entered.
    pub started: Notify,
    /// Notify once to let a gated operation finish.
    pub release: Notify,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
            gated: Mutex::new(HashSet::new()),
            no_gaps: Mutex::new(false),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn recover(&self, op: &'static str) {
        self.failing.lock().unwrap().remove(op);
    }

    pub fn gate(&self, op: &'static str) {
        self.gated.lock().unwrap().insert(op);
    }

    pub fn without_gaps(&self) {
        *self.no_gaps.lock().unwrap() = true;
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    async fn enter(&self, op: &'static str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(op);
        let gated = self.gated.lock().unwrap().contains(op);
        if gated {
            self.started.notify_one();
            self.release.notified().await;
        }
        let failing = self.failing.lock().unwrap().contains(op);
        if failing {
            return Err(GatewayError::Request(LlmError::Api {
                status: 503,
                message: format!("{op} unavailable"),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl CareerGateway for ScriptedGateway {
    async fn get_job_recommendations(
        &self,
        _profile: &UserProfile,
    ) -> Result<Vec<JobRecommendation>, GatewayError> {
        self.enter("recommendations").await?;
        Ok(fixtures::recommendations())
    }

    async fn get_skill_gap_analysis(
        &self,
        _user_skills: &[String],
        _job: &JobRecommendation,
    ) -> Result<SkillGap, GatewayError> {
        self.enter("skill_gap").await?;
        let mut gap = fixtures::skill_gap();
        if *self.no_gaps.lock().unwrap() {
            gap.gaps.clear();
        }
        Ok(gap)
    }

    async fn get_learning_path(
        &self,
        _target_role: &str,
        _user_skills: &[String],
        _skills_to_learn: &[String],
    ) -> Result<LearningPath, GatewayError> {
        self.enter("learning_path").await?;
        Ok(fixtures::learning_path())
    }

    async fn get_resume_feedback(
        &self,
        _resume_text: &str,
        _target_role: &str,
    ) -> Result<ResumeFeedback, GatewayError> {
        self.enter("resume_feedback").await?;
        Ok(fixtures::resume_feedback())
    }

    async fn get_progress_assessment(
        &self,
        target_role: &str,
        _path: &LearningPath,
        completed: &CompletedSteps,
    ) -> Result<String, GatewayError> {
        self.enter("assessment").await?;
        Ok(format!(
            "{} steps done toward {target_role}. Keep going!",
            completed.to_vec().len()
        ))
    }

    async fn get_interview_questions(
        &self,
        _job_title: &str,
    ) -> Result<Vec<InterviewQuestion>, GatewayError> {
        self.enter("interview_questions").await?;
        Ok(fixtures::interview_questions())
    }

    async fn get_answer_feedback(
        &self,
        _question: &str,
        answer: &str,
        _job_title: &str,
    ) -> Result<String, GatewayError> {
        self.enter("answer_feedback").await?;
        Ok(format!("Good answer: {answer}"))
    }

    async fn generate_resume(
        &self,
        _profile: &UserProfile,
        _job: &JobRecommendation,
    ) -> Result<GeneratedResume, GatewayError> {
        self.enter("resume").await?;
        Ok(fixtures::resume())
    }

    async fn find_live_jobs(
        &self,
        _job_title: &str,
        _user_goals: &str,
    ) -> Result<Vec<LiveJob>, GatewayError> {
        self.enter("live_jobs").await?;
        Ok(fixtures::live_jobs())
    }

    async fn generate_cover_letter(
        &self,
        _profile: &UserProfile,
        resume: &GeneratedResume,
        job: &LiveJob,
    ) -> Result<String, GatewayError> {
        self.enter("cover_letter").await?;
        Ok(format!(
            "Dear {} hiring team,\n\nSincerely,\n{}",
            job.company, resume.name
        ))
    }

    async fn get_dream_company_roadmap(
        &self,
        _profile: &UserProfile,
        company_name: &str,
    ) -> Result<DreamCompanyRoadmap, GatewayError> {
        self.enter("roadmap").await?;
        Ok(fixtures::roadmap(company_name))
    }
}
