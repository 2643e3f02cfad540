use serde::{Deserialize, Serialize};

use crate::models::learning::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRole {
    pub title: String,
    pub reasoning: String,
}

/// Study material for one skill, grouped by medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResources {
    pub video_courses: Vec<Resource>,
    pub youtube_tutorials: Vec<Resource>,
    pub books: Vec<Resource>,
    pub articles_and_pdfs: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPlan {
    pub skill: String,
    pub reasoning: String,
    pub resources: SkillResources,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub title: String,
    pub url: String,
}

/// Plan for landing a job at one named company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamCompanyRoadmap {
    pub company_name: String,
    pub company_profile: String,
    pub beginner_introduction: String,
    pub target_roles: Vec<TargetRole>,
    pub skills_roadmap: Vec<SkillPlan>,
    pub networking_strategy: Vec<String>,
    pub opportunities: Vec<Opportunity>,
    pub resume_tips: Vec<String>,
}
