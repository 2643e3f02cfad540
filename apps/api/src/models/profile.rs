use serde::{Deserialize, Serialize};

/// What the user tells us at intake. Replaced wholesale on restart, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub experience: String,
    /// Comma-separated, order-preserving.
    pub skills: String,
    pub goals: String,
}

impl UserProfile {
    /// True when every field carries non-whitespace text.
    pub fn is_complete(&self) -> bool {
        !self.experience.trim().is_empty()
            && !self.skills.trim().is_empty()
            && !self.goals.trim().is_empty()
    }

    /// Splits `skills` on commas, keeping the user's order and dropping blanks.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
}

/// Partition of a target job's skills against the user's own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGap {
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
}

impl SkillGap {
    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }
}
