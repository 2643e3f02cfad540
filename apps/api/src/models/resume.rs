use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// Critique of a resume the user pasted or uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFeedback {
    pub impression: String,
    pub suggestions: Vec<String>,
    pub formatting_feedback: Vec<String>,
    pub rewritten_summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub duration: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub duration: String,
}

/// A full resume generated for the active target job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub summary: String,
    pub skills: ResumeSkills,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl GeneratedResume {
    /// Renders the resume as the plain-text document offered for download.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", self.name);
        let _ = writeln!(out, "{} | {} | {}\n", self.email, self.phone, self.linkedin);
        let _ = writeln!(out, "--- PROFESSIONAL SUMMARY ---\n{}\n", self.summary);
        let _ = writeln!(out, "--- SKILLS ---");
        let _ = writeln!(out, "Technical: {}", self.skills.technical.join(", "));
        let _ = writeln!(out, "Soft: {}\n", self.skills.soft.join(", "));
        let _ = writeln!(out, "--- WORK EXPERIENCE ---\n");
        for exp in &self.experience {
            let _ = writeln!(
                out,
                "{} | {}\n{}",
                exp.role.to_uppercase(),
                exp.company,
                exp.duration
            );
            for point in &exp.points {
                let _ = writeln!(out, "  • {point}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "--- EDUCATION ---\n");
        for edu in &self.education {
            let _ = writeln!(out, "{}, {} | {}", edu.degree, edu.university, edu.duration);
        }
        out
    }

    /// `<name>_resume.txt`, lowercased, anything outside `[a-z0-9]` replaced by `_`.
    pub fn download_file_name(&self) -> String {
        let safe: String = self
            .name
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '_' })
            .collect();
        format!("{safe}_resume.txt")
    }
}
