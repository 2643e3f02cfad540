use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewQuestion {
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
}

impl InterviewQuestion {
    pub fn new(question: String) -> Self {
        Self {
            question,
            answer: None,
            feedback: None,
        }
    }
}

/// Practice state for one visit to the interview screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterviewSession {
    pub questions: Vec<InterviewQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
