use serde::{Deserialize, Serialize};

/// A posting found through a web-search grounded query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
}
