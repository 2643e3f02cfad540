//! In-flight bookkeeping: at most one AI call per slot, and tickets that let a
//! completion prove it still belongs to the current session.

use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;

/// Independent lanes of AI work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Phase transitions and the progress assessment.
    Main,
    /// The live-job search, which runs beside the main workflow.
    JobSearch,
    /// Interview questions and answer feedback.
    Interview,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Main => "main",
            Slot::JobSearch => "job search",
            Slot::Interview => "interview",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Default, Clone)]
pub struct InFlight {
    main: bool,
    job_search: bool,
    interview: bool,
}

impl InFlight {
    fn flag(&mut self, slot: Slot) -> &mut bool {
        match slot {
            Slot::Main => &mut self.main,
            Slot::JobSearch => &mut self.job_search,
            Slot::Interview => &mut self.interview,
        }
    }

    pub fn is_busy(&self, slot: Slot) -> bool {
        match slot {
            Slot::Main => self.main,
            Slot::JobSearch => self.job_search,
            Slot::Interview => self.interview,
        }
    }

    /// Marks `slot` busy, or fails if it already is.
    pub fn acquire(&mut self, slot: Slot) -> Result<(), AppError> {
        let flag = self.flag(slot);
        if *flag {
            return Err(AppError::Busy(slot));
        }
        *flag = true;
        Ok(())
    }

    pub fn release(&mut self, slot: Slot) {
        *self.flag(slot) = false;
    }

    pub fn busy(&self) -> Vec<Slot> {
        [Slot::Main, Slot::JobSearch, Slot::Interview]
            .into_iter()
            .filter(|s| self.is_busy(*s))
            .collect()
    }
}

/// Issued when a call is dispatched; checked when its result comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub slot: Slot,
    pub session_id: Uuid,
    /// Phase epoch at dispatch (main and interview slots).
    pub epoch: u64,
    /// Search sequence number at dispatch (job-search slot).
    pub sequence: u64,
}
