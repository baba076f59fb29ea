//! Per-step outcomes collected during a run and printed at the end.

use std::fmt;

use sst_client::provision::{
    ConfigOutcome, IndexOutcome, MacroOutcome, RenameOutcome, SavedSearchOutcome,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Created,
    AlreadyPresent,
    Updated,
    Unchanged,
    BackedUp,
    Skipped,
    /// Completed, but the operator should look at something.
    Attention(String),
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::AlreadyPresent => f.write_str("already present"),
            Self::Updated => f.write_str("updated"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::BackedUp => f.write_str("backed up"),
            Self::Skipped => f.write_str("skipped"),
            Self::Attention(note) => write!(f, "attention: {note}"),
        }
    }
}

impl From<IndexOutcome> for StepStatus {
    fn from(outcome: IndexOutcome) -> Self {
        match outcome {
            IndexOutcome::Created => Self::Created,
            IndexOutcome::AlreadyExists => Self::AlreadyPresent,
            IndexOutcome::KindMismatch {
                existing,
                requested,
            } => Self::Attention(format!(
                "exists with type {existing}, {requested} was requested"
            )),
        }
    }
}

impl From<MacroOutcome> for StepStatus {
    fn from(outcome: MacroOutcome) -> Self {
        match outcome {
            MacroOutcome::Created => Self::Created,
            MacroOutcome::Updated => Self::Updated,
            MacroOutcome::Unchanged => Self::Unchanged,
        }
    }
}

impl From<RenameOutcome> for StepStatus {
    fn from(outcome: RenameOutcome) -> Self {
        match outcome {
            RenameOutcome::Copied => Self::BackedUp,
            RenameOutcome::TargetExists => Self::AlreadyPresent,
        }
    }
}

impl From<&SavedSearchOutcome> for StepStatus {
    fn from(outcome: &SavedSearchOutcome) -> Self {
        match outcome {
            SavedSearchOutcome::Updated(_) => Self::Updated,
            SavedSearchOutcome::Unchanged(_) => Self::Unchanged,
        }
    }
}

impl From<&ConfigOutcome> for StepStatus {
    fn from(outcome: &ConfigOutcome) -> Self {
        if outcome.stanza_created {
            Self::Created
        } else if outcome.is_noop() {
            Self::Unchanged
        } else {
            Self::Updated
        }
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    steps: Vec<(String, StepStatus)>,
}

impl RunSummary {
    pub fn record(&mut self, step: impl Into<String>, status: impl Into<StepStatus>) {
        self.steps.push((step.into(), status.into()));
    }

    pub fn steps(&self) -> &[(String, StepStatus)] {
        &self.steps
    }

    /// Status of the first step with this label.
    pub fn status_of(&self, step: &str) -> Option<&StepStatus> {
        self.steps.iter().find(|(s, _)| s == step).map(|(_, st)| st)
    }

    pub fn needs_attention(&self) -> bool {
        self.steps
            .iter()
            .any(|(_, status)| matches!(status, StepStatus::Attention(_)))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.steps.iter().map(|(s, _)| s.len()).max().unwrap_or(0);
        writeln!(f, "Summary:")?;
        for (step, status) in &self.steps {
            writeln!(f, "  {step:<width$}  {status}")?;
        }
        Ok(())
    }
}
