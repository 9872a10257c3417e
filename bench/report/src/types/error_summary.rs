use serde::{Deserialize, Serialize};

pub const ERROR_SUMMARY_CAP: usize = 10;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ErrorSummaryEntry {
    pub message: String,
    pub occurrences: usize,
}

/// Deduplicated view over the first [`ERROR_SUMMARY_CAP`] errors of a run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ErrorSummary {
    /// Unique errors in first-seen order.
    pub entries: Vec<ErrorSummaryEntry>,
    pub total: usize,
    /// Errors past the cap, not included in `entries`.
    pub remaining: usize,
}

impl ErrorSummary {
    pub fn from_errors(errors: &[String]) -> Self {
        let mut entries: Vec<ErrorSummaryEntry> = Vec::new();
        for error in errors.iter().take(ERROR_SUMMARY_CAP) {
            match entries.iter_mut().find(|e| &e.message == error) {
                Some(entry) => entry.occurrences += 1,
                None => entries.push(ErrorSummaryEntry {
                    message: error.clone(),
                    occurrences: 1,
                }),
            }
        }

        Self {
            entries,
            total: errors.len(),
            remaining: errors.len().saturating_sub(ERROR_SUMMARY_CAP),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
