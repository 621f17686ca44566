use std::fmt;

use thiserror::Error;

/// Detailed failure from the model backend or from response handling.
///
/// These never reach the clinician; they are logged and replaced by an
/// [`AssistFailure`].
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),
}

/// The three assistance operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistTask {
    HopQuestions,
    HistorySummary,
    DifferentialDiagnosis,
}

impl AssistTask {
    pub fn failure_message(self) -> &'static str {
        match self {
            AssistTask::HopQuestions => {
                "Failed to generate questions. Please check your model access and try again."
            }
            AssistTask::HistorySummary => {
                "Failed to generate summary. Please check your model access and try again."
            }
            AssistTask::DifferentialDiagnosis => {
                "Failed to generate differential diagnosis. Please check your model access and try again."
            }
        }
    }
}

impl fmt::Display for AssistTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssistTask::HopQuestions => "hop_questions",
            AssistTask::HistorySummary => "history_summary",
            AssistTask::DifferentialDiagnosis => "differential_diagnosis",
        };
        f.write_str(name)
    }
}

/// User-facing failure: one generic message per task, no detail.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .task.failure_message())]
pub struct AssistFailure {
    pub task: AssistTask,
}

impl AssistFailure {
    /// Log the underlying error and drop it.
    pub(crate) fn from_error(task: AssistTask, error: AssistError) -> Self {
        tracing::error!(%task, error = %error, "assistance request failed");
        Self { task }
    }
}
