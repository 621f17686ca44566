//! The three assistance operations.
//!
//! Each makes at most one model call. Any failure (backend, transport,
//! malformed reply) is logged in full and surfaced as an [`AssistFailure`]
//! carrying only a generic message. There is no retry.

use tracing::info;
use uuid::Uuid;

use anamnesis_core::models::complaint::ChiefComplaint;
use anamnesis_core::models::diagnosis::DifferentialDiagnosis;
use anamnesis_core::models::patient::PatientHistory;

use crate::error::{AssistError, AssistFailure, AssistTask};
use crate::model::{TextModel, TokenUsage};
use crate::parse;
use crate::prompts;

/// Output of one assistance operation.
///
/// When the record had nothing to send (no non-blank complaints), no model
/// call is made: `output` is empty and `usage` is zero.
#[derive(Debug, Clone)]
pub struct Generation<T> {
    pub id: Uuid,
    pub task: AssistTask,
    pub model_id: String,
    pub usage: TokenUsage,
    pub created_at: jiff::Timestamp,
    pub output: T,
}

impl<T> Generation<T> {
    fn new(task: AssistTask, model_id: &str, usage: TokenUsage, output: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            task,
            model_id: model_id.to_string(),
            usage,
            created_at: jiff::Timestamp::now(),
            output,
        }
    }
}

/// Follow-up questions for the History of Presenting Complaint.
pub async fn generate_hop_questions<M: TextModel>(
    model: &M,
    complaints: &[ChiefComplaint],
) -> Result<Generation<Vec<String>>, AssistFailure> {
    let task = AssistTask::HopQuestions;
    let complaint_text = prompts::complaints_for_questions(complaints);
    if complaint_text.is_empty() {
        info!(%task, "no complaints entered, skipping model call");
        return Ok(Generation::new(task, model.model_id(), TokenUsage::default(), Vec::new()));
    }

    run(
        model,
        task,
        prompts::HOP_QUESTIONS_SYSTEM_PROMPT,
        &prompts::hop_questions_message(&complaint_text),
        parse::parse_questions,
    )
    .await
}

/// Narrative summary of the whole record, returned as plain text.
pub async fn generate_history_summary<M: TextModel>(
    model: &M,
    history: &PatientHistory,
) -> Result<Generation<String>, AssistFailure> {
    run(
        model,
        AssistTask::HistorySummary,
        prompts::SUMMARY_SYSTEM_PROMPT,
        &prompts::summary_message(history),
        parse::parse_summary,
    )
    .await
}

/// Differential diagnoses with a short rationale each.
pub async fn generate_differential_diagnosis<M: TextModel>(
    model: &M,
    complaints: &[ChiefComplaint],
) -> Result<Generation<Vec<DifferentialDiagnosis>>, AssistFailure> {
    let task = AssistTask::DifferentialDiagnosis;
    let complaint_text = prompts::complaints_for_diagnosis(complaints);
    if complaint_text.is_empty() {
        info!(%task, "no complaints entered, skipping model call");
        return Ok(Generation::new(task, model.model_id(), TokenUsage::default(), Vec::new()));
    }

    run(
        model,
        task,
        prompts::DIFFERENTIAL_SYSTEM_PROMPT,
        &prompts::differential_message(&complaint_text),
        parse::parse_diagnoses,
    )
    .await
}

async fn run<M, T>(
    model: &M,
    task: AssistTask,
    system_prompt: &str,
    user_message: &str,
    parse_reply: fn(&str) -> Result<T, AssistError>,
) -> Result<Generation<T>, AssistFailure>
where
    M: TextModel,
{
    let model_id = model.model_id();
    info!(%task, model_id, "starting generation");

    let completion = model
        .complete(system_prompt, user_message)
        .await
        .map_err(|e| AssistFailure::from_error(task, e))?;

    let output = parse_reply(&completion.text).map_err(|e| AssistFailure::from_error(task, e))?;

    info!(
        %task,
        model_id,
        input_tokens = completion.usage.input,
        output_tokens = completion.usage.output,
        "generation complete"
    );

    Ok(Generation::new(task, model_id, completion.usage, output))
}
