//! Structured response parsing.
//!
//! Models asked for JSON sometimes wrap it in a Markdown code fence or add a
//! sentence around it. We cut out the outermost `{ ... }` before handing the
//! text to serde.

use serde::Deserialize;

use anamnesis_core::models::diagnosis::DifferentialDiagnosis;

use crate::error::AssistError;

#[derive(Debug, Deserialize)]
struct QuestionsReply {
    #[serde(default)]
    questions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct DiagnosesReply {
    diagnoses: Vec<DifferentialDiagnosis>,
}

/// Slice of `text` from the first `{` to the last `}`. Falls back to the
/// trimmed text when no object delimiters are present.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// `{ "questions": [string] }`. A missing or null list is an empty list.
pub fn parse_questions(text: &str) -> Result<Vec<String>, AssistError> {
    let reply: QuestionsReply = serde_json::from_str(extract_json(text)).map_err(|e| {
        AssistError::SchemaViolation(format!("failed to parse questions: {e}. Response: {text}"))
    })?;
    Ok(reply
        .questions
        .unwrap_or_default()
        .into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .collect())
}

/// `{ "diagnoses": [{ "diagnosis": string, "rationale": string }] }`. Both
/// the list and each entry's fields are required.
pub fn parse_diagnoses(text: &str) -> Result<Vec<DifferentialDiagnosis>, AssistError> {
    let reply: DiagnosesReply = serde_json::from_str(extract_json(text)).map_err(|e| {
        AssistError::SchemaViolation(format!("failed to parse diagnoses: {e}. Response: {text}"))
    })?;
    Ok(reply.diagnoses)
}

/// Plain-text replies only need surrounding whitespace removed; an empty
/// reply is treated as a parse failure.
pub fn parse_summary(text: &str) -> Result<String, AssistError> {
    let summary = text.trim();
    if summary.is_empty() {
        return Err(AssistError::ResponseParse("empty summary".to_string()));
    }
    Ok(summary.to_string())
}
