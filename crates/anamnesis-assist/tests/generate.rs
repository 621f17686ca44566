use std::sync::Mutex;

use anamnesis_assist::error::{AssistError, AssistFailure, AssistTask};
use anamnesis_assist::generate::{
    generate_differential_diagnosis, generate_history_summary, generate_hop_questions,
};
use anamnesis_assist::model::{Completion, TextModel, TokenUsage};
use anamnesis_core::models::complaint::ChiefComplaint;
use anamnesis_core::models::patient::PatientHistory;
use anamnesis_scoring::duration::Duration;

/// Replies with a canned result and records every call.
struct ScriptedModel {
    reply: Result<String, String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedModel {
    fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TextModel for ScriptedModel {
    fn model_id(&self) -> &str {
        "test-model"
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Completion, AssistError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));
        match &self.reply {
            Ok(text) => Ok(Completion {
                text: text.clone(),
                usage: TokenUsage {
                    input: 120,
                    output: 40,
                },
            }),
            Err(message) => Err(AssistError::Invocation(message.clone())),
        }
    }
}

fn complaint(text: &str, duration: Duration) -> ChiefComplaint {
    ChiefComplaint {
        complaint: text.to_string(),
        duration,
        ..ChiefComplaint::blank()
    }
}

#[tokio::test]
async fn questions_are_parsed_from_json_reply() {
    let model = ScriptedModel::replying(
        r#"{"questions": ["Where exactly is the pain?", "Does it radiate?"]}"#,
    );
    let complaints = vec![complaint("Chest pain", Duration::new(0, 0, 3))];

    let generation = generate_hop_questions(&model, &complaints).await.unwrap();
    assert_eq!(
        generation.output,
        vec!["Where exactly is the pain?", "Does it radiate?"]
    );
    assert_eq!(generation.task, AssistTask::HopQuestions);
    assert_eq!(generation.model_id, "test-model");
    assert_eq!(generation.usage.total(), 160);

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.contains("Chest pain for 3 days"));
}

#[tokio::test]
async fn blank_complaints_skip_the_model() {
    let model = ScriptedModel::replying("unused");
    let complaints = vec![ChiefComplaint::blank(), complaint("   ", Duration::new(1, 0, 0))];

    let questions = generate_hop_questions(&model, &complaints).await.unwrap();
    assert!(questions.output.is_empty());
    assert_eq!(questions.usage, TokenUsage::default());

    let diagnoses = generate_differential_diagnosis(&model, &complaints)
        .await
        .unwrap();
    assert!(diagnoses.output.is_empty());

    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn diagnoses_accept_fenced_json() {
    let model = ScriptedModel::replying(
        "```json\n{\"diagnoses\": [{\"diagnosis\": \"GERD\", \"rationale\": \"Burning after meals\"}]}\n```",
    );
    let complaints = vec![
        complaint("Heartburn", Duration::new(0, 2, 0)),
        complaint("Cough", Duration::default()),
    ];

    let generation = generate_differential_diagnosis(&model, &complaints)
        .await
        .unwrap();
    assert_eq!(generation.output.len(), 1);
    assert_eq!(generation.output[0].diagnosis, "GERD");

    let calls = model.calls();
    assert!(calls[0].1.contains("Heartburn (for 2 months), Cough"));
}

#[tokio::test]
async fn summary_is_returned_as_trimmed_text() {
    let model = ScriptedModel::replying("\n## Patient Profile\nA 42-year-old man...\n");
    let history = PatientHistory::default();

    let generation = generate_history_summary(&model, &history).await.unwrap();
    assert_eq!(generation.output, "## Patient Profile\nA 42-year-old man...");

    let calls = model.calls();
    assert!(calls[0].1.contains("No chief complaints reported."));
}

#[tokio::test]
async fn backend_failure_surfaces_a_generic_message() {
    let model = ScriptedModel::failing("AccessDeniedException: secret detail");
    let history = PatientHistory::default();

    let failure = generate_history_summary(&model, &history).await.unwrap_err();
    assert_eq!(
        failure,
        AssistFailure {
            task: AssistTask::HistorySummary
        }
    );
    let message = failure.to_string();
    assert!(message.starts_with("Failed to generate summary."));
    assert!(!message.contains("secret detail"));
}

#[tokio::test]
async fn malformed_reply_is_a_failure_not_a_panic() {
    let model = ScriptedModel::replying("Sorry, I cannot help with that.");
    let complaints = vec![complaint("Fever", Duration::default())];

    let failure = generate_differential_diagnosis(&model, &complaints)
        .await
        .unwrap_err();
    assert_eq!(failure.task, AssistTask::DifferentialDiagnosis);
    assert!(failure.to_string().starts_with("Failed to generate differential diagnosis."));
    assert_eq!(model.calls().len(), 1);
}

#[tokio::test]
async fn empty_summary_reply_is_a_failure() {
    let model = ScriptedModel::replying("   ");
    let failure = generate_history_summary(&model, &PatientHistory::default())
        .await
        .unwrap_err();
    assert_eq!(failure.task, AssistTask::HistorySummary);
}
