use serde::Serialize;
use tera::{Context, Tera};

use anamnesis_core::models::diagnosis::DifferentialDiagnosis;
use anamnesis_core::models::patient::PatientHistory;

use crate::error::ExportError;

/// Built-in report layout, in the Markdown subset [`crate::docx`] understands.
pub const REPORT_TEMPLATE: &str = r#"# Patient History
Generated on {{ generated_on }}

## Patient Profile
{% for row in demographics -%}
- **{{ row.label }}:** {{ row.value }}
{% endfor %}
## Chief Complaints
{% if complaints | length == 0 -%}
No chief complaints reported.
{% else -%}
{% for c in complaints -%}
### {{ c.complaint }}{% if c.duration %} ({{ c.duration }}){% endif %}
{% for row in c.details -%}
- **{{ row.label }}:** {{ row.value }}
{% endfor %}
{% endfor -%}
{% endif %}
## Past Medical & Surgical History
{% if past_history | length == 0 -%}
No significant past history reported.
{% else -%}
{% for item in past_history -%}
- {{ item }}
{% endfor -%}
{% endif %}
## Personal History
{% for row in personal_history -%}
- **{{ row.label }}:** {{ row.value }}
{% endfor %}
## Family History
{% if family_history | length == 0 -%}
No significant family history reported.
{% else -%}
{% for item in family_history -%}
- {{ item }}
{% endfor -%}
{% endif %}
{%- if summary %}
---
## History Summary
{{ summary }}
{% endif %}
{%- if diagnoses | length > 0 %}
## Differential Diagnosis
{% for d in diagnoses -%}
- **{{ d.diagnosis }}:** {{ d.rationale }}
{% endfor -%}
{% endif %}
{%- if questions | length > 0 %}
## Suggested HOP Questions
{% for q in questions -%}
{{ loop.index }}. {{ q }}
{% endfor -%}
{% endif %}
"#;

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplaintSection {
    pub complaint: String,
    pub duration: String,
    pub details: Vec<Row>,
}

/// Everything a report template can see.
///
/// The display rows are prepared here so templates stay free of labelling
/// logic; the raw record is exposed as `history` for custom templates.
#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub history: PatientHistory,
    pub generated_on: jiff::civil::Date,
    pub demographics: Vec<Row>,
    pub complaints: Vec<ComplaintSection>,
    pub past_history: Vec<String>,
    pub personal_history: Vec<Row>,
    pub family_history: Vec<String>,
    pub summary: Option<String>,
    pub diagnoses: Vec<DifferentialDiagnosis>,
    pub questions: Vec<String>,
}

impl ReportContext {
    pub fn new(history: &PatientHistory, generated_on: jiff::civil::Date) -> Self {
        Self {
            demographics: demographic_rows(history),
            complaints: complaint_sections(history),
            past_history: history.past_history.conditions(),
            personal_history: personal_rows(history),
            family_history: history.family_history.conditions(),
            history: history.clone(),
            generated_on,
            summary: None,
            diagnoses: Vec::new(),
            questions: Vec::new(),
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        let summary = summary.into();
        self.summary = (!summary.trim().is_empty()).then_some(summary);
        self
    }

    pub fn with_diagnoses(mut self, diagnoses: Vec<DifferentialDiagnosis>) -> Self {
        self.diagnoses = diagnoses;
        self
    }

    pub fn with_questions(mut self, questions: Vec<String>) -> Self {
        self.questions = questions;
        self
    }
}

/// Render the built-in report template.
pub fn render_report(context: &ReportContext) -> Result<String, ExportError> {
    render_template("report.md", REPORT_TEMPLATE, context)
}

/// Render a Tera template against a [`ReportContext`].
pub fn render_template(
    template_name: &str,
    template_content: &str,
    context: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

fn demographic_rows(history: &PatientHistory) -> Vec<Row> {
    let d = &history.demographics;
    let income = if d.family_income().is_empty() {
        String::new()
    } else {
        format!("₹{}", d.family_income())
    };
    [
        Row::new("Name", d.name.trim()),
        Row::new("Age", d.age.trim()),
        Row::new("Sex", d.sex.label()),
        Row::new("Marital Status", d.marital_status.label()),
        Row::new("Blood Group", d.blood_group.label()),
        Row::new("Religion", d.religion.trim()),
        Row::new("Address", d.address.trim()),
        Row::new("Attendant", d.attendant_name.trim()),
        Row::new("Phone", d.phone_number.as_str()),
        Row::new("Education", d.education().label()),
        Row::new("Occupation", d.occupation().label()),
        Row::new("Family Monthly Income", income),
        Row::new(
            "Socio-economic Status",
            d.socio_economic_status().to_string(),
        ),
    ]
    .into_iter()
    .filter(|row| !row.value.is_empty())
    .collect()
}

fn complaint_sections(history: &PatientHistory) -> Vec<ComplaintSection> {
    history
        .active_complaints()
        .map(|c| ComplaintSection {
            complaint: c.complaint.trim().to_string(),
            duration: c.duration.describe(),
            details: c
                .hop
                .details()
                .into_iter()
                .map(|(label, value)| Row::new(label, value))
                .collect(),
        })
        .collect()
}

fn personal_rows(history: &PatientHistory) -> Vec<Row> {
    let p = &history.personal_history;
    let habits = p
        .habits
        .iter()
        .map(|h| h.label())
        .collect::<Vec<_>>()
        .join(", ");
    [
        Row::new("Diet", p.diet.label()),
        Row::new("Sleep", p.sleep.trim()),
        Row::new("Appetite", p.appetite.trim()),
        Row::new("Bladder", p.bladder.trim()),
        Row::new("Bowel", p.bowel.trim()),
        Row::new("Habits", habits),
        Row::new("Other", p.other.trim()),
    ]
    .into_iter()
    .filter(|row| !row.value.is_empty())
    .collect()
}
