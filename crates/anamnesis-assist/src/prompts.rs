//! Prompt assembly.
//!
//! Each task has a fixed system prompt and a user message built from the
//! record. Structured tasks spell out the JSON shape they expect back.

use anamnesis_core::models::complaint::ChiefComplaint;
use anamnesis_core::models::history::{ConditionHistory, PersonalHistory};
use anamnesis_core::models::patient::PatientHistory;

pub const HOP_QUESTIONS_SYSTEM_PROMPT: &str = "\
You are an expert medical educator helping a clinician take a history. \
Given a patient's chief complaints, list the essential follow-up questions \
needed to explore the History of Presenting Complaint (HOP). Keep each \
question short and clear. Respond with JSON only, in the form \
{\"questions\": [\"...\"]}.";

pub const SUMMARY_SYSTEM_PROMPT: &str = "\
You are a clinical documentation assistant. Write a well-structured medical \
history summary from the patient data you are given, in formal clinical \
English suitable for a case presentation. Use clear headings for each \
section (Patient Profile, Chief Complaints & History of Presenting \
Complaint, Past History, Personal History, Family History).";

pub const DIFFERENTIAL_SYSTEM_PROMPT: &str = "\
You are a senior medical diagnostician. Given a patient's chief complaints, \
list plausible differential diagnoses, each with a brief rationale for why \
it is a consideration. Respond with JSON only, in the form \
{\"diagnoses\": [{\"diagnosis\": \"...\", \"rationale\": \"...\"}]}.";

const NOT_SPECIFIED: &str = "Not specified.";

/// Non-blank complaints joined for the HOP question prompt, as in
/// `Cough for 2 months, Fever`. Empty when there is nothing to ask about.
pub fn complaints_for_questions(complaints: &[ChiefComplaint]) -> String {
    complaints
        .iter()
        .filter(|c| !c.is_blank())
        .map(|c| {
            let duration = c.duration.describe();
            if duration.is_empty() {
                c.complaint.trim().to_string()
            } else {
                format!("{} for {duration}", c.complaint.trim())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Non-blank complaints joined for the differential diagnosis prompt, as in
/// `Cough (for 2 months), Fever`.
pub fn complaints_for_diagnosis(complaints: &[ChiefComplaint]) -> String {
    complaints
        .iter()
        .filter(|c| !c.is_blank())
        .map(|c| {
            let duration = c.duration.describe();
            if duration.is_empty() {
                c.complaint.trim().to_string()
            } else {
                format!("{} (for {duration})", c.complaint.trim())
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn hop_questions_message(complaints: &str) -> String {
    format!("The patient's chief complaints are: \"{complaints}\".")
}

pub fn differential_message(complaints: &str) -> String {
    format!("The patient's chief complaints are: \"{complaints}\".")
}

/// The full record as an indented outline for the summary prompt.
pub fn summary_message(history: &PatientHistory) -> String {
    let d = &history.demographics;
    let mut out = String::from("Patient Data:\n");

    out.push_str("- Demographics:\n");
    let income = if d.family_income().is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        format!("₹{}", d.family_income())
    };
    let rows = [
        ("Name", d.name.clone()),
        ("Age/Sex", format!("{} / {}", d.age, d.sex.label())),
        ("Marital Status", d.marital_status.label().to_string()),
        ("Occupation", or_not_specified(d.occupation().label())),
        ("Religion", or_not_specified(&d.religion)),
        ("Education", or_not_specified(d.education().label())),
        ("Total Family Monthly Income", income),
        (
            "Socio-economic Status",
            format!("{} (Calculated)", d.socio_economic_status()),
        ),
        ("Address", or_not_specified(&d.address)),
        ("Attendant's Name", or_not_specified(&d.attendant_name)),
        ("Blood Group", d.blood_group.label().to_string()),
        ("Phone Number", or_not_specified(&d.phone_number)),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  - {label}: {value}\n"));
    }

    out.push_str("- Chief Complaints & History of Presenting Complaint:\n");
    let complaints = complaint_outline(history);
    if complaints.is_empty() {
        out.push_str("  No chief complaints reported.\n");
    } else {
        out.push_str(&complaints);
    }

    out.push_str(&format!(
        "- Past Medical & Surgical History: {}\n",
        conditions_or(&history.past_history, "No significant past history reported.")
    ));
    out.push_str(&personal_outline(&history.personal_history));
    out.push_str(&format!(
        "- Family History: {}\n",
        conditions_or(&history.family_history, "No significant family history reported.")
    ));
    out
}

fn complaint_outline(history: &PatientHistory) -> String {
    let mut out = String::new();
    for complaint in history.active_complaints() {
        let duration = complaint.duration.describe();
        if duration.is_empty() {
            out.push_str(&format!("  - {}\n", complaint.complaint.trim()));
        } else {
            out.push_str(&format!("  - {} ({duration})\n", complaint.complaint.trim()));
        }
        let details = complaint.hop.details();
        if !details.is_empty() {
            out.push_str("    - History of Presenting Complaint:\n");
            for (label, value) in details {
                out.push_str(&format!("      - {label}: {value}\n"));
            }
        }
    }
    out
}

fn personal_outline(personal: &PersonalHistory) -> String {
    let habits = if personal.habits.is_empty() {
        "No significant habits reported.".to_string()
    } else {
        personal
            .habits
            .iter()
            .map(|h| h.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let rows = [
        ("Diet", personal.diet.label().to_string()),
        ("Sleep", or_not_specified(&personal.sleep)),
        ("Appetite", or_not_specified(&personal.appetite)),
        ("Bladder", or_not_specified(&personal.bladder)),
        ("Bowel", or_not_specified(&personal.bowel)),
        ("Habits", habits),
        ("Other", or_default(&personal.other, "None.")),
    ];
    let mut out = String::from("- Personal History:\n");
    for (label, value) in rows {
        out.push_str(&format!("  - {label}: {value}\n"));
    }
    out
}

fn conditions_or(history: &ConditionHistory, none: &str) -> String {
    let conditions = history.conditions();
    if conditions.is_empty() {
        none.to_string()
    } else {
        conditions.join(", ")
    }
}

fn or_not_specified(value: &str) -> String {
    or_default(value, NOT_SPECIFIED)
}

fn or_default(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
