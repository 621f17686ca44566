use anamnesis_core::models::complaint::{ChiefComplaint, HopData, Onset};
use anamnesis_core::models::demographics::BloodGroup;
use anamnesis_core::models::patient::PatientHistory;
use anamnesis_scoring::kuppuswamy::{EducationLevel, OccupationLevel, SocioEconomicTier};

const STORED_RECORD: &str = r#"{
  "demographics": {
    "name": "Ravi",
    "age": "42",
    "sex": "Male",
    "occupation": "Professional",
    "address": "Pune",
    "attendantName": "",
    "phoneNumber": "98765 43210",
    "bloodGroup": "B+",
    "education": "Graduate",
    "maritalStatus": "Married",
    "familyIncome": "40000",
    "socioEconomicStatus": "Lower",
    "religion": ""
  },
  "chiefComplaints": [
    {
      "id": "4b0c1c0e-5a3a-4c57-9d3e-2f1f8f3f9a11",
      "complaint": "Cough",
      "duration": { "years": "", "months": "2", "days": "" },
      "hop": { "site": "Chest", "onset": "Sub-Acute (Days)" }
    }
  ],
  "pastHistory": { "hasDiabetes": false, "hasTB": true, "hasThyroid": false, "other": "" },
  "personalHistory": { "diet": "Mixed", "habits": ["Tobacco Chewing"] },
  "familyHistory": { "hasDiabetes": true, "hasTB": false, "hasThyroid": false, "other": "" }
}"#;

#[test]
fn loading_a_record_rederives_a_stale_tier() {
    let history = PatientHistory::from_json(STORED_RECORD).unwrap();
    let d = &history.demographics;
    assert_eq!(d.education(), EducationLevel::Graduate);
    assert_eq!(d.occupation(), OccupationLevel::Professional);
    assert_eq!(d.socio_economic_status(), SocioEconomicTier::Upper);
    assert_eq!(d.phone_number, "9876543210");
    assert_eq!(d.blood_group, BloodGroup::BPositive);
}

#[test]
fn unrecognized_category_labels_load_as_unset() {
    let history = PatientHistory::from_json(
        r#"{"demographics":{"education":"PhD","occupation":"Professional","familyIncome":"40000"}}"#,
    )
    .unwrap();
    let d = &history.demographics;
    assert_eq!(d.education(), EducationLevel::Unspecified);
    let score = d.socio_economic_score();
    assert_eq!(score.education, 0);
    assert_eq!(score.total, 20);
    assert_eq!(d.socio_economic_status(), SocioEconomicTier::UpperMiddle);

    let history = PatientHistory::from_json(
        r#"{"demographics":{"education":"graduate","occupation":null}}"#,
    )
    .unwrap();
    assert_eq!(history.demographics.education(), EducationLevel::Graduate);
    assert_eq!(history.demographics.occupation(), OccupationLevel::Unspecified);
}

#[test]
fn partial_sections_fill_with_defaults() {
    let history = PatientHistory::from_json(STORED_RECORD).unwrap();
    let complaint = &history.chief_complaints[0];
    assert_eq!(complaint.hop.onset, Onset::SubAcute);
    assert_eq!(complaint.hop.character, "");
    assert_eq!(complaint.duration.total_days(), 60);
    assert!(history.past_history.has_tb);
    assert_eq!(history.personal_history.sleep, "");
}

#[test]
fn serialized_record_uses_form_field_names() {
    let history = PatientHistory::from_json(STORED_RECORD).unwrap();
    let json = history.to_json().unwrap();
    assert!(json.contains("\"chiefComplaints\""));
    assert!(json.contains("\"socioEconomicStatus\": \"Upper\""));
    assert!(json.contains("\"hasTB\": true"));
    assert!(json.contains("\"Tobacco Chewing\""));

    let reloaded = PatientHistory::from_json(&json).unwrap();
    assert_eq!(reloaded, history);
}

#[test]
fn active_complaints_skip_blank_text() {
    let mut history = PatientHistory::default();
    assert!(!history.has_complaints());

    let mut cough = ChiefComplaint::blank();
    cough.complaint = "  Cough ".to_string();
    history.chief_complaints.push(cough);

    let active: Vec<_> = history.active_complaints().collect();
    assert_eq!(active.len(), 1);
    assert!(history.has_complaints());
}

#[test]
fn blank_complaints_get_distinct_ids() {
    assert_ne!(ChiefComplaint::blank().id, ChiefComplaint::blank().id);
}

#[test]
fn hop_details_skip_blank_fields() {
    let hop = HopData {
        site: "Epigastrium".to_string(),
        onset: Onset::Acute,
        relieving_factor: "  ".to_string(),
        other: "After meals".to_string(),
        ..HopData::default()
    };
    assert_eq!(
        hop.details(),
        vec![
            ("Site", "Epigastrium"),
            ("Onset", "Acute (Min to hr)"),
            ("Other Details", "After meals"),
        ]
    );
}
