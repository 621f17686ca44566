use anamnesis_core::error::CoreError;
use anamnesis_core::form::IntakeForm;
use anamnesis_core::models::complaint::{HopField, Progression};
use anamnesis_core::models::demographics::DemographicsField;
use anamnesis_core::models::history::{ConditionHistory, Habit};
use anamnesis_core::steps::Step;
use anamnesis_scoring::duration::DurationUnit;
use anamnesis_scoring::kuppuswamy::{
    EducationLevel, OccupationLevel, SocioEconomicTier, classify,
};
use uuid::Uuid;

fn assert_tier_consistent(form: &IntakeForm) {
    let d = form.demographics();
    assert_eq!(
        d.socio_economic_status(),
        classify(d.education(), d.occupation(), d.monthly_income())
    );
}

#[test]
fn new_form_starts_on_demographics_with_one_blank_complaint() {
    let form = IntakeForm::new();
    assert_eq!(form.current_step(), Step::Demographics);
    assert_eq!(form.complaints().len(), 1);
    assert!(form.complaints()[0].is_blank());
    assert_eq!(form.demographics().socio_economic_status(), SocioEconomicTier::Lower);
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut form = IntakeForm::new();
    assert_eq!(form.previous_step(), Step::Demographics);

    for _ in 0..10 {
        form.next_step();
    }
    assert_eq!(form.current_step(), Step::Summary);
    assert!(form.navigator().is_last());
}

#[test]
fn jumping_is_limited_to_reached_steps() {
    let mut form = IntakeForm::new();
    form.next_step();
    form.next_step();
    assert_eq!(form.navigator().max_reached(), Step::PastHistory);

    assert_eq!(form.go_to_step(1).unwrap(), Step::Demographics);
    assert_eq!(form.navigator().max_reached(), Step::PastHistory);
    assert_eq!(form.go_to_step(3).unwrap(), Step::PastHistory);

    match form.go_to_step(5) {
        Err(CoreError::StepNotReached { step, max_reached }) => {
            assert_eq!(step, 5);
            assert_eq!(max_reached, 3);
        }
        other => panic!("expected StepNotReached, got {other:?}"),
    }
    assert!(matches!(form.go_to_step(0), Err(CoreError::InvalidStep(0))));
    assert!(matches!(form.go_to_step(7), Err(CoreError::InvalidStep(7))));
}

#[test]
fn step_numbers_and_labels() {
    let numbers: Vec<u8> = Step::ALL.iter().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(Step::from_number(2).unwrap().label(), "Chief Complaint & HOP");
    assert_eq!(Step::Summary.next(), Step::Summary);
    assert_eq!(Step::PastHistory.previous(), Step::ChiefComplaint);
}

#[test]
fn every_demographics_edit_keeps_tier_consistent() {
    let mut form = IntakeForm::new();

    form.edit_demographics(DemographicsField::Education, "Graduate");
    assert_tier_consistent(&form);
    form.edit_demographics(DemographicsField::Occupation, "Professional");
    assert_tier_consistent(&form);
    assert_eq!(form.demographics().socio_economic_status(), SocioEconomicTier::UpperMiddle);

    form.edit_demographics(DemographicsField::FamilyIncome, "₹40,000");
    assert_eq!(form.demographics().family_income(), "40000");
    assert_eq!(form.demographics().socio_economic_status(), SocioEconomicTier::Upper);

    form.set_family_income("");
    assert_tier_consistent(&form);
    assert_eq!(form.demographics().socio_economic_status(), SocioEconomicTier::UpperMiddle);

    form.set_education(EducationLevel::Unspecified);
    form.set_occupation(OccupationLevel::Unemployed);
    assert_tier_consistent(&form);
    assert_eq!(form.demographics().socio_economic_status(), SocioEconomicTier::Lower);

    form.edit_demographics(DemographicsField::Name, "Asha");
    assert_tier_consistent(&form);
}

#[test]
fn phone_number_is_reduced_to_digits() {
    let mut form = IntakeForm::new();
    form.edit_demographics(DemographicsField::PhoneNumber, "+91 98765-43210");
    assert_eq!(form.demographics().phone_number, "919876543210");
}

#[test]
fn unknown_education_label_scores_zero() {
    let mut form = IntakeForm::new();
    form.edit_demographics(DemographicsField::Education, "Doctorate");
    assert_eq!(form.demographics().education(), EducationLevel::Unspecified);
}

#[test]
fn duration_edit_resorts_all_complaints() {
    let mut form = IntakeForm::new();
    let a = form.complaints()[0].id;
    let b = form.add_complaint();
    let c = form.add_complaint();

    form.set_duration(a, DurationUnit::Years, "1").unwrap();
    form.set_duration(b, DurationUnit::Months, "6").unwrap();
    form.set_duration(c, DurationUnit::Days, "400").unwrap();

    let order: Vec<Uuid> = form.complaints().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![c, a, b]);
}

#[test]
fn duration_input_is_sanitized() {
    let mut form = IntakeForm::new();
    let id = form.complaints()[0].id;
    form.set_duration(id, DurationUnit::Days, "1o2 days").unwrap();
    assert_eq!(form.complaint(id).unwrap().duration.days, "12");
}

#[test]
fn add_appends_without_resorting() {
    let mut form = IntakeForm::new();
    let first = form.complaints()[0].id;
    form.set_duration(first, DurationUnit::Days, "1").unwrap();

    let added = form.add_complaint();
    form.set_complaint_text(added, "Fever").unwrap();
    form.set_hop(added, HopField::Site, "Whole body").unwrap();

    let order: Vec<Uuid> = form.complaints().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![first, added]);
}

#[test]
fn removing_does_not_resort_and_may_empty_the_list() {
    let mut form = IntakeForm::new();
    let a = form.complaints()[0].id;
    let b = form.add_complaint();
    let c = form.add_complaint();
    form.set_complaint_text(a, "short").unwrap();
    form.set_complaint_text(b, "none").unwrap();
    form.set_complaint_text(c, "long").unwrap();

    form.set_duration(a, DurationUnit::Days, "2").unwrap();
    let removed = form.remove_complaint(a).unwrap();
    assert_eq!(removed.complaint, "short");

    let order: Vec<Uuid> = form.complaints().iter().map(|c| c.id).collect();
    assert_eq!(order, vec![b, c]);

    form.remove_complaint(b).unwrap();
    form.remove_complaint(c).unwrap();
    assert!(form.complaints().is_empty());
}

#[test]
fn unknown_complaint_ids_are_rejected() {
    let mut form = IntakeForm::new();
    let missing = Uuid::new_v4();
    assert!(matches!(
        form.set_duration(missing, DurationUnit::Years, "1"),
        Err(CoreError::UnknownComplaint(id)) if id == missing
    ));
    assert!(form.set_complaint_text(missing, "x").is_err());
    assert!(form.set_hop(missing, HopField::Site, "x").is_err());
    assert!(form.remove_complaint(missing).is_err());
}

#[test]
fn choosing_a_listed_progression_clears_other_text() {
    let mut form = IntakeForm::new();
    let id = form.complaints()[0].id;
    form.set_hop(id, HopField::Progression, "Other").unwrap();
    form.set_hop(id, HopField::ProgressionOther, "Waxing and waning").unwrap();
    assert_eq!(form.complaint(id).unwrap().hop.progression_text(), "Waxing and waning");

    form.set_hop(id, HopField::Progression, "Getting Better").unwrap();
    let hop = &form.complaint(id).unwrap().hop;
    assert_eq!(hop.progression, Progression::GettingBetter);
    assert!(hop.progression_other.is_empty());
}

#[test]
fn history_sections_and_habits() {
    let mut form = IntakeForm::new();
    form.set_past_history(ConditionHistory {
        has_diabetes: true,
        ..ConditionHistory::default()
    });
    form.set_family_history(ConditionHistory {
        has_thyroid: true,
        other: "Hypertension".to_string(),
        ..ConditionHistory::default()
    });
    form.toggle_habit(Habit::Smoking);
    form.toggle_habit(Habit::Alcohol);
    form.toggle_habit(Habit::Smoking);
    form.personal_history_mut().sleep = "6 hours".to_string();

    let history = form.into_history();
    assert_eq!(history.past_history.conditions(), vec!["Diabetes Mellitus"]);
    assert_eq!(
        history.family_history.conditions(),
        vec!["Thyroid Disorders", "Hypertension"]
    );
    assert_eq!(history.personal_history.habits, vec![Habit::Alcohol]);
    assert_eq!(history.personal_history.sleep, "6 hours");
}
