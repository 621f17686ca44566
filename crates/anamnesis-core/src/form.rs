//! Intake form controller.
//!
//! Owns the patient-history record while it is being filled in and is the
//! single place where derived state is written back:
//!
//! - every demographics edit re-derives the socio-economic tier;
//! - every duration edit re-sorts the whole complaint list, longest first.
//!
//! Adding, removing or renaming complaints and editing their HOP details do
//! not re-sort; new complaints are appended at the end.

use uuid::Uuid;

use anamnesis_scoring::duration::{DurationUnit, sanitize_digits};
use anamnesis_scoring::kuppuswamy::{EducationLevel, OccupationLevel};
use anamnesis_scoring::ordering::reorder;

use crate::error::CoreError;
use crate::models::complaint::{ChiefComplaint, HopField};
use crate::models::demographics::{Demographics, DemographicsField};
use crate::models::history::{ConditionHistory, Habit, PersonalHistory};
use crate::models::patient::PatientHistory;
use crate::steps::{Step, StepNavigator};

#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    history: PatientHistory,
    navigator: StepNavigator,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing record. Stored complaint order is kept.
    pub fn from_history(history: PatientHistory) -> Self {
        Self {
            history,
            navigator: StepNavigator::default(),
        }
    }

    pub fn history(&self) -> &PatientHistory {
        &self.history
    }

    pub fn into_history(self) -> PatientHistory {
        self.history
    }

    // ── Navigation ───────────────────────────────────────────────────────

    pub fn navigator(&self) -> &StepNavigator {
        &self.navigator
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current()
    }

    pub fn next_step(&mut self) -> Step {
        self.navigator.next()
    }

    pub fn previous_step(&mut self) -> Step {
        self.navigator.previous()
    }

    pub fn go_to_step(&mut self, number: u8) -> Result<Step, CoreError> {
        self.navigator.go_to(number)
    }

    // ── Demographics ─────────────────────────────────────────────────────

    pub fn demographics(&self) -> &Demographics {
        &self.history.demographics
    }

    /// Mutable access for the non-scoring fields (sex, blood group, marital
    /// status, ...). Scoring inputs stay behind their setters.
    pub fn demographics_mut(&mut self) -> &mut Demographics {
        &mut self.history.demographics
    }

    pub fn edit_demographics(&mut self, field: DemographicsField, value: &str) {
        self.history.demographics.edit(field, value);
    }

    pub fn set_education(&mut self, education: EducationLevel) {
        self.history.demographics.set_education(education);
    }

    pub fn set_occupation(&mut self, occupation: OccupationLevel) {
        self.history.demographics.set_occupation(occupation);
    }

    pub fn set_family_income(&mut self, income: &str) {
        self.history.demographics.set_family_income(income);
    }

    // ── Chief complaints ─────────────────────────────────────────────────

    pub fn complaints(&self) -> &[ChiefComplaint] {
        &self.history.chief_complaints
    }

    pub fn complaint(&self, id: Uuid) -> Result<&ChiefComplaint, CoreError> {
        self.history
            .chief_complaints
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::UnknownComplaint(id))
    }

    /// Append a blank complaint and return its id.
    pub fn add_complaint(&mut self) -> Uuid {
        let complaint = ChiefComplaint::blank();
        let id = complaint.id;
        self.history.chief_complaints.push(complaint);
        id
    }

    /// Remove a complaint. The list may become empty; keeping at least one
    /// entry is up to the caller.
    pub fn remove_complaint(&mut self, id: Uuid) -> Result<ChiefComplaint, CoreError> {
        let pos = self.position(id)?;
        Ok(self.history.chief_complaints.remove(pos))
    }

    pub fn set_complaint_text(&mut self, id: Uuid, text: &str) -> Result<(), CoreError> {
        let pos = self.position(id)?;
        self.history.chief_complaints[pos].complaint = text.to_string();
        Ok(())
    }

    /// Set one duration field (digits only) and re-sort every complaint by
    /// duration, longest first.
    pub fn set_duration(
        &mut self,
        id: Uuid,
        unit: DurationUnit,
        value: &str,
    ) -> Result<(), CoreError> {
        let pos = self.position(id)?;
        let mut updated = self.history.chief_complaints.clone();
        updated[pos].duration = updated[pos]
            .duration
            .with_field(unit, sanitize_digits(value));
        self.history.chief_complaints = reorder(&updated);
        Ok(())
    }

    pub fn set_hop(&mut self, id: Uuid, field: HopField, value: &str) -> Result<(), CoreError> {
        let pos = self.position(id)?;
        self.history.chief_complaints[pos].hop.set(field, value);
        Ok(())
    }

    fn position(&self, id: Uuid) -> Result<usize, CoreError> {
        self.history
            .chief_complaints
            .iter()
            .position(|c| c.id == id)
            .ok_or(CoreError::UnknownComplaint(id))
    }

    // ── Remaining history sections ───────────────────────────────────────

    pub fn set_past_history(&mut self, past: ConditionHistory) {
        self.history.past_history = past;
    }

    pub fn set_family_history(&mut self, family: ConditionHistory) {
        self.history.family_history = family;
    }

    pub fn personal_history_mut(&mut self) -> &mut PersonalHistory {
        &mut self.history.personal_history
    }

    pub fn toggle_habit(&mut self, habit: Habit) {
        self.history.personal_history.toggle_habit(habit);
    }
}
