use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::complaint::ChiefComplaint;
use super::demographics::Demographics;
use super::history::{ConditionHistory, PersonalHistory};

/// The full intake record built up across the form steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientHistory {
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub chief_complaints: Vec<ChiefComplaint>,
    #[serde(default)]
    pub past_history: ConditionHistory,
    #[serde(default)]
    pub personal_history: PersonalHistory,
    #[serde(default)]
    pub family_history: ConditionHistory,
}

impl Default for PatientHistory {
    /// A blank record with a single blank complaint, as the form starts.
    fn default() -> Self {
        Self {
            demographics: Demographics::default(),
            chief_complaints: vec![ChiefComplaint::blank()],
            past_history: ConditionHistory::default(),
            personal_history: PersonalHistory::default(),
            family_history: ConditionHistory::default(),
        }
    }
}

impl PatientHistory {
    /// Complaints with non-blank text, in stored order.
    pub fn active_complaints(&self) -> impl Iterator<Item = &ChiefComplaint> {
        self.chief_complaints.iter().filter(|c| !c.is_blank())
    }

    pub fn has_complaints(&self) -> bool {
        self.active_complaints().next().is_some()
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
