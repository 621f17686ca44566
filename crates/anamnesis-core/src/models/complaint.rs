use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use anamnesis_scoring::duration::Duration;
use anamnesis_scoring::ordering::Timed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Onset {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "Acute (Min to hr)")]
    Acute,
    #[serde(rename = "Sub-Acute (Days)")]
    SubAcute,
    #[serde(rename = "Chronic/Insidious (Weeks to Months)")]
    Chronic,
}

impl Onset {
    pub const ALL: [Onset; 4] = [Onset::Unspecified, Onset::Acute, Onset::SubAcute, Onset::Chronic];

    pub fn label(self) -> &'static str {
        match self {
            Onset::Unspecified => "",
            Onset::Acute => "Acute (Min to hr)",
            Onset::SubAcute => "Sub-Acute (Days)",
            Onset::Chronic => "Chronic/Insidious (Weeks to Months)",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|o| o.label() == label.trim())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Progression {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    #[serde(rename = "Gradually Deteriorating")]
    GraduallyDeteriorating,
    #[serde(rename = "Getting Better")]
    GettingBetter,
    #[serde(rename = "Remaining the same")]
    RemainingTheSame,
    Remissions,
    Exacerbations,
    Other,
}

impl Progression {
    pub const ALL: [Progression; 7] = [
        Progression::Unspecified,
        Progression::GraduallyDeteriorating,
        Progression::GettingBetter,
        Progression::RemainingTheSame,
        Progression::Remissions,
        Progression::Exacerbations,
        Progression::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Progression::Unspecified => "",
            Progression::GraduallyDeteriorating => "Gradually Deteriorating",
            Progression::GettingBetter => "Getting Better",
            Progression::RemainingTheSame => "Remaining the same",
            Progression::Remissions => "Remissions",
            Progression::Exacerbations => "Exacerbations",
            Progression::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == label.trim())
            .unwrap_or_default()
    }
}

/// A single HOP sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum HopField {
    Site,
    Onset,
    Character,
    Progression,
    ProgressionOther,
    TimingAndDuration,
    RateFrequency,
    AssociativeFactor,
    AggravatingFactor,
    RelievingFactor,
    Other,
}

/// History of Presenting Complaint for one complaint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct HopData {
    pub site: String,
    pub onset: Onset,
    pub character: String,
    pub progression: Progression,
    pub progression_other: String,
    pub timing_and_duration: String,
    pub rate_frequency: String,
    pub associative_factor: String,
    pub aggravating_factor: String,
    pub relieving_factor: String,
    pub other: String,
}

impl HopData {
    /// Apply a text edit. Choosing any progression other than `Other` clears
    /// the free-text progression.
    pub fn set(&mut self, field: HopField, value: &str) {
        let value = value.to_string();
        match field {
            HopField::Site => self.site = value,
            HopField::Onset => self.onset = Onset::from_label(&value),
            HopField::Character => self.character = value,
            HopField::Progression => {
                self.progression = Progression::from_label(&value);
                if self.progression != Progression::Other {
                    self.progression_other.clear();
                }
            }
            HopField::ProgressionOther => self.progression_other = value,
            HopField::TimingAndDuration => self.timing_and_duration = value,
            HopField::RateFrequency => self.rate_frequency = value,
            HopField::AssociativeFactor => self.associative_factor = value,
            HopField::AggravatingFactor => self.aggravating_factor = value,
            HopField::RelievingFactor => self.relieving_factor = value,
            HopField::Other => self.other = value,
        }
    }

    /// Progression as it should be reported: the free text when `Other` is
    /// chosen, the option label otherwise.
    pub fn progression_text(&self) -> &str {
        match self.progression {
            Progression::Other => self.progression_other.trim(),
            p => p.label(),
        }
    }

    /// Labelled, non-blank details in form order.
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Site", self.site.as_str()),
            ("Onset", self.onset.label()),
            ("Character", self.character.as_str()),
            ("Progression", self.progression_text()),
            ("Timing/Duration of Episodes", self.timing_and_duration.as_str()),
            ("Rate/Frequency", self.rate_frequency.as_str()),
            ("Associative Factors", self.associative_factor.as_str()),
            ("Aggravating Factors", self.aggravating_factor.as_str()),
            ("Relieving Factors", self.relieving_factor.as_str()),
            ("Other Details", self.other.as_str()),
        ]
        .into_iter()
        .map(|(label, value)| (label, value.trim()))
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChiefComplaint {
    pub id: Uuid,
    #[serde(default)]
    pub complaint: String,
    #[serde(default)]
    pub duration: Duration,
    #[serde(default)]
    pub hop: HopData,
}

impl ChiefComplaint {
    /// An empty complaint with a fresh id.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            complaint: String::new(),
            duration: Duration::default(),
            hop: HopData::default(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.complaint.trim().is_empty()
    }
}

impl Timed for ChiefComplaint {
    fn duration_days(&self) -> u64 {
        self.duration.total_days()
    }
}
