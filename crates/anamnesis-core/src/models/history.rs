use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Past or family history: the three screened conditions plus free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ConditionHistory {
    pub has_diabetes: bool,
    #[serde(rename = "hasTB")]
    pub has_tb: bool,
    pub has_thyroid: bool,
    pub other: String,
}

impl ConditionHistory {
    /// Reported conditions in display order, free text last.
    pub fn conditions(&self) -> Vec<String> {
        let mut conditions = Vec::new();
        if self.has_diabetes {
            conditions.push("Diabetes Mellitus".to_string());
        }
        if self.has_tb {
            conditions.push("Tuberculosis (TB)".to_string());
        }
        if self.has_thyroid {
            conditions.push("Thyroid Disorders".to_string());
        }
        let other = self.other.trim();
        if !other.is_empty() {
            conditions.push(other.to_string());
        }
        conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions().is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Diet {
    #[default]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Mixed,
}

impl Diet {
    pub fn label(self) -> &'static str {
        match self {
            Diet::Vegetarian => "Vegetarian",
            Diet::NonVegetarian => "Non-Vegetarian",
            Diet::Mixed => "Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Habit {
    Smoking,
    Alcohol,
    #[serde(rename = "Tobacco Chewing")]
    TobaccoChewing,
    #[serde(rename = "Drug Abuse")]
    DrugAbuse,
}

impl Habit {
    pub const ALL: [Habit; 4] = [
        Habit::Smoking,
        Habit::Alcohol,
        Habit::TobaccoChewing,
        Habit::DrugAbuse,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Habit::Smoking => "Smoking",
            Habit::Alcohol => "Alcohol",
            Habit::TobaccoChewing => "Tobacco Chewing",
            Habit::DrugAbuse => "Drug Abuse",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PersonalHistory {
    pub diet: Diet,
    pub sleep: String,
    pub appetite: String,
    pub bladder: String,
    pub bowel: String,
    pub habits: Vec<Habit>,
    pub other: String,
}

impl PersonalHistory {
    /// Add the habit if absent, remove it if present. Order of the remaining
    /// habits is kept.
    pub fn toggle_habit(&mut self, habit: Habit) {
        if let Some(pos) = self.habits.iter().position(|h| *h == habit) {
            self.habits.remove(pos);
        } else {
            self.habits.push(habit);
        }
    }
}
