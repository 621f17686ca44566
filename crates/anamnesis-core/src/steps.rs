use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The six intake steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Step {
    Demographics,
    ChiefComplaint,
    PastHistory,
    PersonalHistory,
    FamilyHistory,
    Summary,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::Demographics,
        Step::ChiefComplaint,
        Step::PastHistory,
        Step::PersonalHistory,
        Step::FamilyHistory,
        Step::Summary,
    ];

    pub const FIRST: Step = Step::Demographics;
    pub const LAST: Step = Step::Summary;

    /// 1-based position.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_number(number: u8) -> Result<Self, CoreError> {
        number
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(usize::from(i)).copied())
            .ok_or(CoreError::InvalidStep(number))
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Demographics => "Demographics",
            Step::ChiefComplaint => "Chief Complaint & HOP",
            Step::PastHistory => "Past History",
            Step::PersonalHistory => "Personal History",
            Step::FamilyHistory => "Family History",
            Step::Summary => "Summary",
        }
    }

    pub fn next(self) -> Self {
        Self::ALL
            .get(usize::from(self.number()))
            .copied()
            .unwrap_or(Self::LAST)
    }

    pub fn previous(self) -> Self {
        match self.number() {
            1 => Self::FIRST,
            n => Self::ALL[usize::from(n - 2)],
        }
    }
}

/// Current step plus the furthest step visited. Jumping is only allowed
/// back to steps already reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StepNavigator {
    current: Step,
    max_reached: Step,
}

impl Default for StepNavigator {
    fn default() -> Self {
        Self {
            current: Step::FIRST,
            max_reached: Step::FIRST,
        }
    }
}

impl StepNavigator {
    pub fn current(&self) -> Step {
        self.current
    }

    pub fn max_reached(&self) -> Step {
        self.max_reached
    }

    pub fn is_first(&self) -> bool {
        self.current == Step::FIRST
    }

    pub fn is_last(&self) -> bool {
        self.current == Step::LAST
    }

    /// Advance one step; stays on the last step.
    pub fn next(&mut self) -> Step {
        self.move_to(self.current.next())
    }

    /// Go back one step; stays on the first step.
    pub fn previous(&mut self) -> Step {
        self.move_to(self.current.previous())
    }

    /// Jump to a step by number. Only steps up to the furthest one reached
    /// are allowed.
    pub fn go_to(&mut self, number: u8) -> Result<Step, CoreError> {
        let step = Step::from_number(number)?;
        if step > self.max_reached {
            return Err(CoreError::StepNotReached {
                step: number,
                max_reached: self.max_reached.number(),
            });
        }
        Ok(self.move_to(step))
    }

    fn move_to(&mut self, step: Step) -> Step {
        self.current = step;
        self.max_reached = self.max_reached.max(step);
        step
    }
}
