use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of an AI-suggested differential diagnosis list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DifferentialDiagnosis {
    pub diagnosis: String,
    pub rationale: String,
}
