//! Modified Kuppuswamy socio-economic scale.
//!
//! Education and occupation of the head of family are scored from fixed
//! tables, monthly family income from a step table of rupee breakpoints
//! (CPI-adjusted, 2023/2024). The three scores are summed and the total is
//! mapped onto five tiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::duration::parse_count;
use crate::scale::{Breakpoint, StepTable};

/// Education of the head of family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum EducationLevel {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Illiterate,
    #[serde(rename = "Primary School")]
    PrimarySchool,
    #[serde(rename = "Middle School")]
    MiddleSchool,
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Diploma/Intermediate")]
    DiplomaIntermediate,
    Graduate,
    #[serde(rename = "Professional/Post-graduate")]
    ProfessionalPostGraduate,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 8] = [
        EducationLevel::Unspecified,
        EducationLevel::Illiterate,
        EducationLevel::PrimarySchool,
        EducationLevel::MiddleSchool,
        EducationLevel::HighSchool,
        EducationLevel::DiplomaIntermediate,
        EducationLevel::Graduate,
        EducationLevel::ProfessionalPostGraduate,
    ];

    pub fn score(self) -> u32 {
        match self {
            EducationLevel::ProfessionalPostGraduate => 7,
            EducationLevel::Graduate => 6,
            EducationLevel::DiplomaIntermediate => 4,
            EducationLevel::HighSchool => 3,
            EducationLevel::MiddleSchool => 2,
            EducationLevel::PrimarySchool => 1,
            EducationLevel::Illiterate | EducationLevel::Unspecified => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::Unspecified => "",
            EducationLevel::Illiterate => "Illiterate",
            EducationLevel::PrimarySchool => "Primary School",
            EducationLevel::MiddleSchool => "Middle School",
            EducationLevel::HighSchool => "High School",
            EducationLevel::DiplomaIntermediate => "Diploma/Intermediate",
            EducationLevel::Graduate => "Graduate",
            EducationLevel::ProfessionalPostGraduate => "Professional/Post-graduate",
        }
    }

    /// Resolve a form label. Unrecognized text resolves to `Unspecified`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }
}

/// Occupation of the head of family.
///
/// `Unemployed` is an explicit choice and scores 1; an unset occupation
/// scores 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OccupationLevel {
    #[default]
    #[serde(rename = "")]
    Unspecified,
    Unemployed,
    #[serde(rename = "Unskilled Worker")]
    UnskilledWorker,
    #[serde(rename = "Semi-skilled Worker")]
    SemiSkilledWorker,
    #[serde(rename = "Skilled Worker")]
    SkilledWorker,
    #[serde(rename = "Clerical/Shop-owner/Farmer")]
    ClericalShopOwnerFarmer,
    #[serde(rename = "Semi-professional")]
    SemiProfessional,
    Professional,
}

impl OccupationLevel {
    pub const ALL: [OccupationLevel; 8] = [
        OccupationLevel::Unspecified,
        OccupationLevel::Unemployed,
        OccupationLevel::UnskilledWorker,
        OccupationLevel::SemiSkilledWorker,
        OccupationLevel::SkilledWorker,
        OccupationLevel::ClericalShopOwnerFarmer,
        OccupationLevel::SemiProfessional,
        OccupationLevel::Professional,
    ];

    pub fn score(self) -> u32 {
        match self {
            OccupationLevel::Professional => 10,
            OccupationLevel::SemiProfessional => 6,
            OccupationLevel::ClericalShopOwnerFarmer => 5,
            OccupationLevel::SkilledWorker => 4,
            OccupationLevel::SemiSkilledWorker => 3,
            OccupationLevel::UnskilledWorker => 2,
            OccupationLevel::Unemployed => 1,
            OccupationLevel::Unspecified => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OccupationLevel::Unspecified => "",
            OccupationLevel::Unemployed => "Unemployed",
            OccupationLevel::UnskilledWorker => "Unskilled Worker",
            OccupationLevel::SemiSkilledWorker => "Semi-skilled Worker",
            OccupationLevel::SkilledWorker => "Skilled Worker",
            OccupationLevel::ClericalShopOwnerFarmer => "Clerical/Shop-owner/Farmer",
            OccupationLevel::SemiProfessional => "Semi-professional",
            OccupationLevel::Professional => "Professional",
        }
    }

    /// Resolve a form label. Unrecognized text resolves to `Unspecified`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(label))
            .unwrap_or_default()
    }
}

/// The five Kuppuswamy tiers, ordered lowest to highest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum SocioEconomicTier {
    #[default]
    Lower,
    #[serde(rename = "Upper-Lower")]
    UpperLower,
    #[serde(rename = "Lower-Middle")]
    LowerMiddle,
    #[serde(rename = "Upper-Middle")]
    UpperMiddle,
    Upper,
}

impl SocioEconomicTier {
    pub fn label(self) -> &'static str {
        match self {
            SocioEconomicTier::Lower => "Lower",
            SocioEconomicTier::UpperLower => "Upper-Lower",
            SocioEconomicTier::LowerMiddle => "Lower-Middle",
            SocioEconomicTier::UpperMiddle => "Upper-Middle",
            SocioEconomicTier::Upper => "Upper",
        }
    }

    /// Map a total score onto a tier. Lower bounds are inclusive.
    pub fn from_total(total: u32) -> Self {
        TIER_THRESHOLDS
            .iter()
            .find(|(min, _)| total >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(SocioEconomicTier::Lower)
    }
}

impl fmt::Display for SocioEconomicTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Highest first; the first threshold the total reaches wins.
const TIER_THRESHOLDS: [(u32, SocioEconomicTier); 4] = [
    (26, SocioEconomicTier::Upper),
    (16, SocioEconomicTier::UpperMiddle),
    (11, SocioEconomicTier::LowerMiddle),
    (5, SocioEconomicTier::UpperLower),
];

/// Monthly family income in rupees.
pub const INCOME_TABLE: StepTable = StepTable::new(&[
    Breakpoint { at: 0, points: 0 },
    Breakpoint { at: 1, points: 1 },
    Breakpoint { at: 3723, points: 2 },
    Breakpoint { at: 9343, points: 3 },
    Breakpoint { at: 18422, points: 4 },
    Breakpoint { at: 27633, points: 6 },
    Breakpoint { at: 36844, points: 10 },
    Breakpoint { at: 73688, points: 12 },
]);

pub fn income_score(monthly_income: u64) -> u32 {
    INCOME_TABLE.lookup(monthly_income)
}

/// Score breakdown behind a tier, for display next to the derived value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SocioEconomicScore {
    pub education: u32,
    pub occupation: u32,
    pub income: u32,
    pub total: u32,
    pub tier: SocioEconomicTier,
}

pub fn score(
    education: EducationLevel,
    occupation: OccupationLevel,
    monthly_income: u64,
) -> SocioEconomicScore {
    let education = education.score();
    let occupation = occupation.score();
    let income = income_score(monthly_income);
    let total = education + occupation + income;
    SocioEconomicScore {
        education,
        occupation,
        income,
        total,
        tier: SocioEconomicTier::from_total(total),
    }
}

pub fn classify(
    education: EducationLevel,
    occupation: OccupationLevel,
    monthly_income: u64,
) -> SocioEconomicTier {
    score(education, occupation, monthly_income).tier
}

/// Classify with income as captured free text. Anything that is not a plain
/// digit string counts as zero income.
pub fn classify_text(
    education: EducationLevel,
    occupation: OccupationLevel,
    monthly_income: &str,
) -> SocioEconomicTier {
    classify(education, occupation, parse_count(monthly_income))
}
