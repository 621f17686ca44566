use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use anamnesis_scoring::duration::{parse_count, sanitize_digits};
use anamnesis_scoring::kuppuswamy::{
    self, EducationLevel, OccupationLevel, SocioEconomicScore, SocioEconomicTier,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Sex {
    #[default]
    Male,
    Female,
    Other,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BloodGroup {
    #[default]
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    pub fn label(self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MaritalStatus {
    #[default]
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

/// A single demographics field edited from the form as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DemographicsField {
    Name,
    Age,
    Address,
    AttendantName,
    PhoneNumber,
    Religion,
    Education,
    Occupation,
    FamilyIncome,
}

/// Patient demographics plus the socio-economic inputs for the head of family.
///
/// The socio-economic tier is derived. Its inputs (education, occupation,
/// family income) are only writable through setters that re-derive the tier,
/// and deserialization re-derives it too, so a stored tier can never drift
/// from its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", from = "DemographicsRecord")]
#[ts(export)]
pub struct Demographics {
    pub name: String,
    pub age: String,
    pub sex: Sex,
    pub address: String,
    pub attendant_name: String,
    pub phone_number: String,
    pub blood_group: BloodGroup,
    pub marital_status: MaritalStatus,
    pub religion: String,
    occupation: OccupationLevel,
    education: EducationLevel,
    family_income: String,
    socio_economic_status: SocioEconomicTier,
}

impl Default for Demographics {
    fn default() -> Self {
        DemographicsRecord::default().into()
    }
}

impl Demographics {
    pub fn education(&self) -> EducationLevel {
        self.education
    }

    pub fn occupation(&self) -> OccupationLevel {
        self.occupation
    }

    /// Monthly family income as captured (digits only).
    pub fn family_income(&self) -> &str {
        &self.family_income
    }

    pub fn monthly_income(&self) -> u64 {
        parse_count(&self.family_income)
    }

    pub fn socio_economic_status(&self) -> SocioEconomicTier {
        self.socio_economic_status
    }

    pub fn socio_economic_score(&self) -> SocioEconomicScore {
        kuppuswamy::score(self.education, self.occupation, self.monthly_income())
    }

    pub fn set_education(&mut self, education: EducationLevel) {
        self.education = education;
        self.refresh_tier();
    }

    pub fn set_occupation(&mut self, occupation: OccupationLevel) {
        self.occupation = occupation;
        self.refresh_tier();
    }

    pub fn set_family_income(&mut self, income: &str) {
        self.family_income = sanitize_digits(income);
        self.refresh_tier();
    }

    /// Apply a text edit to one field. Phone number and income are reduced to
    /// digits; education and occupation resolve through their form labels.
    pub fn edit(&mut self, field: DemographicsField, value: &str) {
        match field {
            DemographicsField::Name => self.name = value.to_string(),
            DemographicsField::Age => self.age = value.to_string(),
            DemographicsField::Address => self.address = value.to_string(),
            DemographicsField::AttendantName => self.attendant_name = value.to_string(),
            DemographicsField::PhoneNumber => self.phone_number = sanitize_digits(value),
            DemographicsField::Religion => self.religion = value.to_string(),
            DemographicsField::Education => self.education = EducationLevel::from_label(value),
            DemographicsField::Occupation => self.occupation = OccupationLevel::from_label(value),
            DemographicsField::FamilyIncome => self.family_income = sanitize_digits(value),
        }
        self.refresh_tier();
    }

    fn refresh_tier(&mut self) {
        self.socio_economic_status =
            kuppuswamy::classify(self.education, self.occupation, self.monthly_income());
    }
}

/// Wire shape of [`Demographics`]. Any incoming tier is ignored, and
/// education and occupation resolve through their form labels so an
/// unrecognized label loads as unset instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct DemographicsRecord {
    name: String,
    age: String,
    sex: Sex,
    address: String,
    attendant_name: String,
    phone_number: String,
    blood_group: BloodGroup,
    marital_status: MaritalStatus,
    religion: String,
    #[serde(deserialize_with = "occupation_label")]
    occupation: OccupationLevel,
    #[serde(deserialize_with = "education_label")]
    education: EducationLevel,
    family_income: String,
}

fn education_label<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EducationLevel, D::Error> {
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label
        .map(|l| EducationLevel::from_label(&l))
        .unwrap_or_default())
}

fn occupation_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<OccupationLevel, D::Error> {
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label
        .map(|l| OccupationLevel::from_label(&l))
        .unwrap_or_default())
}

impl From<DemographicsRecord> for Demographics {
    fn from(record: DemographicsRecord) -> Self {
        let mut demographics = Demographics {
            name: record.name,
            age: record.age,
            sex: record.sex,
            address: record.address,
            attendant_name: record.attendant_name,
            phone_number: sanitize_digits(&record.phone_number),
            blood_group: record.blood_group,
            marital_status: record.marital_status,
            religion: record.religion,
            occupation: record.occupation,
            education: record.education,
            family_income: sanitize_digits(&record.family_income),
            socio_economic_status: SocioEconomicTier::Lower,
        };
        demographics.refresh_tier();
        demographics
    }
}
