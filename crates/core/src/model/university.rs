use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::UniversityId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UniversityError {
    #[error("university name cannot be empty")]
    EmptyName,

    #[error("program name cannot be empty")]
    EmptyProgramName,

    #[error("program duration must be at least 1 year")]
    InvalidDuration,

    #[error("unknown difficulty level: {0}")]
    UnknownDifficulty(String),

    #[error("unknown university type: {0}")]
    UnknownType(String),
}

//
// ─── ENUMS ─────────────────────────────────────────────────────────────────────
//

/// Admission difficulty on the fixed four-level ordered scale.
///
/// Ordering follows the scale rank, never the lexical order of the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Difficulty {
    /// All levels in ascending rank order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Low,
        Difficulty::Medium,
        Difficulty::High,
        Difficulty::VeryHigh,
    ];

    /// Rank on the ordered scale: Low=0, Medium=1, High=2, Very High=3.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Difficulty::Low => 0,
            Difficulty::Medium => 1,
            Difficulty::High => 2,
            Difficulty::VeryHigh => 3,
        }
    }

    /// The backend label for this level.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Low => "Low",
            Difficulty::Medium => "Medium",
            Difficulty::High => "High",
            Difficulty::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = UniversityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Difficulty::Low),
            "Medium" => Ok(Difficulty::Medium),
            "High" => Ok(Difficulty::High),
            "Very High" => Ok(Difficulty::VeryHigh),
            other => Err(UniversityError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// Institution ownership type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UniversityType {
    Public,
    Private,
}

impl UniversityType {
    pub const ALL: [UniversityType; 2] = [UniversityType::Public, UniversityType::Private];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UniversityType::Public => "Public",
            UniversityType::Private => "Private",
        }
    }
}

impl fmt::Display for UniversityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UniversityType {
    type Err = UniversityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Public" => Ok(UniversityType::Public),
            "Private" => Ok(UniversityType::Private),
            other => Err(UniversityError::UnknownType(other.to_string())),
        }
    }
}

//
// ─── PROGRAM ───────────────────────────────────────────────────────────────────
//

/// A degree program offered by a university.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    name: String,
    duration_years: u32,
    program_difficulty: Difficulty,
    prospects: Option<String>,
}

impl Program {
    /// Creates a new Program.
    ///
    /// # Errors
    ///
    /// Returns `UniversityError::EmptyProgramName` if the name is empty or
    /// whitespace-only, `UniversityError::InvalidDuration` if duration is zero.
    pub fn new(
        name: impl Into<String>,
        duration_years: u32,
        program_difficulty: Difficulty,
        prospects: Option<String>,
    ) -> Result<Self, UniversityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UniversityError::EmptyProgramName);
        }
        if duration_years == 0 {
            return Err(UniversityError::InvalidDuration);
        }

        let prospects = prospects
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty());

        Ok(Self {
            name: name.trim().to_owned(),
            duration_years,
            program_difficulty,
            prospects,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }

    #[must_use]
    pub fn program_difficulty(&self) -> Difficulty {
        self.program_difficulty
    }

    #[must_use]
    pub fn prospects(&self) -> Option<&str> {
        self.prospects.as_deref()
    }
}

//
// ─── UNIVERSITY ────────────────────────────────────────────────────────────────
//

/// One university record as served by the backend.
///
/// Records are immutable once constructed; the client replaces the whole
/// dataset on refresh instead of mutating individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct University {
    id: UniversityId,
    name: String,
    acronym: Option<String>,
    region: String,
    location: Option<String>,
    kind: UniversityType,
    avg_fees: u64,
    difficulty: Difficulty,
    description: Option<String>,
    admission_requirements: Option<String>,
    programs: Vec<Program>,
    facilities: Vec<String>,
}

impl University {
    /// Creates a new University.
    ///
    /// # Errors
    ///
    /// Returns `UniversityError::EmptyName` if the name is empty or
    /// whitespace-only.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: UniversityId,
        name: impl Into<String>,
        acronym: Option<String>,
        region: impl Into<String>,
        location: Option<String>,
        kind: UniversityType,
        avg_fees: u64,
        difficulty: Difficulty,
        description: Option<String>,
        admission_requirements: Option<String>,
        programs: Vec<Program>,
        facilities: Vec<String>,
    ) -> Result<Self, UniversityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UniversityError::EmptyName);
        }

        let acronym = acronym.map(|a| a.trim().to_owned()).filter(|a| !a.is_empty());
        let location = location
            .map(|l| l.trim().to_owned())
            .filter(|l| !l.is_empty());
        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());
        let admission_requirements = admission_requirements
            .map(|r| r.trim().to_owned())
            .filter(|r| !r.is_empty());

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            acronym,
            region: region.into().trim().to_owned(),
            location,
            kind,
            avg_fees,
            difficulty,
            description,
            admission_requirements,
            programs,
            facilities,
        })
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> UniversityId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn acronym(&self) -> Option<&str> {
        self.acronym.as_deref()
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    #[must_use]
    pub fn kind(&self) -> UniversityType {
        self.kind
    }

    /// Annual average fees in TZS.
    #[must_use]
    pub fn avg_fees(&self) -> u64 {
        self.avg_fees
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn admission_requirements(&self) -> Option<&str> {
        self.admission_requirements.as_deref()
    }

    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Facility names in backend insertion order.
    #[must_use]
    pub fn facilities(&self) -> &[String] {
        &self.facilities
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
