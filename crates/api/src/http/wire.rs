//! Wire shapes for the backend's JSON and their mapping into domain records.
//!
//! The backend serves loosely-optional payloads; missing optionals are
//! defaulted here, at the boundary, the same way the backend's scraper does
//! (difficulty -> Medium, type -> Public, fees -> 0, program duration -> 3).
//! Unusable required fields are a `Validation` error, never a panic.

use serde::Deserialize;

use scout_core::model::{
    Difficulty, Program, University, UniversityId, UniversityType,
};

use crate::gateway::GatewayError;

#[derive(Debug, Deserialize)]
pub(crate) struct UniversityDto {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub avg_fees: Option<i64>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub admission_requirements: Option<String>,
    #[serde(default)]
    pub programs: Vec<ProgramDto>,
    #[serde(default)]
    pub facilities: Vec<FacilityDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub program_difficulty: Option<String>,
    #[serde(default)]
    pub prospects: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FacilityDto {
    #[serde(default)]
    pub name: Option<String>,
}

fn invalid<E: std::fmt::Display>(e: E) -> GatewayError {
    GatewayError::Validation(e.to_string())
}

fn parse_difficulty(raw: Option<String>) -> Result<Difficulty, GatewayError> {
    match raw {
        None => Ok(Difficulty::Medium),
        Some(label) => label.parse().map_err(invalid),
    }
}

fn parse_kind(raw: Option<String>) -> Result<UniversityType, GatewayError> {
    match raw {
        None => Ok(UniversityType::Public),
        Some(label) => label.parse().map_err(invalid),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn duration_years(raw: Option<f64>) -> u32 {
    // Wire durations are floats; the domain wants whole years, at least one.
    let years = raw.unwrap_or(3.0);
    if !years.is_finite() || years < 1.0 {
        return 1;
    }
    years.floor() as u32
}

pub(crate) fn map_program(dto: ProgramDto) -> Result<Program, GatewayError> {
    let name = dto
        .name
        .ok_or_else(|| GatewayError::Validation("program missing name".into()))?;
    Program::new(
        name,
        duration_years(dto.duration),
        parse_difficulty(dto.program_difficulty)?,
        dto.prospects,
    )
    .map_err(invalid)
}

pub(crate) fn map_university(dto: UniversityDto) -> Result<University, GatewayError> {
    let id = u64::try_from(dto.id)
        .map(UniversityId::new)
        .map_err(|_| GatewayError::Validation(format!("invalid university id: {}", dto.id)))?;
    let name = dto
        .name
        .ok_or_else(|| GatewayError::Validation(format!("university {id} missing name")))?;
    let avg_fees = match dto.avg_fees {
        None => 0,
        Some(fees) => u64::try_from(fees)
            .map_err(|_| GatewayError::Validation(format!("negative fees for university {id}")))?,
    };

    let programs = dto
        .programs
        .into_iter()
        .map(map_program)
        .collect::<Result<Vec<_>, _>>()?;
    let facilities = dto
        .facilities
        .into_iter()
        .filter_map(|facility| facility.name)
        .filter(|name| !name.trim().is_empty())
        .collect();

    University::new(
        id,
        name,
        dto.acronym,
        dto.region.unwrap_or_default(),
        dto.location,
        parse_kind(dto.kind)?,
        avg_fees,
        parse_difficulty(dto.difficulty)?,
        dto.description,
        dto.admission_requirements,
        programs,
        facilities,
    )
    .map_err(invalid)
}

pub(crate) fn map_universities(
    dtos: Vec<UniversityDto>,
) -> Result<Vec<University>, GatewayError> {
    dtos.into_iter().map(map_university).collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
