use serde::Deserialize;

/// Catalog entry from `/programs`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AthleticProgram {
    #[serde(rename = "ProgramID")]
    pub program_id: i64,
    #[serde(rename = "ProgramName", default)]
    pub name: Option<String>,
    #[serde(rename = "ProgramSport", default)]
    pub sport: Option<String>,
    #[serde(rename = "ProgramYear", default)]
    pub year: Option<i32>,
    #[serde(rename = "ProgramSeason", default)]
    pub season: Option<String>,
    #[serde(rename = "ProgramFormat", default)]
    pub format: Option<String>,
    #[serde(rename = "ProgramEnvironment", default)]
    pub environment: Option<String>,
    #[serde(rename = "ProgramSortOrder", default)]
    pub sort_order: Option<i32>,
}

/// Division definition from `/divisions`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProgramDivision {
    #[serde(rename = "DivisionID")]
    pub division_id: i64,
    #[serde(rename = "ProgramID")]
    pub program_id: i64,
    #[serde(rename = "DivisionName", default)]
    pub name: Option<String>,
    #[serde(rename = "DivisionFormat", default)]
    pub format: Option<String>,
    #[serde(rename = "DivisionGender", default)]
    pub gender: Option<String>,
    #[serde(rename = "UpperDivision", default)]
    pub upper_division: Option<String>,
    #[serde(rename = "LowerDivision", default)]
    pub lower_division: Option<String>,
}

/// Body of `/health`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
