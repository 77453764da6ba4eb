use crate::config::Config;
use crate::models::{
    enrollment::Enrollment,
    error::AppError,
    program::{AthleticProgram, HealthStatus, ProgramDivision},
    stats::{
        DivisionStat, LifetimeStat, PlayerEnrollmentStat, ProgramStat, YearStat, YearlyBreakdown,
    },
};
use serde::de::DeserializeOwned;

// QUERY PARAMETERS
/// Optional filters accepted by `/enrollments`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrollmentQuery {
    pub program_id: Option<i64>,
    pub year: Option<i32>,
    pub limit: Option<u32>,
}

impl EnrollmentQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.program_id {
            pairs.push(("program_id", id.to_string()));
        }
        if let Some(year) = self.year {
            pairs.push(("year", year.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

fn with_query(url: String, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return url;
    }
    let query = pairs
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{url}?{query}")
}

// API CONFIGURATION
/// Configuration for the statistics API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn programs_url(&self, year: Option<i32>) -> String {
        let pairs: Vec<_> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        with_query(self.endpoint("/programs"), &pairs)
    }

    pub fn program_url(&self, program_id: i64) -> String {
        self.endpoint(&format!("/programs/{program_id}"))
    }

    pub fn divisions_url(&self, program_id: Option<i64>) -> String {
        let pairs: Vec<_> = program_id
            .map(|id| ("program_id", id.to_string()))
            .into_iter()
            .collect();
        with_query(self.endpoint("/divisions"), &pairs)
    }

    pub fn program_stats_url(&self) -> String {
        self.endpoint("/stats/programs")
    }

    pub fn year_stats_url(&self) -> String {
        self.endpoint("/stats/years")
    }

    pub fn division_stats_url(&self) -> String {
        self.endpoint("/stats/divisions")
    }

    pub fn lifetime_stats_url(&self) -> String {
        self.endpoint("/stats/lifetime")
    }

    pub fn yearly_breakdown_url(&self) -> String {
        self.endpoint("/stats/yearly-breakdown")
    }

    pub fn enrollments_url(&self, query: &EnrollmentQuery) -> String {
        with_query(self.endpoint("/enrollments"), &query.pairs())
    }

    pub fn player_enrollments_url(&self, limit: Option<u32>) -> String {
        let pairs: Vec<_> = limit
            .map(|l| ("limit", l.to_string()))
            .into_iter()
            .collect();
        with_query(self.endpoint("/stats/player-enrollments"), &pairs)
    }

    pub fn health_url(&self) -> String {
        self.endpoint("/health")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Overrides the base URL resolved by `Config::api_base_url`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::api_base_url().to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// STATS CLIENT
/// HTTP client for the athletic programs API.
pub struct StatsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StatsClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub async fn fetch_programs(
        &self,
        year: Option<i32>,
    ) -> Result<Vec<AthleticProgram>, AppError> {
        self.fetch(&self.config.programs_url(year)).await
    }

    pub async fn fetch_program(&self, program_id: i64) -> Result<AthleticProgram, AppError> {
        self.fetch(&self.config.program_url(program_id)).await
    }

    pub async fn fetch_divisions(
        &self,
        program_id: Option<i64>,
    ) -> Result<Vec<ProgramDivision>, AppError> {
        self.fetch(&self.config.divisions_url(program_id)).await
    }

    pub async fn fetch_program_stats(&self) -> Result<Vec<ProgramStat>, AppError> {
        self.fetch(&self.config.program_stats_url()).await
    }

    pub async fn fetch_year_stats(&self) -> Result<Vec<YearStat>, AppError> {
        self.fetch(&self.config.year_stats_url()).await
    }

    pub async fn fetch_division_stats(&self) -> Result<Vec<DivisionStat>, AppError> {
        self.fetch(&self.config.division_stats_url()).await
    }

    pub async fn fetch_lifetime_stats(&self) -> Result<LifetimeStat, AppError> {
        self.fetch(&self.config.lifetime_stats_url()).await
    }

    pub async fn fetch_yearly_breakdown(&self) -> Result<YearlyBreakdown, AppError> {
        self.fetch(&self.config.yearly_breakdown_url()).await
    }

    pub async fn fetch_enrollments(
        &self,
        query: &EnrollmentQuery,
    ) -> Result<Vec<Enrollment>, AppError> {
        self.fetch(&self.config.enrollments_url(query)).await
    }

    pub async fn fetch_player_enrollments(
        &self,
        limit: Option<u32>,
    ) -> Result<Vec<PlayerEnrollmentStat>, AppError> {
        self.fetch(&self.config.player_enrollments_url(limit)).await
    }

    pub async fn fetch_health(&self) -> Result<HealthStatus, AppError> {
        self.fetch(&self.config.health_url()).await
    }

    /// Executes a single GET and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response from {url}: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
    match status.as_u16() {
        404 => AppError::NotFound(format!("Resource not found: {body}")),
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}
