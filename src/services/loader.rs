use crate::config::Config;
use crate::models::{
    dashboard::Dashboard,
    enrollment::Enrollment,
    error::AppError,
    stats::{
        DivisionStat, LifetimeStat, PlayerEnrollmentStat, ProgramStat, YearStat, YearlyBreakdown,
    },
};
use crate::services::api::{EnrollmentQuery, StatsClient};

/// The seven reads the dashboard page depends on.
#[allow(async_fn_in_trait)]
pub trait DashboardSource {
    async fn program_stats(&self) -> Result<Vec<ProgramStat>, AppError>;
    async fn year_stats(&self) -> Result<Vec<YearStat>, AppError>;
    async fn division_stats(&self) -> Result<Vec<DivisionStat>, AppError>;
    async fn lifetime_stats(&self) -> Result<LifetimeStat, AppError>;
    async fn yearly_breakdown(&self) -> Result<YearlyBreakdown, AppError>;
    async fn enrollments(&self, query: &EnrollmentQuery) -> Result<Vec<Enrollment>, AppError>;
    async fn player_enrollments(&self, limit: u32) -> Result<Vec<PlayerEnrollmentStat>, AppError>;
}

impl DashboardSource for StatsClient {
    async fn program_stats(&self) -> Result<Vec<ProgramStat>, AppError> {
        self.fetch_program_stats().await
    }

    async fn year_stats(&self) -> Result<Vec<YearStat>, AppError> {
        self.fetch_year_stats().await
    }

    async fn division_stats(&self) -> Result<Vec<DivisionStat>, AppError> {
        self.fetch_division_stats().await
    }

    async fn lifetime_stats(&self) -> Result<LifetimeStat, AppError> {
        self.fetch_lifetime_stats().await
    }

    async fn yearly_breakdown(&self) -> Result<YearlyBreakdown, AppError> {
        self.fetch_yearly_breakdown().await
    }

    async fn enrollments(&self, query: &EnrollmentQuery) -> Result<Vec<Enrollment>, AppError> {
        self.fetch_enrollments(query).await
    }

    async fn player_enrollments(&self, limit: u32) -> Result<Vec<PlayerEnrollmentStat>, AppError> {
        self.fetch_player_enrollments(Some(limit)).await
    }
}

/// Issues every dashboard read at once and waits for all of them.
///
/// The first failure aborts the whole load; no partial dashboard is built.
pub async fn load_dashboard<S: DashboardSource>(source: &S) -> Result<Dashboard, AppError> {
    let enrollment_query = EnrollmentQuery::with_limit(Config::ENROLLMENT_FETCH_LIMIT);

    let (programs, years, divisions, lifetime, yearly, enrollments, leaderboard) = futures::try_join!(
        source.program_stats(),
        source.year_stats(),
        source.division_stats(),
        source.lifetime_stats(),
        source.yearly_breakdown(),
        source.enrollments(&enrollment_query),
        source.player_enrollments(Config::LEADERBOARD_LIMIT),
    )?;

    Ok(Dashboard::new(
        programs,
        years,
        divisions,
        lifetime,
        yearly,
        enrollments,
        leaderboard,
    ))
}

/// Loads the dashboard from the configured backend.
pub async fn fetch_dashboard() -> Result<Dashboard, AppError> {
    load_dashboard(&StatsClient::new()?).await
}
