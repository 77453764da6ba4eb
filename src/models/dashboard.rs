use std::cmp::Reverse;

use super::enrollment::Enrollment;
use super::stats::{
    DivisionStat, LifetimeStat, PlayerEnrollmentStat, ProgramStat, YearStat, YearlyBreakdown,
    YearlyPoint,
};
use crate::config::Config;

/// Values shown on the four summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryCards {
    pub total_players: u32,
    pub total_families: u32,
    pub programs: usize,
    pub active_years: usize,
}

/// Everything the landing page renders, assembled from one successful load
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    program_stats: Vec<ProgramStat>,
    year_stats: Vec<YearStat>,
    division_stats: Vec<DivisionStat>,
    lifetime: LifetimeStat,
    yearly_breakdown: YearlyBreakdown,
    yearly_series: Vec<YearlyPoint>,
    enrollments: Vec<Enrollment>,
    leaderboard: Vec<PlayerEnrollmentStat>,
}

impl Dashboard {
    pub fn new(
        program_stats: Vec<ProgramStat>,
        year_stats: Vec<YearStat>,
        division_stats: Vec<DivisionStat>,
        lifetime: LifetimeStat,
        yearly_breakdown: YearlyBreakdown,
        enrollments: Vec<Enrollment>,
        mut leaderboard: Vec<PlayerEnrollmentStat>,
    ) -> Self {
        // Stable, so the backend's name ordering survives within equal counts
        leaderboard.sort_by_key(|p| Reverse(p.total_enrollments));
        let yearly_series = yearly_breakdown.series();

        Self {
            program_stats,
            year_stats,
            division_stats,
            lifetime,
            yearly_breakdown,
            yearly_series,
            enrollments,
            leaderboard,
        }
    }

    pub fn summary(&self) -> SummaryCards {
        SummaryCards {
            total_players: self.lifetime.players,
            total_families: self.lifetime.families,
            programs: self.program_stats.len(),
            active_years: self.year_stats.len(),
        }
    }

    pub fn program_stats(&self) -> &[ProgramStat] {
        &self.program_stats
    }

    pub fn year_stats(&self) -> &[YearStat] {
        &self.year_stats
    }

    pub fn yearly_breakdown(&self) -> &YearlyBreakdown {
        &self.yearly_breakdown
    }

    pub fn yearly_series(&self) -> &[YearlyPoint] {
        &self.yearly_series
    }

    pub fn program_chart_height(&self) -> u32 {
        program_chart_height(self.program_stats.len())
    }

    pub fn division_rows(&self) -> &[DivisionStat] {
        table_rows(&self.division_stats)
    }

    pub fn enrollment_rows(&self) -> &[Enrollment] {
        table_rows(&self.enrollments)
    }

    /// Leaderboard entries paired with their 1-based rank
    pub fn ranked_players(&self) -> impl Iterator<Item = (usize, &PlayerEnrollmentStat)> {
        self.leaderboard.iter().enumerate().map(|(i, p)| (i + 1, p))
    }

    pub fn leaderboard_len(&self) -> usize {
        self.leaderboard.len()
    }
}

/// Caps a table at `Config::TABLE_ROW_LIMIT` rows
pub fn table_rows<T>(rows: &[T]) -> &[T] {
    &rows[..rows.len().min(Config::TABLE_ROW_LIMIT)]
}

pub fn program_chart_height(rows: usize) -> u32 {
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    rows.saturating_mul(Config::PROGRAM_CHART_ROW_HEIGHT)
        .max(Config::PROGRAM_CHART_MIN_HEIGHT)
}
