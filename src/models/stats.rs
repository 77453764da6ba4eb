use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Player and family counts for one program in one year
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProgramStat {
    #[serde(rename = "ProgramName", default, deserialize_with = "null_as_default")]
    pub program_name: String,
    #[serde(rename = "ProgramYear", default, deserialize_with = "null_as_default")]
    pub program_year: i32,
    #[serde(rename = "PlayerCount", default, deserialize_with = "null_as_default")]
    pub player_count: u32,
    #[serde(rename = "FamilyCount", default, deserialize_with = "null_as_default")]
    pub family_count: u32,
}

impl ProgramStat {
    /// Row label used on the program enrollment chart
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.program_year, self.program_name)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct YearStat {
    #[serde(rename = "ProgramYear", default, deserialize_with = "null_as_default")]
    pub program_year: i32,
    #[serde(
        rename = "UniquePlayerCount",
        default,
        deserialize_with = "null_as_default"
    )]
    pub unique_players: u32,
    #[serde(
        rename = "UniqueFamilyCount",
        default,
        deserialize_with = "null_as_default"
    )]
    pub unique_families: u32,
}

/// Player count for one division of a program
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DivisionStat {
    #[serde(rename = "ProgramYear", default, deserialize_with = "null_as_default")]
    pub program_year: i32,
    #[serde(rename = "ProgramName", default, deserialize_with = "null_as_default")]
    pub program_name: String,
    #[serde(rename = "DivisionName", default, deserialize_with = "null_as_default")]
    pub division_name: String,
    #[serde(rename = "DivisionGender", default)]
    pub division_gender: Option<String>,
    #[serde(rename = "Players", default, deserialize_with = "null_as_default")]
    pub players: u32,
    #[serde(rename = "ProgramSeason", default)]
    pub program_season: Option<String>,
    #[serde(rename = "ProgramFormat", default)]
    pub program_format: Option<String>,
    #[serde(rename = "ProgramEnvironment", default)]
    pub program_environment: Option<String>,
}

impl DivisionStat {
    pub fn gender_label(&self) -> &str {
        self.division_gender
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or("N/A")
    }
}

/// Distinct players and families across every year on record
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LifetimeStat {
    #[serde(
        rename = "PlayersLifetime",
        default,
        deserialize_with = "null_as_default"
    )]
    pub players: u32,
    #[serde(
        rename = "FamiliesLifetime",
        default,
        deserialize_with = "null_as_default"
    )]
    pub families: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct YearTotals {
    #[serde(default, deserialize_with = "null_as_default")]
    pub players: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub families: u32,
}

/// One entry of the yearly trend series
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YearlyPoint {
    pub year: String,
    pub players: u32,
    pub families: u32,
}

/// Year-keyed totals as returned by `/stats/yearly-breakdown`.
///
/// The trend chart lists integer keys in numeric order, then any other keys
/// in string order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct YearlyBreakdown {
    years: BTreeMap<String, YearTotals>,
}

impl YearlyBreakdown {
    pub fn new(years: BTreeMap<String, YearTotals>) -> Self {
        Self { years }
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn get(&self, year: &str) -> Option<&YearTotals> {
        self.years.get(year)
    }

    /// Flattens the mapping into an ordered `{year, players, families}` sequence
    pub fn series(&self) -> Vec<YearlyPoint> {
        let mut entries: Vec<_> = self.years.iter().collect();
        entries.sort_by_key(|(year, _)| year_order(year));

        entries
            .into_iter()
            .map(|(year, totals)| YearlyPoint {
                year: year.clone(),
                players: totals.players,
                families: totals.families,
            })
            .collect()
    }
}

/// Sort key placing canonical integers ("7", "2024", not "007") first, by value.
/// The sort is stable, so other keys keep the map's string order.
fn year_order(key: &str) -> (bool, u64) {
    key.parse::<u64>()
        .ok()
        .filter(|n| n.to_string() == key)
        .map_or((true, 0), |n| (false, n))
}

impl FromIterator<YearlyPoint> for YearlyBreakdown {
    fn from_iter<I: IntoIterator<Item = YearlyPoint>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|p| {
                    (
                        p.year,
                        YearTotals {
                            players: p.players,
                            families: p.families,
                        },
                    )
                })
                .collect(),
        )
    }
}

/// A player's count of distinct program enrollments
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlayerEnrollmentStat {
    #[serde(rename = "PlayerId", default, deserialize_with = "null_as_default")]
    pub player_id: i64,
    #[serde(
        rename = "PlayerFirstName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub first_name: String,
    #[serde(
        rename = "PlayerLastName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub last_name: String,
    #[serde(
        rename = "TotalEnrollments",
        default,
        deserialize_with = "null_as_default"
    )]
    pub total_enrollments: u32,
}

impl PlayerEnrollmentStat {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
