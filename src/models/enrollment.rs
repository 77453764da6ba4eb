use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

use super::stats::null_as_default;

/// One player's registration into a program division
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Enrollment {
    #[serde(
        rename = "PlayerFirstName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub player_first_name: String,
    #[serde(
        rename = "PlayerLastName",
        default,
        deserialize_with = "null_as_default"
    )]
    pub player_last_name: String,
    #[serde(rename = "ProgramName", default, deserialize_with = "null_as_default")]
    pub program_name: String,
    #[serde(rename = "DivisionName", default, deserialize_with = "null_as_default")]
    pub division_name: String,
    #[serde(
        rename = "OrderDate",
        default,
        deserialize_with = "deserialize_order_date"
    )]
    pub order_date: Option<NaiveDateTime>,
    #[serde(rename = "OrderPaymentStatus", default)]
    pub payment_status: Option<String>,
    #[serde(rename = "ProgramYear", default)]
    pub program_year: Option<i32>,
    #[serde(rename = "TeamName", default)]
    pub team_name: Option<String>,
    #[serde(rename = "DivisionGender", default)]
    pub division_gender: Option<String>,
    #[serde(rename = "ProgramID", default)]
    pub program_id: Option<i64>,
}

/// Visual state of the payment status badge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentBadge {
    pub paid: bool,
    pub label: String,
}

impl PaymentBadge {
    pub fn css_class(&self) -> &'static str {
        if self.paid {
            "payment-badge paid"
        } else {
            "payment-badge pending"
        }
    }
}

impl Enrollment {
    pub fn player_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }

    /// Order date as `MM/DD/YYYY`, or "N/A" when the backend has none
    pub fn order_date_label(&self) -> String {
        self.order_date
            .map_or_else(|| "N/A".to_string(), |d| d.format("%m/%d/%Y").to_string())
    }

    /// Only an exact, case-sensitive "Paid" gets the paid variant
    pub fn payment_badge(&self) -> PaymentBadge {
        let status = self.payment_status.as_deref().filter(|s| !s.is_empty());
        PaymentBadge {
            paid: status == Some("Paid"),
            label: status.unwrap_or("Unknown").to_string(),
        }
    }
}

/// Accepts the backend's ISO-8601 datetimes with or without an offset,
/// fractional seconds, or a time component.
fn deserialize_order_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(s) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }

    parse_order_date(s)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("Failed to parse order date '{s}'")))
}

fn parse_order_date(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    .or_else(|| {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(chrono::NaiveTime::MIN))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_date_variants() {
        assert!(parse_order_date("2024-03-05T12:34:56").is_some());
        assert!(parse_order_date("2024-03-05T12:34:56.123").is_some());
        assert!(parse_order_date("2024-03-05T12:34:56Z").is_some());
        assert!(parse_order_date("2024-03-05 12:34:56").is_some());
        assert!(parse_order_date("2024-03-05").is_some());
        assert!(parse_order_date("March 5th").is_none());
    }

    #[test]
    fn test_offset_keeps_local_wall_time() {
        let dt = parse_order_date("2024-03-05T23:30:00-05:00").unwrap();
        assert_eq!(dt.format("%m/%d/%Y").to_string(), "03/05/2024");
    }
}
