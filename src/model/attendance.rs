use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row per (employee_id, date); re-submissions overwrite status,
/// name and department in place.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "Engineering")]
    pub department: String,
    /// "Absent" or "Present at hh:mm:ss AM/PM".
    #[schema(example = "Present at 09:05:00 AM")]
    pub status: String,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// Incoming attendance submission; `status` is the bare "Present"/"Absent"
/// toggle and `date` an unparsed YYYY-MM-DD string.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceSubmission {
    pub employee_id: i64,
    pub name: String,
    pub department: String,
    #[schema(example = "Present")]
    pub status: String,
    #[schema(example = "2024-01-01")]
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DateQuery {
    #[schema(example = "2024-01-01")]
    pub date: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SummaryQuery {
    /// Defaults to the current server date.
    pub date: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct DailySummary {
    #[serde(rename = "totalEmployees")]
    #[schema(example = 5)]
    pub total_employees: i64,
    #[schema(example = 3)]
    pub present: i64,
    #[schema(example = 2)]
    pub absent: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_with_camel_case_total() {
        let summary = DailySummary {
            total_employees: 5,
            present: 3,
            absent: 2,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"totalEmployees": 5, "present": 3, "absent": 2})
        );
    }

    #[test]
    fn record_dates_serialize_as_plain_ymd() {
        let record = AttendanceRecord {
            employee_id: 1,
            name: "John Doe".into(),
            department: "Engineering".into(),
            status: "Absent".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-02");
    }
}
