use crate::utils::time_rules;
use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// Derived row keyed on (employee_id, date). `time_in` and `timeliness`
/// are both null for an absent employee.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct WorkingHour {
    #[schema(example = 1)]
    pub employee_id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    /// Serialized in the 12-hour wire format, e.g. "09:05:00 AM".
    #[serde(serialize_with = "serialize_time_in")]
    #[schema(example = "09:05:00 AM", value_type = Option<String>)]
    pub time_in: Option<NaiveTime>,
    /// "On Time" or "Late"; null when there is no time-in.
    #[schema(example = "Late", nullable = true)]
    pub timeliness: Option<String>,
    #[schema(example = "2024-01-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

fn serialize_time_in<S: Serializer>(
    time_in: &Option<NaiveTime>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match time_in {
        Some(t) => serializer.serialize_str(&time_rules::format_time(*t)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_in_serializes_in_twelve_hour_format() {
        let row = WorkingHour {
            employee_id: 1,
            name: "John Doe".into(),
            time_in: Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
            timeliness: Some("Late".into()),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["time_in"], "02:30:00 PM");
        assert_eq!(json["timeliness"], "Late");
    }

    #[test]
    fn absent_rows_serialize_both_fields_as_null() {
        let row = WorkingHour {
            employee_id: 1,
            name: "John Doe".into(),
            time_in: None,
            timeliness: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["time_in"].is_null());
        assert!(json["timeliness"].is_null());
    }
}
