use crate::{
    error::ApiError,
    model::attendance::{
        AttendanceRecord, AttendanceSubmission, DailySummary, DateQuery, SummaryQuery,
    },
    utils::time_rules,
};
use actix_web::{HttpResponse, web};
use chrono::{Local, NaiveDate, NaiveTime};
use serde_json::json;
use sqlx::PgPool;
use tracing::{error, info};

const ATTENDANCE_COLUMNS: &str = "employee_id, name, department, status, date";

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Validates the submitted status toggle and derives the stored status
/// string plus the time-in carried over to the working-hours row.
fn resolve_status(status: &str, now: NaiveTime) -> Result<(String, Option<NaiveTime>), ApiError> {
    match status {
        "Present" => Ok((time_rules::present_status(now), Some(now))),
        "Absent" => Ok(("Absent".to_string(), None)),
        other => Err(ApiError::Validation(format!(
            "Unknown attendance status '{other}', expected Present or Absent"
        ))),
    }
}

/// Record or update attendance for one employee on one day.
///
/// "Present" is stored as "Present at hh:mm:ss AM/PM" using the server
/// clock; "Absent" is stored verbatim. The matching working-hours row is
/// derived and upserted in the same request.
#[utoipa::path(
    post,
    path = "/api/attendance/update",
    request_body = AttendanceSubmission,
    responses(
        (status = 200, description = "Attendance recorded", body = Object, example = json!({
            "message": "Attendance updated successfully"
        })),
        (status = 400, description = "Malformed date or unknown status"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    pool: web::Data<PgPool>,
    payload: web::Json<AttendanceSubmission>,
) -> Result<HttpResponse, ApiError> {
    let date = parse_date(&payload.date)?;
    let now = Local::now().time();

    let (status, time_in) = resolve_status(&payload.status, now)?;

    info!(
        employee_id = payload.employee_id,
        date = %date,
        status = %status,
        "Recording attendance"
    );

    // Both writes rely on the (employee_id, date) uniqueness constraint;
    // concurrent submissions resolve in the database, not here.
    sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, name, department, status, date)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (employee_id, date)
        DO UPDATE SET name = EXCLUDED.name,
                      department = EXCLUDED.department,
                      status = EXCLUDED.status
        "#,
    )
    .bind(payload.employee_id)
    .bind(&payload.name)
    .bind(&payload.department)
    .bind(&status)
    .bind(date)
    .execute(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, employee_id = payload.employee_id, "Failed to upsert attendance");
        ApiError::Database(e)
    })?;

    upsert_working_hours(pool.get_ref(), payload.employee_id, &payload.name, time_in, date)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id = payload.employee_id, "Failed to upsert working hours");
            ApiError::Database(e)
        })?;

    Ok(HttpResponse::Ok().json(json!({ "message": "Attendance updated successfully" })))
}

/// Derives time-in and the lateness classification from the submitted
/// status and upserts the working-hours row for the day.
async fn upsert_working_hours(
    pool: &PgPool,
    employee_id: i64,
    name: &str,
    time_in: Option<NaiveTime>,
    date: NaiveDate,
) -> Result<(), sqlx::Error> {
    let timeliness = time_rules::classify_timeliness(time_in);

    sqlx::query(
        r#"
        INSERT INTO working_hours (employee_id, name, time_in, timeliness, date)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (employee_id, date)
        DO UPDATE SET name = EXCLUDED.name,
                      time_in = EXCLUDED.time_in,
                      timeliness = EXCLUDED.timeliness
        "#,
    )
    .bind(employee_id)
    .bind(name)
    .bind(time_in)
    .bind(timeliness)
    .bind(date)
    .execute(pool)
    .await?;

    Ok(())
}

/// Attendance records for one date
#[utoipa::path(
    get,
    path = "/api/attendance/by-date",
    params(("date", Query, description = "Date in YYYY-MM-DD")),
    responses(
        (status = 200, description = "Records for the date", body = Vec<AttendanceRecord>),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "No records for the date")
    ),
    tag = "Attendance"
)]
pub async fn attendance_by_date(
    pool: web::Data<PgPool>,
    query: web::Query<DateQuery>,
) -> Result<HttpResponse, ApiError> {
    let date = parse_date(&query.date)?;

    let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
        "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE date = $1 ORDER BY employee_id"
    ))
    .bind(date)
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, date = %date, "Failed to fetch attendance");
        ApiError::Database(e)
    })?;

    if records.is_empty() {
        return Err(ApiError::NotFound(
            "No attendance records found for the selected date".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(records))
}

/// All attendance records
#[utoipa::path(
    get,
    path = "/api/attendance/all",
    responses(
        (status = 200, description = "Every attendance record", body = Vec<AttendanceRecord>)
    ),
    tag = "Attendance"
)]
pub async fn all_attendance(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, AttendanceRecord>(&format!(
        "SELECT {ATTENDANCE_COLUMNS} FROM attendance ORDER BY date DESC, employee_id"
    ))
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch attendance records");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(records))
}

/// Present/absent counts for a date (default: today)
#[utoipa::path(
    get,
    path = "/api/attendance/today-summary",
    params(("date", Query, description = "Optional date in YYYY-MM-DD, defaults to today")),
    responses(
        (status = 200, description = "Counts for the date", body = DailySummary),
        (status = 400, description = "Malformed date"),
        (status = 404, description = "Summary unavailable")
    ),
    tag = "Attendance"
)]
pub async fn today_summary(
    pool: web::Data<PgPool>,
    query: web::Query<SummaryQuery>,
) -> Result<HttpResponse, ApiError> {
    let date = match query.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    let summary = sqlx::query_as::<_, DailySummary>(
        r#"
        SELECT COUNT(*) AS total_employees,
               COUNT(*) FILTER (WHERE status LIKE 'Present%') AS present,
               COUNT(*) FILTER (WHERE status = 'Absent') AS absent
        FROM attendance
        WHERE date = $1
        "#,
    )
    .bind(date)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, date = %date, "Failed to compute attendance summary");
        ApiError::Database(e)
    })?
    // A COUNT aggregate always yields one row; this guards a misbehaving driver.
    .ok_or_else(|| ApiError::NotFound("No summary available".to_string()))?;

    Ok(HttpResponse::Ok().json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn parses_a_well_formed_date() {
        let date = parse_date("2024-03-09").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["09-03-2024", "2024/03/09", "2024-13-01", "today", ""] {
            let err = parse_date(raw).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn present_is_stamped_with_the_server_time() {
        let (status, time_in) = resolve_status("Present", at(9, 5, 0)).unwrap();
        assert_eq!(status, "Present at 09:05:00 AM");
        assert_eq!(time_in, Some(at(9, 5, 0)));
    }

    #[test]
    fn absent_is_stored_verbatim_without_a_time_in() {
        let (status, time_in) = resolve_status("Absent", at(9, 5, 0)).unwrap();
        assert_eq!(status, "Absent");
        assert_eq!(time_in, None);
    }

    #[test]
    fn rejects_unknown_statuses() {
        for raw in ["present", "ABSENT", "Sick", ""] {
            let err = resolve_status(raw, at(9, 0, 0)).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "accepted {raw:?}");
        }
    }
}
