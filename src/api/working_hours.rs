use crate::{error::ApiError, model::working_hour::WorkingHour};
use actix_web::{HttpResponse, web};
use sqlx::PgPool;
use tracing::error;

/// All working-hour rows, newest date first
#[utoipa::path(
    get,
    path = "/api/working-hours/all",
    responses(
        (status = 200, description = "Every working-hours record", body = Vec<WorkingHour>),
        (status = 500, description = "Internal server error")
    ),
    tag = "WorkingHours"
)]
pub async fn all_working_hours(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let rows = sqlx::query_as::<_, WorkingHour>(
        r#"
        SELECT employee_id, name, time_in, timeliness, date
        FROM working_hours
        ORDER BY date DESC, employee_id
        "#,
    )
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch working hours");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(rows))
}
