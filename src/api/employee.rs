use crate::{
    error::ApiError,
    model::employee::{CreateEmployee, Employee, UpdateEmployee},
    utils::db_utils::{UpdateBuilder, fetch_updated_row},
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::PgPool;
use tracing::error;

const EMPLOYEE_COLUMNS: &str = "id, name, department, role, start_time, end_time";

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<PgPool>) -> Result<HttpResponse, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(&format!(
        "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id"
    ))
    .fetch_all(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to fetch employees");
        ApiError::Database(e)
    })?;

    Ok(HttpResponse::Ok().json(employees))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Employee),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<PgPool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let created = sqlx::query_as::<_, Employee>(&format!(
        r#"
        INSERT INTO employees (name, department, role, start_time, end_time)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING {EMPLOYEE_COLUMNS}
        "#
    ))
    .bind(&payload.name)
    .bind(&payload.department)
    .bind(&payload.role)
    .bind(&payload.start_time)
    .bind(&payload.end_time)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Failed to create employee");
        ApiError::Database(e)
    })?
    .ok_or(ApiError::Internal)?;

    Ok(HttpResponse::Created().json(created))
}

/// Update Employee (partial: unsupplied fields keep their stored value)
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Employee),
        (status = 400, description = "No fields provided"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();
    let payload = payload.into_inner();

    let update = UpdateBuilder::new("employees", "id")
        .set("name", payload.name)
        .set("department", payload.department)
        .set("role", payload.role)
        .set("start_time", payload.start_time)
        .set("end_time", payload.end_time)
        .build(employee_id, EMPLOYEE_COLUMNS)?;

    let updated = fetch_updated_row::<Employee>(pool.get_ref(), update)
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to update employee");
            ApiError::Database(e)
        })?
        .ok_or_else(|| ApiError::NotFound("Employee not found".to_string()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(("id", Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee 1 deleted successfully"
        })),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(employee_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, employee_id, "Failed to delete employee");
            ApiError::Database(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Employee {employee_id} deleted successfully")
    })))
}
