use crate::{
    auth::password::{hash_password, verify_password},
    error::ApiError,
    model::login_audit::LoginAuditStatus,
    model::user::{CreateUser, LoginRequest, PublicUser, UpdateUser, User},
    utils::db_utils::{UpdateBuilder, fetch_updated_row},
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

const PUBLIC_COLUMNS: &str = "user_id, username, email, created_at";

/// Append a row to the login audit trail. Failures are logged and swallowed:
/// a broken audit insert must not fail the login itself.
async fn record_login_attempt(pool: &PgPool, user_id: Option<i64>, status: LoginAuditStatus) {
    if let Err(e) = sqlx::query("INSERT INTO login_audit (user_id, status) VALUES ($1, $2)")
        .bind(user_id)
        .bind(status.as_str())
        .execute(pool)
        .await
    {
        error!(error = %e, ?user_id, status = status.as_str(), "Failed to record login attempt");
    }
}

/// Create User
#[utoipa::path(
    post,
    path = "/api/users/create",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = PublicUser),
        (status = 400, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "User"
)]
pub async fn create_user(
    pool: web::Data<PgPool>,
    payload: web::Json<CreateUser>,
) -> Result<HttpResponse, ApiError> {
    let username = payload.username.trim();

    if username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Username and password must not be empty".to_string(),
        ));
    }

    let hashed = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "Failed to hash password");
        ApiError::Internal
    })?;

    let created = sqlx::query_as::<_, PublicUser>(&format!(
        r#"
        INSERT INTO users (username, email, password_hash)
        VALUES ($1, $2, $3)
        RETURNING {PUBLIC_COLUMNS}
        "#
    ))
    .bind(username)
    .bind(&payload.email)
    .bind(&hashed)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        let err = ApiError::from_insert(e, "Username or email already exists");
        if let ApiError::Database(inner) = &err {
            error!(error = %inner, "Failed to create user");
        }
        err
    })?
    .ok_or(ApiError::Internal)?;

    Ok(HttpResponse::Created().json(created))
}

/// Get User by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id", Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = PublicUser),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn get_user(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let user = sqlx::query_as::<_, PublicUser>(&format!(
        "SELECT {PUBLIC_COLUMNS} FROM users WHERE user_id = $1"
    ))
    .bind(user_id)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, user_id, "Failed to fetch user");
        ApiError::Database(e)
    })?
    .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(user))
}

/// Update User (partial: unsupplied fields keep their stored value;
/// a supplied password is re-hashed before storage)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id", Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = PublicUser),
        (status = 400, description = "No fields provided, or username/email already exists"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "User"
)]
pub async fn update_user(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUser>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    let payload = payload.into_inner();

    let hashed = match payload.password.as_deref() {
        Some(pw) => Some(hash_password(pw).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            ApiError::Internal
        })?),
        None => None,
    };

    let update = UpdateBuilder::new("users", "user_id")
        .set("username", payload.username)
        .set("email", payload.email)
        .set("password_hash", hashed)
        .build(user_id, PUBLIC_COLUMNS)?;

    let updated = fetch_updated_row::<PublicUser>(pool.get_ref(), update)
        .await
        .map_err(|e| {
            let err = ApiError::from_insert(e, "Username or email already exists");
            if let ApiError::Database(inner) = &err {
                error!(error = %inner, user_id, "Failed to update user");
            }
            err
        })?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete User
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id", Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = Object, example = json!({
            "message": "User deleted"
        })),
        (status = 404, description = "User not found")
    ),
    tag = "User"
)]
pub async fn delete_user(
    pool: web::Data<PgPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
        .bind(user_id)
        .execute(pool.get_ref())
        .await
        .map_err(|e| {
            error!(error = %e, user_id, "Failed to delete user");
            ApiError::Database(e)
        })?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "User deleted" })))
}

/// Login: looks the user up by email and verifies the submitted password
/// against the stored argon2 hash. Every attempt lands in the audit trail.
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = PublicUser),
        (status = 400, description = "Incorrect password"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "User"
)]
#[instrument(name = "user_login", skip(pool, payload), fields(email = %payload.email))]
pub async fn login(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    if payload.email.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "Email and password required".to_string(),
        ));
    }

    debug!("Fetching user from database");

    let user = sqlx::query_as::<_, User>(
        "SELECT user_id, username, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(&payload.email)
    .fetch_optional(pool.get_ref())
    .await
    .map_err(|e| {
        error!(error = %e, "Database error while fetching user");
        ApiError::Database(e)
    })?;

    let user = match user {
        Some(user) => user,
        None => {
            info!("Login failed: no user for email");
            record_login_attempt(pool.get_ref(), None, LoginAuditStatus::Failure).await;
            return Err(ApiError::NotFound("User not found".to_string()));
        }
    };

    if verify_password(&payload.password, &user.password_hash).is_err() {
        info!(user_id = user.user_id, "Login failed: password mismatch");
        record_login_attempt(pool.get_ref(), Some(user.user_id), LoginAuditStatus::Failure).await;
        return Err(ApiError::CredentialMismatch);
    }

    record_login_attempt(pool.get_ref(), Some(user.user_id), LoginAuditStatus::Success).await;

    info!(user_id = user.user_id, "Login successful");

    Ok(HttpResponse::Ok().json(PublicUser {
        user_id: user.user_id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
    }))
}
