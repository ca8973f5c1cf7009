use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "John Doe",
        "department": "Engineering",
        "role": "Backend Developer",
        "start_time": "09:00",
        "end_time": "17:00"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(example = "Backend Developer")]
    pub role: String,

    #[schema(example = "09:00", nullable = true)]
    pub start_time: Option<String>,

    #[schema(example = "17:00", nullable = true)]
    pub end_time: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    pub name: String,
    pub department: String,
    pub role: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Partial update: a missing field keeps the stored value.
#[derive(Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
