use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full row, including the stored argon2 hash. Never serialized.
#[derive(Debug, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

/// The fields exposed over the wire; the credential never leaves the row.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct PublicUser {
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "jdoe")]
    pub username: String,
    #[schema(example = "jdoe@example.com")]
    pub email: String,
    #[schema(example = "2024-01-01T09:00:00", value_type = String)]
    pub created_at: NaiveDateTime,
}

// The original clients submit the credential under `password_hash`; newer
// ones send `password`. Both names are accepted on every payload.

#[derive(Deserialize, ToSchema)]
pub struct CreateUser {
    pub username: String,
    #[serde(alias = "password_hash")]
    pub password: String,
    pub email: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateUser {
    pub username: Option<String>,
    #[serde(alias = "password_hash")]
    pub password: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    #[serde(alias = "password_hash")]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_never_carries_a_credential() {
        let user = PublicUser {
            user_id: 1,
            username: "jdoe".into(),
            email: "jdoe@example.com".into(),
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
        };

        let json = serde_json::to_value(&user).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("password_hash"));
        assert_eq!(obj["user_id"], 1);
    }

    #[test]
    fn login_accepts_the_legacy_field_name() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "password_hash": "pw"}"#).unwrap();
        assert_eq!(req.password, "pw");

        let req: LoginRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "pw"}"#).unwrap();
        assert_eq!(req.password, "pw");
    }
}
