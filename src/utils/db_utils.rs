use crate::error::ApiError;
use sqlx::PgPool;
use sqlx::postgres::PgRow;

/// Bindable value for dynamically built statements.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    I64(i64),
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::I64(v)
    }
}

/// Dynamic UPDATE statement plus its bind values, in placeholder order.
#[derive(Debug)]
pub struct SqlUpdate {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// Builds a partial UPDATE from explicitly optional fields: a `None` field
/// was not supplied by the client and keeps its stored value. Callers
/// enumerate their columns; request JSON never passes through untyped.
pub struct UpdateBuilder {
    table: &'static str,
    id_column: &'static str,
    columns: Vec<&'static str>,
    values: Vec<SqlValue>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str, id_column: &'static str) -> Self {
        Self {
            table,
            id_column,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Records an assignment only when the field was supplied.
    pub fn set<T: Into<SqlValue>>(mut self, column: &'static str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.columns.push(column);
            self.values.push(v.into());
        }
        self
    }

    /// Finishes the statement: `UPDATE t SET c1 = $1, .. WHERE id = $n
    /// RETURNING ..`. An empty field set is a validation error, not a no-op.
    pub fn build(self, id: i64, returning: &str) -> Result<SqlUpdate, ApiError> {
        if self.columns.is_empty() {
            return Err(ApiError::Validation(
                "No fields provided for update".to_string(),
            ));
        }

        let set_clause = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| format!("{} = ${}", col, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            self.table,
            set_clause,
            self.id_column,
            self.columns.len() + 1,
            returning
        );

        let mut values = self.values;
        values.push(SqlValue::I64(id));

        Ok(SqlUpdate { sql, values })
    }
}

/// Runs a built UPDATE and maps the RETURNING row; `None` means no row
/// matched the id.
pub async fn fetch_updated_row<T>(
    pool: &PgPool,
    update: SqlUpdate,
) -> Result<Option<T>, sqlx::Error>
where
    T: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let mut query = sqlx::query_as::<_, T>(&update.sql);

    for value in update.values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::I64(v) => query.bind(v),
        };
    }

    query.fetch_optional(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_placeholders_in_column_order() {
        let update = UpdateBuilder::new("employees", "id")
            .set("name", Some("Ada".to_string()))
            .set("role", Some("Engineer".to_string()))
            .build(7, "id, name, role")
            .unwrap();

        assert_eq!(
            update.sql,
            "UPDATE employees SET name = $1, role = $2 WHERE id = $3 RETURNING id, name, role"
        );
        assert_eq!(
            update.values,
            vec![
                SqlValue::String("Ada".into()),
                SqlValue::String("Engineer".into()),
                SqlValue::I64(7),
            ]
        );
    }

    #[test]
    fn skips_unsupplied_fields() {
        let update = UpdateBuilder::new("employees", "id")
            .set("name", None::<String>)
            .set("department", Some("QA".to_string()))
            .set("role", None::<String>)
            .build(3, "*")
            .unwrap();

        assert_eq!(
            update.sql,
            "UPDATE employees SET department = $1 WHERE id = $2 RETURNING *"
        );
        assert_eq!(update.values.len(), 2);
    }

    #[test]
    fn rejects_an_empty_field_set() {
        let err = UpdateBuilder::new("users", "user_id")
            .set("email", None::<String>)
            .build(1, "*")
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
    }
}
