use sqlx::error::DatabaseError;
use thiserror::Error;

/// Storage-layer failures, classified so the normalizer can map each to its
/// own table entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Unique constraint failed on the {}", fields.join(", "))]
    UniqueViolation { fields: Vec<String> },
    #[error("Not found")]
    RowNotFound,
    #[error("Storage validation error: {0}")]
    Validation(String),
    #[error("Storage engine failure: {0}")]
    Panic(String),
    #[error("Storage initialization failed: {0}")]
    Init(String),
    #[error("Storage error: {0}")]
    Unknown(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StorageError::RowNotFound,
            sqlx::Error::Database(db) => {
                if db.is_unique_violation() {
                    StorageError::UniqueViolation {
                        fields: unique_violation_fields(&*db),
                    }
                } else {
                    StorageError::Unknown(db.message().to_string())
                }
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::ColumnNotFound(_) => StorageError::Validation(err.to_string()),
            sqlx::Error::Configuration(_) => StorageError::Init(err.to_string()),
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StorageError::Panic(err.to_string()),
            other => StorageError::Unknown(other.to_string()),
        }
    }
}

/// Names of the columns behind a unique-constraint violation.
///
/// Prefers the Postgres error detail ("Key (email)=(..) already exists."),
/// falling back to the constraint name ("users_email_key").
fn unique_violation_fields(db: &dyn DatabaseError) -> Vec<String> {
    if let Some(pg) = db.try_downcast_ref::<sqlx::postgres::PgDatabaseError>() {
        if let Some(fields) = pg.detail().and_then(fields_from_detail) {
            return fields;
        }
    }
    db.constraint()
        .map(fields_from_constraint)
        .unwrap_or_default()
}

fn fields_from_detail(detail: &str) -> Option<Vec<String>> {
    let open = detail.find('(')?;
    let close = detail[open..].find(')')? + open;
    let inner = &detail[open + 1..close];
    if inner.is_empty() {
        return None;
    }
    Some(inner.split(',').map(|f| f.trim().to_string()).collect())
}

/// Heuristic for Postgres default constraint names: `<table>_<column>_key`.
/// Composite names are ambiguous (column names may themselves contain
/// underscores), so the schema's one composite constraint is matched
/// explicitly.
fn fields_from_constraint(name: &str) -> Vec<String> {
    if name == "favourites_user_id_product_id_key" {
        return vec!["user_id".to_string(), "product_id".to_string()];
    }
    let parts: Vec<&str> = name.split('_').collect();
    if parts.len() < 3 {
        return vec![name.to_string()];
    }
    vec![parts[1..parts.len() - 1].join("_")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_yields_single_field() {
        assert_eq!(
            fields_from_detail("Key (email)=(a@b.com) already exists."),
            Some(vec!["email".to_string()])
        );
    }

    #[test]
    fn detail_yields_composite_fields() {
        assert_eq!(
            fields_from_detail("Key (user_id, product_id)=(1, 2) already exists."),
            Some(vec!["user_id".to_string(), "product_id".to_string()])
        );
    }

    #[test]
    fn constraint_name_fallback() {
        assert_eq!(fields_from_constraint("users_email_key"), vec!["email"]);
        assert_eq!(fields_from_constraint("users_activation_link_key"), vec!["activation_link"]);
    }

    #[test]
    fn composite_constraint_name_splits_into_fields() {
        assert_eq!(
            fields_from_constraint("favourites_user_id_product_id_key"),
            vec!["user_id", "product_id"]
        );
    }

    #[test]
    fn unique_violation_message_joins_fields() {
        let err = StorageError::UniqueViolation {
            fields: vec!["email".to_string()],
        };
        assert_eq!(err.to_string(), "Unique constraint failed on the email");

        let err = StorageError::UniqueViolation {
            fields: vec!["user_id".to_string(), "product_id".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unique constraint failed on the user_id, product_id"
        );
    }

    #[test]
    fn row_not_found_is_classified() {
        assert_eq!(StorageError::from(sqlx::Error::RowNotFound), StorageError::RowNotFound);
    }

    #[test]
    fn pool_timeout_is_a_storage_panic() {
        assert!(matches!(
            StorageError::from(sqlx::Error::PoolTimedOut),
            StorageError::Panic(_)
        ));
    }
}
