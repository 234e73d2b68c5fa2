use sea_orm::{DbErr, SqlErr};

/// True when `err` comes from a unique index (Postgres `23505`).
///
/// Driver errors are classified through `sql_err`; other errors (mock
/// connections, wrapped messages) fall back to the message text.
pub fn is_unique_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique constraint") || msg.contains("23505")
}

/// True when `err` comes from a foreign key (Postgres `23503`).
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    if let Some(SqlErr::ForeignKeyConstraintViolation(_)) = err.sql_err() {
        return true;
    }

    let msg = err.to_string().to_lowercase();
    msg.contains("foreign key") || msg.contains("23503")
}
