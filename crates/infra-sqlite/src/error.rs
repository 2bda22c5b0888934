// sqlx::Error -> AppError mapping

use leadboard_core::application::auth::DUPLICATE_EMAIL_MESSAGE;
use leadboard_core::error::AppError;

/// Convert sqlx::Error to AppError with structured information.
///
/// A UNIQUE violation on `users.email` maps to the same conflict error
/// the sign-up duplicate check raises, so the check/insert race takes
/// the same path as the checked case.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                let code_str = code.as_ref();

                // SQLite error codes: https://www.sqlite.org/rescode.html
                match code_str {
                    "2067" | "1555" => {
                        // UNIQUE constraint failed
                        if db_err.message().contains("users.email") {
                            AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string())
                        } else {
                            AppError::Conflict(format!(
                                "Unique constraint violation: {} ({})",
                                db_err.message(),
                                code_str
                            ))
                        }
                    }
                    "5" => {
                        // SQLITE_BUSY - database is locked
                        AppError::Database(format!(
                            "Database locked (SQLITE_BUSY): {}",
                            db_err.message()
                        ))
                    }
                    "13" => {
                        // SQLITE_FULL - database or disk is full
                        AppError::Database(format!("Database full: {}", db_err.message()))
                    }
                    _ => AppError::Database(format!(
                        "Database error [{}]: {}",
                        code_str,
                        db_err.message()
                    )),
                }
            } else {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        _ => AppError::Database(err.to_string()),
    }
}
