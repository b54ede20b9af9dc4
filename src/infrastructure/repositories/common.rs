// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::errors::RepositoryError;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{DbErr, SqlErr};

/// 写操作的错误映射：唯一约束冲突 -> Conflict，未更新任何行 -> NotFound
pub(crate) fn map_write_error(err: DbErr) -> RepositoryError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepositoryError::NotFound;
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::Conflict(detail),
        _ => RepositoryError::Database(err),
    }
}

/// 删除结果检查，未删除任何行时返回 NotFound
pub(crate) fn ensure_deleted(rows_affected: u64) -> Result<(), RepositoryError> {
    if rows_affected == 0 {
        Err(RepositoryError::NotFound)
    } else {
        Ok(())
    }
}

/// `LOWER(column) LIKE '%needle%'`，转义 LIKE 通配符
pub(crate) fn contains_ignore_case<C>(column: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    let escaped = needle
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    Expr::expr(Func::lower(Expr::col(column)))
        .like(LikeExpr::new(format!("%{}%", escaped)).escape('\\'))
}


#[cfg(test)]
pub(crate) async fn test_db() -> std::sync::Arc<sea_orm::DatabaseConnection> {
    use crate::config::settings::DatabaseSettings;
    use crate::infrastructure::database::connection::connect_and_migrate;

    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: None,
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
    };
    std::sync::Arc::new(connect_and_migrate(&settings).await.unwrap())
}
