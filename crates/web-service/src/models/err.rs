use async_graphql::ErrorExtensions;
use database::DatabaseError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// 服务层结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 使用 [`thiserror`] 定义错误类型
/// 方便根据类型转换为 GraphQL 错误中的 `extensions.code`
#[derive(Error, Debug)]
pub enum AppError {
    /// 数据验证错误，这种错误通常都是用户参数不正确导致的
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// 参数格式错误（ID、日期等无法解析）
    #[error("{0}")]
    InvalidInput(String),

    /// 仓库层数据库错误
    #[error(transparent)]
    RepositoryError(#[from] DatabaseError),
}

impl AppError {
    /// GraphQL 错误码
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationFailed(_) | AppError::InvalidInput(_) => "BAD_USER_INPUT",
            AppError::RepositoryError(DatabaseError::NotFound(_)) => "NOT_FOUND",
            AppError::RepositoryError(DatabaseError::UniqueViolation(_)) => "UNIQUE_VIOLATION",
            AppError::RepositoryError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// 返回给调用方的错误信息
    ///
    /// 未分类的数据库错误只记录日志，不把细节暴露给调用方
    pub fn message(&self) -> String {
        match self {
            AppError::ValidationFailed(err) => format!("Validate failed: {err}"),
            AppError::InvalidInput(msg) => format!("Invalid input: {msg}"),
            AppError::RepositoryError(DatabaseError::NotFound(msg)) => format!("Resource not found: {msg}"),
            AppError::RepositoryError(DatabaseError::UniqueViolation(constraint)) => {
                format!("Duplicate value violates unique constraint: {constraint}")
            }
            AppError::RepositoryError(err) => {
                error!(error = %err, "❌ 数据库错误");
                "An internal error occurred".to_string()
            }
        }
    }
}

/// Tell async-graphql how to convert `AppError` into a GraphQL error.
impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.message()).extend_with(|_, e| e.set("code", self.code()))
    }
}

/// 将 [`AppResult`] 转换为带错误码的 GraphQL 结果
///
/// 不要直接对 [`AppError`] 使用 `?`，那样会走 async-graphql 基于 `Display` 的转换，丢失错误码
pub trait GraphQLResultExt<T> {
    fn into_graphql(self) -> async_graphql::Result<T>;
}

impl<T> GraphQLResultExt<T> for AppResult<T> {
    fn into_graphql(self) -> async_graphql::Result<T> {
        self.map_err(|e| e.extend())
    }
}
