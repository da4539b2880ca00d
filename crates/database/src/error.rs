use thiserror::Error;

/// 数据库操作错误类型
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLX 错误
    ///
    /// 已经分类过的错误（记录不存在、唯一约束冲突）不会落到这里
    #[error("数据库操作错误: {0}")]
    SqlxError(sqlx::Error),

    /// 连接错误
    #[error("数据库连接错误: {0}")]
    ConnectionError(String),

    /// 迁移错误
    #[error("数据库迁移错误: {0}")]
    MigrationError(String),

    /// 记录不存在
    #[error("记录不存在: {0}")]
    NotFound(String),

    /// 唯一约束冲突，内容为约束名称
    #[error("唯一约束冲突: {0}")]
    UniqueViolation(String),
}

impl DatabaseError {
    /// 创建连接错误
    pub fn connection<T: ToString>(msg: T) -> Self {
        Self::ConnectionError(msg.to_string())
    }

    /// 创建迁移错误
    pub fn migration<T: ToString>(msg: T) -> Self {
        Self::MigrationError(msg.to_string())
    }

    /// 创建记录不存在错误
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// 创建唯一约束冲突错误
    pub fn unique_violation<T: ToString>(constraint: T) -> Self {
        Self::UniqueViolation(constraint.to_string())
    }
}

/// 对 [`sqlx::Error`] 进行分类
///
/// - `RowNotFound` => [`DatabaseError::NotFound`]
/// - 唯一约束冲突 (23505) => [`DatabaseError::UniqueViolation`]
/// - 外键约束冲突 (23503) => [`DatabaseError::NotFound`]，关联的记录不存在
impl From<sqlx::Error> for DatabaseError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            let constraint = db_err.constraint().unwrap_or("unknown");
            if db_err.is_unique_violation() {
                return Self::unique_violation(constraint);
            }
            if db_err.is_foreign_key_violation() {
                return Self::not_found(format!("referenced row ({constraint})"));
            }
        }

        match err {
            sqlx::Error::RowNotFound => Self::not_found("row"),
            other => Self::SqlxError(other),
        }
    }
}
