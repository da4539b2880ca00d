//! 关键词数据库模型
//!
//! 关键词是用于给项目分类的短文本标签，`word` 全局唯一

use chrono::NaiveDate;
use validator::Validate;

/// `keywords.word` 的最大字符数
pub const KEYWORD_WORD_MAX_LENGTH: usize = 64;

/// 关键词信息结构体
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct KeywordInfo {
    pub id: i32,
    pub word: String,
    /// 创建日期，插入时由系统生成，之后不再修改
    pub date: NaiveDate,
}

/// 关键词创建参数
#[derive(Debug, Clone, Validate)]
pub struct KeywordCreate {
    #[validate(length(max = 64))]
    pub word: String,
}

/// 关键词更新参数
///
/// 只允许修改 `word`
#[derive(Debug, Clone, Validate)]
pub struct KeywordUpdate {
    #[validate(length(max = 64))]
    pub word: String,
}
