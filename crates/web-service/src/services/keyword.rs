//! 关键词服务
//!
//! 提供关键词相关的业务逻辑操作

use crate::models::AppResult;
use crate::services::traits::KeywordServiceTrait;
use database::{KeywordCreate, KeywordInfo, KeywordRepositoryTrait, KeywordUpdate};
use validator::Validate;

#[derive(Debug, Clone)]
pub struct KeywordService<KR: KeywordRepositoryTrait> {
    keyword_repository: KR,
}

impl<KR: KeywordRepositoryTrait> KeywordService<KR> {
    pub fn new(keyword_repository: KR) -> Self {
        Self { keyword_repository }
    }
}

#[async_trait::async_trait]
impl<KR: KeywordRepositoryTrait> KeywordServiceTrait for KeywordService<KR> {
    async fn find_keywords(&self) -> AppResult<Vec<KeywordInfo>> {
        Ok(self.keyword_repository.find_keywords().await?)
    }

    async fn get_keyword_by_id(&self, id: i32) -> AppResult<KeywordInfo> {
        Ok(self.keyword_repository.get_keyword_by_id(id).await?)
    }

    async fn create_keyword(&self, keyword: KeywordCreate) -> AppResult<KeywordInfo> {
        keyword.validate()?;
        Ok(self.keyword_repository.create_keyword(keyword).await?)
    }

    async fn update_keyword(&self, id: i32, update: KeywordUpdate) -> AppResult<KeywordInfo> {
        update.validate()?;
        Ok(self.keyword_repository.update_keyword(id, update).await?)
    }

    async fn delete_keyword(&self, id: i32) -> AppResult<KeywordInfo> {
        Ok(self.keyword_repository.delete_keyword(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppError;
    use database::MemoryRepository;

    #[tokio::test]
    async fn test_create_keyword_rejects_long_word() {
        let service = KeywordService::new(MemoryRepository::new());

        let err = service
            .create_keyword(KeywordCreate { word: "w".repeat(65) })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ValidationFailed(_)));

        // 校验失败时不会写入仓库
        assert!(service.find_keywords().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_keyword_rejects_long_word() {
        let service = KeywordService::new(MemoryRepository::new());
        let ai = service.create_keyword(KeywordCreate { word: "AI".into() }).await.unwrap();

        let err = service
            .update_keyword(ai.id, KeywordUpdate { word: "w".repeat(65) })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "BAD_USER_INPUT");
        assert_eq!(service.get_keyword_by_id(ai.id).await.unwrap(), ai);
    }

    #[tokio::test]
    async fn test_update_keyword_accepts_empty_word() {
        let service = KeywordService::new(MemoryRepository::new());
        let ai = service.create_keyword(KeywordCreate { word: "AI".into() }).await.unwrap();

        let updated = service
            .update_keyword(ai.id, KeywordUpdate { word: String::new() })
            .await
            .unwrap();
        assert_eq!(updated.word, "");
    }
}
