//! 리프레시 토큰 리포지토리
//!
//! `refresh_tokens` 컬렉션에 인증 이벤트마다 한 행씩 추가합니다.
//! 이전 행은 정리하지 않으므로 사용자별로 누적됩니다.

use mongodb::{
    bson::doc,
    options::IndexOptions,
    ClientSession, Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::tokens::refresh_token::RefreshToken,
    errors::errors::AppError,
};

pub const REFRESH_TOKENS_COLLECTION: &str = "refresh_tokens";

#[derive(Clone)]
pub struct TokenRepository {
    collection: Collection<RefreshToken>,
}

impl TokenRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<RefreshToken>(REFRESH_TOKENS_COLLECTION),
        }
    }

    pub async fn insert(&self, session: &mut ClientSession, token: &RefreshToken) -> Result<(), AppError> {
        self.collection
            .insert_one(token)
            .session(&mut *session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 사용자별 조회를 위한 `user_id` 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id_idx".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
