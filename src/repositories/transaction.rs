//! MongoDB 트랜잭션 기반 자격 증명 저장소
//!
//! `ClientSession`으로 다중 문서 트랜잭션을 열고, 사용자/리프레시 토큰
//! 리포지토리를 같은 세션으로 호출합니다.
//!
//! 요청이 중간에 취소되어 [`MongoTransaction`]이 커밋/롤백 없이 버려지면
//! 드라이버가 세션을 정리하면서 진행 중인 트랜잭션을 중단합니다.

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::ClientSession;
use crate::{
    db::Database,
    domain::entities::{RefreshToken, User},
    errors::errors::AppError,
    repositories::{
        CredentialStore, CredentialTx,
        tokens::TokenRepository,
        users::UserRepository,
    },
};

#[derive(Clone)]
pub struct MongoCredentialStore {
    db: Arc<Database>,
    users: UserRepository,
    tokens: TokenRepository,
}

impl MongoCredentialStore {
    pub fn new(db: Arc<Database>) -> Self {
        let users = UserRepository::new(&db);
        let tokens = TokenRepository::new(&db);

        Self { db, users, tokens }
    }

    /// 시작 시 한 번 호출되어 인덱스를 보장합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.users.create_indexes().await?;
        self.tokens.create_indexes().await?;

        log::info!("MongoDB 인덱스 확인 완료: {}", self.db.database_name());
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MongoCredentialStore {
    async fn begin(&self) -> Result<Box<dyn CredentialTx>, AppError> {
        let mut session = self.db
            .client()
            .start_session()
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to start session: {}", e)))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to begin transaction: {}", e)))?;

        Ok(Box::new(MongoTransaction {
            session,
            users: self.users.clone(),
            tokens: self.tokens.clone(),
        }))
    }
}

pub struct MongoTransaction {
    session: ClientSession,
    users: UserRepository,
    tokens: TokenRepository,
}

#[async_trait]
impl CredentialTx for MongoTransaction {
    async fn get_user_by_email(&mut self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(&mut self.session, email).await
    }

    async fn insert_user(&mut self, user: &User) -> Result<String, AppError> {
        self.users.insert(&mut self.session, user).await
    }

    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> Result<(), AppError> {
        self.tokens.insert(&mut self.session, token).await
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let mut session = self.session;
        session
            .commit_transaction()
            .await
            .map_err(|e| {
                if crate::repositories::is_duplicate_key(&e) {
                    AppError::ConflictError("email already registered".to_string())
                } else {
                    AppError::DatabaseError(format!("failed to commit transaction: {}", e))
                }
            })
    }

    async fn rollback(self: Box<Self>) -> Result<(), AppError> {
        let mut session = self.session;
        session
            .abort_transaction()
            .await
            .map_err(|e| AppError::DatabaseError(format!("failed to rollback transaction: {}", e)))
    }
}
