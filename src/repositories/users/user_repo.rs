//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 모든 조회/삽입은 호출자가 넘겨준 세션(트랜잭션) 안에서 실행됩니다.
//!
//! ## 데이터 무결성
//!
//! 이메일 중복은 `email_unique` 유니크 인덱스로 저장소 수준에서 차단됩니다.
//! 삽입 전에 수행하는 이메일 조회는 빠른 경로일 뿐이며, 동시에 들어온 두 가입
//! 요청이 모두 조회를 통과하더라도 둘 중 하나는 중복 키 에러로 실패합니다.

use mongodb::{
    bson::doc,
    options::IndexOptions,
    ClientSession, Collection, IndexModel,
};
use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
    repositories::is_email_conflict,
};

pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 이메일로 사용자를 조회합니다. 없으면 `Ok(None)`을 반환합니다.
    pub async fn find_by_email(
        &self,
        session: &mut ClientSession,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        self.collection
            .find_one(doc! { "email": email })
            .session(&mut *session)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자를 삽입하고 ID를 반환합니다.
    ///
    /// 이메일 유니크 인덱스 위반과, 같은 이메일을 먼저 쓴 트랜잭션과의
    /// `WriteConflict`는 `ConflictError`로 변환됩니다.
    pub async fn insert(&self, session: &mut ClientSession, user: &User) -> Result<String, AppError> {
        self.collection
            .insert_one(user)
            .session(&mut *session)
            .await
            .map_err(|e| {
                if is_email_conflict(&e) {
                    AppError::ConflictError("email already registered".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        Ok(user.id.clone())
    }

    /// 이메일 유니크 인덱스를 생성합니다. 이미 있으면 아무 일도 하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
