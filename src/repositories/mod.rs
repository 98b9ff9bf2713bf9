//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 계정 흐름은 저장소를 [`CredentialStore`]/[`CredentialTx`] 트레이트로만 사용합니다.
//! 모든 조회와 삽입은 트랜잭션 핸들 위에서 실행되고, 트랜잭션은
//! 정확히 한 번 `commit` 또는 `rollback`으로 끝납니다.
//!
//! # 구현체
//!
//! - [`transaction::MongoCredentialStore`] - MongoDB 세션 기반 다중 문서 트랜잭션
//!
//! # Examples
//!
//! ```rust,ignore
//! let mut tx = store.begin().await?;
//! let user = tx.get_user_by_email("user@example.com").await?;
//! tx.commit().await?;
//! ```

pub mod users;
pub mod tokens;
pub mod transaction;

use async_trait::async_trait;
use mongodb::error::{ErrorKind, WriteFailure};
use crate::domain::entities::{RefreshToken, User};
use crate::errors::errors::AppError;

/// 트랜잭션을 여는 자격 증명 저장소
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn CredentialTx>, AppError>;
}

/// 진행 중인 트랜잭션
///
/// `commit`/`rollback`은 핸들을 소비하므로 한 트랜잭션은 한 번만 끝낼 수 있습니다.
/// 어느 쪽도 호출하지 않고 버리면 저장소가 트랜잭션을 중단합니다.
#[async_trait]
pub trait CredentialTx: Send {
    /// 이메일로 사용자를 조회합니다. 없으면 `Ok(None)`.
    async fn get_user_by_email(&mut self, email: &str) -> Result<Option<User>, AppError>;

    /// 사용자를 삽입하고 ID를 반환합니다. 이메일 중복은 `ConflictError`.
    async fn insert_user(&mut self, user: &User) -> Result<String, AppError>;

    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> Result<(), AppError>;

    async fn commit(self: Box<Self>) -> Result<(), AppError>;

    async fn rollback(self: Box<Self>) -> Result<(), AppError>;
}

const DUPLICATE_KEY: i32 = 11000;
const WRITE_CONFLICT: i32 = 112;

/// 서버가 돌려준 에러 코드
fn server_code(error: &mongodb::error::Error) -> Option<i32> {
    match *error.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref e)) => Some(e.code),
        ErrorKind::Command(ref e) => Some(e.code),
        _ => None,
    }
}

/// MongoDB 중복 키(E11000) 에러인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    server_code(error) == Some(DUPLICATE_KEY)
}

/// 사용자 삽입 실패가 같은 이메일의 동시 가입 때문인지 확인합니다.
///
/// 트랜잭션 안에서는 다른 트랜잭션이 같은 유니크 키를 먼저 쓰면 E11000이 아니라
/// `WriteConflict`(112)가 돌아옵니다. 새 사용자 문서의 `_id`는 항상 새 UUID이므로
/// 충돌 대상은 `email_unique` 인덱스뿐입니다.
pub(crate) fn is_email_conflict(error: &mongodb::error::Error) -> bool {
    is_email_conflict_code(server_code(error))
}

fn is_email_conflict_code(code: Option<i32>) -> bool {
    matches!(code, Some(DUPLICATE_KEY) | Some(WRITE_CONFLICT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_and_write_conflict_are_email_conflicts() {
        assert!(is_email_conflict_code(Some(DUPLICATE_KEY)));
        assert!(is_email_conflict_code(Some(WRITE_CONFLICT)));
    }

    #[test]
    fn test_other_codes_are_not_email_conflicts() {
        assert!(!is_email_conflict_code(None));
        assert!(!is_email_conflict_code(Some(8000)));
        assert!(!is_email_conflict_code(Some(251)));
    }

    #[test]
    fn test_network_error_is_not_a_conflict() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let error = mongodb::error::Error::from(io);

        assert!(!is_duplicate_key(&error));
        assert!(!is_email_conflict(&error));
    }
}
