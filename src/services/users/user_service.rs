//! 사용자 자격 증명 서비스
//!
//! 회원가입 시 비밀번호 해싱과 사용자 생성, 로그인 시 비밀번호 검증을 담당합니다.
//! bcrypt 연산은 CPU를 오래 점유하므로 `web::block`으로 블로킹 스레드 풀에서 실행합니다.
//!
//! 모든 저장소 호출은 호출자가 연 트랜잭션 위에서 이뤄집니다.

use actix_web::web;
use crate::domain::entities::User;
use crate::errors::errors::AppError;
use crate::repositories::CredentialTx;

#[derive(Debug, Clone)]
pub struct UserService {
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(bcrypt_cost: u32) -> Self {
        Self { bcrypt_cost }
    }

    /// 새 로컬 사용자를 등록하고 ID를 반환합니다.
    ///
    /// 이메일 사전 조회는 빠른 실패 경로일 뿐이며, 동시에 들어온 같은 이메일은
    /// 유니크 인덱스가 `ConflictError`로 막습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 가입된 이메일
    /// * `AppError::InternalError` - 해싱 실패
    /// * `AppError::DatabaseError` - 조회/삽입 실패
    pub async fn register(
        &self,
        tx: &mut dyn CredentialTx,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        if tx.get_user_by_email(email).await?.is_some() {
            return Err(AppError::ConflictError("email already registered".to_string()));
        }

        let hash_start = std::time::Instant::now();
        let password_hash = self.hash_password(password).await?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(email.to_string(), password_hash);
        tx.insert_user(&user).await
    }

    /// 이메일과 비밀번호로 사용자를 인증합니다.
    ///
    /// 비밀번호 해시가 비어 있는 카카오 전용 계정은 비밀번호로 로그인할 수 없습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 가입되지 않은 이메일
    /// * `AppError::AuthenticationError` - 비밀번호 불일치 또는 비밀번호 없는 계정
    pub async fn authenticate(
        &self,
        tx: &mut dyn CredentialTx,
        email: &str,
        password: &str,
    ) -> Result<User, AppError> {
        let user = tx
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError("invalid password".to_string()));
        }

        let verify_start = std::time::Instant::now();
        let is_valid = Self::verify_password(password, &user.password_hash).await?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(AppError::AuthenticationError("invalid password".to_string()));
        }

        Ok(user)
    }

    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_string();
        let cost = self.bcrypt_cost;

        web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("blocking pool error: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
        let password = password.to_string();
        let hash = hash.to_string();

        web::block(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::InternalError(format!("blocking pool error: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}
