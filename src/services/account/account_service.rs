//! 계정 서비스
//!
//! 외부에 노출되는 네 가지 계정 흐름을 구현합니다.
//!
//! | 흐름 | 트랜잭션 | 세션 발급 |
//! |------|----------|-----------|
//! | `register` | O | X |
//! | `login` | O | `access_token:{id}` |
//! | `kakao_login_url` | X | X |
//! | `kakao_callback` | O | `kakao_access_token:{id}` |
//!
//! 세션 발급 순서는 액세스 토큰 서명, 리프레시 토큰 서명, 리프레시 토큰 행 삽입,
//! 캐시 쓰기입니다. 캐시는 롤백되지 않으므로 커밋 직전에 마지막으로 씁니다.
//! 캐시 쓰기가 실패하면 트랜잭션 전체가 롤백됩니다.

use std::sync::Arc;
use crate::caching::SessionCache;
use crate::config::AuthProvider;
use crate::domain::dto::account::{
    KakaoCallbackResponse, KakaoLoginUrlResponse, LoginResponse, RegisterResponse,
};
use crate::domain::entities::RefreshToken;
use crate::domain::models::token::TokenPair;
use crate::errors::errors::{AppError, ErrorCode, ErrorContext};
use crate::repositories::{CredentialStore, CredentialTx};
use crate::services::auth::{KakaoAuthService, TokenService, ACCESS_TOKEN_TTL};
use crate::services::users::UserService;

pub struct AccountService {
    store: Arc<dyn CredentialStore>,
    cache: Arc<dyn SessionCache>,
    tokens: TokenService,
    users: UserService,
    kakao: KakaoAuthService,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn CredentialStore>,
        cache: Arc<dyn SessionCache>,
        tokens: TokenService,
        users: UserService,
        kakao: KakaoAuthService,
    ) -> Self {
        Self { store, cache, tokens, users, kakao }
    }

    /// 이메일/비밀번호 회원가입
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResponse, AppError> {
        log::info!("회원가입 요청: email={}", email);

        let mut tx = self.store.begin().await?;
        let result = self.users.register(tx.as_mut(), email, password).await;
        let user_id = Self::finish(tx, result)
            .await
            .inspect_err(|e| Self::log_failure("회원가입", email, e))?;

        log::info!("회원가입 완료: user_id={}", user_id);

        Ok(RegisterResponse {
            message: format!("Registration successful, user ID: {}", user_id),
        })
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 가입되지 않은 이메일
    /// * `AppError::AuthenticationError` - 비밀번호 불일치
    /// * 저장소/캐시 실패는 `INTERNAL`로 분류되며 트랜잭션은 롤백됩니다.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, AppError> {
        log::info!("로그인 요청: email={}", email);

        let mut tx = self.store.begin().await?;
        let result = self.login_in_tx(tx.as_mut(), email, password).await;
        let (user_id, pair) = Self::finish(tx, result)
            .await
            .inspect_err(|e| Self::log_failure("로그인", email, e))?;

        log::info!("로그인 성공: user_id={}", user_id);

        Ok(LoginResponse {
            user_id,
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        })
    }

    /// 카카오 인가 페이지 URL. 저장소나 네트워크를 사용하지 않습니다.
    pub fn kakao_login_url(&self) -> KakaoLoginUrlResponse {
        KakaoLoginUrlResponse {
            login_url: self.kakao.login_url(),
        }
    }

    /// 카카오 인가 코드로 로그인합니다.
    ///
    /// 프로필 조회까지는 트랜잭션 밖에서 진행하므로 카카오 호출이 실패하면
    /// 저장소에는 아무것도 열리지 않습니다.
    pub async fn kakao_callback(&self, code: &str) -> Result<KakaoCallbackResponse, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::ValidationError("code must not be empty".to_string()));
        }

        log::info!("카카오 콜백 처리 시작");

        let profile = self.kakao
            .fetch_profile(code)
            .await
            .inspect_err(|e| Self::log_failure("카카오 프로필 조회", "-", e))?;

        let user_info_json = serde_json::to_string(&profile).context("카카오 프로필 직렬화 실패")?;

        let mut tx = self.store.begin().await?;
        let result = self.kakao_login_in_tx(tx.as_mut(), &profile.email).await;
        let (user_id, pair) = Self::finish(tx, result)
            .await
            .inspect_err(|e| Self::log_failure("카카오 로그인", &profile.email, e))?;

        log::info!("카카오 로그인 성공: user_id={}, kakao_id={}", user_id, profile.id);

        Ok(KakaoCallbackResponse {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            user_info_json,
        })
    }

    async fn login_in_tx(
        &self,
        tx: &mut dyn CredentialTx,
        email: &str,
        password: &str,
    ) -> Result<(String, TokenPair), AppError> {
        let user = self.users.authenticate(tx, email, password).await?;
        log::debug!("비밀번호 검증 완료: user_id={}", user.id);

        let pair = self.issue_session(tx, &user.id, AuthProvider::Local).await?;
        Ok((user.id, pair))
    }

    async fn kakao_login_in_tx(
        &self,
        tx: &mut dyn CredentialTx,
        email: &str,
    ) -> Result<(String, TokenPair), AppError> {
        let (user_id, created) = self.kakao.resolve_or_create_user(tx, email).await?;
        log::debug!("카카오 사용자 매칭: user_id={}, created={}", user_id, created);

        let pair = self.issue_session(tx, &user_id, AuthProvider::Kakao).await?;
        Ok((user_id, pair))
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰 행과 캐시 항목을 기록합니다.
    async fn issue_session(
        &self,
        tx: &mut dyn CredentialTx,
        user_id: &str,
        provider: AuthProvider,
    ) -> Result<TokenPair, AppError> {
        let access = self.tokens.generate_access_token(user_id)?;
        let refresh = self.tokens.generate_refresh_token(user_id)?;

        let row = RefreshToken::new(user_id, refresh.token.clone(), refresh.expires_at);
        tx.insert_refresh_token(&row).await?;
        log::debug!("리프레시 토큰 저장: user_id={}, provider={}", user_id, provider.as_str());

        // 커밋 전 마지막 단계
        let ttl = ACCESS_TOKEN_TTL.to_std().context("세션 TTL 변환 실패")?;
        self.cache
            .set(&provider.session_key(user_id), &access.token, ttl)
            .await?;

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
        })
    }

    /// 성공하면 커밋하고 실패하면 롤백합니다.
    ///
    /// 롤백 실패는 로그만 남기고 원래 에러를 반환합니다.
    async fn finish<T>(tx: Box<dyn CredentialTx>, result: Result<T, AppError>) -> Result<T, AppError> {
        match result {
            Ok(value) => {
                tx.commit().await?;
                Ok(value)
            }
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    log::error!("트랜잭션 롤백 실패: {}", rollback_error);
                }
                Err(error)
            }
        }
    }

    fn log_failure(flow: &str, email: &str, error: &AppError) {
        match error.code() {
            ErrorCode::Internal => log::error!("{} 실패: email={}, {}", flow, email, error),
            _ => log::warn!("{} 실패: email={}, {}", flow, email, error),
        }
    }
}
