//! 테스트용 메모리 구현체
//!
//! - [`MemoryCredentialStore`] - 트랜잭션 단위로 쓰기를 모았다가 커밋 시 반영
//! - [`MemoryCache`] - 쓰기 실패를 주입할 수 있는 세션 캐시
//! - [`StubKakaoApi`] - 고정된 응답 본문을 돌려주는 카카오 API

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use async_trait::async_trait;
use crate::caching::SessionCache;
use crate::config::{KakaoOAuthConfig, KAKAO_AUTH_URI, KAKAO_TOKEN_URI, KAKAO_USER_INFO_URI};
use crate::domain::entities::{RefreshToken, User};
use crate::domain::models::oauth::{KakaoTokenResponse, KakaoUserInfo};
use crate::errors::errors::AppError;
use crate::repositories::{CredentialStore, CredentialTx};
use crate::services::account::AccountService;
use crate::services::auth::{KakaoApi, KakaoAuthService, TokenService};
use crate::services::users::UserService;

pub const JWT_SECRET: &str = "test-jwt-secret";

pub fn kakao_config() -> KakaoOAuthConfig {
    KakaoOAuthConfig {
        client_id: "test-client-id".to_string(),
        client_secret: "test-client-secret".to_string(),
        redirect_uri: "http://localhost:8080/api/v1/account/kakao/callback".to_string(),
        auth_uri: KAKAO_AUTH_URI.to_string(),
        token_uri: KAKAO_TOKEN_URI.to_string(),
        user_info_uri: KAKAO_USER_INFO_URI.to_string(),
        http_timeout: Duration::from_secs(10),
    }
}

pub fn account_service(
    store: Arc<MemoryCredentialStore>,
    cache: Arc<MemoryCache>,
    kakao: StubKakaoApi,
) -> AccountService {
    AccountService::new(
        store,
        cache,
        TokenService::new(JWT_SECRET).unwrap(),
        UserService::new(4),
        KakaoAuthService::new(Arc::new(kakao), &kakao_config()),
    )
}

#[derive(Default)]
struct StoreState {
    users: Vec<User>,
    refresh_tokens: Vec<RefreshToken>,
    /// 다음 `insert_user` 직전에 다른 트랜잭션이 커밋한 것처럼 반영할 사용자
    committed_before_insert: Option<User>,
}

/// 커밋된 데이터만 다른 트랜잭션에 보이는 메모리 저장소
#[derive(Default)]
pub struct MemoryCredentialStore {
    state: Arc<Mutex<StoreState>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 트랜잭션 없이 커밋된 사용자를 추가합니다.
    pub fn seed(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    /// 이메일 사전 조회와 삽입 사이에 다른 요청이 같은 사용자를 커밋한 상황을 만듭니다.
    pub fn commit_before_next_insert(&self, user: User) {
        self.state.lock().unwrap().committed_before_insert = Some(user);
    }

    pub fn users(&self) -> Vec<User> {
        self.state.lock().unwrap().users.clone()
    }

    pub fn refresh_tokens(&self) -> Vec<RefreshToken> {
        self.state.lock().unwrap().refresh_tokens.clone()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn begin(&self) -> Result<Box<dyn CredentialTx>, AppError> {
        Ok(Box::new(MemoryTx {
            state: self.state.clone(),
            users: Vec::new(),
            refresh_tokens: Vec::new(),
        }))
    }
}

struct MemoryTx {
    state: Arc<Mutex<StoreState>>,
    users: Vec<User>,
    refresh_tokens: Vec<RefreshToken>,
}

impl MemoryTx {
    fn email_taken(&self, email: &str) -> bool {
        self.users.iter().any(|u| u.email == email)
            || self.state.lock().unwrap().users.iter().any(|u| u.email == email)
    }
}

#[async_trait]
impl CredentialTx for MemoryTx {
    async fn get_user_by_email(&mut self, email: &str) -> Result<Option<User>, AppError> {
        if let Some(user) = self.users.iter().find(|u| u.email == email) {
            return Ok(Some(user.clone()));
        }

        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_user(&mut self, user: &User) -> Result<String, AppError> {
        {
            let mut state = self.state.lock().unwrap();
            if let Some(racing) = state.committed_before_insert.take() {
                state.users.push(racing);
            }
        }

        if self.email_taken(&user.email) {
            return Err(AppError::ConflictError("email already registered".to_string()));
        }

        self.users.push(user.clone());
        Ok(user.id.clone())
    }

    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> Result<(), AppError> {
        self.refresh_tokens.push(token.clone());
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();

        if self.users.iter().any(|staged| state.users.iter().any(|u| u.email == staged.email)) {
            return Err(AppError::ConflictError("email already registered".to_string()));
        }

        state.users.extend(self.users.iter().cloned());
        state.refresh_tokens.extend(self.refresh_tokens.iter().cloned());
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), AppError> {
        Ok(())
    }
}

/// 키별 마지막 값과 TTL을 보관하는 캐시
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, (String, Duration)>>,
    fail: AtomicBool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).map(|(value, _)| value.clone())
    }

    pub fn ttl(&self, key: &str) -> Option<Duration> {
        self.entries.lock().unwrap().get(key).map(|(_, ttl)| *ttl)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl SessionCache for MemoryCache {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), AppError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::RedisError("connection refused".to_string()));
        }

        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl));
        Ok(())
    }
}

/// 카카오 응답 본문을 고정해 두는 스텁
pub struct StubKakaoApi {
    token_body: String,
    user_body: String,
}

impl StubKakaoApi {
    const TOKEN_BODY: &'static str = r#"{
        "access_token": "kakao-access-token",
        "refresh_token": "kakao-refresh-token",
        "token_type": "bearer",
        "expires_in": 21599
    }"#;

    pub fn with_email(email: &str) -> Self {
        let user_body = serde_json::json!({
            "id": 1234567890,
            "connected_at": "2024-01-01T00:00:00Z",
            "properties": { "nickname": "kakao-user" },
            "kakao_account": { "email": email, "has_email": true }
        });

        Self {
            token_body: Self::TOKEN_BODY.to_string(),
            user_body: user_body.to_string(),
        }
    }

    pub fn without_email() -> Self {
        Self {
            token_body: Self::TOKEN_BODY.to_string(),
            user_body: r#"{"id": 1234567890, "kakao_account": {"has_email": false}}"#.to_string(),
        }
    }

    pub fn missing_tokens() -> Self {
        Self {
            token_body: r#"{"token_type": "bearer", "access_token": ""}"#.to_string(),
            user_body: String::new(),
        }
    }
}

#[async_trait]
impl KakaoApi for StubKakaoApi {
    async fn exchange_code(&self, _code: &str) -> Result<KakaoTokenResponse, AppError> {
        KakaoTokenResponse::parse(&self.token_body)
    }

    async fn fetch_user_info(&self, _access_token: &str) -> Result<KakaoUserInfo, AppError> {
        KakaoUserInfo::parse(&self.user_body)
    }
}
