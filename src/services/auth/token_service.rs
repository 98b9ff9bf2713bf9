//! JWT 토큰 관리 서비스 구현
//!
//! HMAC-SHA256으로 서명한 액세스 토큰(15분)과 리프레시 토큰(14일)을 발급합니다.
//! 두 토큰은 같은 클레임 구조를 사용하며 만료 시간만 다릅니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::errors::AppError;

/// 액세스 토큰 수명. 세션 캐시 TTL과 같습니다.
pub const ACCESS_TOKEN_TTL: Duration = Duration::minutes(15);

/// 리프레시 토큰 수명
pub const REFRESH_TOKEN_TTL: Duration = Duration::days(14);

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시 한 번 받아 보관합니다. 키가 비어 있으면 생성되지 않습니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Result<Self, AppError> {
        if secret.is_empty() {
            return Err(AppError::InternalError("JWT secret must not be empty".to_string()));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let access = token_service.generate_access_token(&user.id)?;
    /// cache.set(&key, &access.token, Duration::from_secs(900)).await?;
    /// ```
    pub fn generate_access_token(&self, user_id: &str) -> Result<IssuedToken, AppError> {
        self.sign(user_id, ACCESS_TOKEN_TTL)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// 반환된 `expires_at`이 리프레시 토큰 행의 만료 시각이 됩니다.
    pub fn generate_refresh_token(&self, user_id: &str) -> Result<IssuedToken, AppError> {
        self.sign(user_id, REFRESH_TOKEN_TTL)
    }

    /// 토큰 서명과 만료를 검증하고 클레임을 반환합니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::AuthenticationError(format!("invalid token: {}", e)))
    }

    fn sign(&self, user_id: &str, ttl: Duration) -> Result<IssuedToken, AppError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + ttl;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken { token, issued_at, expires_at })
    }
}
