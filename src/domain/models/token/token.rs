//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 액세스/리프레시 토큰 쌍을 표현합니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 액세스 토큰과 리프레시 토큰이 같은 클레임 구조를 사용하며 만료 시간만 다릅니다.
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID (같은 초에 발급된 토큰도 서로 달라지도록)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 서명이 끝난 토큰과 그 유효 기간
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (15분)
    pub access_token: String,
    /// 리프레시 토큰 (14일)
    pub refresh_token: String,
}
