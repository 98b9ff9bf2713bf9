//! Refresh Token Entity
//!
//! 인증 이벤트마다 하나씩 추가되는 리프레시 토큰 문서입니다.

use chrono::{DateTime as ChronoDateTime, Utc};
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 리프레시 토큰 엔티티
///
/// `refresh_tokens` 컬렉션에 저장됩니다. 이 서비스는 행을 추가만 하며
/// 만료된 행을 정리하거나 무효화하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    /// 토큰 행 ID (토큰 값과 별개인 UUID v4)
    #[serde(rename = "_id")]
    pub id: String,
    /// 소유 사용자 ID
    pub user_id: String,
    /// 서명된 리프레시 JWT
    pub token: String,
    /// 절대 만료 시각 (발급 시각 + 14일)
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

impl RefreshToken {
    pub fn new(user_id: &str, token: String, expires_at: ChronoDateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            token,
            expires_at: DateTime::from_millis(expires_at.timestamp_millis()),
            created_at: DateTime::now(),
        }
    }
}
