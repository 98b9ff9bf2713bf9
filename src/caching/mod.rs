//! 캐싱 계층 모듈
//!
//! 세션 캐시는 사용자별 현재 액세스 토큰을 TTL과 함께 보관합니다.
//! 트랜잭션에 포함되지 않으므로 롤백으로 되돌릴 수 없습니다.
//! 그래서 캐시 쓰기는 커밋 직전 마지막 단계에서만 수행됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::SessionCache;
//!
//! cache.set("access_token:123", &access_token, Duration::from_secs(900)).await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;

use std::time::Duration;
use async_trait::async_trait;
use crate::errors::errors::AppError;

/// 키/값 세션 캐시
///
/// 같은 키에 대한 쓰기는 병합되지 않고 마지막 쓰기가 이깁니다.
#[async_trait]
pub trait SessionCache: Send + Sync {
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), AppError>;
}
