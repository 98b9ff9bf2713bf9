//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수를 시작 시 한 번 읽어 [`AppConfig`]로 만들고, 이후에는 변경하지 않습니다.
//! 각 컴포넌트는 필요한 설정 구조체를 생성자로 주입받습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis, bcrypt 설정
//! - [`auth_config`] - JWT, 카카오 OAuth 설정
//!
//! ## 환경 변수
//!
//! ```bash
//! # 필수
//! export JWT_SECRET="your-super-secret-key"
//! export KAKAO_CLIENT_ID="..."
//! export KAKAO_CLIENT_SECRET="..."
//! export KAKAO_REDIRECT_URI="https://yourdomain.com/api/v1/account/kakao/callback"
//!
//! # 선택
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export REQUEST_TIMEOUT_SECS="30"
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="accountsrv"
//! export REDIS_URL="redis://localhost:6379"
//! export BCRYPT_COST="12"           # 4-15 범위
//! export KAKAO_HTTP_TIMEOUT_SECS="10"
//! ```
//!
//! MongoDB 트랜잭션은 레플리카 셋(또는 샤드 클러스터)에서만 동작합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::str::FromStr;
use thiserror::Error;

/// 설정 키로 값을 조회하는 함수
///
/// 운영에서는 환경 변수를, 테스트에서는 맵을 사용합니다.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 설정 로드 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub password: PasswordConfig,
    pub jwt: JwtConfig,
    pub kakao: KakaoOAuthConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            server: ServerConfig::from_lookup(lookup)?,
            database: DatabaseConfig::from_lookup(lookup),
            redis: RedisConfig::from_lookup(lookup),
            password: PasswordConfig::from_lookup(lookup, &environment)?,
            jwt: JwtConfig::from_lookup(lookup)?,
            kakao: KakaoOAuthConfig::from_lookup(lookup)?,
            environment,
        })
    }
}

pub(crate) fn required_string(lookup: Lookup<'_>, key: &'static str) -> Result<String, ConfigError> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

pub(crate) fn optional_string(lookup: Lookup<'_>, key: &str, default: &str) -> String {
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(crate) fn optional_parse<T: FromStr>(
    lookup: Lookup<'_>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
