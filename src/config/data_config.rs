//! # Data & Server Configuration
//!
//! 실행 환경, 서버, MongoDB, Redis, 비밀번호 해싱 설정을 정의합니다.
//! 모든 값은 시작 시 한 번 읽혀 불변 구조체로 각 컴포넌트에 주입됩니다.

use std::time::Duration;
use super::{ConfigError, Lookup, optional_parse, optional_string};

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값으로 환경을 결정합니다. 값이 없으면 운영 환경으로 간주합니다.
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 요청 하나가 저장소/캐시/카카오 호출을 포함해 끝나야 하는 시간
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: optional_string(lookup, "HOST", "0.0.0.0"),
            port: optional_parse(lookup, "PORT", 8080)?,
            request_timeout: Duration::from_secs(optional_parse(lookup, "REQUEST_TIMEOUT_SECS", 30)?),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            uri: optional_string(lookup, "MONGODB_URI", "mongodb://localhost:27017"),
            database_name: optional_string(lookup, "DATABASE_NAME", "accountsrv"),
        }
    }
}

/// Redis 연결 설정
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

impl RedisConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            url: optional_string(lookup, "REDIS_URL", "redis://localhost:6379"),
        }
    }
}

/// 비밀번호 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`(4~15)가 있으면 그 값을, 없으면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: Lookup<'_>, env: &Environment) -> Result<Self, ConfigError> {
        let bcrypt_cost = match lookup("BCRYPT_COST") {
            Some(raw) => match raw.parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "BCRYPT_COST",
                        value: raw,
                    });
                }
            },
            None => Self::bcrypt_cost_for_env(env),
        };

        Ok(Self { bcrypt_cost })
    }

    /// 환경별 bcrypt cost
    ///
    /// 운영 환경의 12는 검증 한 번에 수백 ms가 걸리는 값입니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_defaults_to_production() {
        let lookup = lookup_from(&[]);
        assert_eq!(Environment::from_lookup(&lookup), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override() {
        let lookup = lookup_from(&[("BCRYPT_COST", "8")]);
        let config = PasswordConfig::from_lookup(&lookup, &Environment::Production).unwrap();
        assert_eq!(config.bcrypt_cost, 8);
    }

    #[test]
    fn test_bcrypt_cost_out_of_range_is_rejected() {
        let lookup = lookup_from(&[("BCRYPT_COST", "31")]);
        assert!(PasswordConfig::from_lookup(&lookup, &Environment::Production).is_err());
    }

    #[test]
    fn test_server_config_defaults() {
        let lookup = lookup_from(&[]);
        let config = ServerConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let lookup = lookup_from(&[("PORT", "eighty")]);
        assert!(ServerConfig::from_lookup(&lookup).is_err());
    }
}
