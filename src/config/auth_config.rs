//! # Authentication Configuration
//!
//! JWT 서명 키와 카카오 OAuth 클라이언트 설정을 정의합니다.
//!
//! ## 보안
//!
//! `JWT_SECRET`은 반드시 환경 변수로 제공되어야 합니다. 코드에 박힌 기본 키로
//! 대체하지 않으며, 값이 없거나 비어 있으면 서비스가 시작되지 않습니다.
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-key"
//! export KAKAO_CLIENT_ID="kakao-rest-api-key"
//! export KAKAO_CLIENT_SECRET="kakao-client-secret"
//! export KAKAO_REDIRECT_URI="https://yourdomain.com/api/v1/account/kakao/callback"
//! ```

use std::fmt;
use std::time::Duration;
use super::{ConfigError, Lookup, optional_parse, optional_string, required_string};

pub const KAKAO_AUTH_URI: &str = "https://kauth.kakao.com/oauth/authorize";
pub const KAKAO_TOKEN_URI: &str = "https://kauth.kakao.com/oauth/token";
pub const KAKAO_USER_INFO_URI: &str =
    "https://kapi.kakao.com/v2/user/me?property_keys=[\"kakao_account.nickname\",\"kakao_account.email\"]";

/// JWT 서명 설정
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            secret: required_string(lookup, "JWT_SECRET")?,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig").field("secret", &"<redacted>").finish()
    }
}

/// 카카오 OAuth 2.0 클라이언트 설정
#[derive(Clone)]
pub struct KakaoOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub user_info_uri: String,
    /// 카카오 API 호출 한 번의 제한 시간
    pub http_timeout: Duration,
}

impl KakaoOAuthConfig {
    pub fn from_lookup(lookup: Lookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            client_id: required_string(lookup, "KAKAO_CLIENT_ID")?,
            client_secret: required_string(lookup, "KAKAO_CLIENT_SECRET")?,
            redirect_uri: required_string(lookup, "KAKAO_REDIRECT_URI")?,
            auth_uri: optional_string(lookup, "KAKAO_AUTH_URI", KAKAO_AUTH_URI),
            token_uri: optional_string(lookup, "KAKAO_TOKEN_URI", KAKAO_TOKEN_URI),
            user_info_uri: optional_string(lookup, "KAKAO_USER_INFO_URI", KAKAO_USER_INFO_URI),
            http_timeout: Duration::from_secs(optional_parse(lookup, "KAKAO_HTTP_TIMEOUT_SECS", 10)?),
        })
    }
}

impl fmt::Debug for KakaoOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KakaoOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("user_info_uri", &self.user_info_uri)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

/// 로그인 경로
///
/// 세션 캐시 키가 경로별로 구분됩니다. 같은 사용자라도 비밀번호 로그인과
/// 카카오 로그인은 서로 다른 캐시 항목을 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthProvider {
    Local,
    Kakao,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Kakao => "kakao",
        }
    }

    /// 사용자의 현재 액세스 토큰이 저장되는 캐시 키
    pub fn session_key(&self, user_id: &str) -> String {
        match self {
            AuthProvider::Local => format!("access_token:{}", user_id),
            AuthProvider::Kakao => format!("kakao_access_token:{}", user_id),
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
    fn test_session_keys() {
        assert_eq!(AuthProvider::Local.session_key("u1"), "access_token:u1");
        assert_eq!(AuthProvider::Kakao.session_key("u1"), "kakao_access_token:u1");
    }

    #[test]
    fn test_jwt_secret_is_required() {
        let lookup = lookup_from(&[]);
        assert!(matches!(
            JwtConfig::from_lookup(&lookup),
            Err(ConfigError::Missing("JWT_SECRET"))
        ));
    }

    #[test]
    fn test_blank_jwt_secret_is_rejected() {
        let lookup = lookup_from(&[("JWT_SECRET", "   ")]);
        assert!(JwtConfig::from_lookup(&lookup).is_err());
    }

    #[test]
    fn test_jwt_debug_redacts_secret() {
        let config = JwtConfig { secret: "top-secret".to_string() };
        assert!(!format!("{:?}", config).contains("top-secret"));
    }

    #[test]
    fn test_kakao_config_uses_default_endpoints() {
        let lookup = lookup_from(&[
            ("KAKAO_CLIENT_ID", "id"),
            ("KAKAO_CLIENT_SECRET", "secret"),
            ("KAKAO_REDIRECT_URI", "http://localhost:8080/callback"),
        ]);

        let config = KakaoOAuthConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.auth_uri, KAKAO_AUTH_URI);
        assert_eq!(config.token_uri, KAKAO_TOKEN_URI);
        assert_eq!(config.user_info_uri, KAKAO_USER_INFO_URI);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_kakao_config_requires_client_credentials() {
        let lookup = lookup_from(&[("KAKAO_CLIENT_ID", "id")]);
        assert!(matches!(
            KakaoOAuthConfig::from_lookup(&lookup),
            Err(ConfigError::Missing("KAKAO_CLIENT_SECRET"))
        ));
    }
}
