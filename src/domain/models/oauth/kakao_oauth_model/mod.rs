//! 카카오 OAuth 2.0 응답 모델
//!
//! 카카오 응답을 동적 맵이 아닌 명시적 구조체로 받아 필수 필드를 검증합니다.

pub mod kakao_token;
pub mod kakao_user;

pub use kakao_token::KakaoTokenResponse;
pub use kakao_user::{KakaoAccount, KakaoProfile, KakaoUserInfo, UserProperties};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_parses_required_fields() {
        let body = r#"{
            "token_type": "bearer",
            "access_token": "kakao-access",
            "expires_in": 21599,
            "refresh_token": "kakao-refresh",
            "refresh_token_expires_in": 5183999
        }"#;

        let token = KakaoTokenResponse::parse(body).unwrap();
        assert_eq!(token.access_token, "kakao-access");
        assert_eq!(token.refresh_token, "kakao-refresh");
    }

    #[test]
    fn test_token_response_without_access_token_fails() {
        let body = r#"{"refresh_token": "kakao-refresh"}"#;

        assert!(KakaoTokenResponse::parse(body).is_err());
    }

    #[test]
    fn test_token_response_without_refresh_token_fails() {
        let body = r#"{"access_token": "kakao-access"}"#;

        assert!(KakaoTokenResponse::parse(body).is_err());
    }

    #[test]
    fn test_token_response_with_empty_access_token_fails() {
        let body = r#"{"access_token": "", "refresh_token": "kakao-refresh"}"#;

        assert!(KakaoTokenResponse::parse(body).is_err());
    }

    #[test]
    fn test_provider_error_body_is_rejected() {
        let body = r#"{"error": "invalid_grant", "error_description": "authorization code not found"}"#;

        assert!(KakaoTokenResponse::parse(body).is_err());
    }

    #[test]
    fn test_user_info_into_profile() {
        let body = r#"{
            "id": 123456789,
            "connected_at": "2024-01-01T00:00:00Z",
            "properties": {"nickname": "라이언"},
            "kakao_account": {"email": "ryan@kakao.com", "has_email": true}
        }"#;

        let profile = KakaoUserInfo::parse(body).unwrap().into_profile().unwrap();
        assert_eq!(profile.id, 123456789);
        assert_eq!(profile.email, "ryan@kakao.com");
        assert_eq!(profile.nickname.as_deref(), Some("라이언"));
    }

    #[test]
    fn test_user_info_without_email_fails() {
        let body = r#"{"id": 1, "kakao_account": {"has_email": false}}"#;

        let info = KakaoUserInfo::parse(body).unwrap();
        assert!(info.into_profile().is_err());
    }

    #[test]
    fn test_user_info_without_account_fails() {
        let info = KakaoUserInfo::parse(r#"{"id": 1}"#).unwrap();

        assert!(info.into_profile().is_err());
    }

    #[test]
    fn test_undecodable_user_info_fails() {
        assert!(KakaoUserInfo::parse("<html>bad gateway</html>").is_err());
    }

    #[test]
    fn test_profile_serializes_for_user_info_json() {
        let profile = KakaoProfile {
            id: 7,
            email: "a@kakao.com".to_string(),
            nickname: None,
        };

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "email": "a@kakao.com"}));
    }
}
