//! 계정 요청 DTO
//!
//! RPC 요청 본문을 매핑하고 `validator`로 형식을 검증합니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 로그인 요청
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 카카오 콜백 쿼리 파라미터
#[derive(Debug, Deserialize, Validate)]
pub struct KakaoCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_login_request_rejects_empty_password() {
        let request = LoginRequest {
            email: "user@example.com".to_string(),
            password: String::new(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_callback_query_requires_code() {
        assert!(KakaoCallbackQuery { code: String::new() }.validate().is_err());
        assert!(KakaoCallbackQuery { code: "abc".to_string() }.validate().is_ok());
    }
}
