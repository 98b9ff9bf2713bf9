//! 계정 응답 DTO
use serde::{Deserialize, Serialize};

/// 회원가입 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// 로그인 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
}

/// 카카오 로그인 URL 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct KakaoLoginUrlResponse {
    pub login_url: String,
}

/// 카카오 콜백 응답
///
/// 토큰은 이 서비스가 발급한 JWT이며 카카오 토큰이 아닙니다.
#[derive(Debug, Serialize, Deserialize)]
pub struct KakaoCallbackResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// 카카오 프로필(id, email, nickname)의 JSON 문자열
    pub user_info_json: String,
}
