//! 카카오 토큰 교환 응답 모델

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 카카오 토큰 엔드포인트(`/oauth/token`) 응답
///
/// 카카오가 발급한 토큰이며 이 서비스의 JWT와는 별개입니다.
/// 콜백 처리 동안 사용자 정보 조회에만 쓰이고 반환되거나 저장되지 않습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoTokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token_expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl KakaoTokenResponse {
    /// 응답 본문을 파싱하고 필수 필드를 검증합니다.
    ///
    /// `access_token`, `refresh_token` 중 하나라도 없거나 비어 있으면 실패합니다.
    pub fn parse(body: &str) -> Result<Self, AppError> {
        let response: Self = serde_json::from_str(body).map_err(|e| {
            AppError::ExternalServiceError(format!("카카오 토큰 응답 파싱 실패: {}", e))
        })?;

        if response.access_token.is_empty() {
            return Err(AppError::ExternalServiceError("no access_token found".to_string()));
        }
        if response.refresh_token.is_empty() {
            return Err(AppError::ExternalServiceError("no refresh_token found".to_string()));
        }

        Ok(response)
    }
}
