//! # 카카오 사용자 정보 모델
//!
//! `/v2/user/me` 응답을 표현합니다. 카카오는 동의하지 않은 항목을 생략하므로
//! 프로필 필드는 대부분 `Option`이며, 이 서비스가 반드시 필요로 하는 것은
//! `kakao_account.email` 하나입니다.

use serde::{Deserialize, Serialize};
use crate::errors::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct KakaoUserInfo {
    /// 카카오 회원번호
    pub id: i64,
    #[serde(default)]
    pub connected_at: Option<String>,
    #[serde(default)]
    pub properties: Option<UserProperties>,
    #[serde(default)]
    pub kakao_account: Option<KakaoAccount>,
}

/// 사용자 프로필 정보
#[derive(Debug, Clone, Deserialize)]
pub struct UserProperties {
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub thumbnail_image: Option<String>,
}

/// 카카오 계정 정보
#[derive(Debug, Clone, Deserialize)]
pub struct KakaoAccount {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub has_email: Option<bool>,
    #[serde(default)]
    pub profile_needs_agreement: Option<bool>,
}

/// 검증이 끝난 카카오 프로필
///
/// 콜백 응답의 `user_info_json`으로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KakaoProfile {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl KakaoUserInfo {
    pub fn parse(body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body).map_err(|e| {
            AppError::ExternalServiceError(format!("카카오 사용자 정보 파싱 실패: {}", e))
        })
    }

    /// 이메일이 있는 프로필로 변환합니다.
    ///
    /// 이메일 제공에 동의하지 않았거나 값이 비어 있으면 로그인을 진행할 수 없습니다.
    pub fn into_profile(self) -> Result<KakaoProfile, AppError> {
        let email = self
            .kakao_account
            .and_then(|account| account.email)
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| {
                AppError::ExternalServiceError("카카오 계정 이메일이 없습니다".to_string())
            })?;

        Ok(KakaoProfile {
            id: self.id,
            email,
            nickname: self.properties.and_then(|p| p.nickname),
        })
    }
}
