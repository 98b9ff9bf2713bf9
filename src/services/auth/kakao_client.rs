//! 카카오 OAuth API 클라이언트
//!
//! 인가 코드 교환과 사용자 정보 조회 두 가지 호출만 담당합니다.
//! 응답 본문은 문자열로 받아 도메인 모델의 `parse`로 검증하며,
//! 2xx가 아닌 응답은 본문을 그대로 에러 메시지에 담습니다.
//! 성공 응답 본문은 로그에 남기지 않습니다.

use async_trait::async_trait;
use crate::config::KakaoOAuthConfig;
use crate::domain::models::oauth::{KakaoTokenResponse, KakaoUserInfo};
use crate::errors::errors::AppError;

/// 카카오 OAuth 프로바이더 호출
#[async_trait]
pub trait KakaoApi: Send + Sync {
    /// 인가 코드를 카카오 토큰으로 교환합니다.
    async fn exchange_code(&self, code: &str) -> Result<KakaoTokenResponse, AppError>;

    /// 카카오 액세스 토큰으로 사용자 정보를 조회합니다.
    async fn fetch_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError>;
}

/// `reqwest` 기반 카카오 API 클라이언트
///
/// 내부 `reqwest::Client`는 커넥션 풀을 가지므로 한 번 만들어 공유합니다.
#[derive(Clone)]
pub struct KakaoClient {
    http: reqwest::Client,
    config: KakaoOAuthConfig,
}

impl KakaoClient {
    pub fn new(config: KakaoOAuthConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { http, config })
    }

    async fn read_body(response: reqwest::Response, what: &str) -> Result<String, AppError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 {} 응답 읽기 실패: {}", what, e)))?;

        if !status.is_success() {
            log::warn!("카카오 {} 실패 ({}): {}", what, status, body);
            return Err(AppError::ExternalServiceError(format!(
                "카카오 {} 실패 ({}): {}", what, status, body
            )));
        }

        log::debug!("{}", success_summary(what, status, &body));
        Ok(body)
    }
}

/// 성공 응답 로그 한 줄. 본문에는 카카오 토큰과 이메일이 들어 있으므로 길이만 남깁니다.
fn success_summary(what: &str, status: reqwest::StatusCode, body: &str) -> String {
    format!("카카오 {} 응답: status={}, {} bytes", what, status, body.len())
}

#[async_trait]
impl KakaoApi for KakaoClient {
    async fn exchange_code(&self, code: &str) -> Result<KakaoTokenResponse, AppError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("code", code),
        ];

        let response = self.http
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 토큰 요청 실패: {}", e)))?;

        let body = Self::read_body(response, "토큰 교환").await?;
        KakaoTokenResponse::parse(&body)
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<KakaoUserInfo, AppError> {
        let response = self.http
            .get(&self.config.user_info_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 사용자 정보 요청 실패: {}", e)))?;

        let body = Self::read_body(response, "사용자 정보 조회").await?;
        KakaoUserInfo::parse(&body)
    }
}
