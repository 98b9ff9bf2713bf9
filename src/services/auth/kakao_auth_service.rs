//! 카카오 OAuth 2.0 로그인 서비스
//!
//! 로그인 URL 생성, 인가 코드로 프로필 조회, 이메일로 사용자 찾기/생성을 담당합니다.
//! 세션 발급과 트랜잭션 경계는 [`AccountService`](crate::services::account::AccountService)가 관리합니다.
//!
//! ```text
//! code ─► exchange_code ─► fetch_user_info ─► KakaoProfile
//!                                                │
//!                         tx.get_user_by_email ◄─┘
//!                            │ 없으면
//!                            └► tx.insert_user (빈 비밀번호 해시)
//! ```

use std::sync::Arc;
use crate::config::KakaoOAuthConfig;
use crate::domain::entities::User;
use crate::domain::models::oauth::KakaoProfile;
use crate::errors::errors::AppError;
use crate::repositories::CredentialTx;
use crate::services::auth::kakao_client::KakaoApi;

#[derive(Clone)]
pub struct KakaoAuthService {
    api: Arc<dyn KakaoApi>,
    auth_uri: String,
    client_id: String,
    redirect_uri: String,
}

impl KakaoAuthService {
    pub fn new(api: Arc<dyn KakaoApi>, config: &KakaoOAuthConfig) -> Self {
        Self {
            api,
            auth_uri: config.auth_uri.clone(),
            client_id: config.client_id.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    /// 카카오 인가 페이지 URL
    ///
    /// ```text
    /// https://kauth.kakao.com/oauth/authorize?client_id=...&redirect_uri=...&response_type=code
    /// ```
    pub fn login_url(&self) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.auth_uri, query_string)
    }

    /// 인가 코드를 교환하고 이메일이 있는 프로필을 가져옵니다.
    ///
    /// 카카오 토큰은 프로필 조회에만 쓰이고 저장되거나 반환되지 않습니다.
    pub async fn fetch_profile(&self, code: &str) -> Result<KakaoProfile, AppError> {
        let token = self.api.exchange_code(code).await?;
        log::debug!("카카오 토큰 교환 완료");

        let profile = self.api
            .fetch_user_info(&token.access_token)
            .await?
            .into_profile()?;
        log::debug!("카카오 프로필 조회 완료: kakao_id={}", profile.id);

        Ok(profile)
    }

    /// 이메일로 기존 사용자를 찾고, 없으면 비밀번호 없는 계정을 만듭니다.
    ///
    /// 반환값은 사용자 ID와 새로 만들었는지 여부입니다.
    pub async fn resolve_or_create_user(
        &self,
        tx: &mut dyn CredentialTx,
        email: &str,
    ) -> Result<(String, bool), AppError> {
        if let Some(user) = tx.get_user_by_email(email).await? {
            return Ok((user.id, false));
        }

        let user = User::new_kakao(email.to_string());
        let user_id = tx.insert_user(&user).await?;

        Ok((user_id, true))
    }
}
