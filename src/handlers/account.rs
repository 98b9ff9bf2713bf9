//! # Account HTTP Handlers
//!
//! 계정 RPC를 JSON over HTTP로 노출합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/account/register` | 회원가입 |
//! | `POST` | `/api/v1/account/login` | 이메일/비밀번호 로그인 |
//! | `GET` | `/api/v1/account/kakao/login-url` | 카카오 인가 URL |
//! | `GET` | `/api/v1/account/kakao/callback?code=` | 카카오 로그인 |
//!
//! 모든 서비스 호출은 `REQUEST_TIMEOUT_SECS` 안에 끝나야 합니다. 제한 시간을 넘기면
//! 진행 중이던 future가 버려지고, 열려 있던 트랜잭션은 세션과 함께 중단됩니다.

use std::future::Future;
use std::time::Duration;
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::config::ServerConfig;
use crate::domain::dto::account::{KakaoCallbackQuery, LoginRequest, RegisterRequest};
use crate::errors::errors::AppError;
use crate::services::account::AccountService;

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/account/register \
///   -H "Content-Type: application/json" \
///   -d '{"email":"user@example.com","password":"secret"}'
/// ```
#[post("/register")]
pub async fn register(
    service: web::Data<AccountService>,
    server: web::Data<ServerConfig>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let response = with_deadline(
        server.request_timeout,
        service.register(&payload.email, &payload.password),
    )
    .await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 로그인
///
/// 성공하면 `{user_id, access_token, refresh_token}`을 반환합니다.
#[post("/login")]
pub async fn login(
    service: web::Data<AccountService>,
    server: web::Data<ServerConfig>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    validate(&*payload)?;

    let response = with_deadline(
        server.request_timeout,
        service.login(&payload.email, &payload.password),
    )
    .await?;

    Ok(HttpResponse::Ok().json(response))
}

#[get("/kakao/login-url")]
pub async fn kakao_login_url(service: web::Data<AccountService>) -> HttpResponse {
    HttpResponse::Ok().json(service.kakao_login_url())
}

/// 카카오 OAuth 콜백
///
/// 카카오가 `redirect_uri`로 돌려보낸 인가 코드를 처리합니다.
#[get("/kakao/callback")]
pub async fn kakao_callback(
    service: web::Data<AccountService>,
    server: web::Data<ServerConfig>,
    query: web::Query<KakaoCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    validate(&*query)?;

    let response = with_deadline(server.request_timeout, service.kakao_callback(&query.code)).await?;

    Ok(HttpResponse::Ok().json(response))
}

fn validate<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))
}

async fn with_deadline<T, F>(timeout: Duration, future: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>>,
{
    match actix_web::rt::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => {
            log::error!("요청 처리 시간 초과: {:?}", timeout);
            Err(AppError::InternalError("request deadline exceeded".to_string()))
        }
    }
}
