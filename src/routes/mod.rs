//! API 라우트 설정 모듈
//!
//! 계정 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(account_service.clone())
//!     .app_data(server_config.clone())
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;
use crate::errors::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문/쿼리 파싱 실패도 `INVALID_ARGUMENT` 응답으로 통일합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);

    configure_account_routes(cfg);
}

/// 계정 관련 라우트
///
/// - `POST /api/v1/account/register`
/// - `POST /api/v1/account/login`
/// - `GET /api/v1/account/kakao/login-url`
/// - `GET /api/v1/account/kakao/callback?code=...`
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/account")
            .service(handlers::account::register)
            .service(handlers::account::login)
            .service(handlers::account::kakao_login_url)
            .service(handlers::account::kakao_callback),
    );
}

/// 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
