//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계정 서비스의 모든 흐름(회원가입, 로그인, 카카오 로그인)이 공유하는 에러 타입입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 에러를 상태 코드와
//! JSON 응답으로 일관되게 변환합니다.
//!
//! ## 상태 코드 매핑
//!
//! | AppError | 상태 코드 | HTTP |
//! |----------|-----------|------|
//! | `ValidationError` | `INVALID_ARGUMENT` | 400 |
//! | `NotFound` | `NOT_FOUND` | 404 |
//! | `ConflictError` | `ALREADY_EXISTS` | 409 |
//! | `AuthenticationError` | `UNAUTHENTICATED` | 401 |
//! | 그 외 | `INTERNAL` | 500 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! let user = tx.get_user_by_email(email).await?
//!     .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 저장소, 캐시, 외부 API, 서명 실패는 모두 `INTERNAL`로 분류되며
/// 클라이언트가 구분해야 하는 실패만 별도 변형을 가집니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 (로그인 시 이메일 조회 실패)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 에러 (이미 가입된 이메일)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (비밀번호 불일치, 토큰 검증 실패)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스(카카오) 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// RPC 상태 코드
///
/// 호출자에게 노출되는 실패 분류입니다. 재시도 여부는 호출자가 이 코드로 판단합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
    NotFound,
    AlreadyExists,
    Unauthenticated,
    Internal,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::AlreadyExists => "ALREADY_EXISTS",
            ErrorCode::Unauthenticated => "UNAUTHENTICATED",
            ErrorCode::Internal => "INTERNAL",
        }
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidArgument => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::AlreadyExists => StatusCode::CONFLICT,
            ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    /// 에러를 상태 코드로 분류합니다.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ValidationError(_) => ErrorCode::InvalidArgument,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::ConflictError(_) => ErrorCode::AlreadyExists,
            AppError::AuthenticationError(_) => ErrorCode::Unauthenticated,
            AppError::DatabaseError(_)
            | AppError::RedisError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => ErrorCode::Internal,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.code().http_status()
    }

    /// 각 에러를 상태 코드와 `{"code", "error"}` JSON 본문으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "code": self.code().as_str(),
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 `InternalError`로 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error.code(), ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("user not found".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(error.code().as_str(), "NOT_FOUND");
    }

    #[test]
    fn test_conflict_maps_to_already_exists() {
        let error = AppError::ConflictError("email already registered".to_string());

        assert_eq!(error.code(), ErrorCode::AlreadyExists);
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("invalid password".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.code(), ErrorCode::Unauthenticated);
    }

    #[test]
    fn test_infrastructure_errors_are_internal() {
        let errors = [
            AppError::DatabaseError("connection reset".to_string()),
            AppError::RedisError("timeout".to_string()),
            AppError::ExternalServiceError("kakao 502".to_string()),
            AppError::InternalError("signing failed".to_string()),
        ];

        for error in errors {
            assert_eq!(error.code(), ErrorCode::Internal);
            assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        match app_result {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
