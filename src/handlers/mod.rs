//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 입력을 검증하고 서비스 계층을 호출합니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문으로 변환합니다.
//!
//! ```text
//! Client ─► Handlers (이 모듈) ─► AccountService ─► CredentialStore / SessionCache / KakaoApi
//! ```

pub mod account;
