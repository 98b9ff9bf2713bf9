//! 계정 서비스 백엔드
//!
//! 이메일/비밀번호 회원가입과 로그인, 카카오 OAuth 로그인을 제공하고
//! 인증에 성공하면 HS256 JWT 액세스/리프레시 토큰 쌍을 발급합니다.
//!
//! # Features
//!
//! - **회원가입/로그인**: bcrypt 해싱, 이메일 유니크 인덱스
//! - **카카오 로그인**: 인가 코드 교환, 프로필 조회, 이메일로 계정 매칭/생성
//! - **세션 발급**: 리프레시 토큰 행(MongoDB)과 액세스 토큰 캐시(Redis)
//! - **트랜잭션**: 흐름마다 MongoDB 트랜잭션 하나, 실패 시 롤백
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 입력 검증, 요청 제한 시간
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 계정 흐름, 토큰, 카카오 OAuth
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 트랜잭션 단위 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service::services::account::AccountService;
//!
//! let service = AccountService::new(store, cache, tokens, users, kakao);
//! let response = service.login("user@example.com", "secret").await?;
//! ```

pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub(crate) mod testing;
