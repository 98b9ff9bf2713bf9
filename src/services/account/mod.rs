//! 계정 흐름 오케스트레이션
//!
//! 회원가입, 로그인, 카카오 로그인 흐름마다 트랜잭션을 하나 열고
//! 성공하면 커밋, 실패하면 롤백합니다.

pub mod account_service;

pub use account_service::AccountService;
