//! 비즈니스 로직 서비스 모듈
//!
//! - [`account`] - 계정 흐름과 트랜잭션 경계
//! - [`auth`] - JWT 발급/검증, 카카오 OAuth
//! - [`users`] - 비밀번호 해싱과 자격 증명 검증

pub mod account;
pub mod auth;
pub mod users;
