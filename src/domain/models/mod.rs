//! # Domain Models
//!
//! 저장되지 않는 도메인 모델입니다.
//!
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`oauth`] - 카카오 OAuth 응답 모델

pub mod token;
pub mod oauth;
