//! 인증 서비스 모듈
//!
//! - [`token_service`] - HS256 JWT 발급/검증
//! - [`kakao_client`] - 카카오 OAuth HTTP 호출
//! - [`kakao_auth_service`] - 카카오 로그인 URL, 프로필 조회, 사용자 매칭

pub mod token_service;
pub mod kakao_client;
pub mod kakao_auth_service;

pub use token_service::*;
pub use kakao_client::{KakaoApi, KakaoClient};
pub use kakao_auth_service::KakaoAuthService;
