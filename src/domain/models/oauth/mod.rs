//! # OAuth 통합 모델
//!
//! 외부 OAuth 프로바이더 응답 모델입니다. 현재 지원하는 프로바이더는 카카오 하나입니다.

pub mod kakao_oauth_model;

pub use kakao_oauth_model::*;
