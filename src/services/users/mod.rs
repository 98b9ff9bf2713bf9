//! 사용자 자격 증명 서비스 모듈
//!
//! bcrypt 비밀번호 해싱/검증과 로컬 사용자 생성을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 해싱 (환경별 cost)
//! - 상수 시간 비밀번호 비교
//! - 이메일 중복은 유니크 인덱스로 최종 보장

pub mod user_service;

pub use user_service::UserService;
