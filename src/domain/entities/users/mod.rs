//! 사용자 엔티티 모듈
//!
//! [`User`](user::User) 엔티티를 제공합니다.

pub mod user;

pub use user::User;
