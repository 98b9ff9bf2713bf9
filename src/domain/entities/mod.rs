//! # Domain Entities
//!
//! 저장소에 영속되는 핵심 엔티티입니다.
//!
//! - [`users::User`] - `users` 컬렉션
//! - [`tokens::RefreshToken`] - `refresh_tokens` 컬렉션

pub mod users;
pub mod tokens;

pub use users::User;
pub use tokens::RefreshToken;
