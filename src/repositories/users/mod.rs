//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 `users` 컬렉션을 다룹니다.

pub mod user_repo;

pub use user_repo::UserRepository;
