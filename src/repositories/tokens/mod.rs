//! 리프레시 토큰 데이터 액세스 계층

pub mod token_repository;

pub use token_repository::TokenRepository;
