//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소에 영속되는 객체 (User, RefreshToken)
//! ├── DTOs      - RPC 요청/응답
//! └── Models    - JWT 클레임, 카카오 응답 모델
//! ```

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
