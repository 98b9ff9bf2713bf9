//! # Data Transfer Objects
//!
//! RPC 경계에서 오가는 요청/응답 구조체입니다. 엔티티를 그대로 노출하지 않으며
//! 비밀번호 해시 같은 내부 필드는 응답에 포함되지 않습니다.

pub mod account;

pub use account::*;
