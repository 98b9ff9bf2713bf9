//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 로컬(이메일/비밀번호) 가입과 카카오 로그인 가입을 하나의 모델로 표현합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// `users` 컬렉션에 저장되는 문서입니다. 이메일이 자연 키이며
/// 저장소 수준의 유니크 인덱스(`email_unique`)로 중복이 차단됩니다.
///
/// 이 서비스는 사용자를 생성만 하고 수정/삭제하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 사용자 ID (UUID v4 문자열)
    #[serde(rename = "_id")]
    pub id: String,
    /// 이메일 (저장된 그대로 대소문자 구분)
    pub email: String,
    /// bcrypt 해시. 카카오 전용 계정은 빈 문자열
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 가입 사용자를 생성합니다.
    pub fn new_local(email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// 카카오 로그인으로 최초 가입하는 사용자를 생성합니다.
    ///
    /// 비밀번호 해시는 비어 있으므로 이 계정은 비밀번호 로그인을 할 수 없습니다.
    pub fn new_kakao(email: String) -> Self {
        Self::new_local(email, String::new())
    }

    pub fn can_authenticate_with_password(&self) -> bool {
        !self.password_hash.is_empty()
    }
}
