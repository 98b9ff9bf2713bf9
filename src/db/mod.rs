//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 회원가입/로그인 흐름은 다중 문서 트랜잭션을 사용하므로
//! MongoDB는 레플리카 셋으로 구성되어 있어야 합니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::new(&config.database).await?;
//! let mut session = database.client().start_session().await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 내부적으로 커넥션 풀을 가지며 복제해도 같은 풀을 공유합니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성하고 `ping`으로 연결을 검증합니다.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some("accountsrv".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 세션/트랜잭션을 시작할 때 사용하는 클라이언트
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
