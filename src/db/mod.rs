//! MongoDB 연결 관리
//!
//! 애플리케이션 시작 시 한 번 연결을 생성하고, 리포지토리들이
//! `Arc<Database>`로 공유합니다. `Client`는 내부적으로 커넥션 풀을
//! 관리하므로 복제 비용이 낮습니다.

use mongodb::{Client, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;
use crate::core::errors::AppResult;

/// MongoDB 데이터베이스 핸들
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 환경 변수(`MONGODB_URI`, `DATABASE_NAME`) 기준으로 연결합니다.
    pub async fn new() -> AppResult<Self> {
        Self::connect(&DatabaseConfig::mongodb_uri(), &DatabaseConfig::database_name()).await
    }

    /// 지정한 URI와 데이터베이스 이름으로 연결하고 `ping`으로 확인합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - URI 파싱 실패 또는 서버 응답 없음
    pub async fn connect(uri: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(uri).await?;

        client_options.app_name = Some("event_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
