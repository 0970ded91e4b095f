//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 페이지네이션, Rate Limiting 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 누락되거나 잘못된 값은 기본값으로 대체됩니다.

use std::env;

use log::warn;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수에서 현재 환경을 결정합니다.
    ///
    /// 설정되지 않은 경우 Production으로 간주합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 이벤트 저장소 구현 선택
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB `events` 컬렉션
    MongoDb,
    /// 프로세스 메모리 (재시작 시 데이터 소멸)
    Memory,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            "mongodb" | "mongo" => StorageBackend::MongoDb,
            other => {
                warn!("알 수 없는 STORAGE_BACKEND '{}', mongodb 사용", other);
                StorageBackend::MongoDb
            }
        }
    }
}

/// 데이터베이스 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "event_service_dev".to_string())
    }

    pub fn storage_backend() -> StorageBackend {
        env::var("STORAGE_BACKEND")
            .map(|value| StorageBackend::from_str(&value))
            .unwrap_or(StorageBackend::MongoDb)
    }
}

/// 목록 조회 페이지네이션 설정
///
/// * `PAGE_DEFAULT_SIZE` - size 파라미터가 없거나 잘못된 경우 사용 (기본값: 20)
/// * `PAGE_MAX_SIZE` - 허용하는 최대 size (기본값: 2000)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageConfig {
    pub default_size: u64,
    pub max_size: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_size: 20,
            max_size: 2000,
        }
    }
}

impl PageConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let max_size = read_positive("PAGE_MAX_SIZE").unwrap_or(defaults.max_size);
        let default_size = read_positive("PAGE_DEFAULT_SIZE")
            .unwrap_or(defaults.default_size)
            .min(max_size);

        Self {
            default_size,
            max_size,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                warn!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self {
            per_second,
            burst_size,
        }
    }
}

fn read_positive(key: &str) -> Option<u64> {
    let raw = env::var(key).ok()?;
    match raw.parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => {
            warn!("{} 값 '{}'이(가) 올바르지 않아 기본값을 사용합니다", key, raw);
            None
        }
    }
}
