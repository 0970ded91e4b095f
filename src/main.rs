//! 이벤트 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. 설정된 저장소(MongoDB 또는
//! 메모리)를 초기화하고 HAL+JSON 이벤트 API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use event_service_backend::config::{
    DatabaseConfig, Environment, PageConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use event_service_backend::db::Database;
use event_service_backend::repositories::events::{
    EventRepository, InMemoryEventRepository, MongoEventRepository,
};
use event_service_backend::routes::configure_all_routes;
use event_service_backend::services::events::EventService;
use event_service_backend::utils::display_terminal::{
    print_boxed_title, print_startup_summary, print_step_complete, print_step_start, print_sub_task,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("🚀 EVENT SERVICE");
    info!("🚀 이벤트 서비스 시작중... (환경: {:?})", Environment::current());

    // 이벤트 저장소 초기화
    let (repository, storage) = initialize_event_repository().await?;

    let service = web::Data::new(EventService::new(repository));
    let page_config = web::Data::new(PageConfig::from_env());

    info!(
        "✅ 서비스 초기화 완료 (기본 페이지 크기 {}, 최대 {})",
        page_config.default_size, page_config.max_size
    );

    // HTTP 서버 시작
    start_http_server(service, page_config, storage).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 적용합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    service: web::Data<EventService>,
    page_config: web::Data<PageConfig>,
    storage: &str,
) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("잘못된 Rate Limiting 설정: {:?}", rate_limit_config),
            )
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    print_startup_summary(
        storage,
        &bind_address,
        &[
            "GET  /health",
            "GET  /api",
            "POST /api/events",
            "GET  /api/events",
            "GET  /api/events/{id}",
            "PUT  /api/events/{id}",
        ],
    );

    let environment = Environment::current();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&environment))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(service.clone())
            .app_data(page_config.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=event_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `STORAGE_BACKEND` 설정에 따라 이벤트 저장소를 준비합니다
///
/// MongoDB를 사용하는 경우 연결 확인과 인덱스 생성까지 마친 뒤 반환합니다.
///
/// # Returns
///
/// * `(Arc<dyn EventRepository>, &str)` - 저장소와 표시용 이름
///
/// # Errors
///
/// * `std::io::Error` - MongoDB 연결 또는 인덱스 생성 실패
async fn initialize_event_repository() -> std::io::Result<(Arc<dyn EventRepository>, &'static str)> {
    print_step_start(1, "Preparing event storage");

    let (repository, storage): (Arc<dyn EventRepository>, &'static str) =
        match DatabaseConfig::storage_backend() {
            StorageBackend::MongoDb => {
                info!("📡 데이터베이스 연결 중...");

                let database = Database::new().await.map_err(|e| {
                    error!("❌ MongoDB 연결 실패: {}", e);
                    std::io::Error::other(e.to_string())
                })?;

                let repository = MongoEventRepository::new(&database);
                repository
                    .create_indexes()
                    .await
                    .map_err(|e| std::io::Error::other(e.to_string()))?;

                print_sub_task("EventRepository", "MongoDB");
                (Arc::new(repository), "MongoDB")
            }
            StorageBackend::Memory => {
                info!("💾 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
                print_sub_task("EventRepository", "In-memory");
                (Arc::new(InMemoryEventRepository::new()), "In-memory")
            }
        };

    print_step_complete(1, "Event storage ready", 1);
    Ok((repository, storage))
}

/// CORS 설정을 구성합니다
///
/// 개발 환경에서는 모든 Origin을 허용하고, 그 외에는 로컬 프론트엔드
/// 주소만 허용합니다. `Location` 헤더는 클라이언트가 읽을 수 있도록
/// 노출합니다.
fn configure_cors(environment: &Environment) -> Cors {
    if *environment == Environment::Development {
        return Cors::permissive().expose_headers(vec![header::LOCATION]);
    }

    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "OPTIONS"])
        // 허용할 헤더
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![header::LOCATION])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
