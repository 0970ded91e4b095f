//! API 라우트 설정 모듈
//!
//! 이벤트 API, API 진입점, 헬스체크 엔드포인트를 등록합니다.
//!
//! ```text
//! GET  /health
//! GET  /api
//! POST /api/events
//! GET  /api/events?page=&size=&sort=
//! GET  /api/events/{id}
//! PUT  /api/events/{id}
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(web::Data::new(EventService::new(repository)))
//!     .app_data(web::Data::new(PageConfig::from_env()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, error, get, web};
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 요청 본문, 경로, 쿼리 파싱에 실패하면 400 응답을 반환하도록
/// 추출기 에러 핸들러도 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    cfg.service(handlers::index::index);
    configure_event_routes(cfg);
}

/// 이벤트 라우트를 설정합니다
///
/// - `POST /api/events` - 이벤트 생성
/// - `GET /api/events` - 이벤트 목록
/// - `GET /api/events/{id}` - 이벤트 조회
/// - `PUT /api/events/{id}` - 이벤트 수정
fn configure_event_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/events")
            .service(handlers::events::create_event)
            .service(handlers::events::get_events)
            .service(handlers::events::get_event)
            .service(handlers::events::update_event),
    );
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        error::Error::from(AppError::ValidationError(err.to_string()))
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::ValidationError(err.to_string()))
    }));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "event_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "event_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    use crate::repositories::events::InMemoryEventRepository;
    use crate::test_support::test_app;

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(test_app(Arc::new(InMemoryEventRepository::new()))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "event_service");
    }

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = test::init_service(test_app(Arc::new(InMemoryEventRepository::new()))).await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_unregistered_method_falls_through_to_not_found() {
        let app = test::init_service(test_app(Arc::new(InMemoryEventRepository::new()))).await;

        let req = test::TestRequest::delete().uri("/api/events/1").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
