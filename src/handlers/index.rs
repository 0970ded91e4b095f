//! API 진입점 핸들러
//!
//! 클라이언트는 `GET /api`에서 시작해 링크를 따라 이벤트 API로 이동합니다.
//! 검증 실패 응답의 `index` 링크도 이곳을 가리킵니다.

use actix_web::{HttpRequest, HttpResponse, get};

use crate::core::hal::{HAL_JSON_UTF8, LinkBuilder};
use crate::domain::dto::events::response::IndexResource;
use crate::handlers::events::events_link;

/// API 진입점의 절대 URI (`{scheme}://{host}/api`)
pub fn index_link(req: &HttpRequest) -> String {
    LinkBuilder::from_request(req).slash("api").to_uri()
}

#[get("/api")]
pub async fn index(req: HttpRequest) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(HAL_JSON_UTF8)
        .json(IndexResource::new(events_link(&req).to_uri()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    use crate::repositories::events::InMemoryEventRepository;
    use crate::test_support::test_app;

    #[actix_web::test]
    async fn test_index_links_to_events() {
        let app = test::init_service(test_app(Arc::new(InMemoryEventRepository::new()))).await;

        let req = test::TestRequest::get()
            .uri("/api")
            .insert_header(("Host", "events.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["_links"]["events"]["href"], "http://events.example.com/api/events");
    }
}
