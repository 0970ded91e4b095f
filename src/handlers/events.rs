//! # Event HTTP Handlers
//!
//! 이벤트 리소스의 HTTP 엔드포인트입니다. 모든 성공 응답은
//! `application/hal+json;charset=UTF-8` 문서이며 다음 상태로 이동할 수
//! 있는 링크를 포함합니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/events` | 이벤트 생성 | 201 / 400 |
//! | `GET` | `/api/events` | 페이지 단위 목록 | 200 / 400 |
//! | `GET` | `/api/events/{id}` | 단건 조회 | 200 / 404 |
//! | `PUT` | `/api/events/{id}` | 이벤트 수정 | 200 / 400 / 404 |
//!
//! ## 검증 실패 응답
//!
//! ```json
//! {
//!   "content": [
//!     { "objectName": "eventCreateRequest", "field": "basePrice",
//!       "code": "wrongValue", "defaultMessage": "BasePrice is wrong",
//!       "rejectedValue": 10000 }
//!   ],
//!   "_links": { "index": { "href": "http://localhost:8080/api" } }
//! }
//! ```

use actix_web::{HttpRequest, HttpResponse, get, http::header, post, put, web};

use crate::config::PageConfig;
use crate::core::errors::AppError;
use crate::core::hal::{HAL_JSON_UTF8, LinkBuilder, REL_PROFILE};
use crate::domain::dto::events::request::EventCreateRequest;
use crate::domain::dto::events::response::{ErrorsResource, EventResource, PagedEventsResource};
use crate::domain::models::{Errors, Pageable};
use crate::handlers::index::index_link;
use crate::services::events::EventService;

pub const REL_QUERY_EVENTS: &str = "query-events";
pub const REL_UPDATE_EVENT: &str = "update-event";

const PROFILE_CREATE: &str = "/docs/index.html#resources-events-create";
const PROFILE_LIST: &str = "/docs/index.html#resources-events-list";
const PROFILE_GET: &str = "/docs/index.html#resources-events-get";
const PROFILE_UPDATE: &str = "/docs/index.html#resources-events-update";

/// 이벤트 컬렉션 URI (`{scheme}://{host}/api/events`)
pub fn events_link(req: &HttpRequest) -> LinkBuilder {
    LinkBuilder::from_request(req).slash("api").slash("events")
}

fn bad_request(req: &HttpRequest, errors: Errors) -> HttpResponse {
    HttpResponse::BadRequest()
        .content_type(HAL_JSON_UTF8)
        .json(ErrorsResource::new(errors, index_link(req)))
}

/// 새 이벤트를 생성합니다.
///
/// 생성된 이벤트는 항상 `DRAFT` 상태이며 `free`/`offline`은 서버가
/// 계산합니다. 응답의 `Location` 헤더는 새 이벤트의 URI입니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/events \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Spring","description":"REST API Development with Spring",
///        "beginEnrollmentDateTime":"2018-11-23T14:21:00",
///        "closeEnrollmentDateTime":"2018-11-24T14:21:00",
///        "beginEventDateTime":"2018-11-25T14:21:00",
///        "endEventDateTime":"2018-11-26T14:21:00",
///        "basePrice":100,"maxPrice":200,"limitOfEnrollment":100,
///        "location":"강남역 D2 스타텁 팩토리"}'
/// ```
#[post("")]
pub async fn create_event(
    req: HttpRequest,
    service: web::Data<EventService>,
    payload: web::Json<EventCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();

    if let Err(errors) = service.validate(&request) {
        return Ok(bad_request(&req, errors));
    }

    let event = service.create_event(request).await?;

    let events = events_link(&req);
    let resource = EventResource::new(event, &events)?;
    let location = events.slash(resource.id).to_uri();

    let resource = resource
        .with_link(REL_QUERY_EVENTS, events.to_uri())
        .with_link(REL_UPDATE_EVENT, location.clone())
        .with_link(REL_PROFILE, PROFILE_CREATE);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .content_type(HAL_JSON_UTF8)
        .json(resource))
}

/// 이벤트 목록을 페이지 단위로 조회합니다.
///
/// 쿼리 파라미터: `page`(0부터), `size`, `sort=prop[,prop][,asc|desc]`(반복 가능)
#[get("")]
pub async fn get_events(
    req: HttpRequest,
    service: web::Data<EventService>,
    page_config: web::Data<PageConfig>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let pageable = Pageable::from_query(&query, &page_config);

    let events = events_link(&req);
    let page = service
        .get_events(&pageable)
        .await?
        .try_map(|event| EventResource::new(event, &events))?;

    let mut resource = PagedEventsResource::assemble(page, &pageable, &events);
    resource.add_link(REL_PROFILE, PROFILE_LIST);

    Ok(HttpResponse::Ok().content_type(HAL_JSON_UTF8).json(resource))
}

/// 이벤트 하나를 조회합니다. 없으면 본문 없는 404를 반환합니다.
#[get("/{id}")]
pub async fn get_event(
    req: HttpRequest,
    service: web::Data<EventService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let Some(event) = service.get_event(id).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let resource = EventResource::new(event, &events_link(&req))?.with_link(REL_PROFILE, PROFILE_GET);

    Ok(HttpResponse::Ok().content_type(HAL_JSON_UTF8).json(resource))
}

/// 기존 이벤트를 수정합니다.
///
/// 식별자와 진행 상태는 유지되며, 요청 본문은 생성과 같은 규칙으로
/// 검증됩니다.
#[put("/{id}")]
pub async fn update_event(
    req: HttpRequest,
    service: web::Data<EventService>,
    path: web::Path<i64>,
    payload: web::Json<EventCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    let Some(existing) = service.get_event(id).await? else {
        return Ok(HttpResponse::NotFound().finish());
    };

    let request = payload.into_inner();
    if let Err(errors) = service.validate(&request) {
        return Ok(bad_request(&req, errors));
    }

    let event = service.update_event(existing, request).await?;
    let resource = EventResource::new(event, &events_link(&req))?.with_link(REL_PROFILE, PROFILE_UPDATE);

    Ok(HttpResponse::Ok().content_type(HAL_JSON_UTF8).json(resource))
}
