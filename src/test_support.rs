//! 테스트 공용 픽스처
//!
//! 단위 테스트와 핸들러 테스트가 같은 샘플 이벤트를 사용하도록
//! 생성 함수와 테스트용 `App` 구성을 모아 둡니다.

use std::sync::Arc;

use actix_web::{App, web};
use chrono::{NaiveDate, NaiveDateTime};

use crate::config::PageConfig;
use crate::domain::dto::events::request::EventCreateRequest;
use crate::domain::entities::events::{Event, EventStatus};
use crate::repositories::events::{EventRepository, InMemoryEventRepository};
use crate::routes::configure_all_routes;
use crate::services::events::EventService;

/// 지정한 날짜의 14:21:00
pub fn datetime(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(14, 21, 0))
        .expect("valid test date")
}

/// 유효한 이벤트 생성 요청
pub fn sample_request() -> EventCreateRequest {
    EventCreateRequest {
        name: "Spring".to_string(),
        description: "REST API Development with Spring".to_string(),
        begin_enrollment_date_time: Some(datetime(2018, 11, 23)),
        close_enrollment_date_time: Some(datetime(2018, 11, 24)),
        begin_event_date_time: Some(datetime(2018, 11, 25)),
        end_event_date_time: Some(datetime(2018, 11, 26)),
        location: Some("강남역 D2 스타텁 팩토리".to_string()),
        base_price: 100,
        max_price: 200,
        limit_of_enrollment: 100,
    }
}

/// 저장되지 않은 샘플 이벤트
pub fn sample_event(index: i32) -> Event {
    Event {
        id: None,
        name: format!("event {}", index),
        description: "test event".to_string(),
        begin_enrollment_date_time: datetime(2018, 11, 23),
        close_enrollment_date_time: datetime(2018, 11, 24),
        begin_event_date_time: datetime(2018, 11, 25),
        end_event_date_time: datetime(2018, 11, 26),
        location: Some("강남역 D2 스타텁 팩토리".to_string()),
        base_price: 100 * index,
        max_price: 200 * index,
        limit_of_enrollment: 100,
        offline: true,
        free: false,
        event_status: EventStatus::Draft,
    }
}

/// `count`개의 샘플 이벤트를 저장한 메모리 저장소
pub async fn seeded_repository(count: i32) -> Arc<InMemoryEventRepository> {
    let repository = Arc::new(InMemoryEventRepository::new());
    for index in 1..=count {
        repository
            .save(sample_event(index))
            .await
            .expect("in-memory save");
    }
    repository
}

/// 운영 환경과 같은 라우트를 메모리 저장소 위에 구성한 앱
pub fn test_app(
    repository: Arc<dyn EventRepository>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(EventService::new(repository)))
        .app_data(web::Data::new(PageConfig::default()))
        .configure(configure_all_routes)
}
