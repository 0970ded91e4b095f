//! 단일 이벤트 HAL 응답

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::core::errors::{AppError, AppResult};
use crate::core::hal::{LinkBuilder, Links, REL_SELF};
use crate::domain::entities::events::{Event, EventStatus};

/// 이벤트 리소스
///
/// 저장된 [`Event`]의 모든 속성과 `_links`를 담습니다. 엔티티와 달리
/// 식별자는 `id`라는 이름으로 노출됩니다.
///
/// ```json
/// {
///   "id": 1,
///   "name": "Spring",
///   "eventStatus": "DRAFT",
///   "_links": { "self": { "href": "http://localhost:8080/api/events/1" } }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResource {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub end_event_date_time: NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub offline: bool,
    pub free: bool,
    pub event_status: EventStatus,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl EventResource {
    /// 저장된 이벤트를 `self` 링크와 함께 감쌉니다.
    ///
    /// `events`는 이벤트 컬렉션 URI(`{base}/api/events`)입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 식별자가 없는(저장되지 않은) 이벤트
    pub fn new(event: Event, events: &LinkBuilder) -> AppResult<Self> {
        let id = event
            .id
            .ok_or_else(|| AppError::InternalError("저장되지 않은 이벤트는 리소스로 변환할 수 없습니다".to_string()))?;

        let links = Links::new().with(REL_SELF, events.slash(id).to_uri());

        Ok(Self {
            id,
            name: event.name,
            description: event.description,
            begin_enrollment_date_time: event.begin_enrollment_date_time,
            close_enrollment_date_time: event.close_enrollment_date_time,
            begin_event_date_time: event.begin_event_date_time,
            end_event_date_time: event.end_event_date_time,
            location: event.location,
            base_price: event.base_price,
            max_price: event.max_price,
            limit_of_enrollment: event.limit_of_enrollment,
            offline: event.offline,
            free: event.free,
            event_status: event.event_status,
            links,
        })
    }

    pub fn add_link(&mut self, rel: &str, href: impl Into<String>) {
        self.links.add(rel, href);
    }

    pub fn with_link(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.add_link(rel, href);
        self
    }
}
