//! 이벤트 정렬 속성
//!
//! 클라이언트는 JSON 속성 이름(`name`, `beginEventDateTime` ...)으로
//! 정렬을 요청합니다. 저장소는 이 이름을 MongoDB 필드 키와 메모리 내
//! 비교 함수로 변환합니다.

use std::cmp::Ordering;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::events::Event;
use crate::domain::models::{Direction, Sort};

/// 정렬 가능한 이벤트 속성
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortField {
    Id,
    Name,
    Description,
    BeginEnrollmentDateTime,
    CloseEnrollmentDateTime,
    BeginEventDateTime,
    EndEventDateTime,
    Location,
    BasePrice,
    MaxPrice,
    LimitOfEnrollment,
    Offline,
    Free,
    EventStatus,
}

impl EventSortField {
    const ALL: [EventSortField; 14] = [
        EventSortField::Id,
        EventSortField::Name,
        EventSortField::Description,
        EventSortField::BeginEnrollmentDateTime,
        EventSortField::CloseEnrollmentDateTime,
        EventSortField::BeginEventDateTime,
        EventSortField::EndEventDateTime,
        EventSortField::Location,
        EventSortField::BasePrice,
        EventSortField::MaxPrice,
        EventSortField::LimitOfEnrollment,
        EventSortField::Offline,
        EventSortField::Free,
        EventSortField::EventStatus,
    ];

    /// JSON 속성 이름
    pub fn property(&self) -> &'static str {
        match self {
            EventSortField::Id => "id",
            EventSortField::Name => "name",
            EventSortField::Description => "description",
            EventSortField::BeginEnrollmentDateTime => "beginEnrollmentDateTime",
            EventSortField::CloseEnrollmentDateTime => "closeEnrollmentDateTime",
            EventSortField::BeginEventDateTime => "beginEventDateTime",
            EventSortField::EndEventDateTime => "endEventDateTime",
            EventSortField::Location => "location",
            EventSortField::BasePrice => "basePrice",
            EventSortField::MaxPrice => "maxPrice",
            EventSortField::LimitOfEnrollment => "limitOfEnrollment",
            EventSortField::Offline => "offline",
            EventSortField::Free => "free",
            EventSortField::EventStatus => "eventStatus",
        }
    }

    pub fn parse(property: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.property() == property)
    }

    /// MongoDB 문서 키
    pub fn document_key(&self) -> &'static str {
        match self {
            EventSortField::Id => "_id",
            other => other.property(),
        }
    }

    /// 오름차순 기준으로 두 이벤트를 비교합니다.
    pub fn compare(&self, a: &Event, b: &Event) -> Ordering {
        match self {
            EventSortField::Id => a.id.cmp(&b.id),
            EventSortField::Name => a.name.cmp(&b.name),
            EventSortField::Description => a.description.cmp(&b.description),
            EventSortField::BeginEnrollmentDateTime => {
                a.begin_enrollment_date_time.cmp(&b.begin_enrollment_date_time)
            }
            EventSortField::CloseEnrollmentDateTime => {
                a.close_enrollment_date_time.cmp(&b.close_enrollment_date_time)
            }
            EventSortField::BeginEventDateTime => a.begin_event_date_time.cmp(&b.begin_event_date_time),
            EventSortField::EndEventDateTime => a.end_event_date_time.cmp(&b.end_event_date_time),
            EventSortField::Location => a.location.cmp(&b.location),
            EventSortField::BasePrice => a.base_price.cmp(&b.base_price),
            EventSortField::MaxPrice => a.max_price.cmp(&b.max_price),
            EventSortField::LimitOfEnrollment => a.limit_of_enrollment.cmp(&b.limit_of_enrollment),
            EventSortField::Offline => a.offline.cmp(&b.offline),
            EventSortField::Free => a.free.cmp(&b.free),
            EventSortField::EventStatus => a.event_status.as_str().cmp(b.event_status.as_str()),
        }
    }
}

/// 정렬 조건을 속성 목록으로 변환합니다.
///
/// 결과의 마지막에는 항상 `id` 오름차순이 포함되어 페이지 사이의
/// 순서가 고정됩니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 알 수 없는 속성
pub fn resolve(sort: &Sort) -> AppResult<Vec<(EventSortField, Direction)>> {
    let mut resolved = sort
        .orders()
        .iter()
        .map(|order| {
            EventSortField::parse(&order.property)
                .map(|field| (field, order.direction))
                .ok_or_else(|| {
                    AppError::ValidationError(format!("정렬할 수 없는 속성입니다: {}", order.property))
                })
        })
        .collect::<AppResult<Vec<_>>>()?;

    if !resolved.iter().any(|(field, _)| *field == EventSortField::Id) {
        resolved.push((EventSortField::Id, Direction::Asc));
    }

    Ok(resolved)
}
