//! Event Entity Implementation
//!
//! 이벤트 엔티티의 핵심 구현체입니다.
//! 등록 기간, 진행 기간, 가격 정보와 함께 `adjust()`로 계산되는
//! 파생 상태(`free`, `offline`)를 가집니다.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::is_valid_string;

/// 이벤트 진행 상태
///
/// 새로 생성된 이벤트는 항상 `DRAFT` 상태로 시작합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
    BeganEnrollment,
    ClosedEnrollment,
    Started,
    Ended,
}

impl EventStatus {
    /// 저장되고 직렬화되는 이름. 정렬도 이 문자열 순서를 따릅니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "DRAFT",
            EventStatus::Published => "PUBLISHED",
            EventStatus::BeganEnrollment => "BEGAN_ENROLLMENT",
            EventStatus::ClosedEnrollment => "CLOSED_ENROLLMENT",
            EventStatus::Started => "STARTED",
            EventStatus::Ended => "ENDED",
        }
    }
}

/// 이벤트 엔티티
///
/// MongoDB `events` 컬렉션에 저장됩니다. 식별자는 `_id` 필드에
/// 정수로 저장되며, 저장 전에는 `None`입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub begin_enrollment_date_time: NaiveDateTime,
    pub close_enrollment_date_time: NaiveDateTime,
    pub begin_event_date_time: NaiveDateTime,
    pub end_event_date_time: NaiveDateTime,
    /// 없으면 온라인 이벤트
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub base_price: i32,
    pub max_price: i32,
    pub limit_of_enrollment: i32,
    pub offline: bool,
    pub free: bool,
    #[serde(default)]
    pub event_status: EventStatus,
}

impl Event {
    /// 가격과 장소 정보로부터 파생 필드를 다시 계산합니다.
    ///
    /// - `free`: 기본 가격과 최대 가격이 모두 0
    /// - `offline`: 공백이 아닌 장소가 지정됨
    pub fn adjust(&mut self) {
        self.free = self.base_price == 0 && self.max_price == 0;
        self.offline = self
            .location
            .as_deref()
            .is_some_and(is_valid_string);
    }
}
