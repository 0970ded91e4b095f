//! API 진입점 응답

use serde::Serialize;

use crate::core::hal::Links;

pub const REL_EVENTS: &str = "events";

/// `GET /api` 응답. 최상위 리소스 컬렉션 링크만 가집니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResource {
    #[serde(rename = "_links")]
    pub links: Links,
}

impl IndexResource {
    pub fn new(events_href: impl Into<String>) -> Self {
        Self {
            links: Links::new().with(REL_EVENTS, events_href),
        }
    }
}
