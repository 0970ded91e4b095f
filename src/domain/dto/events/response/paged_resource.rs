//! 페이지 단위 이벤트 목록 HAL 응답
//!
//! ```json
//! {
//!   "_embedded": { "eventList": [ { "id": 11, "_links": { "self": ... } } ] },
//!   "_links": {
//!     "first": { "href": ".../api/events?page=0&size=10&sort=name%2CDESC" },
//!     "prev":  { "href": ".../api/events?page=0&size=10&sort=name%2CDESC" },
//!     "self":  { "href": ".../api/events?page=1&size=10&sort=name%2CDESC" },
//!     "next":  { "href": ".../api/events?page=2&size=10&sort=name%2CDESC" },
//!     "last":  { "href": ".../api/events?page=2&size=10&sort=name%2CDESC" },
//!     "profile": { "href": "/docs/index.html#resources-events-list" }
//!   },
//!   "page": { "size": 10, "totalElements": 30, "totalPages": 3, "number": 1 }
//! }
//! ```

use serde::Serialize;

use crate::core::hal::{LinkBuilder, Links, REL_FIRST, REL_LAST, REL_NEXT, REL_PREV, REL_SELF};
use crate::domain::dto::events::response::EventResource;
use crate::domain::models::{Page, Pageable};

/// 페이지 메타데이터
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedEvents {
    pub event_list: Vec<EventResource>,
}

/// 이벤트 목록 리소스
///
/// 결과가 비어 있으면 `_embedded`는 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PagedEventsResource {
    #[serde(rename = "_embedded", skip_serializing_if = "Option::is_none")]
    pub embedded: Option<EmbeddedEvents>,
    #[serde(rename = "_links")]
    pub links: Links,
    pub page: PageMetadata,
}

impl PagedEventsResource {
    /// 페이지 결과와 탐색 링크를 조립합니다.
    ///
    /// - `first`/`last`: 이전 또는 다음 페이지가 있을 때만
    /// - `prev`/`next`: 해당 페이지가 있을 때만
    /// - `self`: 항상
    ///
    /// 모든 링크는 요청의 `size`와 `sort`를 유지합니다.
    pub fn assemble(page: Page<EventResource>, pageable: &Pageable, events: &LinkBuilder) -> Self {
        let metadata = PageMetadata {
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages(),
            number: page.number,
        };

        let link_to = |number: u64| events.to_uri_with_query(&pageable.with_page(number).to_query_string());

        let navigable = page.has_previous() || page.has_next();
        let mut links = Links::new();

        if navigable {
            links.add(REL_FIRST, link_to(0));
        }
        if page.has_previous() {
            links.add(REL_PREV, link_to(page.number - 1));
        }
        links.add(REL_SELF, link_to(page.number));
        if page.has_next() {
            links.add(REL_NEXT, link_to(page.number + 1));
        }
        if navigable {
            links.add(REL_LAST, link_to(metadata.total_pages.saturating_sub(1)));
        }

        let embedded = if page.content.is_empty() {
            None
        } else {
            Some(EmbeddedEvents {
                event_list: page.content,
            })
        };

        Self {
            embedded,
            links,
            page: metadata,
        }
    }

    pub fn add_link(&mut self, rel: &str, href: impl Into<String>) {
        self.links.add(rel, href);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Order, Sort};
    use crate::test_support::sample_event;

    fn events_link() -> LinkBuilder {
        LinkBuilder::new("http://localhost:8080").slash("api").slash("events")
    }

    fn resources(range: std::ops::RangeInclusive<i64>) -> Vec<EventResource> {
        range
            .map(|id| {
                let mut event = sample_event(id as i32);
                event.id = Some(id);
                EventResource::new(event, &events_link()).unwrap()
            })
            .collect()
    }

    #[test]
    fn test_middle_page_has_all_navigation_links() {
        let pageable = Pageable::of(1, 10).with_sort(Sort::by(vec![Order::desc("name")]));
        let page = Page::new(resources(11..=20), &pageable, 30);

        let resource = PagedEventsResource::assemble(page, &pageable, &events_link());
        let json = serde_json::to_value(&resource).unwrap();

        let base = "http://localhost:8080/api/events";
        assert_eq!(json["_links"]["first"]["href"], format!("{}?page=0&size=10&sort=name%2CDESC", base));
        assert_eq!(json["_links"]["prev"]["href"], format!("{}?page=0&size=10&sort=name%2CDESC", base));
        assert_eq!(json["_links"]["self"]["href"], format!("{}?page=1&size=10&sort=name%2CDESC", base));
        assert_eq!(json["_links"]["next"]["href"], format!("{}?page=2&size=10&sort=name%2CDESC", base));
        assert_eq!(json["_links"]["last"]["href"], format!("{}?page=2&size=10&sort=name%2CDESC", base));
        assert_eq!(json["page"]["size"], 10);
        assert_eq!(json["page"]["totalElements"], 30);
        assert_eq!(json["page"]["totalPages"], 3);
        assert_eq!(json["page"]["number"], 1);
        assert_eq!(json["_embedded"]["eventList"].as_array().unwrap().len(), 10);
        assert_eq!(
            json["_embedded"]["eventList"][0]["_links"]["self"]["href"],
            "http://localhost:8080/api/events/11"
        );
    }

    #[test]
    fn test_single_page_has_only_self_link() {
        let pageable = Pageable::of(0, 20);
        let page = Page::new(resources(1..=3), &pageable, 3);

        let resource = PagedEventsResource::assemble(page, &pageable, &events_link());
        let json = serde_json::to_value(&resource).unwrap();

        assert!(json["_links"].get(REL_SELF).is_some());
        for rel in [REL_FIRST, REL_PREV, REL_NEXT, REL_LAST] {
            assert!(json["_links"].get(rel).is_none(), "unexpected {}", rel);
        }
    }

    #[test]
    fn test_empty_result_omits_embedded() {
        let pageable = Pageable::of(0, 20);
        let page = Page::new(Vec::new(), &pageable, 0);

        let resource = PagedEventsResource::assemble(page, &pageable, &events_link());
        let json = serde_json::to_value(&resource).unwrap();

        assert!(json.get("_embedded").is_none());
        assert_eq!(json["page"]["totalPages"], 0);
        assert_eq!(json["page"]["totalElements"], 0);
    }

    #[test]
    fn test_page_past_the_end_links_back() {
        let pageable = Pageable::of(5, 10);
        let page = Page::new(Vec::new(), &pageable, 30);

        let resource = PagedEventsResource::assemble(page, &pageable, &events_link());
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(
            json["_links"][REL_PREV]["href"],
            "http://localhost:8080/api/events?page=4&size=10"
        );
        assert_eq!(
            json["_links"][REL_LAST]["href"],
            "http://localhost:8080/api/events?page=2&size=10"
        );
        assert!(json["_links"].get(REL_NEXT).is_none());
    }
}
