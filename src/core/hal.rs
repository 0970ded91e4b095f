//! HAL(Hypertext Application Language) 링크 지원
//!
//! 응답 본문에 `_links` 객체를 포함시켜 클라이언트가 다음 상태로
//! 이동할 수 있는 URI를 알려줍니다.
//!
//! ```json
//! {
//!   "name": "Spring REST API",
//!   "_links": {
//!     "self": { "href": "http://localhost:8080/api/events/1" },
//!     "profile": { "href": "/docs/index.html#resources-events-get" }
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt::Display;

use actix_web::HttpRequest;
use serde::{Deserialize, Serialize};

/// 모든 HAL 응답에 사용하는 Content-Type
pub const HAL_JSON_UTF8: &str = "application/hal+json;charset=UTF-8";

pub const REL_SELF: &str = "self";
pub const REL_PROFILE: &str = "profile";
pub const REL_FIRST: &str = "first";
pub const REL_PREV: &str = "prev";
pub const REL_NEXT: &str = "next";
pub const REL_LAST: &str = "last";

/// 단일 하이퍼링크
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

/// relation 이름을 키로 하는 링크 모음
///
/// 직렬화 시 `{"rel": {"href": "..."}}` 형태의 객체가 됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// 링크를 추가합니다. 같은 relation이 이미 있으면 덮어씁니다.
    pub fn add(&mut self, rel: &str, href: impl Into<String>) {
        self.0.insert(rel.to_string(), Link::new(href));
    }

    /// 빌더 스타일로 링크를 추가합니다.
    pub fn with(mut self, rel: &str, href: impl Into<String>) -> Self {
        self.add(rel, href);
        self
    }
}

/// 절대 URI 생성기
///
/// 요청의 scheme과 host(프록시 헤더 포함)를 기준으로 경로 세그먼트를
/// 이어 붙입니다.
///
/// ```rust,ignore
/// let uri = LinkBuilder::new("http://localhost:8080")
///     .slash("api")
///     .slash("events")
///     .slash(1)
///     .to_uri();
/// assert_eq!(uri, "http://localhost:8080/api/events/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    uri: String,
}

impl LinkBuilder {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            uri: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_request(req: &HttpRequest) -> Self {
        let info = req.connection_info();
        Self::new(format!("{}://{}", info.scheme(), info.host()))
    }

    /// 경로 세그먼트를 하나 추가한 새 빌더를 반환합니다.
    pub fn slash(&self, segment: impl Display) -> Self {
        let segment = segment.to_string();
        Self {
            uri: format!("{}/{}", self.uri, segment.trim_matches('/')),
        }
    }

    pub fn to_uri(&self) -> String {
        self.uri.clone()
    }

    /// 쿼리 문자열을 붙인 URI를 반환합니다. 비어 있으면 그대로 반환합니다.
    pub fn to_uri_with_query(&self, query: &str) -> String {
        if query.is_empty() {
            self.to_uri()
        } else {
            format!("{}?{}", self.uri, query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_link_builder_joins_segments() {
        let builder = LinkBuilder::new("http://localhost:8080/");

        assert_eq!(
            builder.slash("api").slash("events").slash(42).to_uri(),
            "http://localhost:8080/api/events/42"
        );
        assert_eq!(
            builder.slash("/api/").to_uri_with_query("page=1&size=10"),
            "http://localhost:8080/api?page=1&size=10"
        );
        assert_eq!(builder.slash("api").to_uri_with_query(""), "http://localhost:8080/api");
    }

    #[test]
    fn test_link_builder_uses_request_host() {
        let req = TestRequest::default()
            .insert_header(("Host", "events.example.com"))
            .to_http_request();

        let uri = LinkBuilder::from_request(&req).slash("api").to_uri();

        assert_eq!(uri, "http://events.example.com/api");
    }

    #[test]
    fn test_links_serialize_as_hal_object() {
        let links = Links::new()
            .with(REL_SELF, "http://localhost/api/events/1")
            .with(REL_PROFILE, "/docs/index.html#resources-events-get");

        let json = serde_json::to_value(&links).unwrap();

        assert_eq!(json["self"]["href"], "http://localhost/api/events/1");
        assert_eq!(json["profile"]["href"], "/docs/index.html#resources-events-get");
        assert!(json.get(REL_NEXT).is_none());
    }
}
