//! 검증 실패 HAL 응답

use serde::Serialize;

use crate::core::hal::Links;
use crate::domain::models::{Errors, ObjectError};

pub const REL_INDEX: &str = "index";

/// 400 응답 본문
///
/// 필드 에러와 객체 에러를 `content`에 나열하고, 클라이언트가 돌아갈 수
/// 있도록 API 진입점(`index`) 링크를 붙입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorsResource {
    pub content: Vec<ObjectError>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ErrorsResource {
    pub fn new(errors: Errors, index_href: impl Into<String>) -> Self {
        Self {
            content: errors.into_errors(),
            links: Links::new().with(REL_INDEX, index_href),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_resource_shape() {
        let mut errors = Errors::new("eventCreateRequest");
        errors.reject_value("basePrice", "wrongValue", "BasePrice is wrong", 10000);
        errors.reject("wrongPrices", "Values of prices are wrong");

        let resource = ErrorsResource::new(errors, "http://localhost:8080/api");
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["content"][0]["objectName"], "eventCreateRequest");
        assert_eq!(json["content"][0]["field"], "basePrice");
        assert_eq!(json["content"][0]["code"], "wrongValue");
        assert_eq!(json["content"][0]["rejectedValue"], 10000);
        assert_eq!(json["content"][1]["code"], "wrongPrices");
        assert_eq!(json["_links"]["index"]["href"], "http://localhost:8080/api");
    }
}
