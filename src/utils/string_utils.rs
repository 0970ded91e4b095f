//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 정리
///
/// 앞뒤 공백을 제거하고, 결과가 비어 있으면 `None`을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  강남역  ".to_string())), Some("강남역".to_string()));
/// assert_eq!(clean_optional_string(Some("".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열 유효성 검사 (공백이 아닌 문자가 하나 이상 있는지)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// snake_case 식별자를 camelCase로 변환합니다
///
/// 검증 에러의 필드 이름을 JSON 속성 이름과 맞추는 데 사용합니다.
/// 밑줄이 없는 문자열은 그대로 반환됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::to_camel_case;
///
/// assert_eq!(to_camel_case("base_price"), "basePrice");
/// assert_eq!(to_camel_case("maxPrice"), "maxPrice");
/// ```
pub fn to_camel_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut upper_next = false;

    for c in value.chars() {
        if c == '_' {
            upper_next = !result.is_empty();
        } else if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// JSON 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct EventCreateRequest {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     location: Option<String>,
/// }
///
/// // JSON: {"location": "  강남역  "} → Some("강남역")
/// // JSON: {"location": ""} → None
/// // JSON: {"location": null} → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("Hello".to_string())), Some("Hello".to_string()));
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(is_valid_string("  World  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("base_price"), "basePrice");
        assert_eq!(to_camel_case("begin_enrollment_date_time"), "beginEnrollmentDateTime");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("limitOfEnrollment"), "limitOfEnrollment");
        assert_eq!(to_camel_case("__all__"), "all");
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            location: Option<String>,
        }

        // 유효한 문자열 - 공백이 제거되고 Some 반환
        let result: TestStruct = serde_json::from_str(r#"{"location": "  강남역 D2  "}"#).unwrap();
        assert_eq!(result.location, Some("강남역 D2".to_string()));

        // 공백만 있는 문자열 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"location": " \t\n "}"#).unwrap();
        assert_eq!(result.location, None);

        // null 값 - None 반환
        let result: TestStruct = serde_json::from_str(r#"{"location": null}"#).unwrap();
        assert_eq!(result.location, None);

        // 필드가 없는 경우 - default 적용
        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.location, None);
    }
}
