//! 날짜/시간 파싱 유틸리티
//!
//! 요청 본문의 일시는 ISO-8601 로컬 일시 형식을 따르며, 초와 소수 초는
//! 생략할 수 있습니다.
//!
//! ```text
//! 2018-11-23T14:21:00.123  ✓
//! 2018-11-23T14:21:00      ✓
//! 2018-11-23T14:21         ✓
//! 2018-11-23               ✗
//! ```

use chrono::NaiveDateTime;
use serde::Deserialize;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 로컬 일시 문자열을 파싱합니다. 초가 없으면 0초로 간주합니다.
pub fn parse_local_date_time(value: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Serde deserializer for optional local date-times
///
/// `null`이나 누락된 필드는 `None`이 되고, 형식이 맞지 않으면 역직렬화
/// 에러를 반환합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(default, deserialize_with = "deserialize_optional_date_time")]
///     begin_event_date_time: Option<NaiveDateTime>,
/// }
/// ```
pub fn deserialize_optional_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => parse_local_date_time(&value)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("잘못된 일시 형식입니다: {}", value))),
        None => Ok(None),
    }
}
