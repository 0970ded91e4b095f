//! 이벤트 생성/수정 요청 DTO
//!
//! 새 이벤트 생성과 기존 이벤트 수정에 같은 요청 본문을 사용합니다.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::events::{Event, EventStatus};
use crate::utils::date_utils::deserialize_optional_date_time;
use crate::utils::string_utils::deserialize_optional_string;

/// 검증 에러의 `objectName`
pub const EVENT_CREATE_REQUEST: &str = "eventCreateRequest";

/// 이벤트 생성 요청 DTO
///
/// 서버가 결정하는 `id`, `free`, `offline`, `eventStatus`를 포함한
/// 알 수 없는 속성은 역직렬화 단계에서 거부됩니다.
///
/// ```json
/// {
///   "name": "Spring",
///   "description": "REST API Development with Spring",
///   "beginEnrollmentDateTime": "2018-11-23T14:21:00",
///   "closeEnrollmentDateTime": "2018-11-24T14:21:00",
///   "beginEventDateTime": "2018-11-25T14:21:00",
///   "endEventDateTime": "2018-11-26T14:21:00",
///   "basePrice": 100,
///   "maxPrice": 200,
///   "limitOfEnrollment": 100,
///   "location": "강남역 D2 스타텁 팩토리"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventCreateRequest {
    #[serde(default)]
    #[validate(length(min = 1, code = "NotEmpty", message = "이벤트 이름은 비어 있을 수 없습니다"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(min = 1, code = "NotEmpty", message = "이벤트 설명은 비어 있을 수 없습니다"))]
    pub description: String,

    #[serde(default, deserialize_with = "deserialize_optional_date_time")]
    #[validate(required(code = "NotNull", message = "등록 시작 일시는 필수입니다"))]
    pub begin_enrollment_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_optional_date_time")]
    #[validate(required(code = "NotNull", message = "등록 마감 일시는 필수입니다"))]
    pub close_enrollment_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_optional_date_time")]
    #[validate(required(code = "NotNull", message = "이벤트 시작 일시는 필수입니다"))]
    pub begin_event_date_time: Option<NaiveDateTime>,

    #[serde(default, deserialize_with = "deserialize_optional_date_time")]
    #[validate(required(code = "NotNull", message = "이벤트 종료 일시는 필수입니다"))]
    pub end_event_date_time: Option<NaiveDateTime>,

    /// 공백만 있는 값은 `None`으로 정리됩니다 (온라인 이벤트)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub location: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "기본 가격은 0 이상이어야 합니다"))]
    pub base_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "최대 가격은 0 이상이어야 합니다"))]
    pub max_price: i32,

    #[serde(default)]
    #[validate(range(min = 0, code = "Min", message = "참가 인원 제한은 0 이상이어야 합니다"))]
    pub limit_of_enrollment: i32,
}

impl EventCreateRequest {
    /// 요청 내용을 기존 이벤트에 덮어씁니다.
    ///
    /// 식별자와 진행 상태는 유지되며, 파생 필드는 `adjust()`로 다시 계산됩니다.
    pub fn apply_to(self, event: &mut Event) -> AppResult<()> {
        event.begin_enrollment_date_time =
            required(self.begin_enrollment_date_time, "beginEnrollmentDateTime")?;
        event.close_enrollment_date_time =
            required(self.close_enrollment_date_time, "closeEnrollmentDateTime")?;
        event.begin_event_date_time = required(self.begin_event_date_time, "beginEventDateTime")?;
        event.end_event_date_time = required(self.end_event_date_time, "endEventDateTime")?;
        event.name = self.name;
        event.description = self.description;
        event.location = self.location;
        event.base_price = self.base_price;
        event.max_price = self.max_price;
        event.limit_of_enrollment = self.limit_of_enrollment;
        event.adjust();
        Ok(())
    }
}

impl TryFrom<EventCreateRequest> for Event {
    type Error = AppError;

    /// 새 `DRAFT` 이벤트를 만듭니다. 식별자는 저장 시 할당됩니다.
    fn try_from(request: EventCreateRequest) -> AppResult<Self> {
        let mut event = Event {
            id: None,
            name: request.name,
            description: request.description,
            begin_enrollment_date_time: required(
                request.begin_enrollment_date_time,
                "beginEnrollmentDateTime",
            )?,
            close_enrollment_date_time: required(
                request.close_enrollment_date_time,
                "closeEnrollmentDateTime",
            )?,
            begin_event_date_time: required(request.begin_event_date_time, "beginEventDateTime")?,
            end_event_date_time: required(request.end_event_date_time, "endEventDateTime")?,
            location: request.location,
            base_price: request.base_price,
            max_price: request.max_price,
            limit_of_enrollment: request.limit_of_enrollment,
            offline: false,
            free: false,
            event_status: EventStatus::Draft,
        };
        event.adjust();
        Ok(event)
    }
}

fn required(value: Option<NaiveDateTime>, field: &str) -> AppResult<NaiveDateTime> {
    value.ok_or_else(|| AppError::ValidationError(format!("{}은(는) 필수입니다", field)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{datetime, sample_request};
    use crate::utils::string_utils::to_camel_case;

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_empty_request_fails_every_required_field() {
        let request: EventCreateRequest = serde_json::from_str("{}").unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        for field in [
            "name",
            "description",
            "beginEnrollmentDateTime",
            "closeEnrollmentDateTime",
            "beginEventDateTime",
            "endEventDateTime",
        ] {
            assert!(
                fields.keys().any(|key| to_camel_case(key) == field),
                "missing error for {}",
                field
            );
        }
        assert!(!fields.keys().any(|key| to_camel_case(key) == "basePrice"));
    }

    #[test]
    fn test_negative_prices_fail_validation() {
        let mut request = sample_request();
        request.base_price = -1;
        request.limit_of_enrollment = -5;

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.values().next().unwrap()[0].code, "Min");
    }

    #[test]
    fn test_unknown_properties_are_rejected() {
        let json = r#"{"name": "Spring", "id": 100, "free": true, "eventStatus": "PUBLISHED"}"#;

        let result = serde_json::from_str::<EventCreateRequest>(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = r#"{
            "name": "Spring",
            "description": "REST API",
            "beginEnrollmentDateTime": "2018-11-23T14:21:00",
            "location": "   ",
            "basePrice": 100
        }"#;

        let request: EventCreateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.begin_enrollment_date_time, Some(datetime(2018, 11, 23)));
        assert_eq!(request.location, None);
        assert_eq!(request.base_price, 100);
        assert_eq!(request.close_enrollment_date_time, None);
    }

    #[test]
    fn test_date_times_without_seconds_are_accepted() {
        let json = r#"{
            "beginEnrollmentDateTime": "2018-11-23T14:21",
            "closeEnrollmentDateTime": "2018-11-24T14:21:00",
            "endEventDateTime": null
        }"#;

        let request: EventCreateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.begin_enrollment_date_time, Some(datetime(2018, 11, 23)));
        assert_eq!(request.close_enrollment_date_time, Some(datetime(2018, 11, 24)));
        assert_eq!(request.end_event_date_time, None);

        let malformed = r#"{"beginEventDateTime": "2018-11-23"}"#;
        assert!(serde_json::from_str::<EventCreateRequest>(malformed).is_err());
    }

    #[test]
    fn test_into_event_sets_draft_and_derived_fields() {
        let mut request = sample_request();
        request.base_price = 0;
        request.max_price = 0;

        let event = Event::try_from(request).unwrap();

        assert_eq!(event.id, None);
        assert_eq!(event.event_status, EventStatus::Draft);
        assert!(event.free);
        assert!(event.offline);
    }

    #[test]
    fn test_into_event_requires_schedule() {
        let mut request = sample_request();
        request.end_event_date_time = None;

        assert!(matches!(Event::try_from(request), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_apply_to_keeps_identity_and_status() {
        let mut event = Event::try_from(sample_request()).unwrap();
        event.id = Some(10);
        event.event_status = EventStatus::Published;

        let mut request = sample_request();
        request.name = "Updated".to_string();
        request.location = None;

        request.apply_to(&mut event).unwrap();

        assert_eq!(event.id, Some(10));
        assert_eq!(event.event_status, EventStatus::Published);
        assert_eq!(event.name, "Updated");
        assert!(!event.offline);
    }
}
