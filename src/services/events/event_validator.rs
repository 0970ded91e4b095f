//! 이벤트 생성 요청의 비즈니스 규칙 검증
//!
//! 선언적 검증(`validator` derive)을 통과한 요청에 대해서만 실행되며,
//! 필드 하나만으로는 판단할 수 없는 규칙을 확인합니다.
//!
//! | 규칙 | 에러 |
//! |------|------|
//! | `basePrice > maxPrice` (단, `maxPrice == 0`은 무제한) | `basePrice`, `maxPrice` 필드 + `wrongPrices` 객체 에러 |
//! | 등록 마감이 등록 시작보다 이전 | `closeEnrollmentDateTime` |
//! | 이벤트 시작이 등록 마감보다 이전 | `beginEventDateTime` |
//! | 이벤트 종료가 시작/등록 마감/등록 시작보다 이전 | `endEventDateTime` |

use crate::domain::dto::events::request::EventCreateRequest;
use crate::domain::models::Errors;

pub const WRONG_VALUE: &str = "wrongValue";
pub const WRONG_PRICES: &str = "wrongPrices";

#[derive(Debug, Clone, Copy, Default)]
pub struct EventCreateRequestValidator;

impl EventCreateRequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// 규칙 위반을 `errors`에 누적합니다.
    pub fn validate(&self, request: &EventCreateRequest, errors: &mut Errors) {
        self.validate_prices(request, errors);
        self.validate_schedule(request, errors);
    }

    fn validate_prices(&self, request: &EventCreateRequest, errors: &mut Errors) {
        if request.base_price > request.max_price && request.max_price != 0 {
            errors.reject_value("basePrice", WRONG_VALUE, "BasePrice is wrong", request.base_price);
            errors.reject_value("maxPrice", WRONG_VALUE, "MaxPrice is wrong", request.max_price);
            errors.reject(WRONG_PRICES, "Values of prices are wrong");
        }
    }

    fn validate_schedule(&self, request: &EventCreateRequest, errors: &mut Errors) {
        let (Some(begin_enrollment), Some(close_enrollment), Some(begin_event), Some(end_event)) = (
            request.begin_enrollment_date_time,
            request.close_enrollment_date_time,
            request.begin_event_date_time,
            request.end_event_date_time,
        ) else {
            return;
        };

        if close_enrollment < begin_enrollment {
            errors.reject_value(
                "closeEnrollmentDateTime",
                WRONG_VALUE,
                "CloseEnrollmentDateTime is wrong",
                close_enrollment,
            );
        }

        if begin_event < close_enrollment {
            errors.reject_value(
                "beginEventDateTime",
                WRONG_VALUE,
                "BeginEventDateTime is wrong",
                begin_event,
            );
        }

        if end_event < begin_event || end_event < close_enrollment || end_event < begin_enrollment {
            errors.reject_value(
                "endEventDateTime",
                WRONG_VALUE,
                "EndEventDateTime is wrong",
                end_event,
            );
        }
    }
}
