//! 요청 검증 결과 모델
//!
//! 필드 단위 에러와 객체 단위(global) 에러를 함께 모읍니다.
//! `validator` 크레이트의 선언적 검증 결과와 서비스 계층의 비즈니스
//! 검증 결과가 모두 이 형태로 합쳐져 `ErrorsResource`로 응답됩니다.

use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

use crate::utils::string_utils::to_camel_case;

/// 단일 검증 에러
///
/// `field`가 없으면 객체 전체에 대한 에러입니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectError {
    pub object_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub default_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_value: Option<Value>,
}

/// 검증 대상 객체 하나에 대한 에러 모음
#[derive(Debug, Clone, PartialEq)]
pub struct Errors {
    object_name: String,
    errors: Vec<ObjectError>,
}

impl Errors {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            errors: Vec::new(),
        }
    }

    /// `validator` 결과를 필드 이름 순으로 변환합니다.
    ///
    /// 필드 이름은 JSON 속성 이름(camelCase)으로 맞추며,
    /// 스키마 수준 에러(`__all__`)는 객체 에러가 됩니다.
    pub fn from_validation(object_name: impl Into<String>, validation: &ValidationErrors) -> Self {
        let mut errors = Self::new(object_name);

        let mut fields: Vec<_> = validation.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (field, field_errors) in fields {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());

                if field == "__all__" {
                    errors.reject(&error.code, &message);
                } else {
                    let rejected = error.params.get("value").cloned();
                    errors.push(Some(to_camel_case(&field)), &error.code, &message, rejected);
                }
            }
        }

        errors
    }

    /// 필드 에러를 추가합니다.
    pub fn reject_value<V: Serialize>(&mut self, field: &str, code: &str, message: &str, value: V) {
        let rejected = serde_json::to_value(value).ok();
        self.push(Some(field.to_string()), code, message, rejected);
    }

    /// 객체 에러를 추가합니다.
    pub fn reject(&mut self, code: &str, message: &str) {
        self.push(None, code, message, None);
    }

    fn push(&mut self, field: Option<String>, code: &str, message: &str, rejected_value: Option<Value>) {
        self.errors.push(ObjectError {
            object_name: self.object_name.clone(),
            field,
            code: code.to_string(),
            default_message: message.to_string(),
            rejected_value,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.is_empty()
    }

    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ObjectError> + 'a {
        self.errors
            .iter()
            .filter(move |error| error.field.as_deref() == Some(field))
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ObjectError> {
        self.errors.iter().filter(|error| error.field.is_none())
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ObjectError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, code = "NotEmpty", message = "비어 있을 수 없습니다"))]
        display_name: String,
        #[validate(range(min = 0, code = "Min"))]
        base_price: i32,
    }

    #[test]
    fn test_from_validation_uses_camel_case_fields() {
        let sample = Sample {
            display_name: String::new(),
            base_price: -1,
        };
        let validation = sample.validate().unwrap_err();

        let errors = Errors::from_validation("sample", &validation);

        assert_eq!(errors.len(), 2);
        let base_price = errors.field_errors("basePrice").next().unwrap();
        assert_eq!(base_price.code, "Min");
        assert_eq!(base_price.default_message, "Min");
        assert_eq!(base_price.rejected_value, Some(serde_json::json!(-1)));

        let display_name = errors.field_errors("displayName").next().unwrap();
        assert_eq!(display_name.code, "NotEmpty");
        assert_eq!(display_name.object_name, "sample");
    }

    #[test]
    fn test_reject_and_reject_value() {
        let mut errors = Errors::new("eventCreateRequest");
        assert!(!errors.has_errors());

        errors.reject_value("maxPrice", "wrongValue", "MaxPrice is wrong", 100);
        errors.reject("wrongPrices", "Values of prices are wrong");

        assert!(errors.has_errors());
        assert_eq!(errors.global_errors().count(), 1);

        let json = serde_json::to_value(errors.into_errors()).unwrap();
        assert_eq!(json[0]["field"], "maxPrice");
        assert_eq!(json[0]["rejectedValue"], 100);
        assert_eq!(json[0]["defaultMessage"], "MaxPrice is wrong");
        assert!(json[1].get("field").is_none());
        assert!(json[1].get("rejectedValue").is_none());
    }
}
