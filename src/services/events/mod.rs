//! 이벤트 서비스
//!
//! - [`EventService`] - 생성/목록/단건 조회/수정
//! - [`EventCreateRequestValidator`] - 필드 간 비즈니스 규칙 검증

pub mod event_service;
pub mod event_validator;

pub use event_service::EventService;
pub use event_validator::EventCreateRequestValidator;
