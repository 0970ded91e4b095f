//! 이벤트 관련 요청/응답 DTO

pub mod request;
pub mod response;
