//! 도메인 보조 모델
//!
//! 엔티티는 아니지만 여러 계층이 공유하는 값 객체들입니다.
//!
//! - [`page`] - 페이지 요청(`Pageable`)과 결과(`Page`)
//! - [`validation`] - 요청 검증 에러 모음(`Errors`)

pub mod page;
pub mod validation;

pub use page::{Direction, Order, Page, Pageable, Sort};
pub use validation::{Errors, ObjectError};
