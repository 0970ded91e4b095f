//! 이벤트 API 응답 DTO
//!
//! 모든 응답은 HAL 문서이며 `_links`를 포함합니다.
//!
//! - [`EventResource`] - 단일 이벤트
//! - [`PagedEventsResource`] - 페이지 단위 이벤트 목록
//! - [`ErrorsResource`] - 검증 실패 목록
//! - [`IndexResource`] - API 진입점

pub mod event_resource;
pub mod errors_resource;
pub mod paged_resource;
pub mod index_resource;

pub use event_resource::EventResource;
pub use errors_resource::ErrorsResource;
pub use paged_resource::{PageMetadata, PagedEventsResource};
pub use index_resource::IndexResource;
