//! 이벤트 데이터 액세스 계층
//!
//! 서비스는 [`EventRepository`] 트레이트에만 의존하며, 실행 시
//! `STORAGE_BACKEND` 설정에 따라 구현체가 선택됩니다.
//!
//! - [`MongoEventRepository`] - MongoDB `events` 컬렉션
//! - [`InMemoryEventRepository`] - 프로세스 메모리 (테스트, 로컬 실행)

pub mod sort;
pub mod event_repo;
pub mod memory_repo;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::events::Event;
use crate::domain::models::{Page, Pageable};

pub use event_repo::MongoEventRepository;
pub use memory_repo::InMemoryEventRepository;
pub use sort::EventSortField;

/// 이벤트 저장소 포트
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// 이벤트를 저장하고 저장된 상태를 반환합니다.
    ///
    /// 식별자가 없으면 새 식별자를 할당해 추가하고, 있으면 같은
    /// 식별자의 문서를 교체합니다.
    async fn save(&self, event: Event) -> AppResult<Event>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Event>>;

    /// 정렬 조건에 따라 한 페이지를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 정렬할 수 없는 속성
    async fn find_all(&self, pageable: &Pageable) -> AppResult<Page<Event>>;
}
