//! # 이벤트 서비스 구현
//!
//! 이벤트 요청 검증과 엔티티 변환, 저장소 위임을 담당합니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! EventCreateRequest
//!       │ 1. 선언적 검증 (validator derive)
//!       │ 2. 비즈니스 규칙 검증 (EventCreateRequestValidator)
//!       ▼
//! Event (DRAFT, adjust() 적용)
//!       │
//!       ▼
//! EventRepository::save → 식별자 할당
//! ```
//!
//! 저장소는 `Arc<dyn EventRepository>`로 주입되며, 서비스 자체는
//! `web::Data<EventService>`로 핸들러에 공유됩니다.

use std::sync::Arc;

use log::{debug, info, warn};
use validator::Validate;

use crate::core::errors::AppResult;
use crate::domain::dto::events::request::{EVENT_CREATE_REQUEST, EventCreateRequest};
use crate::domain::entities::events::Event;
use crate::domain::models::{Errors, Page, Pageable};
use crate::repositories::events::EventRepository;
use crate::services::events::EventCreateRequestValidator;

/// 이벤트 비즈니스 로직 서비스
#[derive(Clone)]
pub struct EventService {
    repository: Arc<dyn EventRepository>,
    validator: EventCreateRequestValidator,
}

impl EventService {
    pub fn new(repository: Arc<dyn EventRepository>) -> Self {
        Self {
            repository,
            validator: EventCreateRequestValidator::new(),
        }
    }

    /// 요청을 두 단계로 검증합니다.
    ///
    /// 선언적 검증에 실패하면 비즈니스 규칙 검증은 실행하지 않습니다.
    ///
    /// # Errors
    ///
    /// 어느 단계든 실패하면 해당 단계의 에러 모음을 반환합니다.
    pub fn validate(&self, request: &EventCreateRequest) -> Result<(), Errors> {
        if let Err(validation) = request.validate() {
            let errors = Errors::from_validation(EVENT_CREATE_REQUEST, &validation);
            warn!("⚠️ 이벤트 요청 검증 실패: {}건", errors.len());
            return Err(errors);
        }

        let mut errors = Errors::new(EVENT_CREATE_REQUEST);
        self.validator.validate(request, &mut errors);
        if errors.has_errors() {
            warn!("⚠️ 이벤트 요청 규칙 위반: {}건", errors.len());
            return Err(errors);
        }

        Ok(())
    }

    /// 검증된 요청으로 새 `DRAFT` 이벤트를 저장합니다.
    pub async fn create_event(&self, request: EventCreateRequest) -> AppResult<Event> {
        let event = Event::try_from(request)?;
        let saved = self.repository.save(event).await?;

        info!("✅ 이벤트 생성 완료: id={:?}, name={}", saved.id, saved.name);
        Ok(saved)
    }

    pub async fn get_events(&self, pageable: &Pageable) -> AppResult<Page<Event>> {
        debug!(
            "이벤트 목록 조회: page={}, size={}, sort={:?}",
            pageable.page,
            pageable.size,
            pageable.sort.orders()
        );
        self.repository.find_all(pageable).await
    }

    pub async fn get_event(&self, id: i64) -> AppResult<Option<Event>> {
        let event = self.repository.find_by_id(id).await?;
        if event.is_none() {
            debug!("이벤트 없음: id={}", id);
        }
        Ok(event)
    }

    /// 검증된 요청 내용을 기존 이벤트에 반영하고 저장합니다.
    pub async fn update_event(&self, mut event: Event, request: EventCreateRequest) -> AppResult<Event> {
        request.apply_to(&mut event)?;
        let saved = self.repository.save(event).await?;

        info!("✅ 이벤트 수정 완료: id={:?}", saved.id);
        Ok(saved)
    }
}
