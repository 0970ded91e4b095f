//! 이벤트 서비스 백엔드
//!
//! 이벤트를 생성, 조회, 수정하는 HAL+JSON REST API입니다.
//! 모든 응답은 `_links`를 포함하며, 클라이언트는 `GET /api`에서 시작해
//! 링크를 따라 이동할 수 있습니다.
//!
//! # Features
//!
//! - **이벤트 생성**: 2단계 입력 검증, 서버가 계산하는 `free`/`offline`
//! - **목록 조회**: `page`/`size`/`sort` 페이지네이션과 탐색 링크
//! - **단건 조회/수정**: 식별자 기반 조회, 같은 규칙으로 검증되는 수정
//! - **저장소 선택**: MongoDB 또는 메모리 (`STORAGE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, HAL 링크 조립
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 객체 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← EventRepository 트레이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB / 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use event_service_backend::repositories::events::InMemoryEventRepository;
//! use event_service_backend::services::events::EventService;
//!
//! let service = EventService::new(Arc::new(InMemoryEventRepository::new()));
//! let event = service.create_event(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;

#[cfg(test)]
pub(crate) mod test_support;
