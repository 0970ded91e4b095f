//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 이벤트 도메인의 데이터 구조와
//! 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 영속되는 핵심 객체 (Event)
//! ├── DTOs          - 요청/응답 데이터 (EventCreateRequest, EventResource ...)
//! └── Models        - 계층 간 공유 값 객체 (Pageable, Page, Errors)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB `events` 컬렉션에 저장되는 [`Event`](entities::events::Event)와
//! 진행 상태 [`EventStatus`](entities::events::EventStatus)를 정의합니다.
//! `Event::adjust()`는 가격과 장소로부터 `free`/`offline`을 계산합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! ```text
//! dto/
//! └── events/
//!     ├── request/     - EventCreateRequest (입력 검증 포함)
//!     └── response/    - EventResource, PagedEventsResource,
//!                        ErrorsResource, IndexResource (HAL 링크 포함)
//! ```
//!
//! ### [`models`] - 공유 값 객체
//!
//! 페이지네이션 요청/결과와 검증 에러 모음처럼 여러 계층에서
//! 함께 사용하는 타입들입니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::events::{Event, EventStatus};
pub use models::{Errors, Page, Pageable};
